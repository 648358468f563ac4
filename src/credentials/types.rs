use std::path::PathBuf;

/// PBKDF2 iteration count used when none is configured.
pub const DEFAULT_PBKDF2_ITERATIONS: u32 = 600_000;

/// Configuration for one password reset.
///
/// The password is always operator-supplied; there is deliberately no
/// built-in default for it.
#[derive(Debug, Clone)]
pub struct ResetConfig {
    /// Path of the JSON credentials document to rewrite.
    pub data_file: PathBuf,
    /// New plaintext password to derive the stored hash from.
    pub password: String,
    /// PBKDF2 iteration count embedded in the new hash.
    pub iterations: u32,
}
