use anyhow::{Context, Result as AnyhowResult};
use pbkdf2::pbkdf2_hmac;
use rand::{distr::Alphanumeric, Rng};
use sha2::Sha256;

/// Length in characters of the random alphanumeric salt.
const SALT_LENGTH: usize = 16;

/// Length in bytes of the derived key (one SHA-256 block).
const DERIVED_KEY_LENGTH: usize = 32;

/// Prefix identifying the derivation scheme in a stored hash string.
const METHOD_PREFIX: &str = "pbkdf2:sha256:";

/// Generates a salted PBKDF2-SHA256 hash string for a password.
///
/// A fresh random salt is drawn on every call, so hashing the same password
/// twice produces two different strings. The output format is
/// `pbkdf2:sha256:<iterations>$<salt>$<hex digest>`, which
/// [`verify_password_hash`] accepts back.
///
/// # Arguments
///
/// * `password` - The plaintext password to derive the hash from.
/// * `iterations` - The PBKDF2 iteration count to embed in the hash string.
///
/// # Returns
///
/// The formatted hash string.
///
/// # Examples
///
/// ```rust
/// use site_maintenance::utils::{generate_password_hash, verify_password_hash};
///
/// let hash = generate_password_hash("admin123", 1000);
/// assert!(hash.starts_with("pbkdf2:sha256:1000$"));
/// assert!(verify_password_hash(&hash, "admin123").unwrap());
/// ```
pub fn generate_password_hash(password: &str, iterations: u32) -> String {
    let salt = generate_salt(SALT_LENGTH);
    let mut derived = [0u8; DERIVED_KEY_LENGTH];
    pbkdf2_hmac::<Sha256>(
        password.as_bytes(),
        salt.as_bytes(),
        iterations,
        &mut derived,
    );
    format!(
        "{}{}${}${}",
        METHOD_PREFIX,
        iterations,
        salt,
        hex::encode(derived)
    )
}

/// Checks a candidate password against a stored hash string.
///
/// The stored string must be in the `pbkdf2:sha256:<iterations>$<salt>$<hex>`
/// format produced by [`generate_password_hash`]. The same derivation is run
/// with the embedded salt and iteration count and the digests are compared.
///
/// # Arguments
///
/// * `stored` - The stored hash string.
/// * `password` - The candidate password to check.
///
/// # Returns
///
/// * `Ok(true)` - The password matches the stored hash.
/// * `Ok(false)` - The password does not match.
/// * `Err(anyhow::Error)` - The stored string is not a valid hash string.
pub fn verify_password_hash(stored: &str, password: &str) -> AnyhowResult<bool> {
    let parts: Vec<&str> = stored.split('$').collect();
    if parts.len() != 3 {
        return Err(anyhow::anyhow!(
            "Expected 3 '$'-separated fields in hash string, found {}",
            parts.len()
        ));
    }
    let (method, salt, digest_hex) = (parts[0], parts[1], parts[2]);

    let iterations: u32 = method
        .strip_prefix(METHOD_PREFIX)
        .context(format!("Unsupported hash method: {}", method))?
        .parse()
        .context("Invalid iteration count in hash string")?;

    let stored_digest = hex::decode(digest_hex).context("Invalid hex digest in hash string")?;

    let mut derived = [0u8; DERIVED_KEY_LENGTH];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt.as_bytes(), iterations, &mut derived);

    Ok(stored_digest == derived)
}

/// Draws a random alphanumeric salt of the given length.
fn generate_salt(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Keep test iteration counts low; the format does not care.
    const TEST_ITERATIONS: u32 = 1000;

    #[test]
    fn test_generate_password_hash_format() {
        let hash = generate_password_hash("admin123", TEST_ITERATIONS);
        let parts: Vec<&str> = hash.split('$').collect();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "pbkdf2:sha256:1000");
        assert_eq!(parts[1].len(), SALT_LENGTH);
        assert!(parts[1].chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(parts[2].len(), DERIVED_KEY_LENGTH * 2);
    }

    /// A fresh salt is drawn per call, so repeated hashing of the same
    /// password must produce different strings.
    #[test]
    fn test_generate_password_hash_is_salted() {
        let first = generate_password_hash("admin123", TEST_ITERATIONS);
        let second = generate_password_hash("admin123", TEST_ITERATIONS);

        assert_ne!(first, second);
    }

    #[test]
    fn test_verify_password_hash_roundtrip() {
        let hash = generate_password_hash("admin123", TEST_ITERATIONS);

        assert!(verify_password_hash(&hash, "admin123").unwrap());
        assert!(!verify_password_hash(&hash, "admin124").unwrap());
    }

    #[test]
    fn test_verify_password_hash_known_vector() {
        // Derived once with pbkdf2_hmac::<Sha256>("secret", "abcdefghijklmnop", 1000).
        let stored = "pbkdf2:sha256:1000$abcdefghijklmnop$c6a5a2d018318b69cd438412fd505718c5c15ef312286b2f0d5082de96968666";

        assert!(verify_password_hash(stored, "secret").unwrap());
        assert!(!verify_password_hash(stored, "Secret").unwrap());
    }

    #[test]
    fn test_verify_password_hash_rejects_malformed_strings() {
        assert!(verify_password_hash("not-a-hash", "admin123").is_err());
        assert!(verify_password_hash("pbkdf2:sha256:1000$onlysalt", "admin123").is_err());
        assert!(verify_password_hash("scrypt:1000$salt$abcd", "admin123").is_err());
        assert!(verify_password_hash("pbkdf2:sha256:lots$salt$abcd", "admin123").is_err());
        assert!(verify_password_hash("pbkdf2:sha256:1000$salt$nothex", "admin123").is_err());
    }

    #[test]
    fn test_generate_salt_length_and_charset() {
        let salt = generate_salt(SALT_LENGTH);

        assert_eq!(salt.len(), SALT_LENGTH);
        assert!(salt.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
