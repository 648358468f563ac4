//! Reset the Admin Password Hash
//!
//! This binary rewrites the `admin_credentials.password_hash` field in the
//! site's JSON data file with a freshly salted PBKDF2-SHA256 hash of an
//! operator-supplied password. The rest of the document passes through
//! untouched and the file is replaced atomically.
//!
//! ## Usage
//!
//! ```sh
//! cargo run --bin reset_password -- --password 'new-admin-password'
//! ```
//! The password may also be supplied via the `RESET_PASSWORD` environment
//! variable; there is no default.
//!
//! ## Notes
//! - The data file path defaults to `data/data.json`, resolved relative to
//!   the current working directory.
//! - Failures are logged and do not change the exit code.
//! - Logging levels can be adjusted via the `RUST_LOG` environment variable
//!   (default `info`).

use clap::Parser;
use log::{error, info};
use site_maintenance::credentials::{reset_password, ResetConfig, DEFAULT_PBKDF2_ITERATIONS};
use std::path::PathBuf;

/// Command-line arguments for the password resetter.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
  /// Path of the JSON credentials document.
  #[clap(long, env = "DATA_FILE", default_value = "data/data.json")]
  data_file: PathBuf,

  /// New admin password to hash and store.
  #[clap(long, env = "RESET_PASSWORD", hide_env_values = true)]
  password: String,

  /// PBKDF2 iteration count for the new hash.
  #[clap(long, env = "PBKDF2_ITERATIONS", default_value_t = DEFAULT_PBKDF2_ITERATIONS)]
  iterations: u32,
}

/// Runs one password reset and logs the result.
fn main() {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

  let args = Args::parse();
  let config = ResetConfig {
    data_file: args.data_file,
    password: args.password,
    iterations: args.iterations,
  };
  info!("Resetting admin password in {}", config.data_file.display());

  match reset_password(&config) {
    Ok(new_hash) => info!("Password reset. New hash: {}", new_hash),
    Err(e) => error!("Error: {:#}", e),
  }
}
