//! # Resetting the Admin Password Hash
//!
//! This module rewrites the `admin_credentials.password_hash` field inside
//! the site's JSON data file. The document is loaded in full, treated as
//! opaque passthrough apart from that one field, and written back atomically
//! with its original key order, 4-space indentation, and unescaped UTF-8.
//!
//! ## Usage
//!
//! The entry point is `reset_password`, which takes a [`ResetConfig`] and
//! returns the newly stored hash string.
//!
//! ## Submodules
//!
//! - **reset**: Contains the load, patch, and rewrite logic.
//! - **types**: Defines the reset configuration.

mod reset;
mod types;

pub use reset::reset_password;
pub use types::{ResetConfig, DEFAULT_PBKDF2_ITERATIONS};
