//! # Utility Functions for Site Maintenance
//!
//! This module provides general utility functions used throughout the
//! application, including password hash derivation and atomic file
//! replacement.
//!
//! ## Submodules
//!
//! - **password**: Contains functions for generating and verifying salted
//!   PBKDF2-SHA256 password hash strings.
//! - **atomic**: Contains the temp-file-plus-rename primitive used to
//!   replace files without exposing partial writes.

mod atomic;
mod password;

pub use atomic::atomic_write;
pub use password::{generate_password_hash, verify_password_hash};
