//! Site Maintenance Library
//!
//! This library backs two maintenance binaries for a static site: converting
//! hero images into WebP/AVIF delivery formats and resetting the admin
//! password hash stored in the site's JSON data file.
//!

pub mod convert;
pub mod credentials;
pub mod utils;
