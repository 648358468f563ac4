//! # Converting Hero Images to WebP and AVIF
//!
//! This module re-encodes the site's hero images into modern delivery
//! formats. Given a configured list of candidate files (several historical
//! spellings of the same logical image), every candidate that exists on disk
//! is decoded once and encoded into a `.webp` artifact (the primary format)
//! and a `.avif` artifact (best-effort), by default as siblings of the
//! input file.
//!
//! ## Usage
//!
//! The primary entry point is `convert_candidates`, which takes a
//! [`ConvertConfig`] and returns one outcome per candidate. Single files can
//! be converted directly with `convert_image`.
//!
//! ## Submodules
//!
//! - **encoder**: Contains the decoding, encoding, and driver logic.
//! - **types**: Defines the configuration, report, and error types.

mod encoder;
mod types;

pub use encoder::{convert_candidates, convert_image};
pub use types::{CandidateOutcome, ConversionError, ConversionReport, ConvertConfig};
