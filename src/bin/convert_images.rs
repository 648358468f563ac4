//! Convert Hero Images to WebP and AVIF
//!
//! This binary re-encodes the site's hero images into modern delivery
//! formats. Each configured candidate file that exists on disk is converted
//! into a `.webp` sibling (always attempted) and a `.avif` sibling
//! (best-effort) at the configured quality.
//!
//! ## Usage
//!
//! Runs with no arguments using the historical hero-image candidates:
//! ```sh
//! cargo run --bin convert_images
//! ```
//! Or with explicit configuration:
//! ```sh
//! cargo run --bin convert_images -- --images static/images/hero.png --quality 90 --output-dir dist
//! ```
//!
//! ## Notes
//! - Candidate paths are resolved relative to the current working directory.
//! - Per-item failures are logged and do not affect the exit code; missing
//!   candidates are reported as "File not found".
//! - Logging levels can be adjusted via the `RUST_LOG` environment variable
//!   (default `info`).

use clap::Parser;
use log::{error, info, warn};
use site_maintenance::convert::{
  convert_candidates, CandidateOutcome, ConversionError, ConvertConfig,
};
use std::path::PathBuf;

/// Command-line arguments for the hero-image converter.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
  /// Comma-separated list of candidate image files to convert.
  #[clap(
    long,
    env = "HERO_IMAGES",
    default_value = "static/images/shankar.jpg,static/images/shankar.jpeg,static/images/Shankar.png",
    value_delimiter = ','
  )]
  images: Vec<PathBuf>,

  /// Encoding quality for both formats (0-100).
  #[clap(long, env = "QUALITY", default_value_t = 85, value_parser = clap::value_parser!(u8).range(0..=100))]
  quality: u8,

  /// Directory to write artifacts into instead of next to each input file.
  #[clap(long, env = "OUTPUT_DIR")]
  output_dir: Option<PathBuf>,
}

/// Converts every existing candidate and logs one line per result.
///
/// The exit code is 0 regardless of per-item failures; WebP failures are
/// logged as errors, AVIF failures only as warnings since that format is
/// best-effort.
fn main() {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

  let args = Args::parse();
  let config = ConvertConfig {
    candidates: args.images,
    output_dir: args.output_dir,
    quality: args.quality,
  };
  info!(
    "Converting {} candidate image(s) at quality {}",
    config.candidates.len(),
    config.quality
  );

  for outcome in convert_candidates(&config) {
    match outcome {
      CandidateOutcome::Missing { input } => warn!("File not found: {}", input.display()),
      CandidateOutcome::Converted(report) => {
        match &report.webp {
          Ok(path) => info!(
            "Converted {} to WebP: {}",
            report.input.display(),
            path.display()
          ),
          Err(e) => error!("{}", e),
        }
        match &report.avif {
          Ok(path) => info!(
            "Converted {} to AVIF: {}",
            report.input.display(),
            path.display()
          ),
          // A decode failure was already reported on the WebP line.
          Err(ConversionError::Decode { .. }) => {}
          Err(e) => warn!(
            "Could not convert {} to AVIF: {}",
            report.input.display(),
            e
          ),
        }
      }
    }
  }
}
