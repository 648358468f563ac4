use super::types::{CandidateOutcome, ConversionError, ConversionReport, ConvertConfig};
use image::DynamicImage;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// AVIF encoder speed on ravif's 1 (slowest) to 10 (fastest) scale.
#[cfg(feature = "avif")]
const AVIF_SPEED: u8 = 6;

/// Converts every existing candidate image in the configuration.
///
/// Each candidate is checked for existence first: missing candidates are
/// reported as [`CandidateOutcome::Missing`] without touching the
/// filesystem, existing ones are handed to [`convert_image`]. Candidates are
/// processed independently, so several spellings of the same logical image
/// may all be converted in one run.
///
/// # Arguments
///
/// * `config` - The candidate list, optional output directory, and quality.
///
/// # Returns
///
/// One [`CandidateOutcome`] per candidate, in input order.
pub fn convert_candidates(config: &ConvertConfig) -> Vec<CandidateOutcome> {
    let mut outcomes = Vec::new();
    for candidate in &config.candidates {
        if candidate.exists() {
            info!("Converting {}", candidate.display());
            outcomes.push(CandidateOutcome::Converted(convert_image(
                candidate,
                config.output_dir.as_deref(),
                config.quality,
            )));
        } else {
            outcomes.push(CandidateOutcome::Missing {
                input: candidate.clone(),
            });
        }
    }
    outcomes
}

/// Re-encodes one image into WebP and AVIF artifacts.
///
/// The input is decoded once. Both target formats are then attempted
/// independently, each encoding into memory first and writing the artifact
/// file only from a complete encode, so a failed encode leaves no partial
/// artifact behind. A decode failure is reported for both formats and
/// nothing is written.
///
/// # Arguments
///
/// * `input` - Path to an existing image file.
/// * `output_dir` - Directory for the artifacts; `None` writes them next to
///   the input.
/// * `quality` - Encoding quality for both formats (0-100).
///
/// # Returns
///
/// A [`ConversionReport`] with one `Result` per format.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use site_maintenance::convert::convert_image;
///
/// let report = convert_image(Path::new("static/images/shankar.jpg"), None, 85);
/// if let Ok(path) = &report.webp {
///     println!("WebP artifact at {}", path.display());
/// }
/// ```
pub fn convert_image(input: &Path, output_dir: Option<&Path>, quality: u8) -> ConversionReport {
    let img = match image::open(input) {
        Ok(img) => img,
        Err(e) => {
            let decode_error = ConversionError::Decode {
                path: input.to_path_buf(),
                reason: e.to_string(),
            };
            return ConversionReport {
                input: input.to_path_buf(),
                webp: Err(decode_error.clone()),
                avif: Err(decode_error),
            };
        }
    };

    let webp = encode_webp(&img, &artifact_path(input, output_dir, "webp"), quality);
    let avif = encode_avif(&img, &artifact_path(input, output_dir, "avif"), quality);

    ConversionReport {
        input: input.to_path_buf(),
        webp,
        avif,
    }
}

/// Encodes an image as lossy WebP at the given quality and writes it out.
fn encode_webp(
    img: &DynamicImage,
    output: &Path,
    quality: u8,
) -> Result<PathBuf, ConversionError> {
    let rgba = img.to_rgba8();
    let encoded = webp::Encoder::from_rgba(&rgba, rgba.width(), rgba.height())
        .encode_simple(false, f32::from(quality))
        .map_err(|e| ConversionError::WebpEncode {
            reason: format!("{:?}", e),
        })?;
    write_artifact(output, &encoded)
}

/// Encodes an image as AVIF at the given quality and writes it out.
#[cfg(feature = "avif")]
fn encode_avif(
    img: &DynamicImage,
    output: &Path,
    quality: u8,
) -> Result<PathBuf, ConversionError> {
    use image::codecs::avif::AvifEncoder;

    let mut buffer = Vec::new();
    let encoder = AvifEncoder::new_with_speed_quality(&mut buffer, AVIF_SPEED, quality);
    img.write_with_encoder(encoder)
        .map_err(|e| ConversionError::AvifEncode {
            reason: e.to_string(),
        })?;
    write_artifact(output, &buffer)
}

/// Stand-in used when the crate is built without the `avif` feature.
#[cfg(not(feature = "avif"))]
fn encode_avif(
    _img: &DynamicImage,
    _output: &Path,
    _quality: u8,
) -> Result<PathBuf, ConversionError> {
    Err(ConversionError::AvifUnavailable)
}

/// Writes a fully encoded artifact to disk.
fn write_artifact(output: &Path, data: &[u8]) -> Result<PathBuf, ConversionError> {
    fs::write(output, data).map_err(|e| ConversionError::Write {
        path: output.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(output.to_path_buf())
}

/// Derives the artifact path for a target format.
///
/// The input's extension is replaced with `extension`; the file stays in its
/// own directory unless an output directory is given.
fn artifact_path(input: &Path, output_dir: Option<&Path>, extension: &str) -> PathBuf {
    let with_ext = input.with_extension(extension);
    match output_dir {
        Some(dir) => match with_ext.file_name() {
            Some(name) => dir.join(name),
            None => dir.to_path_buf(),
        },
        None => with_ext,
    }
}
