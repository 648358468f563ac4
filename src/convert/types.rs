use std::path::PathBuf;

/// Configuration for a conversion run over a set of candidate images.
///
/// The candidate list, destination directory, and quality are explicit here
/// so the conversion routines stay free of embedded path literals; the
/// binary supplies the historical hero-image defaults.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Candidate input files. Every existing candidate is converted; there
    /// is no dedup or early exit after the first match.
    pub candidates: Vec<PathBuf>,
    /// Directory to place artifacts in. `None` writes siblings next to each
    /// input file.
    pub output_dir: Option<PathBuf>,
    /// Encoding quality for both formats (0-100).
    pub quality: u8,
}

/// Why a single format conversion failed.
///
/// Variants carry the failure text rather than source errors so a decode
/// failure can be reported against both target formats.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("failed to decode {}: {reason}", .path.display())]
    Decode { path: PathBuf, reason: String },

    #[error("failed to encode WebP: {reason}")]
    WebpEncode { reason: String },

    #[error("failed to encode AVIF: {reason}")]
    AvifEncode { reason: String },

    #[error("AVIF support is not available in this build")]
    AvifUnavailable,

    #[error("failed to write {}: {reason}", .path.display())]
    Write { path: PathBuf, reason: String },
}

/// Per-format results of converting one input image.
///
/// WebP is the primary delivery format and AVIF the best-effort one, but the
/// two results are independent: callers distinguish "primary failed" from
/// "optional failed" by inspecting the matching field.
#[derive(Debug)]
pub struct ConversionReport {
    /// The input file this report describes.
    pub input: PathBuf,
    /// Path of the written `.webp` artifact, or why it could not be produced.
    pub webp: Result<PathBuf, ConversionError>,
    /// Path of the written `.avif` artifact, or why it could not be produced.
    pub avif: Result<PathBuf, ConversionError>,
}

/// Outcome of the driver's existence check for one candidate path.
#[derive(Debug)]
pub enum CandidateOutcome {
    /// The candidate path did not exist; nothing was written.
    Missing { input: PathBuf },
    /// The candidate existed and conversion was attempted.
    Converted(ConversionReport),
}
