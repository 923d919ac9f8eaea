//! Error types shared by the library and the binary.

use std::path::PathBuf;

use crate::config::ConfigError;

/// Errors that can occur while turning an image into text.
///
/// All of them are fatal for a single invocation; the binary reports the
/// message and exits with a non-zero status.
#[derive(Debug, thiserror::Error)]
pub enum AsciiError {
    #[error("File not found at \"{}\"", path.display())]
    ImageNotFound { path: PathBuf },

    #[error("File at \"{}\" is not a supported image: {source}", path.display())]
    UnsupportedImageFormat {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to decode image \"{}\": {source}", path.display())]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Palette must contain at least one character")]
    EmptyPalette,

    #[error("Font ratio must be a positive number, got {0}")]
    InvalidFontRatio(f64),

    #[error("Reduction factor must be positive and keep the output within 4096x4096, got {0}")]
    InvalidReductionFactor(f64),

    #[error("Terminal size unavailable (not running in a terminal?)")]
    TerminalSizeUnavailable,

    #[error("Failed to write \"{}\": {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, AsciiError>;
