//! Decoded source images and the resampling primitive.
//!
//! Decoding and resizing are delegated to the `image` crate. Alpha is
//! dropped on load; every pixel is an `[r, g, b]` triple.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{ImageError, RgbImage};

use crate::error::{AsciiError, Result};

/// Resampling filter used when fitting an image to the output grid.
pub const RESIZE_FILTER: FilterType = FilterType::Triangle;

/// An RGB pixel grid.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceImage {
    pixels: RgbImage,
}

impl SourceImage {
    /// Build an image from packed RGB bytes (row-major, 3 bytes per pixel).
    ///
    /// Returns `None` if `data` does not hold exactly `width * height` pixels.
    pub fn from_rgb(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        RgbImage::from_raw(width, height, data).map(|pixels| Self { pixels })
    }

    /// Build an image from a grid of rows, top to bottom.
    ///
    /// Returns `None` if the rows are ragged.
    pub fn from_rows(rows: &[Vec<[u8; 3]>]) -> Option<Self> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |row| row.len()) as u32;
        if rows.iter().any(|row| row.len() as u32 != width) {
            return None;
        }
        let data = rows.iter().flatten().flatten().copied().collect();
        Self::from_rgb(width, height, data)
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Iterate rows top to bottom, each row left to right.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = [u8; 3]> + '_> + '_ {
        self.pixels.rows().map(|row| row.map(|p| p.0))
    }

    /// Resample to `width` x `height`.
    ///
    /// A same-size request returns an untouched copy.
    pub fn resize(&self, width: u32, height: u32) -> SourceImage {
        if width == self.width() && height == self.height() {
            return self.clone();
        }
        Self {
            pixels: imageops::resize(&self.pixels, width, height, RESIZE_FILTER),
        }
    }
}

impl From<RgbImage> for SourceImage {
    fn from(pixels: RgbImage) -> Self {
        Self { pixels }
    }
}

/// Decode the image at `path`.
pub fn decode(path: &Path) -> Result<SourceImage> {
    if !path.is_file() {
        return Err(AsciiError::ImageNotFound {
            path: path.to_path_buf(),
        });
    }

    let image = image::open(path).map_err(|e| match e {
        ImageError::IoError(ref io) if io.kind() == std::io::ErrorKind::NotFound => {
            AsciiError::ImageNotFound {
                path: path.to_path_buf(),
            }
        }
        ImageError::Unsupported(_) | ImageError::Decoding(_) => {
            AsciiError::UnsupportedImageFormat {
                path: path.to_path_buf(),
                source: e,
            }
        }
        _ => AsciiError::ImageDecode {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    log::debug!(
        "Decoded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );

    Ok(image.to_rgb8().into())
}
