//! Dimension planning for aspect-ratio-correct text output.
//!
//! Terminal cells are taller than they are wide, so an image rendered one
//! pixel per cell looks vertically stretched. Every planner here first
//! squashes the source height by the font ratio and only then fits the
//! result to the target size.

use std::fmt;

use crate::error::{AsciiError, Result};
use crate::terminal::TerminalCanvas;

/// Default glyph width / height proportion for common monospace fonts.
pub const DEFAULT_FONT_RATIO: f64 = 0.4;

/// Glyph cell width divided by its height. Always finite and > 0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct FontRatio(f64);

impl FontRatio {
    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(AsciiError::InvalidFontRatio(value))
        }
    }

    pub fn get(&self) -> f64 {
        self.0
    }
}

impl Default for FontRatio {
    fn default() -> Self {
        Self(DEFAULT_FONT_RATIO)
    }
}

impl fmt::Display for FontRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source height after font-ratio compensation, truncated.
pub fn adjust_height(img_height: u32, fontratio: FontRatio) -> u32 {
    (img_height as f64 * fontratio.get()).floor() as u32
}

/// Fit an image into a terminal canvas while preserving its proportions.
///
/// Both full-fit candidates are computed: one that fills the terminal width
/// and one that fills its height. The width-filling candidate wins whenever
/// its height stays strictly below the terminal height, otherwise the
/// height-filling one is used.
///
/// # Arguments
/// * `img_width` - Width of the source image in pixels
/// * `img_height` - Height of the source image in pixels
/// * `fontratio` - Glyph width / height proportion
/// * `canvas` - Terminal size in character cells
///
/// # Returns
/// `(columns, rows)` of the output grid. An empty image yields `(0, 0)`;
/// any other image yields at least one cell per axis.
///
/// # Example
/// ```
/// use ascii_image::ascii::{plan_terminal_fit, FontRatio};
/// use ascii_image::terminal::TerminalCanvas;
///
/// let canvas = TerminalCanvas::new(80, 24).unwrap();
/// let ratio = FontRatio::new(0.5).unwrap();
/// // 640x480 becomes 640x240 after compensation, which is height-bound
/// assert_eq!(plan_terminal_fit(640, 480, ratio, canvas).unwrap(), (64, 24));
/// ```
pub fn plan_terminal_fit(
    img_width: u32,
    img_height: u32,
    fontratio: FontRatio,
    canvas: TerminalCanvas,
) -> Result<(u32, u32)> {
    if canvas.width == 0 || canvas.height == 0 {
        return Err(AsciiError::TerminalSizeUnavailable);
    }
    if img_width == 0 || img_height == 0 {
        return Ok((0, 0));
    }

    let term_width = canvas.width as u32;
    let term_height = canvas.height as u32;
    let adj_height = adjust_height(img_height, fontratio);

    let ratio_w = img_width as f64 / term_width as f64;
    let ratio_h = adj_height as f64 / term_height as f64;

    // Height if the image fills the terminal width
    let candidate_height = (adj_height as f64 / ratio_w).floor() as u32;

    let (width, height) = if candidate_height < term_height {
        (term_width, candidate_height)
    } else {
        // Width if the image fills the terminal height
        let candidate_width = (img_width as f64 / ratio_h).floor() as u32;
        // Clamp in case of float rounding
        (candidate_width.min(term_width), term_height)
    };

    Ok((width.max(1), height.max(1)))
}

/// Largest grid `plan_reduction` will produce (4096 x 4096 characters).
pub const MAX_OUTPUT_CELLS: u64 = 4096 * 4096;

/// Shrink an image by a reduction factor, independent of any terminal.
///
/// Used for file export: the font-ratio-adjusted size is divided by
/// `factor` on both axes. A factor that is not positive, or one small
/// enough to push the grid past [`MAX_OUTPUT_CELLS`], is rejected.
pub fn plan_reduction(
    img_width: u32,
    img_height: u32,
    fontratio: FontRatio,
    factor: f64,
) -> Result<(u32, u32)> {
    if !(factor.is_finite() && factor > 0.0) {
        return Err(AsciiError::InvalidReductionFactor(factor));
    }
    if img_width == 0 || img_height == 0 {
        return Ok((0, 0));
    }

    // Stay in f64 until the size is known to fit
    let adj_height = (img_height as f64 * fontratio.get()).floor();
    let width = (img_width as f64 / factor).floor().max(1.0);
    let height = (adj_height / factor).floor().max(1.0);

    if width * height > MAX_OUTPUT_CELLS as f64 {
        return Err(AsciiError::InvalidReductionFactor(factor));
    }

    Ok((width as u32, height as u32))
}
