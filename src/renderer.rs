//! Image to text rendering.
//!
//! Ties the pieces in [`crate::ascii`] together: resolve the palette, plan
//! the output grid, resample, then map every pixel to an (optionally
//! coloured) glyph, row by row.

use std::fmt;

use rand::Rng;

use crate::ascii::{
    self, plan_reduction, plan_terminal_fit, ColorMode, FontRatio, Palette, PaletteSelection,
};
use crate::error::Result;
use crate::source::SourceImage;
use crate::terminal::TerminalCanvas;

/// How the output grid size is chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sizing {
    /// Fit inside a terminal, preserving proportions
    Terminal(TerminalCanvas),
    /// Divide the font-corrected image size by a factor (file export)
    Reduction(f64),
}

/// Per-render settings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderOptions {
    pub palette: PaletteSelection,
    pub fontratio: FontRatio,
    pub color: ColorMode,
    /// Pick a random palette glyph per pixel instead of matching intensity
    pub random_char: bool,
    /// Map black to the sparsest glyph instead of the densest
    pub invert: bool,
}

/// Rendered text grid.
///
/// Lines hold the encoded glyphs of one row each. `Display` joins them with
/// `\n` and, for coloured output, appends a single attribute reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedText {
    lines: Vec<String>,
    width: u32,
    colored: bool,
}

impl RenderedText {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Width in glyphs.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in lines.
    pub fn height(&self) -> u32 {
        self.lines.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for RenderedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        if self.colored && !self.lines.is_empty() {
            f.write_str(ascii::RESET)?;
        }
        Ok(())
    }
}

/// Output grid size for `image` under `sizing`.
pub fn plan(image: &SourceImage, fontratio: FontRatio, sizing: Sizing) -> Result<(u32, u32)> {
    match sizing {
        Sizing::Terminal(canvas) => {
            plan_terminal_fit(image.width(), image.height(), fontratio, canvas)
        }
        Sizing::Reduction(factor) => {
            plan_reduction(image.width(), image.height(), fontratio, factor)
        }
    }
}

/// Render an image using the thread-local random source.
pub fn render(
    image: &SourceImage,
    options: &RenderOptions,
    sizing: Sizing,
) -> Result<RenderedText> {
    render_with_rng(image, options, sizing, &mut rand::rng())
}

/// Render an image drawing random glyphs from `rng`.
///
/// The random source is only consulted when `options.random_char` is set.
pub fn render_with_rng<R: Rng + ?Sized>(
    image: &SourceImage,
    options: &RenderOptions,
    sizing: Sizing,
    rng: &mut R,
) -> Result<RenderedText> {
    let palette = options.palette.resolve()?;
    let (width, height) = plan(image, options.fontratio, sizing)?;

    log::debug!(
        "Rendering {}x{} image as {}x{} ({} glyphs, color {})",
        image.width(),
        image.height(),
        width,
        height,
        palette.len(),
        options.color
    );

    if width == 0 || height == 0 {
        return Ok(RenderedText {
            lines: Vec::new(),
            width: 0,
            colored: options.color.is_colored(),
        });
    }

    let resized = image.resize(width, height);
    Ok(render_grid(&resized, &palette, options, rng))
}

/// Convert every pixel of an already-sized image.
pub fn render_grid<R: Rng + ?Sized>(
    image: &SourceImage,
    palette: &Palette,
    options: &RenderOptions,
    rng: &mut R,
) -> RenderedText {
    let lines = image
        .rows()
        .map(|row| {
            let mut line = String::with_capacity(image.width() as usize);
            for pixel in row {
                let glyph = if options.random_char {
                    ascii::random_glyph(palette, rng)
                } else {
                    ascii::glyph_for_pixel(pixel, palette, options.invert)
                };
                ascii::encode_into(&mut line, glyph, pixel, options.color);
            }
            line
        })
        .collect();

    RenderedText {
        lines,
        width: image.width(),
        colored: options.color.is_colored(),
    }
}
