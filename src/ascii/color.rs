//! Truecolor wrapping of glyphs.

use std::fmt;
use std::fmt::Write as _;

/// SGR sequence that resets all attributes.
pub const RESET: &str = "\x1b[0m";

/// Colour treatment applied to every glyph of a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// 24-bit foreground colour taken from the pixel
    #[default]
    Full,
    /// 24-bit grey using the channel average
    Grayscale,
    /// Plain glyphs, no escape sequences
    None,
}

impl ColorMode {
    /// Get the name used on the command line and in config files.
    pub fn name(&self) -> &'static str {
        match self {
            ColorMode::Full => "full",
            ColorMode::Grayscale => "b&w",
            ColorMode::None => "none",
        }
    }

    /// Whether this mode emits escape sequences.
    pub fn is_colored(&self) -> bool {
        !matches!(self, ColorMode::None)
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "full" => Ok(ColorMode::Full),
            "b&w" | "bw" | "grayscale" => Ok(ColorMode::Grayscale),
            "none" => Ok(ColorMode::None),
            _ => Err(format!(
                "Unknown color mode '{}'. Available: full, b&w, none",
                s
            )),
        }
    }
}

/// Truncated average of the three channels.
#[inline]
pub fn grey_level(pixel: [u8; 3]) -> u8 {
    ((pixel[0] as u16 + pixel[1] as u16 + pixel[2] as u16) / 3) as u8
}

/// Encode one glyph under the given colour mode.
pub fn encode(glyph: char, pixel: [u8; 3], mode: ColorMode) -> String {
    let mut out = String::new();
    encode_into(&mut out, glyph, pixel, mode);
    out
}

/// Append one encoded glyph to `out`, avoiding a per-glyph allocation.
pub fn encode_into(out: &mut String, glyph: char, pixel: [u8; 3], mode: ColorMode) {
    let [r, g, b] = match mode {
        ColorMode::None => {
            out.push(glyph);
            return;
        }
        ColorMode::Full => pixel,
        ColorMode::Grayscale => {
            let grey = grey_level(pixel);
            [grey, grey, grey]
        }
    };
    // Writing to a String cannot fail
    let _ = write!(out, "\x1b[38;2;{};{};{}m{}", r, g, b, glyph);
}
