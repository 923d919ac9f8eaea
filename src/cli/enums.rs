//! CLI enum types for color and palette options.

use clap::ValueEnum;

use crate::ascii;

/// Output color treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Color {
    /// Truecolor taken from each pixel
    #[default]
    Full,
    /// Truecolor grey from the channel average
    #[value(name = "b&w", aliases = ["bw", "grayscale"])]
    BlackAndWhite,
    /// Plain text
    None,
}

impl From<Color> for ascii::ColorMode {
    fn from(c: Color) -> Self {
        match c {
            Color::Full => ascii::ColorMode::Full,
            Color::BlackAndWhite => ascii::ColorMode::Grayscale,
            Color::None => ascii::ColorMode::None,
        }
    }
}

/// Preset palette code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PresetPalette {
    Extended,
    #[default]
    Standard,
    Reduced,
    Block,
}

impl From<PresetPalette> for ascii::PaletteCode {
    fn from(p: PresetPalette) -> Self {
        match p {
            PresetPalette::Extended => ascii::PaletteCode::Extended,
            PresetPalette::Standard => ascii::PaletteCode::Standard,
            PresetPalette::Reduced => ascii::PaletteCode::Reduced,
            PresetPalette::Block => ascii::PaletteCode::Block,
        }
    }
}
