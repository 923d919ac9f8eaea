//! Palette presets and resolution of a palette selection into glyphs.
//!
//! Every palette is ordered from the densest glyph (most ink, index 0) to the
//! sparsest one (usually a space, last index).

use std::fmt;

use crate::error::{AsciiError, Result};

/// Extended palette: accented letters and symbols, densest to sparsest.
pub const EXTENDED_PALETTE: &str = "ÆÑÊŒØMÉËÈÃÂWQBÅæ#NÁþEÄÀHKRŽœXgÐêqÛŠÕÔA€ßpmãâG¶øðé8ÚÜ$ëdÙýèÓÞÖåÿÒb¥FDñáZPäšÇàhû§ÝkŸ®S9žUTe6µOyxÎ¾f4õ5ôú&aü™2ùçw©Y£0VÍL±3ÏÌóC@nöòs¢u‰½¼‡zJƒ%¤Itocîrjv1lí=ïì<>i7†[¿?×}*{+()/»«•¬|!¡÷¦¯—^ª„”“~³º²–°\u{ad}¹‹›;:’‘‚’˜ˆ¸…·¨´` ";

/// Classic 70-level ASCII ramp.
pub const STANDARD_PALETTE: &str = r#"$@B%8&WM#*oahkbdpqwmZO0QLCJUYXzcvunxrjft/\|()1{}[]?-_+~<>i!lI;:,"^`'. "#;

/// Ten-level ASCII ramp.
pub const REDUCED_PALETTE: &str = "@%#*+=-:. ";

/// Single full block (U+2588). Tone comes from colour alone.
pub const BLOCK_PALETTE: &str = "\u{2588}";

/// Preset palette identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaletteCode {
    /// 210-glyph Unicode ramp
    Extended,
    /// 70-glyph ASCII ramp
    #[default]
    Standard,
    /// 10-glyph ASCII ramp
    Reduced,
    /// Full block only, meant for coloured output
    Block,
}

impl PaletteCode {
    /// All presets, in the order they are listed to users.
    pub const ALL: [PaletteCode; 4] = [
        PaletteCode::Extended,
        PaletteCode::Standard,
        PaletteCode::Reduced,
        PaletteCode::Block,
    ];

    /// The glyph string for this preset.
    pub fn glyphs(&self) -> &'static str {
        match self {
            PaletteCode::Extended => EXTENDED_PALETTE,
            PaletteCode::Standard => STANDARD_PALETTE,
            PaletteCode::Reduced => REDUCED_PALETTE,
            PaletteCode::Block => BLOCK_PALETTE,
        }
    }

    /// Get a human-readable name for the preset.
    pub fn name(&self) -> &'static str {
        match self {
            PaletteCode::Extended => "extended",
            PaletteCode::Standard => "standard",
            PaletteCode::Reduced => "reduced",
            PaletteCode::Block => "block",
        }
    }
}

impl fmt::Display for PaletteCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for PaletteCode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        PaletteCode::ALL
            .into_iter()
            .find(|code| code.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "Unknown palette code '{}'. Available: extended, standard, reduced, block",
                    s
                )
            })
    }
}

/// Which palette a render should use.
///
/// A custom string always wins over a preset; callers that have both build
/// the selection with [`PaletteSelection::from_parts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteSelection {
    Preset(PaletteCode),
    Custom(String),
}

impl Default for PaletteSelection {
    fn default() -> Self {
        PaletteSelection::Preset(PaletteCode::default())
    }
}

impl PaletteSelection {
    /// Combine an optional custom palette with a preset code.
    pub fn from_parts(custom: Option<String>, code: PaletteCode) -> Self {
        match custom {
            Some(glyphs) => PaletteSelection::Custom(glyphs),
            None => PaletteSelection::Preset(code),
        }
    }

    /// Resolve the selection into a concrete palette.
    pub fn resolve(&self) -> Result<Palette> {
        resolve(self)
    }
}

/// An ordered, non-empty glyph sequence, densest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    glyphs: Vec<char>,
}

impl Palette {
    /// Build a palette from a glyph string. Fails on an empty string.
    pub fn new(glyphs: &str) -> Result<Self> {
        let glyphs: Vec<char> = glyphs.chars().collect();
        if glyphs.is_empty() {
            return Err(AsciiError::EmptyPalette);
        }
        Ok(Self { glyphs })
    }

    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always false for a constructed palette.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Glyph at `index`, clamped to the last glyph.
    pub fn glyph(&self, index: usize) -> char {
        self.glyphs[index.min(self.glyphs.len() - 1)]
    }
}

/// Resolve a palette selection into glyphs.
///
/// Presets are infallible; a custom palette fails with
/// [`AsciiError::EmptyPalette`] when it has no glyphs.
pub fn resolve(selection: &PaletteSelection) -> Result<Palette> {
    match selection {
        PaletteSelection::Preset(code) => Palette::new(code.glyphs()),
        PaletteSelection::Custom(glyphs) => Palette::new(glyphs),
    }
}
