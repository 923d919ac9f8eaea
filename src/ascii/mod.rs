//! Image to text conversion primitives.
//!
//! The pipeline that [`crate::renderer`] drives is built from these pieces:
//!
//! 1. **Palette resolution** - preset or custom glyph ramp, densest first
//! 2. **Dimension planning** - fit the font-corrected image to the target grid
//! 3. **Glyph mapping** - channel average to palette index, or a random glyph
//! 4. **Colour encoding** - optional 24-bit foreground escape per glyph
//!
//! # Palettes
//!
//! Presets are available via [`PaletteCode`]:
//! - `Extended` - 210 Unicode glyphs
//! - `Standard` - 70-level ASCII ramp
//! - `Reduced` - 10-level ASCII ramp
//! - `Block` - a single full block, for coloured output

mod charset;
mod color;
mod dimensions;
mod mapping;

pub use charset::{
    resolve, Palette, PaletteCode, PaletteSelection, BLOCK_PALETTE, EXTENDED_PALETTE,
    REDUCED_PALETTE, STANDARD_PALETTE,
};
pub use color::{encode, encode_into, grey_level, ColorMode, RESET};
pub use dimensions::{
    adjust_height, plan_reduction, plan_terminal_fit, FontRatio, DEFAULT_FONT_RATIO,
    MAX_OUTPUT_CELLS,
};
pub use mapping::{gray_value, glyph_for_pixel, palette_index, random_glyph};
