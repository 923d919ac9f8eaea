//! Pixel to glyph mapping.

use rand::Rng;

use super::charset::Palette;

/// Number of distinct intensity levels per channel.
const LEVELS: f64 = 256.0;

/// Real-valued average of the three channels, in `[0, 255]`.
#[inline]
pub fn gray_value(pixel: [u8; 3]) -> f64 {
    (pixel[0] as f64 + pixel[1] as f64 + pixel[2] as f64) / 3.0
}

/// Palette index for a gray value.
///
/// Palettes run densest to sparsest, so black (0) lands on index 0 and
/// near-white lands on the last index. With `invert` the direction flips,
/// which suits light-on-dark viewing where black should stay empty.
///
/// The result is always in `0..len`.
pub fn palette_index(gray: f64, len: usize, invert: bool) -> usize {
    if len == 0 {
        return 0;
    }
    let fraction = if invert {
        1.0 - gray / LEVELS
    } else {
        gray / LEVELS
    };
    let index = (fraction * len as f64).floor().max(0.0) as usize;
    // Only reachable at the extreme (fraction == 1.0)
    index.min(len - 1)
}

/// Glyph for a pixel, based on its intensity.
pub fn glyph_for_pixel(pixel: [u8; 3], palette: &Palette, invert: bool) -> char {
    palette.glyph(palette_index(gray_value(pixel), palette.len(), invert))
}

/// Uniformly random glyph from the palette, ignoring intensity.
pub fn random_glyph<R: Rng + ?Sized>(palette: &Palette, rng: &mut R) -> char {
    palette.glyph(rng.random_range(0..palette.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn palette(glyphs: &str) -> Palette {
        Palette::new(glyphs).unwrap()
    }

    #[test]
    fn test_gray_value_is_not_rounded() {
        assert_eq!(gray_value([0, 0, 0]), 0.0);
        assert_eq!(gray_value([255, 255, 255]), 255.0);
        assert!((gray_value([1, 1, 2]) - 4.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_black_maps_to_densest() {
        assert_eq!(palette_index(0.0, 3, false), 0);
        assert_eq!(glyph_for_pixel([0, 0, 0], &palette("@. "), false), '@');
    }

    #[test]
    fn test_white_maps_to_sparsest() {
        // 255/256 * 3 = 2.988 -> 2
        assert_eq!(palette_index(255.0, 3, false), 2);
        assert_eq!(glyph_for_pixel([255, 255, 255], &palette("@. "), false), ' ');
    }

    #[test]
    fn test_midtones() {
        // 128/256 * 10 = 5
        assert_eq!(palette_index(128.0, 10, false), 5);
        // 127/256 * 10 = 4.96
        assert_eq!(palette_index(127.0, 10, false), 4);
    }

    #[test]
    fn test_inverted_clamps_black_to_last() {
        // (1 - 0) * 3 = 3 == len -> 2
        assert_eq!(palette_index(0.0, 3, true), 2);
        // (1 - 255/256) * 3 = 0.0117 -> 0
        assert_eq!(palette_index(255.0, 3, true), 0);
        assert_eq!(glyph_for_pixel([0, 0, 0], &palette("@. "), true), ' ');
    }

    #[test]
    fn test_index_always_in_bounds() {
        for len in [1usize, 2, 3, 10, 70, 210] {
            for gray in 0..=255u32 {
                for invert in [false, true] {
                    let idx = palette_index(gray as f64, len, invert);
                    assert!(idx < len, "gray {} len {} invert {} -> {}", gray, len, invert, idx);
                }
            }
        }
    }

    #[test]
    fn test_index_is_monotonic() {
        let mut previous = 0;
        for gray in 0..=255u32 {
            let idx = palette_index(gray as f64, 70, false);
            assert!(idx >= previous);
            previous = idx;
        }
        assert_eq!(previous, 69);
    }

    #[test]
    fn test_single_glyph_palette() {
        let block = palette("█");
        assert_eq!(glyph_for_pixel([0, 0, 0], &block, false), '█');
        assert_eq!(glyph_for_pixel([255, 255, 255], &block, true), '█');
    }

    #[test]
    fn test_random_glyph_stays_in_palette() {
        let p = palette("abc");
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            assert!(p.glyphs().contains(&random_glyph(&p, &mut rng)));
        }
    }

    #[test]
    fn test_random_glyph_is_seedable() {
        let p = palette("0123456789");
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let first: String = (0..32).map(|_| random_glyph(&p, &mut a)).collect();
        let second: String = (0..32).map(|_| random_glyph(&p, &mut b)).collect();
        assert_eq!(first, second);
    }
}
