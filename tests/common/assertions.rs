//! Assertion helpers for tests.

use std::cmp::Ordering;

use luma_index::{brightness_of_code, ColorCode, Hsl};
use luma_palette::services::MIN_SATURATION;
use luma_palette::Palette;

/// Assert every color lies in the inclusive level band
pub fn assert_in_band(colors: &[ColorCode], lo: u8, hi: u8) {
    for &code in colors {
        let level = brightness_of_code(code);
        assert!(
            (lo..=hi).contains(&level),
            "{code} has level {level}, expected {lo}..={hi}"
        );
    }
}

/// Assert every color is saturated enough to pass the filter
pub fn assert_saturated(colors: &[ColorCode]) {
    for &code in colors {
        let hsl = Hsl::of(code);
        assert!(
            hsl.s > MIN_SATURATION,
            "{code} has saturation {}, expected > {MIN_SATURATION}",
            hsl.s
        );
    }
}

/// Assert colors are ordered by hue, then lightness, then saturation
pub fn assert_sorted(colors: &[ColorCode]) {
    for pair in colors.windows(2) {
        let (a, b) = (Hsl::of(pair[0]), Hsl::of(pair[1]));
        assert_ne!(
            a.cmp_hue_lightness_saturation(&b),
            Ordering::Greater,
            "{} ({a:?}) sorts after {} ({b:?})",
            pair[0],
            pair[1]
        );
    }
}

/// Assert a palette satisfies every output guarantee for its request
pub fn assert_valid_palette(palette: &Palette) {
    let (lo, hi) = palette.request.levels();
    assert_eq!(
        (palette.min_level as usize, palette.max_level as usize),
        (lo, hi)
    );
    assert!(
        palette.len() <= palette.request.size(),
        "{} colors for size {}",
        palette.len(),
        palette.request.size()
    );
    assert_in_band(&palette.colors, palette.min_level, palette.max_level);
    assert_saturated(&palette.colors);
    assert_sorted(&palette.colors);
}
