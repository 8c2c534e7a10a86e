//! RGB to HSL conversion

use std::cmp::Ordering;

use super::ColorCode;

/// A color in HSL space.
///
/// All three components are in `0.0..=1.0`. Hue is a fraction of a full
/// turn (red at 0, green at 1/3, blue at 2/3).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    /// Hue (0.0..=1.0)
    pub h: f64,
    /// Saturation (0.0..=1.0)
    pub s: f64,
    /// Lightness (0.0..=1.0)
    pub l: f64,
}

impl Hsl {
    /// Convert a packed color code, without caching.
    #[inline]
    pub fn of(code: ColorCode) -> Self {
        let (r, g, b) = code.to_rgb();
        rgb_to_hsl(r, g, b)
    }

    /// True for grays (no hue, no saturation).
    #[inline]
    pub fn is_achromatic(&self) -> bool {
        self.s == 0.0
    }

    /// Palette ordering: hue, then lightness, then saturation.
    pub fn cmp_hue_lightness_saturation(&self, other: &Self) -> Ordering {
        self.h
            .total_cmp(&other.h)
            .then_with(|| self.l.total_cmp(&other.l))
            .then_with(|| self.s.total_cmp(&other.s))
    }
}

/// Convert 8-bit RGB to HSL.
///
/// When two channels tie for the maximum, hue is taken from the first of
/// red, green, blue.
///
/// # Example
/// ```
/// use luma_index::rgb_to_hsl;
///
/// let red = rgb_to_hsl(255, 0, 0);
/// assert_eq!((red.h, red.s, red.l), (0.0, 1.0, 0.5));
/// ```
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl { h: h / 6.0, s, l }
}
