//! Perceived brightness model
//!
//! Maps an RGB triple to an integer level in `0..=255` using a perceptual
//! luma weighting (green highest, blue lowest).

use crate::color::ColorCode;

/// Red weight in thousandths (0.241)
pub const RED_WEIGHT: u32 = 241;
/// Green weight in thousandths (0.691)
pub const GREEN_WEIGHT: u32 = 691;
/// Blue weight in thousandths (0.068)
pub const BLUE_WEIGHT: u32 = 68;
/// Denominator shared by the three weights
pub const WEIGHT_SCALE: u32 = 1000;

/// Number of distinct brightness levels
pub const LEVELS: usize = 256;

/// Perceived brightness of an RGB triple.
///
/// Computes `floor(sqrt(0.241 r² + 0.691 g² + 0.068 b²))` exactly.
///
/// # Example
/// ```
/// use luma_index::brightness_of;
///
/// assert_eq!(brightness_of(255, 255, 255), 255);
/// assert_eq!(brightness_of(0, 255, 0), 211);
/// ```
#[inline]
pub fn brightness_of(r: u8, g: u8, b: u8) -> u8 {
    let (r, g, b) = (u32::from(r), u32::from(g), u32::from(b));

    // At most 1000 * 255² = 65_025_000, well inside u32
    let weighted = RED_WEIGHT * r * r + GREEN_WEIGHT * g * g + BLUE_WEIGHT * b * b;

    // floor(sqrt(n / 1000)) == isqrt(floor(n / 1000)) since the root is an integer
    let level = isqrt(weighted / WEIGHT_SCALE);
    debug_assert!(level <= 255, "brightness level {level} out of range");
    level.min(255) as u8
}

/// Perceived brightness of a packed color code.
#[inline]
pub fn brightness_of_code(code: ColorCode) -> u8 {
    let (r, g, b) = code.to_rgb();
    brightness_of(r, g, b)
}

/// Integer square root (floor) for the small range used here.
#[inline]
fn isqrt(n: u32) -> u32 {
    let mut root = f64::from(n).sqrt() as u32;
    while root * root > n {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    root
}
