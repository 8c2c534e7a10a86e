//! Packed 24-bit color code

use std::fmt;
use std::str::FromStr;

use crate::error::ParseColorError;

/// A 24-bit RGB color packed as `0xRRGGBB`.
///
/// There is exactly one code per RGB triple. Codes display as lowercase,
/// zero-padded `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(transparent)]
pub struct ColorCode(u32);

impl ColorCode {
    /// Largest valid code (`#ffffff`)
    pub const MAX: u32 = 0x00FF_FFFF;

    /// Number of distinct codes
    pub const COUNT: usize = Self::MAX as usize + 1;

    pub const BLACK: Self = Self(0);
    pub const WHITE: Self = Self(Self::MAX);

    /// Pack an RGB triple (`b + (g << 8) + (r << 16)`).
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(b as u32 + ((g as u32) << 8) + ((r as u32) << 16))
    }

    /// Wrap a raw value, returning `None` above `0xFFFFFF`.
    #[inline]
    pub const fn new(value: u32) -> Option<Self> {
        if value <= Self::MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Wrap a raw value known to fit in 24 bits.
    #[inline]
    pub(crate) const fn from_raw(value: u32) -> Self {
        Self(value & Self::MAX)
    }

    /// The raw `0xRRGGBB` value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Unpack into `(r, g, b)`.
    ///
    /// # Example
    /// ```
    /// use luma_index::ColorCode;
    /// assert_eq!(ColorCode::from_rgb(1, 2, 3).to_rgb(), (1, 2, 3));
    /// ```
    #[inline]
    pub const fn to_rgb(self) -> (u8, u8, u8) {
        let b = (self.0 & 0xFF) as u8;
        let g = ((self.0 >> 8) & 0xFF) as u8;
        let r = ((self.0 >> 16) & 0xFF) as u8;
        (r, g, b)
    }
}

impl fmt::Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl From<ColorCode> for u32 {
    fn from(code: ColorCode) -> Self {
        code.0
    }
}

impl TryFrom<u32> for ColorCode {
    type Error = ParseColorError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(ParseColorError::OutOfRange(value))
    }
}

impl FromStr for ColorCode {
    type Err = ParseColorError;

    /// Parse a color code from a hex string.
    ///
    /// Accepts `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB`, case-insensitive, with
    /// surrounding whitespace trimmed. Shorthand digits expand by repetition
    /// (`#f80` is `#ff8800`).
    ///
    /// # Examples
    /// ```
    /// use luma_index::ColorCode;
    ///
    /// let teal: ColorCode = "#008080".parse().unwrap();
    /// assert_eq!(teal.to_rgb(), (0, 128, 128));
    ///
    /// let orange: ColorCode = "F80".parse().unwrap();
    /// assert_eq!(orange.to_string(), "#ff8800");
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        let digits = s
            .chars()
            .map(|c| c.to_digit(16).ok_or(ParseColorError::InvalidDigit(c)))
            .collect::<Result<Vec<u32>, _>>()?;

        match digits.as_slice() {
            // Shorthand: each digit times 17 (0xF -> 0xFF)
            &[r, g, b] => Ok(Self::from_rgb(
                (r * 17) as u8,
                (g * 17) as u8,
                (b * 17) as u8,
            )),
            [_, _, _, _, _, _] => Ok(Self(digits.iter().fold(0, |acc, d| (acc << 4) | d))),
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}
