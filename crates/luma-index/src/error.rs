//! Error types for color parsing and index lookups

use std::fmt;

/// Error type for parsing or constructing color codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 digits after stripping '#')
    InvalidLength,
    /// Non-hexadecimal character encountered
    InvalidDigit(char),
    /// Raw value does not fit in 24 bits
    OutOfRange(u32),
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength => {
                write!(f, "invalid hex color length (expected 3 or 6 digits)")
            }
            ParseColorError::InvalidDigit(c) => {
                write!(f, "invalid hex digit: {c:?}")
            }
            ParseColorError::OutOfRange(value) => {
                write!(f, "color code {value:#x} exceeds 0xffffff")
            }
        }
    }
}

impl std::error::Error for ParseColorError {}

/// Error type for brightness index lookups.
///
/// An index built from the full RGB cube has a bucket for every level, so
/// `MissingBucket` only shows up for synthetic domains or a broken build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// Requested level is not in `0..=255`
    LevelOutOfRange(usize),
    /// No color maps to this level
    MissingBucket(u8),
    /// Band bounds are reversed
    InvalidBand {
        /// Lower level
        lo: usize,
        /// Upper level
        hi: usize,
    },
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::LevelOutOfRange(level) => {
                write!(f, "brightness level {level} out of range 0..=255")
            }
            IndexError::MissingBucket(level) => {
                write!(f, "no bucket for brightness level {level}")
            }
            IndexError::InvalidBand { lo, hi } => {
                write!(f, "invalid brightness band {lo}..={hi}")
            }
        }
    }
}

impl std::error::Error for IndexError {}
