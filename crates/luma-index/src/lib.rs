//! luma-index: perceived-brightness indexing of the 24-bit RGB cube
//!
//! This library classifies every one of the 16,777,216 RGB colors by its
//! perceived brightness and provides the HSL conversion used to filter and
//! order colors taken from a brightness band.
//!
//! # Quick Start
//!
//! The [`BrightnessIndex`] is built once and then only read:
//!
//! ```
//! use luma_index::{BrightnessIndex, ColorCode};
//!
//! // A small synthetic domain; `BrightnessIndex::build()` covers the full cube.
//! let codes = (0..=255u8).map(|v| ColorCode::from_rgb(v, v, v));
//! let index = BrightnessIndex::from_codes(codes);
//!
//! let bucket = index.bucket_for(128).unwrap();
//! assert_eq!(bucket, &[ColorCode::from_rgb(128, 128, 128)]);
//! ```
//!
//! # Brightness Model
//!
//! The level of a color is
//!
//! ```text
//! level = floor(sqrt(0.241 R² + 0.691 G² + 0.068 B²))
//! ```
//!
//! The weights sum to exactly one, so every gray maps to its own channel
//! value and white maps to 255. The weights are evaluated as integer
//! thousandths: in binary floating point, `0.241 + 0.691 + 0.068` lands just
//! below one and white would fall to level 254, leaving level 255 empty.
//!
//! # Color Spaces
//!
//! - [`ColorCode`]: packed `0xRRGGBB` integer, displayed as `#rrggbb`
//! - [`Hsl`]: hue, saturation and lightness, each in `0.0..=1.0`
//!
//! [`HslCache`] memoizes the conversion per color code for the lifetime of
//! the cache. Entries are never invalidated since a code always converts to
//! the same triple.
//!
//! ```
//! use luma_index::{ColorCode, HslCache};
//!
//! let cache = HslCache::new();
//! let orange: ColorCode = "#ff8000".parse().unwrap();
//!
//! let hsl = cache.get_or_compute(orange);
//! assert_eq!(hsl.s, 1.0);
//! assert_eq!(cache.get_or_compute(orange), hsl);
//! assert_eq!(cache.stats().misses, 1);
//! ```

pub mod brightness;
pub mod color;
mod error;
pub mod index;

pub use brightness::{brightness_of, brightness_of_code, LEVELS};
pub use color::{rgb_to_hsl, CacheStats, ColorCode, Hsl, HslCache};
pub use error::{IndexError, ParseColorError};
pub use index::BrightnessIndex;
