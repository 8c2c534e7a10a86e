//! Color types and conversion utilities
//!
//! - **ColorCode**: packed 24-bit RGB value, the unit stored in the index.
//! - **Hsl**: hue/saturation/lightness derived from a code, used for
//!   filtering by vividness and for ordering.
//!
//! # Example
//!
//! ```
//! use luma_index::{ColorCode, Hsl};
//!
//! let code = ColorCode::from_rgb(0, 0, 255);
//! assert_eq!(code.to_string(), "#0000ff");
//!
//! let hsl = Hsl::of(code);
//! assert!((hsl.h - 2.0 / 3.0).abs() < 1e-12);
//! ```

mod cache;
mod code;
mod hsl;

pub use cache::{CacheStats, HslCache};
pub use code::ColorCode;
pub use hsl::{rgb_to_hsl, Hsl};
