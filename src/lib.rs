//! luma-palette - palettes of equal perceived brightness
//!
//! Selects colors from a brightness band of the RGB cube, drops the grayish
//! ones and orders the rest by hue. The brightness index and HSL conversion
//! live in the `luma-index` crate; this library adds request validation,
//! sampling, configuration and export rendering, and exposes them to the
//! `luma-palette` binary and integration tests.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;

pub use error::{ConfigError, PaletteError, RenderError};
pub use models::{AppConfig, Palette, PaletteRequest};
pub use services::{select_palette, select_palette_at, PaletteSelector, ShuffleMode};
