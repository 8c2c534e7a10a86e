pub mod config;
pub mod palette;
pub mod request;

pub use config::{AppConfig, CONFIG_ENV_VAR};
pub use palette::Palette;
pub use request::{PaletteRequest, DEFAULT_BRIGHTNESS, DEFAULT_SIZE, DEFAULT_TOLERANCE};
