pub mod palette_selector;
pub mod sampler;

pub use palette_selector::{select_palette, select_palette_at, PaletteSelector, MIN_SATURATION};
pub use sampler::{legacy_shuffle, Sampler, ShuffleMode};
