//! Test fixtures and constants.

use luma_index::{BrightnessIndex, ColorCode, HslCache};
use luma_palette::services::{PaletteSelector, ShuffleMode};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Every saturated color at brightness level 0, in palette order
pub const LEVEL_ZERO_PALETTE: [&str; 12] = [
    "#010000", "#020000", "#010100", "#000100", "#000101", "#000102", "#000001", "#000002",
    "#000003", "#010003", "#010002", "#010001",
];

/// Seeds used where a test only needs "some" reproducible RNG
pub const SEEDS: [u64; 5] = [0, 1, 42, 1234, 0xDEAD_BEEF];

/// Selector over the full, lazily built index and the global HSL cache
pub fn shared_selector(shuffle: ShuffleMode) -> PaletteSelector<'static> {
    PaletteSelector::new(BrightnessIndex::shared(), HslCache::global()).with_shuffle(shuffle)
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Parse a list of `#rrggbb` literals
pub fn codes(hex: &[&str]) -> Vec<ColorCode> {
    hex.iter()
        .map(|s| s.parse().unwrap_or_else(|e| panic!("bad fixture {s}: {e}")))
        .collect()
}
