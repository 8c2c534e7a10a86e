//! Random sampling of a brightness band.
//!
//! The selector draws at most `size` colors from the band. Uniform sampling
//! is equivalent to a full Fisher-Yates shuffle followed by truncation, but
//! only touches the colors it keeps. Legacy sampling reproduces the older
//! shuffle that drew swap partners from `[0, i)` instead of `[0, i]`. That
//! variant is Sattolo's algorithm: it only produces single-cycle permutations,
//! so no color ever stays at its original position.

use clap::ValueEnum;
use luma_index::ColorCode;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// How the band is shuffled before truncation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ShuffleMode {
    /// Unbiased Fisher-Yates
    #[default]
    Uniform,
    /// Biased shuffle with partners drawn from `[0, i)`
    Legacy,
}

/// Draws a bounded random subset of a band
#[derive(Debug, Clone, Copy, Default)]
pub struct Sampler {
    mode: ShuffleMode,
}

impl Sampler {
    pub fn new(mode: ShuffleMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ShuffleMode {
        self.mode
    }

    /// Pick up to `size` colors from `band`.
    pub fn sample<R>(&self, band: &[ColorCode], size: usize, rng: &mut R) -> Vec<ColorCode>
    where
        R: Rng + ?Sized,
    {
        match self.mode {
            ShuffleMode::Uniform => band.choose_multiple(rng, size).copied().collect(),
            ShuffleMode::Legacy => {
                let mut colors = band.to_vec();
                legacy_shuffle(&mut colors, rng);
                colors.truncate(size);
                colors
            }
        }
    }
}

/// In-place shuffle drawing each swap partner from `[0, i)`.
pub fn legacy_shuffle<T, R>(items: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn band(n: u32) -> Vec<ColorCode> {
        (0..n).filter_map(ColorCode::new).collect()
    }

    #[test]
    fn test_uniform_sample_is_bounded_distinct_subset() {
        let band = band(1000);
        let mut rng = StdRng::seed_from_u64(7);

        let picked = Sampler::new(ShuffleMode::Uniform).sample(&band, 100, &mut rng);

        assert_eq!(picked.len(), 100);
        let unique: HashSet<_> = picked.iter().collect();
        assert_eq!(unique.len(), 100);
        assert!(picked.iter().all(|c| band.contains(c)));
    }

    #[test]
    fn test_sample_larger_than_band_keeps_everything() {
        let band = band(10);
        let mut rng = StdRng::seed_from_u64(1);

        for mode in [ShuffleMode::Uniform, ShuffleMode::Legacy] {
            let mut picked = Sampler::new(mode).sample(&band, 200, &mut rng);
            picked.sort();
            assert_eq!(picked, band, "{mode:?}");
        }
    }

    #[test]
    fn test_same_seed_same_sample() {
        let band = band(5000);
        for mode in [ShuffleMode::Uniform, ShuffleMode::Legacy] {
            let sampler = Sampler::new(mode);
            let a = sampler.sample(&band, 50, &mut StdRng::seed_from_u64(99));
            let b = sampler.sample(&band, 50, &mut StdRng::seed_from_u64(99));
            assert_eq!(a, b, "{mode:?}");
        }
    }

    #[test]
    fn test_legacy_shuffle_moves_every_element() {
        let mut rng = StdRng::seed_from_u64(3);
        for len in 2..40usize {
            let mut items: Vec<usize> = (0..len).collect();
            legacy_shuffle(&mut items, &mut rng);
            for (position, &item) in items.iter().enumerate() {
                assert_ne!(position, item, "element {item} stayed in place (len {len})");
            }
        }
    }

    #[test]
    fn test_legacy_shuffle_is_single_cycle() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut items: Vec<usize> = (0..25).collect();
        legacy_shuffle(&mut items, &mut rng);

        let mut position = 0;
        let mut steps = 0;
        loop {
            position = items[position];
            steps += 1;
            if position == 0 {
                break;
            }
        }
        assert_eq!(steps, items.len());
    }

    #[test]
    fn test_legacy_shuffle_trivial_lengths() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut empty: Vec<u8> = Vec::new();
        legacy_shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut single = vec![9u8];
        legacy_shuffle(&mut single, &mut rng);
        assert_eq!(single, vec![9]);
    }

    #[test]
    fn test_uniform_can_keep_element_in_place() {
        // The unbiased shuffle must reach the identity on two elements
        let band = band(2);
        let sampler = Sampler::new(ShuffleMode::Uniform);
        let mut rng = StdRng::seed_from_u64(5);

        let mut orders = HashSet::new();
        for _ in 0..200 {
            orders.insert(sampler.sample(&band, 2, &mut rng));
        }
        assert_eq!(orders.len(), 2);
    }

    #[test]
    fn test_default_mode_is_uniform() {
        assert_eq!(Sampler::default().mode(), ShuffleMode::Uniform);
    }
}
