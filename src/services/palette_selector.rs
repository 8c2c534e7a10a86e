//! Palette selection: band lookup, sampling, saturation filter, ordering.

use luma_index::{BrightnessIndex, ColorCode, Hsl, HslCache};
use rand::Rng;

use crate::error::PaletteError;
use crate::models::{Palette, PaletteRequest};
use crate::services::{Sampler, ShuffleMode};

/// Colors at or below this saturation are dropped as too gray
pub const MIN_SATURATION: f64 = 0.5;

/// Selects palettes from a prebuilt brightness index.
///
/// The index and the HSL cache are borrowed, so one index can serve any
/// number of selectors (and threads).
#[derive(Debug, Clone, Copy)]
pub struct PaletteSelector<'a> {
    index: &'a BrightnessIndex,
    cache: &'a HslCache,
    sampler: Sampler,
}

impl<'a> PaletteSelector<'a> {
    pub fn new(index: &'a BrightnessIndex, cache: &'a HslCache) -> Self {
        Self {
            index,
            cache,
            sampler: Sampler::default(),
        }
    }

    /// Use a specific shuffle for sampling
    pub fn with_shuffle(mut self, mode: ShuffleMode) -> Self {
        self.sampler = Sampler::new(mode);
        self
    }

    /// Select a palette for `request`.
    ///
    /// Gathers every color whose brightness lies in the request's level band,
    /// samples at most `size` of them, keeps those with saturation above
    /// [`MIN_SATURATION`], and sorts the survivors by hue, lightness and
    /// saturation.
    ///
    /// # Errors
    /// [`PaletteError::InvariantViolation`] if a level in the band has no
    /// colors, which cannot happen with an index built from the full cube.
    pub fn select<R>(&self, request: &PaletteRequest, rng: &mut R) -> Result<Palette, PaletteError>
    where
        R: Rng + ?Sized,
    {
        let (lo, hi) = request.levels();
        let band = self.index.band(lo, hi)?;
        let sampled = self.sampler.sample(band, request.size(), rng);
        let sampled_len = sampled.len();

        let mut keyed: Vec<(Hsl, ColorCode)> = sampled
            .into_iter()
            .map(|code| (self.cache.get_or_compute(code), code))
            .filter(|(hsl, _)| hsl.s > MIN_SATURATION)
            .collect();
        keyed.sort_by(|(a, _), (b, _)| a.cmp_hue_lightness_saturation(b));

        tracing::debug!(
            brightness = request.brightness(),
            tolerance = request.tolerance(),
            band = band.len(),
            sampled = sampled_len,
            kept = keyed.len(),
            shuffle = ?self.sampler.mode(),
            "Selected palette"
        );

        Ok(Palette {
            request: *request,
            min_level: lo as u8,
            max_level: hi as u8,
            candidates: band.len(),
            colors: keyed.into_iter().map(|(_, code)| code).collect(),
        })
    }
}

/// Select a palette using the shared index, the global HSL cache and the
/// thread-local RNG.
///
/// The first call builds the shared index (see [`BrightnessIndex::shared`]).
pub fn select_palette(
    brightness: f64,
    tolerance: f64,
    size: f64,
) -> Result<Vec<ColorCode>, PaletteError> {
    select_shared(&PaletteRequest::new(brightness, tolerance, size)?)
}

/// [`select_palette`] with the default tolerance (0) and size (200).
pub fn select_palette_at(brightness: f64) -> Result<Vec<ColorCode>, PaletteError> {
    select_shared(&PaletteRequest::for_brightness(brightness)?)
}

fn select_shared(request: &PaletteRequest) -> Result<Vec<ColorCode>, PaletteError> {
    let selector = PaletteSelector::new(BrightnessIndex::shared(), HslCache::global());
    let palette = selector.select(request, &mut rand::thread_rng())?;
    Ok(palette.colors)
}
