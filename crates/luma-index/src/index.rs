//! Brightness index over the RGB cube
//!
//! Every color code is assigned to the bucket of its brightness level. The
//! buckets are stored back to back in one array (a counting sort by level),
//! with `offsets[level]..offsets[level + 1]` delimiting each bucket. Within a
//! bucket, codes keep their input order; for the full cube that is R major,
//! then G, then B, which is ascending code order.

use std::fmt;
use std::ops::Range;
use std::sync::OnceLock;

use crate::brightness::{brightness_of_code, LEVELS};
use crate::color::ColorCode;
use crate::error::IndexError;

/// Immutable mapping from brightness level to the color codes at that level.
///
/// Building the full index visits all 16,777,216 codes. Build it once, with
/// [`BrightnessIndex::build`] at startup or lazily via
/// [`BrightnessIndex::shared`], and pass references around.
#[derive(Clone)]
pub struct BrightnessIndex {
    codes: Vec<ColorCode>,
    offsets: [usize; LEVELS + 1],
}

static SHARED_INDEX: OnceLock<BrightnessIndex> = OnceLock::new();

impl BrightnessIndex {
    /// Index the full 24-bit RGB cube.
    pub fn build() -> Self {
        Self::partition(ColorCode::COUNT, |i| ColorCode::from_raw(i as u32))
    }

    /// Index an arbitrary set of codes, preserving their order within each
    /// bucket.
    ///
    /// Levels that no input code maps to are left empty; looking them up
    /// fails with [`IndexError::MissingBucket`].
    pub fn from_codes<I>(codes: I) -> Self
    where
        I: IntoIterator<Item = ColorCode>,
    {
        let input: Vec<ColorCode> = codes.into_iter().collect();
        Self::partition(input.len(), |i| input[i])
    }

    /// Process-wide full index.
    ///
    /// The first call builds the index on the calling thread, which takes a
    /// noticeable fraction of a second in release builds (several seconds in
    /// debug builds). Concurrent first callers block until it is ready.
    pub fn shared() -> &'static Self {
        SHARED_INDEX.get_or_init(Self::build)
    }

    fn partition<F>(count: usize, code_at: F) -> Self
    where
        F: Fn(usize) -> ColorCode,
    {
        let levels: Vec<u8> = (0..count)
            .map(|i| brightness_of_code(code_at(i)))
            .collect();

        let mut offsets = [0usize; LEVELS + 1];
        for &level in &levels {
            offsets[level as usize + 1] += 1;
        }
        for level in 0..LEVELS {
            offsets[level + 1] += offsets[level];
        }

        let mut cursor = offsets;
        let mut codes = vec![ColorCode::BLACK; count];
        for (i, &level) in levels.iter().enumerate() {
            let slot = &mut cursor[level as usize];
            codes[*slot] = code_at(i);
            *slot += 1;
        }

        Self { codes, offsets }
    }

    /// Ordered codes at `level`.
    ///
    /// # Errors
    /// - [`IndexError::LevelOutOfRange`] if `level > 255`
    /// - [`IndexError::MissingBucket`] if no code maps to `level`
    pub fn bucket_for(&self, level: usize) -> Result<&[ColorCode], IndexError> {
        let range = self.bucket_range(level)?;
        if range.is_empty() {
            return Err(IndexError::MissingBucket(level as u8));
        }
        Ok(&self.codes[range])
    }

    /// Union of the buckets `lo..=hi`, in level-ascending then
    /// within-bucket order.
    ///
    /// # Errors
    /// - [`IndexError::InvalidBand`] if `lo > hi`
    /// - [`IndexError::LevelOutOfRange`] if `hi > 255`
    /// - [`IndexError::MissingBucket`] for the first empty level in the band
    pub fn band(&self, lo: usize, hi: usize) -> Result<&[ColorCode], IndexError> {
        if lo > hi {
            return Err(IndexError::InvalidBand { lo, hi });
        }
        if hi >= LEVELS {
            return Err(IndexError::LevelOutOfRange(hi));
        }
        if let Some(level) = (lo..=hi).find(|&level| self.bucket_len(level) == 0) {
            return Err(IndexError::MissingBucket(level as u8));
        }
        Ok(&self.codes[self.offsets[lo]..self.offsets[hi + 1]])
    }

    /// Number of codes at `level` (0 for out-of-range levels)
    pub fn bucket_len(&self, level: usize) -> usize {
        self.bucket_range(level).map_or(0, |range| range.len())
    }

    /// Iterate `(level, codes)` for all 256 levels, including empty ones.
    pub fn levels(&self) -> impl Iterator<Item = (u8, &[ColorCode])> + '_ {
        (0..LEVELS).map(move |level| {
            let range = self.offsets[level]..self.offsets[level + 1];
            (level as u8, &self.codes[range])
        })
    }

    /// True if every level has at least one code.
    pub fn is_complete(&self) -> bool {
        (0..LEVELS).all(|level| self.bucket_len(level) > 0)
    }

    /// Total number of indexed codes
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    fn bucket_range(&self, level: usize) -> Result<Range<usize>, IndexError> {
        if level >= LEVELS {
            return Err(IndexError::LevelOutOfRange(level));
        }
        Ok(self.offsets[level]..self.offsets[level + 1])
    }
}

impl fmt::Debug for BrightnessIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let populated = (0..LEVELS)
            .filter(|&level| self.bucket_len(level) > 0)
            .count();
        f.debug_struct("BrightnessIndex")
            .field("codes", &self.codes.len())
            .field("populated_levels", &populated)
            .finish()
    }
}
