//! Memoized HSL conversion keyed by color code
//!
//! Entries are computed on first request and kept for the lifetime of the
//! cache. The key domain is bounded at 2^24 codes, so the cache never needs
//! eviction.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{OnceLock, PoisonError, RwLock};

use super::{ColorCode, Hsl};

type Converter = dyn Fn(ColorCode) -> Hsl + Send + Sync;

/// Hit/miss counters and current size of an [`HslCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Number of cached codes
    pub entries: usize,
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that ran the conversion
    pub misses: u64,
}

/// Thread-safe get-or-compute cache from [`ColorCode`] to [`Hsl`].
///
/// Two threads missing on the same code at once may both run the
/// conversion; the first stored value wins and both see the same triple.
pub struct HslCache {
    entries: RwLock<HashMap<ColorCode, Hsl>>,
    convert: Box<Converter>,
    hits: AtomicU64,
    misses: AtomicU64,
}

/// Process-wide cache instance
static GLOBAL_CACHE: OnceLock<HslCache> = OnceLock::new();

impl HslCache {
    /// Create an empty cache using [`Hsl::of`] as the conversion.
    pub fn new() -> Self {
        Self::with_converter(Hsl::of)
    }

    /// Create an empty cache with a custom conversion.
    ///
    /// # Example
    /// ```
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    /// use std::sync::Arc;
    /// use luma_index::{ColorCode, Hsl, HslCache};
    ///
    /// let calls = Arc::new(AtomicUsize::new(0));
    /// let counter = Arc::clone(&calls);
    /// let cache = HslCache::with_converter(move |code| {
    ///     counter.fetch_add(1, Ordering::SeqCst);
    ///     Hsl::of(code)
    /// });
    ///
    /// cache.get_or_compute(ColorCode::WHITE);
    /// cache.get_or_compute(ColorCode::WHITE);
    /// assert_eq!(calls.load(Ordering::SeqCst), 1);
    /// ```
    pub fn with_converter<F>(convert: F) -> Self
    where
        F: Fn(ColorCode) -> Hsl + Send + Sync + 'static,
    {
        Self {
            entries: RwLock::new(HashMap::new()),
            convert: Box::new(convert),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// The process-wide cache, created on first use.
    pub fn global() -> &'static Self {
        GLOBAL_CACHE.get_or_init(Self::new)
    }

    /// Return the cached triple for `code`, converting and storing it on
    /// first request.
    pub fn get_or_compute(&self, code: ColorCode) -> Hsl {
        let cached = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&code)
            .copied();

        if let Some(hsl) = cached {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return hsl;
        }

        let hsl = (self.convert)(code);
        self.misses.fetch_add(1, Ordering::Relaxed);

        *self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(code)
            .or_insert(hsl)
    }

    /// Number of cached codes
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

impl Default for HslCache {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HslCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.stats();
        f.debug_struct("HslCache")
            .field("entries", &stats.entries)
            .field("hits", &stats.hits)
            .field("misses", &stats.misses)
            .finish_non_exhaustive()
    }
}
