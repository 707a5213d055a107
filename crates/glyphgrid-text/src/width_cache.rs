#![forbid(unsafe_code)]

//! LRU cache over [`string_width`](crate::string_width).
//!
//! Layout code measures the same labels every frame; the cache keeps their
//! widths keyed by a 64-bit FxHash of the text. Unmeasurable results (`None`)
//! are cached too.
//!
//! # Example
//! ```
//! use glyphgrid_text::WidthCache;
//!
//! let mut cache = WidthCache::new(64);
//! assert_eq!(cache.get_or_compute("日本"), Some(4));
//! assert_eq!(cache.get_or_compute("日本"), Some(4));
//! assert_eq!(cache.get_or_compute("bell\x07"), None);
//!
//! let stats = cache.stats();
//! assert_eq!(stats.hits, 1);
//! assert_eq!(stats.misses, 2);
//! ```

use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;

use lru::LruCache;
use rustc_hash::FxHasher;

/// Default cache capacity.
pub const DEFAULT_CACHE_CAPACITY: usize = 4096;

/// Hit/miss counters and occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Current number of entries.
    pub size: usize,
    pub capacity: usize,
}

impl CacheStats {
    /// Fraction of lookups served from the cache (0.0 to 1.0).
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Width memo for repeated strings.
///
/// Keys are hashes, not the strings themselves; two strings colliding on a
/// 64-bit FxHash would share an entry. Not thread-safe.
#[derive(Debug)]
pub struct WidthCache {
    cache: LruCache<u64, Option<usize>>,
    hits: u64,
    misses: u64,
}

#[inline]
fn non_zero(capacity: usize) -> NonZeroUsize {
    NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN)
}

impl WidthCache {
    /// Create a cache holding up to `capacity` widths (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            cache: LruCache::new(non_zero(capacity)),
            hits: 0,
            misses: 0,
        }
    }

    /// Width of `text`, computed on first request.
    #[inline]
    pub fn get_or_compute(&mut self, text: &str) -> Option<usize> {
        self.get_or_compute_with(text, crate::string_width)
    }

    /// Like [`get_or_compute`](Self::get_or_compute) with a caller-supplied
    /// measure, for terminals with their own width rules.
    pub fn get_or_compute_with<F>(&mut self, text: &str, compute: F) -> Option<usize>
    where
        F: FnOnce(&str) -> Option<usize>,
    {
        let hash = hash_text(text);
        if let Some(&width) = self.cache.get(&hash) {
            self.hits += 1;
            return width;
        }

        self.misses += 1;
        let width = compute(text);
        self.cache.put(hash, width);
        width
    }

    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.cache.contains(&hash_text(text))
    }

    /// Cached width without computing or touching LRU order.
    ///
    /// The outer `Option` is cache presence, the inner one measurability.
    #[must_use]
    pub fn peek(&self, text: &str) -> Option<Option<usize>> {
        self.cache.peek(&hash_text(text)).copied()
    }

    /// Warm the cache without counting a miss.
    pub fn preload<'t>(&mut self, texts: impl IntoIterator<Item = &'t str>) {
        for text in texts {
            let hash = hash_text(text);
            if !self.cache.contains(&hash) {
                self.cache.put(hash, crate::string_width(text));
            }
        }
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }

    pub fn reset_stats(&mut self) {
        self.hits = 0;
        self.misses = 0;
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.cache.len(),
            capacity: self.cache.cap().get(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Change capacity, evicting least recently used entries if shrinking.
    pub fn resize(&mut self, capacity: usize) {
        self.cache.resize(non_zero(capacity));
    }
}

impl Default for WidthCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

#[inline]
fn hash_text(text: &str) -> u64 {
    let mut hasher = FxHasher::default();
    text.hash(&mut hasher);
    hasher.finish()
}
