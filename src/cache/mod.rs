//! Memoization for distance strategies.
//!
//! [`Memoized`] wraps any [`EditDistance`] strategy and remembers each result
//! under the canonical [`SymmetricPair`] of its inputs, so `(a, b)` and
//! `(b, a)` share one entry.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               Memoized<D>                    │
//! │  ┌────────────┬──────────────────────────┐  │
//! │  │  inner: D  │  cache: MemoCache         │  │
//! │  │            │  FxHashMap<Pair, usize>   │  │
//! │  └────────────┴──────────────────────────┘  │
//! └─────────────────────────────────────────────┘
//!                      │ miss
//!                      ▼
//!        Baseline / Banded / any EditDistance
//! ```
//!
//! # Limitations
//!
//! The cache never evicts: it grows by one entry per distinct pair for as long
//! as the wrapper lives, and each entry owns copies of both strings. Create one
//! wrapper per session or per benchmark run and drop it when done.
//!
//! There is no internal locking. A wrapper needs `&mut` access, so sharing one
//! across threads requires the caller's own synchronization; one wrapper per
//! thread is usually simpler.
//!
//! # Example
//!
//! ```rust
//! use wagner_fischer::cache::Memoized;
//! use wagner_fischer::distance::{Banded, EditDistance};
//!
//! let mut memo = Memoized::new(Banded);
//! assert_eq!(memo.distance("wrlod", "world"), 2);
//! assert_eq!(memo.distance("world", "wrlod"), 2);
//!
//! let stats = memo.stats();
//! assert_eq!((stats.entries, stats.hits, stats.misses), (1, 1, 1));
//! ```

use rustc_hash::FxHashMap;

use crate::distance::{EditDistance, SymmetricPair};

/// Distance results keyed by canonical string pair, with hit/miss counters.
#[derive(Debug, Default)]
pub struct MemoCache {
    entries: FxHashMap<SymmetricPair, usize>,
    hits: u64,
    misses: u64,
}

impl MemoCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a pair, counting the hit or miss.
    pub fn get(&mut self, key: &SymmetricPair) -> Option<usize> {
        let found = self.entries.get(key).copied();
        if found.is_some() {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        found
    }

    /// Stores a result. Existing entries are never overwritten with a different
    /// value because every strategy is deterministic.
    pub fn insert(&mut self, key: SymmetricPair, distance: usize) {
        self.entries.insert(key, distance);
    }

    /// Whether a pair is cached, without touching the counters.
    pub fn contains(&self, key: &SymmetricPair) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of cached pairs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry and resets the counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    /// Snapshot of size and counters.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits,
            misses: self.misses,
        }
    }
}

/// Size and hit/miss counts of a [`MemoCache`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Cached pairs.
    pub entries: usize,
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that fell through to the wrapped strategy.
    pub misses: u64,
}

impl CacheStats {
    /// Fraction of lookups answered from the cache, `0.0` before any lookup.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// A strategy wrapped with its own memo cache.
///
/// The cache belongs to this wrapper alone, so caches populated by different
/// strategies are never mixed.
#[derive(Debug, Default)]
pub struct Memoized<D> {
    inner: D,
    cache: MemoCache,
}

impl<D: EditDistance> Memoized<D> {
    /// Wraps `inner` with an empty cache.
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            cache: MemoCache::new(),
        }
    }

    /// The wrapped strategy.
    pub fn inner(&self) -> &D {
        &self.inner
    }

    /// The wrapped strategy, mutably. Calls made through it bypass the cache.
    pub fn inner_mut(&mut self) -> &mut D {
        &mut self.inner
    }

    /// Unwraps the strategy, dropping the cache.
    pub fn into_inner(self) -> D {
        self.inner
    }

    /// The cache itself.
    pub fn cache(&self) -> &MemoCache {
        &self.cache
    }

    /// Snapshot of cache size and counters.
    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Empties the cache.
    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

impl<D: EditDistance> EditDistance for Memoized<D> {
    fn distance(&mut self, source: &str, target: &str) -> usize {
        let key = SymmetricPair::new(source, target);
        if let Some(distance) = self.cache.get(&key) {
            return distance;
        }

        // Canonical order, so the wrapped strategy sees the pair the same way
        // no matter which order the caller used.
        let distance = self.inner.distance(key.first(), key.second());
        self.cache.insert(key, distance);
        distance
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}
