//! Edit distance strategies.
//!
//! Every strategy computes the same number, the Levenshtein distance between
//! two strings (unit-cost insertions, deletions and substitutions over
//! `char`s), and differs only in how much work it does to get there:
//!
//! - **Baseline** ([`Baseline`], [`standard_distance`]): full Wagner-Fischer
//!   table, two rows of memory.
//! - **Banded** ([`Banded`], [`banded_distance`]): closed forms for very short
//!   strings, otherwise a single-row DP restricted to the diagonals that can
//!   still lie on an optimal alignment.
//! - **Memoized** ([`crate::cache::Memoized`]): wraps either of the above and
//!   remembers results per unordered string pair.
//!
//! All strategies implement [`EditDistance`], so callers pick one explicitly
//! (see [`Strategy`]) and hand it to the ranker.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use smallvec::SmallVec;

use crate::cache::{CacheStats, Memoized};

mod banded;
mod baseline;

pub use banded::{banded_distance, Banded};
pub use baseline::{standard_distance, Baseline};

/// Characters of a decoded string. Most dictionary words fit inline.
pub(crate) type Chars = SmallVec<[char; 32]>;

/// A distance strategy.
///
/// Implementations must be symmetric (`distance(a, b) == distance(b, a)`) and
/// return `0` exactly when the strings are equal. Taking `&mut self` lets
/// stateful strategies such as [`Memoized`] keep their cache without interior
/// locking; stateless strategies simply ignore it.
pub trait EditDistance {
    /// Levenshtein distance between `source` and `target`.
    fn distance(&mut self, source: &str, target: &str) -> usize;

    /// Short, stable name used in reports.
    fn name(&self) -> &'static str;
}

impl<D: EditDistance + ?Sized> EditDistance for &mut D {
    fn distance(&mut self, source: &str, target: &str) -> usize {
        (**self).distance(source, target)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<D: EditDistance + ?Sized> EditDistance for Box<D> {
    fn distance(&mut self, source: &str, target: &str) -> usize {
        (**self).distance(source, target)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Orders two character slices so the shorter one comes first.
///
/// Equal lengths keep their order; the distance does not depend on it.
#[inline(always)]
pub(crate) fn shorter_first<'a>(a: &'a [char], b: &'a [char]) -> (&'a [char], &'a [char]) {
    if a.len() <= b.len() {
        (a, b)
    } else {
        (b, a)
    }
}

/// An unordered pair of strings in canonical order, used as a cache key.
///
/// The shorter string (in `char`s) is always `first`. Equal-length strings are
/// ordered lexicographically, so `(a, b)` and `(b, a)` always produce the same
/// key.
#[derive(Clone, Debug)]
pub struct SymmetricPair {
    first: Box<str>,
    second: Box<str>,
}

impl SymmetricPair {
    /// Builds the canonical pair for `a` and `b`.
    #[inline(always)]
    pub fn new(a: &str, b: &str) -> Self {
        let by_length = a.chars().count().cmp(&b.chars().count());
        match by_length.then_with(|| a.cmp(b)) {
            Ordering::Less | Ordering::Equal => Self {
                first: Box::from(a),
                second: Box::from(b),
            },
            Ordering::Greater => Self {
                first: Box::from(b),
                second: Box::from(a),
            },
        }
    }

    /// The shorter string of the pair.
    pub fn first(&self) -> &str {
        &self.first
    }

    /// The longer string of the pair.
    pub fn second(&self) -> &str {
        &self.second
    }
}

impl PartialEq for SymmetricPair {
    fn eq(&self, other: &Self) -> bool {
        self.first == other.first && self.second == other.second
    }
}

impl Eq for SymmetricPair {}

impl Hash for SymmetricPair {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.first.hash(state);
        self.second.hash(state);
    }
}

/// The distance strategies a caller can choose from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Strategy {
    /// Full two-row Wagner-Fischer table.
    Baseline,

    /// Closed forms plus diagonal-band DP.
    #[default]
    Banded,

    /// Baseline behind a memo cache.
    BaselineCached,

    /// Banded behind a memo cache.
    BandedCached,
}

impl Strategy {
    /// Every strategy, baseline first.
    pub const ALL: [Strategy; 4] = [
        Strategy::Baseline,
        Strategy::Banded,
        Strategy::BaselineCached,
        Strategy::BandedCached,
    ];

    /// Kebab-case name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Baseline => "baseline",
            Strategy::Banded => "banded",
            Strategy::BaselineCached => "baseline-cached",
            Strategy::BandedCached => "banded-cached",
        }
    }

    /// Whether the strategy memoizes results.
    pub fn is_cached(&self) -> bool {
        matches!(self, Strategy::BaselineCached | Strategy::BandedCached)
    }

    /// Builds a fresh engine for this strategy. Cached variants start with an
    /// empty cache owned by the engine.
    pub fn build(self) -> DistanceEngine {
        match self {
            Strategy::Baseline => DistanceEngine::Baseline(Baseline),
            Strategy::Banded => DistanceEngine::Banded(Banded),
            Strategy::BaselineCached => DistanceEngine::BaselineCached(Memoized::new(Baseline)),
            Strategy::BandedCached => DistanceEngine::BandedCached(Memoized::new(Banded)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Error returned when parsing an unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strategy '{0}' (expected baseline, banded, baseline-cached or banded-cached)")]
pub struct ParseStrategyError(String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseStrategyError(s.to_string()))
    }
}

/// An owned, ready-to-use instance of one of the [`Strategy`] variants.
#[derive(Debug)]
pub enum DistanceEngine {
    /// See [`Strategy::Baseline`].
    Baseline(Baseline),
    /// See [`Strategy::Banded`].
    Banded(Banded),
    /// See [`Strategy::BaselineCached`].
    BaselineCached(Memoized<Baseline>),
    /// See [`Strategy::BandedCached`].
    BandedCached(Memoized<Banded>),
}

impl DistanceEngine {
    /// The strategy this engine was built from.
    pub fn strategy(&self) -> Strategy {
        match self {
            DistanceEngine::Baseline(_) => Strategy::Baseline,
            DistanceEngine::Banded(_) => Strategy::Banded,
            DistanceEngine::BaselineCached(_) => Strategy::BaselineCached,
            DistanceEngine::BandedCached(_) => Strategy::BandedCached,
        }
    }

    /// Cache statistics, for the cached variants.
    pub fn cache_stats(&self) -> Option<CacheStats> {
        match self {
            DistanceEngine::BaselineCached(memo) => Some(memo.stats()),
            DistanceEngine::BandedCached(memo) => Some(memo.stats()),
            _ => None,
        }
    }
}

impl From<Strategy> for DistanceEngine {
    fn from(strategy: Strategy) -> Self {
        strategy.build()
    }
}

impl EditDistance for DistanceEngine {
    fn distance(&mut self, source: &str, target: &str) -> usize {
        match self {
            DistanceEngine::Baseline(d) => d.distance(source, target),
            DistanceEngine::Banded(d) => d.distance(source, target),
            DistanceEngine::BaselineCached(d) => d.distance(source, target),
            DistanceEngine::BandedCached(d) => d.distance(source, target),
        }
    }

    fn name(&self) -> &'static str {
        self.strategy().name()
    }
}
