//! # wagner-fischer
//!
//! Levenshtein distance strategies and top-K ranking of dictionary words.
//!
//! Three strategies compute the same distance at different costs:
//!
//! - [`Baseline`](distance::Baseline): the full Wagner-Fischer table.
//! - [`Banded`](distance::Banded): closed forms for short strings and a DP
//!   restricted to the diagonals an optimal alignment can use.
//! - [`Memoized`](cache::Memoized): either of the above behind a per-instance
//!   cache keyed by the unordered string pair.
//!
//! The [`rank`](rank::rank) function scores every dictionary word with a chosen
//! strategy and keeps the ten closest.
//!
//! ## Example
//!
//! ```rust
//! use wagner_fischer::prelude::*;
//!
//! let dictionary = ["world", "word", "warlord", "lord", "wrist"];
//! let mut engine = Strategy::BandedCached.build();
//!
//! let results = rank("wrlod", &dictionary, &mut engine);
//! assert_eq!(results[0], Candidate::new("world", 2));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cache;
pub mod dictionary;
pub mod distance;
pub mod rank;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::cache::{CacheStats, Memoized};
    pub use crate::dictionary::{load_dictionary, read_dictionary, DictionaryError};
    pub use crate::distance::{
        banded_distance, standard_distance, Banded, Baseline, DistanceEngine, EditDistance,
        Strategy, SymmetricPair,
    };
    pub use crate::rank::{rank, rank_with_limit, Candidate, DEFAULT_LIMIT};
}
