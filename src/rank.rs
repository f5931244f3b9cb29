//! Top-K ranking of dictionary words by edit distance.

use std::fmt;

use crate::distance::EditDistance;

/// Number of candidates [`rank`] returns.
pub const DEFAULT_LIMIT: usize = 10;

/// A dictionary word and its distance from the query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate {
    /// The dictionary word
    pub term: String,
    /// Edit distance from the query
    pub distance: usize,
}

impl Candidate {
    /// Creates a candidate.
    pub fn new(term: impl Into<String>, distance: usize) -> Self {
        Self {
            term: term.into(),
            distance,
        }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (d={})", self.term, self.distance)
    }
}

/// Returns the [`DEFAULT_LIMIT`] dictionary words closest to `query`.
///
/// See [`rank_with_limit`].
///
/// # Example
///
/// ```rust
/// use wagner_fischer::distance::Banded;
/// use wagner_fischer::rank::rank;
///
/// let dictionary = ["world", "word", "warlord", "lord", "wrist"];
/// let results = rank("wrlod", &dictionary, &mut Banded);
///
/// assert_eq!(results[0].term, "world");
/// assert_eq!(results[0].distance, 2);
/// ```
pub fn rank<S, D>(query: &str, dictionary: &[S], metric: &mut D) -> Vec<Candidate>
where
    S: AsRef<str>,
    D: EditDistance + ?Sized,
{
    rank_with_limit(query, dictionary, metric, DEFAULT_LIMIT)
}

/// Returns up to `limit` dictionary words closest to `query`, nearest first.
///
/// Every word is scored once, in dictionary order, with `metric`. Words are
/// taken as given: duplicates and case are preserved. The sort is stable and
/// keyed on distance alone, so equally distant words keep their dictionary
/// order. Costs one distance computation per word plus an O(w log w) sort, and
/// holds every scored word until the final truncation.
pub fn rank_with_limit<S, D>(
    query: &str,
    dictionary: &[S],
    metric: &mut D,
    limit: usize,
) -> Vec<Candidate>
where
    S: AsRef<str>,
    D: EditDistance + ?Sized,
{
    let mut candidates: Vec<Candidate> = dictionary
        .iter()
        .map(|word| {
            let word = word.as_ref();
            Candidate::new(word, metric.distance(query, word))
        })
        .collect();

    candidates.sort_by_key(|candidate| candidate.distance);
    candidates.truncate(limit);
    candidates
}
