//! Full-table Wagner-Fischer.

use super::{shorter_first, Chars, EditDistance};

/// The baseline strategy: every cell of the DP table is computed.
///
/// Time is O(n * m) and extra memory O(min(n, m)) for strings of `n` and `m`
/// characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Baseline;

impl EditDistance for Baseline {
    #[inline]
    fn distance(&mut self, source: &str, target: &str) -> usize {
        standard_distance(source, target)
    }

    fn name(&self) -> &'static str {
        "baseline"
    }
}

/// Compute the Levenshtein distance between two strings with the full
/// Wagner-Fischer table.
///
/// # Example
///
/// ```rust
/// use wagner_fischer::distance::standard_distance;
///
/// assert_eq!(standard_distance("kitten", "sitting"), 3);
/// assert_eq!(standard_distance("wrlod", "world"), 2);
/// assert_eq!(standard_distance("", "abc"), 3);
/// ```
pub fn standard_distance(source: &str, target: &str) -> usize {
    let source_chars: Chars = source.chars().collect();
    let target_chars: Chars = target.chars().collect();
    table_distance(&source_chars, &target_chars)
}

pub(crate) fn table_distance(a: &[char], b: &[char]) -> usize {
    // Rows run over the longer string so a row is as short as possible.
    let (short, long) = shorter_first(a, b);
    let n = short.len();

    let mut prev_row: Vec<usize> = (0..=n).collect();
    let mut curr_row = vec![0; n + 1];

    for (i, &lc) in long.iter().enumerate() {
        curr_row[0] = i + 1;

        for j in 1..=n {
            let cost = usize::from(short[j - 1] != lc);

            curr_row[j] = (prev_row[j] + 1) // deletion
                .min(curr_row[j - 1] + 1) // insertion
                .min(prev_row[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}
