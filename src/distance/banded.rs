//! Branch-pruned Wagner-Fischer.
//!
//! Strings are canonicalized so `short` (n chars) is no longer than `long`
//! (m chars). The distance is then at most `m`, and an alignment path that
//! passes through cell `(i, j)` costs at least
//!
//! ```text
//! |j - i| + |(m - j) - (n - i)|
//! ```
//!
//! because it must still make up the length difference on both sides of the
//! cell. Writing `k = j - i` for the diagonal and `skew = m - n`, that bound
//! exceeds `m` exactly when `k < -floor(n / 2)` or `k > floor((2m - n) / 2)`.
//! Those diagonals can never carry an optimal path, so each row only visits the
//! band in between. The result is the exact distance, not an approximation.
//!
//! Shorter strings of length 0, 1 and 2 are answered in closed form.

use super::{shorter_first, Chars, EditDistance};

/// The banded strategy: closed forms for tiny inputs, diagonal-band DP
/// otherwise.
///
/// Time is O(n * (m - n/2)) and extra memory O(m) for a shorter string of `n`
/// and a longer string of `m` characters; roughly half of the baseline table is
/// skipped for similar-length words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Banded;

impl EditDistance for Banded {
    #[inline]
    fn distance(&mut self, source: &str, target: &str) -> usize {
        banded_distance(source, target)
    }

    fn name(&self) -> &'static str {
        "banded"
    }
}

/// Compute the Levenshtein distance between two strings, skipping the cells
/// that cannot lie on an optimal alignment.
///
/// Always equal to [`standard_distance`](super::standard_distance).
///
/// # Example
///
/// ```rust
/// use wagner_fischer::distance::banded_distance;
///
/// assert_eq!(banded_distance("kitten", "sitting"), 3);
/// assert_eq!(banded_distance("ab", "ba"), 2);
/// assert_eq!(banded_distance("a", "abcde"), 4);
/// ```
pub fn banded_distance(source: &str, target: &str) -> usize {
    let source_chars: Chars = source.chars().collect();
    let target_chars: Chars = target.chars().collect();
    let (short, long) = shorter_first(&source_chars, &target_chars);

    match short.len() {
        0 => long.len(),
        1 => single_char_distance(short[0], long),
        2 => two_char_distance(short[0], short[1], long),
        _ => band_distance(short, long),
    }
}

/// One character against `long`: keep it if it occurs, insert the rest.
#[inline]
fn single_char_distance(c: char, long: &[char]) -> usize {
    long.len() - usize::from(long.contains(&c))
}

/// Two characters `[a, b]` against `long` (at least two chars).
///
/// Both short characters are substituted or kept in order, the other
/// `long.len() - 2` characters are inserted, so the distance is `long.len()`
/// minus the number of characters that can be kept in place:
/// - two, if `b` occurs after the first `a`;
/// - one, if `a` occurs with room after it, or `b` occurs with room before it;
/// - otherwise none.
#[inline]
fn two_char_distance(a: char, b: char, long: &[char]) -> usize {
    let len = long.len();
    let first_a = long.iter().position(|&c| c == a);

    if let Some(p) = first_a {
        if long[p + 1..].contains(&b) {
            return len - 2;
        }
    }

    let keep_a = matches!(first_a, Some(p) if p + 2 <= len);
    let keep_b = long[1..].contains(&b);
    if keep_a || keep_b {
        len - 1
    } else {
        len
    }
}

/// Banded DP for `short.len() >= 1`, one buffer row of `long.len() + 1` cells.
fn band_distance(short: &[char], long: &[char]) -> usize {
    let n = short.len();
    let m = long.len();
    debug_assert!(n <= m);

    // Cells across a band edge read as this; larger than any real distance.
    let unreachable = m + 1;

    // Diagonal offsets (k = j - i) kept in every row. below <= 0 <= m - n <= above.
    let below = n / 2;
    let above = (2 * m - n) / 2;

    let mut buf = vec![unreachable; m + 1];
    for (j, cell) in buf.iter_mut().enumerate().take(above.min(m) + 1) {
        *cell = j;
    }

    for (row, &sc) in short.iter().enumerate() {
        let i = row + 1;
        let lo = i.saturating_sub(below);
        let hi = (i + above).min(m);

        let (mut diag, mut left, start) = if lo == 0 {
            let diag = buf[0];
            buf[0] = i;
            (diag, i, 1)
        } else {
            (buf[lo - 1], unreachable, lo)
        };

        for j in start..=hi {
            let top = buf[j];
            let cost = usize::from(sc != long[j - 1]);
            let cell = (diag + cost).min(top + 1).min(left + 1);
            buf[j] = cell;
            diag = top;
            left = cell;
        }

        // The next row reaches one column further; it must not see a stale value.
        if hi < m {
            buf[hi + 1] = unreachable;
        }
    }

    buf[m]
}
