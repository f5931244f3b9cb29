//! Property-based tests for distance metric mathematical properties.
//!
//! These tests verify that every strategy satisfies the requirements of a
//! distance metric and that all strategies agree:
//!
//! 1. **Identity**: d(x, x) = 0, and d(x, y) = 0 implies x = y
//! 2. **Symmetry**: d(x, y) = d(y, x)
//! 3. **Triangle inequality**: d(x, z) <= d(x, y) + d(y, z)
//! 4. **Strategy equivalence**: banded == baseline for every pair
//! 5. **Cache transparency**: memoized == unwrapped for every pair

use proptest::prelude::*;
use wagner_fischer::cache::Memoized;
use wagner_fischer::distance::{
    banded_distance, standard_distance, Banded, Baseline, DistanceEngine, EditDistance,
};

// String generators
fn arb_string() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{0,20}").unwrap()
}

/// Small alphabet, so random pairs share many characters and land anywhere
/// between identical and disjoint.
fn arb_dense_string(max_len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!['a', 'b', 'c']), 0..=max_len)
        .prop_map(|chars| chars.into_iter().collect())
}

fn arb_unicode_string() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 0..20).prop_map(|chars| chars.into_iter().collect())
}

/// A string of exactly `len` chars over a small alphabet.
fn arb_fixed_len(len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!['a', 'b', 'c', 'd']), len)
        .prop_map(|chars| chars.into_iter().collect())
}

fn every_engine() -> Vec<DistanceEngine> {
    wagner_fischer::distance::Strategy::ALL
        .into_iter()
        .map(|strategy| strategy.build())
        .collect()
}

// ============================================================================
// Metric properties, every strategy
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn distance_identity(a in arb_string()) {
        for mut engine in every_engine() {
            prop_assert_eq!(engine.distance(&a, &a), 0, "{} d(a, a) != 0", engine.name());
        }
    }

    #[test]
    fn distance_indiscernible(a in arb_dense_string(8), b in arb_dense_string(8)) {
        for mut engine in every_engine() {
            if engine.distance(&a, &b) == 0 {
                prop_assert_eq!(&a, &b, "{}: zero distance for different strings", engine.name());
            }
        }
    }

    #[test]
    fn distance_symmetric(a in arb_string(), b in arb_string()) {
        for mut engine in every_engine() {
            let d_ab = engine.distance(&a, &b);
            let d_ba = engine.distance(&b, &a);
            prop_assert_eq!(d_ab, d_ba, "{}: d(a,b) != d(b,a)", engine.name());
        }
    }

    #[test]
    fn distance_triangle_inequality(
        a in arb_dense_string(12),
        b in arb_dense_string(12),
        c in arb_dense_string(12)
    ) {
        for mut engine in every_engine() {
            let d_ac = engine.distance(&a, &c);
            let d_ab = engine.distance(&a, &b);
            let d_bc = engine.distance(&b, &c);

            prop_assert!(
                d_ac <= d_ab + d_bc,
                "{}: triangle inequality violated: d({}, {}) = {} > {} + {}",
                engine.name(), a, c, d_ac, d_ab, d_bc
            );
        }
    }

    #[test]
    fn distance_bounded_by_longer_length(a in arb_string(), b in arb_string()) {
        let longer = a.chars().count().max(b.chars().count());
        let length_gap = a.chars().count().abs_diff(b.chars().count());
        let d = banded_distance(&a, &b);
        prop_assert!(d <= longer);
        prop_assert!(d >= length_gap);
    }
}

// ============================================================================
// Banded vs baseline
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    #[test]
    fn banded_matches_baseline_dense(a in arb_dense_string(40), b in arb_dense_string(40)) {
        prop_assert_eq!(
            banded_distance(&a, &b),
            standard_distance(&a, &b),
            "banded and baseline disagree on '{}' vs '{}'", a, b
        );
    }

    #[test]
    fn banded_matches_baseline_sparse(a in arb_string(), b in arb_string()) {
        prop_assert_eq!(banded_distance(&a, &b), standard_distance(&a, &b));
    }

    #[test]
    fn banded_matches_baseline_unicode(a in arb_unicode_string(), b in arb_unicode_string()) {
        prop_assert_eq!(banded_distance(&a, &b), standard_distance(&a, &b));
    }

    #[test]
    fn banded_matches_baseline_skewed(
        short in arb_dense_string(4),
        long in prop::string::string_regex("[a-d]{10,40}").unwrap()
    ) {
        prop_assert_eq!(banded_distance(&short, &long), standard_distance(&short, &long));
        prop_assert_eq!(banded_distance(&long, &short), standard_distance(&long, &short));
    }
}

// ============================================================================
// Closed forms: shorter string of length 0, 1, 2
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn closed_form_empty(long in arb_dense_string(10)) {
        prop_assert_eq!(banded_distance("", &long), standard_distance("", &long));
        prop_assert_eq!(banded_distance(&long, ""), standard_distance(&long, ""));
    }

    #[test]
    fn closed_form_one_char(short in arb_fixed_len(1), long in arb_dense_string(10)) {
        prop_assert_eq!(banded_distance(&short, &long), standard_distance(&short, &long));
        prop_assert_eq!(banded_distance(&long, &short), standard_distance(&long, &short));
    }

    #[test]
    fn closed_form_two_chars(short in arb_fixed_len(2), long in arb_dense_string(10)) {
        prop_assert_eq!(
            banded_distance(&short, &long),
            standard_distance(&short, &long),
            "closed form disagrees on '{}' vs '{}'", short, long
        );
        prop_assert_eq!(banded_distance(&long, &short), standard_distance(&long, &short));
    }
}

// ============================================================================
// Memoization
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn memoized_is_transparent(pairs in prop::collection::vec((arb_dense_string(10), arb_dense_string(10)), 1..20)) {
        let mut baseline = Memoized::new(Baseline);
        let mut banded = Memoized::new(Banded);

        // Twice, so the second pass is answered from the cache.
        for _ in 0..2 {
            for (a, b) in &pairs {
                let expected = standard_distance(a, b);
                prop_assert_eq!(baseline.distance(a, b), expected);
                prop_assert_eq!(banded.distance(b, a), expected);
            }
        }

        prop_assert!(baseline.stats().entries <= pairs.len());
        prop_assert_eq!(baseline.stats().misses as usize, baseline.stats().entries);
    }
}
