//! Binary search and its textbook variations.
//!
//! # Strategies
//!
//! | Function | Strategy |
//! |----------|----------|
//! | [`binary_search_iterative`] | Classic three-way compare loop |
//! | [`binary_search_recursive`] | Same, written recursively |
//! | [`lower_bound`] | Branchless halving, first index with `values[i] >= x` |
//! | [`first_occurrence`] / [`last_occurrence`] | Keep searching left / right after a hit |
//! | [`search_unbounded`] | Exponential probe for an upper bound, then binary search |
//! | [`search_rotated`] | Decide which half is sorted at every step |
//!
//! # References
//!
//! - [Binary search chapter](https://en.algorithmica.org/hpc/data-structures/binary-search/)

use std::cmp::Ordering;

/// Returns the index of some element equal to `needle`.
pub fn binary_search_iterative<T: Ord>(values: &[T], needle: &T) -> Option<usize> {
    let (mut lo, mut hi) = (0usize, values.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match values[mid].cmp(needle) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }
    None
}

pub fn binary_search_recursive<T: Ord>(values: &[T], needle: &T) -> Option<usize> {
    fn go<T: Ord>(values: &[T], needle: &T, lo: usize, hi: usize) -> Option<usize> {
        if lo >= hi {
            return None;
        }
        let mid = lo + (hi - lo) / 2;
        match values[mid].cmp(needle) {
            Ordering::Equal => Some(mid),
            Ordering::Less => go(values, needle, mid + 1, hi),
            Ordering::Greater => go(values, needle, lo, mid),
        }
    }
    go(values, needle, 0, values.len())
}

/// First index `i` with `values[i] >= needle`, or `values.len()`.
///
/// Uses arithmetic selection for the midpoint compare to avoid a data-dependent
/// branch.
pub fn lower_bound<T: Ord>(values: &[T], needle: &T) -> usize {
    if values.is_empty() {
        return 0;
    }

    let mut base = 0usize;
    let mut len = values.len();
    while len > 1 {
        let half = len / 2;
        let mid = base + half - 1;
        // SAFETY: Loop invariant: base + len <= values.len()
        // Since len > 1 and half = len/2, we have half >= 1
        // So mid = base + half - 1 < base + len <= values.len()
        let cmp = unsafe { values.get_unchecked(mid) < needle };
        base += cmp as usize * half;
        len -= half;
    }

    // SAFETY: base < values.len() because base + len <= values.len() and len >= 1
    base + unsafe { values.get_unchecked(base) < needle } as usize
}

/// Index of the first element equal to `needle`.
pub fn first_occurrence<T: Ord>(values: &[T], needle: &T) -> Option<usize> {
    let idx = lower_bound(values, needle);
    (idx < values.len() && values[idx] == *needle).then_some(idx)
}

/// Index of the last element equal to `needle`.
pub fn last_occurrence<T: Ord>(values: &[T], needle: &T) -> Option<usize> {
    let (mut lo, mut hi) = (0usize, values.len());
    let mut found = None;
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match values[mid].cmp(needle) {
            Ordering::Greater => hi = mid,
            Ordering::Less => lo = mid + 1,
            Ordering::Equal => {
                found = Some(mid);
                lo = mid + 1;
            }
        }
    }
    found
}

pub fn count_occurrences<T: Ord>(values: &[T], needle: &T) -> usize {
    match (first_occurrence(values, needle), last_occurrence(values, needle)) {
        (Some(first), Some(last)) => last - first + 1,
        _ => 0,
    }
}

/// Number of ones in a non-decreasing 0/1 slice.
pub fn count_ones_sorted(bits: &[u8]) -> usize {
    bits.len() - lower_bound(bits, &1)
}

/// `floor(sqrt(n))` by binary search on the answer.
pub fn floor_sqrt(n: u64) -> u64 {
    let (mut lo, mut hi) = (0u64, n.min(u32::MAX as u64) + 1);
    // Invariant: lo² <= n < hi².
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if mid * mid <= n {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    lo
}

/// Exponential search: doubles a probe index until it passes `needle`, then
/// binary searches the last doubling interval. Runs in O(log p) where `p` is
/// the answer's position, so it suits inputs whose length is unknown.
pub fn search_unbounded<T: Ord>(values: &[T], needle: &T) -> Option<usize> {
    if values.is_empty() {
        return None;
    }
    let mut bound = 1usize;
    while bound < values.len() && values[bound] < *needle {
        bound *= 2;
    }
    let lo = bound / 2;
    let hi = (bound + 1).min(values.len());
    first_occurrence(&values[lo..hi], needle).map(|i| lo + i)
}

/// Search in a sorted array of distinct values that has been rotated at an
/// unknown pivot.
pub fn search_rotated<T: Ord>(values: &[T], needle: &T) -> Option<usize> {
    let (mut lo, mut hi) = (0usize, values.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if values[mid] == *needle {
            return Some(mid);
        }
        if values[lo] <= values[mid] {
            // [lo, mid] is sorted.
            if values[lo] <= *needle && *needle < values[mid] {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        } else {
            // [mid, hi) is sorted.
            if values[mid] < *needle && *needle <= values[hi - 1] {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
    }
    None
}

/// Index of some element not smaller than its neighbours.
pub fn find_peak<T: Ord>(values: &[T]) -> Option<usize> {
    if values.is_empty() {
        return None;
    }
    let (mut lo, mut hi) = (0usize, values.len() - 1);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if values[mid] < values[mid + 1] {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    Some(lo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn occurrences_known_cases() {
        let values = [1, 10, 10, 10, 20, 20, 40];
        assert_eq!(first_occurrence(&values, &10), Some(1));
        assert_eq!(last_occurrence(&values, &10), Some(3));
        assert_eq!(count_occurrences(&values, &20), 2);
        assert_eq!(count_occurrences(&values, &15), 0);
        assert_eq!(lower_bound(&values, &50), 7);
        assert_eq!(count_ones_sorted(&[0, 0, 1, 1, 1]), 3);
        assert_eq!(count_ones_sorted(&[]), 0);
    }

    #[test]
    fn sqrt_cases() {
        for (n, expected) in [(0, 0), (1, 1), (3, 1), (4, 2), (10, 3), (99, 9), (100, 10)] {
            assert_eq!(floor_sqrt(n), expected, "n={n}");
        }
        assert_eq!(floor_sqrt(u64::MAX), u32::MAX as u64);
    }

    #[test]
    fn rotated_and_peak_cases() {
        let rotated = [10, 20, 40, 60, 5, 8];
        assert_eq!(search_rotated(&rotated, &5), Some(4));
        assert_eq!(search_rotated(&rotated, &40), Some(2));
        assert_eq!(search_rotated(&rotated, &30), None);
        assert_eq!(search_rotated::<i32>(&[], &1), None);

        let values = [5, 10, 20, 15, 7];
        assert_eq!(find_peak(&values), Some(2));
        assert_eq!(find_peak::<i32>(&[]), None);
    }

    proptest! {
        #[test]
        fn variants_match_std(mut values in prop::collection::vec(-100i32..100, 0..128), needle in -110i32..110) {
            values.sort();
            values.dedup();
            let expected = values.binary_search(&needle).ok();
            prop_assert_eq!(binary_search_iterative(&values, &needle), expected);
            prop_assert_eq!(binary_search_recursive(&values, &needle), expected);
            prop_assert_eq!(search_unbounded(&values, &needle), expected);
        }

        #[test]
        fn occurrences_match_linear_scan(mut values in prop::collection::vec(0i32..10, 0..64), needle in 0i32..10) {
            values.sort();
            prop_assert_eq!(lower_bound(&values, &needle), values.partition_point(|v| *v < needle));
            let first = values.iter().position(|v| *v == needle);
            let last = values.iter().rposition(|v| *v == needle);
            let count = values.iter().filter(|v| **v == needle).count();
            prop_assert_eq!(first_occurrence(&values, &needle), first);
            prop_assert_eq!(last_occurrence(&values, &needle), last);
            prop_assert_eq!(count_occurrences(&values, &needle), count);
        }

        #[test]
        fn unbounded_finds_first_with_duplicates(mut values in prop::collection::vec(0i32..10, 0..64), needle in 0i32..10) {
            values.sort();
            let first = values.iter().position(|v| *v == needle);
            prop_assert_eq!(search_unbounded(&values, &needle), first);
        }

        #[test]
        fn rotated_matches_position(mut values in prop::collection::btree_set(-500i32..500, 0..64).prop_map(|s| s.into_iter().collect::<Vec<_>>()), pivot in 0usize..64, needle in -500i32..500) {
            if !values.is_empty() {
                let len = values.len();
                values.rotate_left(pivot % len);
            }
            let position = values.iter().position(|v| *v == needle);
            prop_assert_eq!(search_rotated(&values, &needle), position);
        }

        #[test]
        fn peak_is_local_max(values in prop::collection::vec(any::<i32>(), 1..64)) {
            let i = find_peak(&values).unwrap();
            prop_assert!(i == 0 || values[i] >= values[i - 1]);
            prop_assert!(i + 1 == values.len() || values[i] >= values[i + 1]);
        }

        #[test]
        fn sqrt_brackets(n in any::<u64>()) {
            let r = floor_sqrt(n) as u128;
            prop_assert!(r * r <= n as u128);
            prop_assert!((r + 1) * (r + 1) > n as u128);
        }
    }
}
