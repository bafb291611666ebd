//! Partition schemes and what they enable: quicksort, quickselect, the Dutch
//! national flag and sign segregation.
//!
//! | Function | Scheme | Pivot ends at its final position |
//! |----------|--------|----------------------------------|
//! | [`lomuto_partition`] | Single forward scan, last element as pivot | Yes |
//! | [`hoare_partition`] | Two pointers converging, first element as pivot | No |
//! | [`sort_012`] | Three-way, low/mid/high pointers | n/a |

use crate::error::{AlgoError, AlgoResult};

/// Partitions a non-empty slice around its last element and returns the
/// pivot's final index.
///
/// Everything before the returned index is `<=` the pivot and everything
/// after is `>`.
pub fn lomuto_partition<T: Ord>(values: &mut [T]) -> usize {
    let pivot = values.len() - 1;
    let mut i = 0;
    for j in 0..pivot {
        if values[j] <= values[pivot] {
            values.swap(i, j);
            i += 1;
        }
    }
    values.swap(i, pivot);
    i
}

/// Hoare partition around the first element.
///
/// Returns `p` such that every element of `values[..=p]` is `<=` every element
/// of `values[p + 1..]`. Requires a non-empty slice.
pub fn hoare_partition<T: Ord + Clone>(values: &mut [T]) -> usize {
    let pivot = values[0].clone();
    let mut i = 0usize;
    let mut j = values.len() - 1;
    loop {
        while values[i] < pivot {
            i += 1;
        }
        while values[j] > pivot {
            j -= 1;
        }
        if i >= j {
            return j;
        }
        values.swap(i, j);
        i += 1;
        j -= 1;
    }
}

/// Quicksort with Lomuto partitioning. Recurses into the smaller side and
/// loops on the larger so stack depth stays O(log n).
pub fn quick_sort<T: Ord>(mut values: &mut [T]) {
    while values.len() > 1 {
        let p = lomuto_partition(values);
        let (left, right) = std::mem::take(&mut values).split_at_mut(p);
        let right = &mut right[1..];
        if left.len() < right.len() {
            quick_sort(left);
            values = right;
        } else {
            quick_sort(right);
            values = left;
        }
    }
}

pub fn quick_sort_hoare<T: Ord + Clone>(values: &mut [T]) {
    if values.len() <= 1 {
        return;
    }
    let p = hoare_partition(values);
    let (left, right) = values.split_at_mut(p + 1);
    quick_sort_hoare(left);
    quick_sort_hoare(right);
}

/// The `k`-th smallest element (1-based) by quickselect on a copy.
///
/// Returns `None` if `k` is 0 or exceeds the length.
pub fn kth_smallest<T: Ord + Clone>(values: &[T], k: usize) -> Option<T> {
    if k == 0 || k > values.len() {
        return None;
    }
    let mut scratch = values.to_vec();
    let mut window = scratch.as_mut_slice();
    let mut target = k - 1;
    loop {
        let p = lomuto_partition(window);
        let current = std::mem::take(&mut window);
        match p.cmp(&target) {
            std::cmp::Ordering::Equal => return Some(current[p].clone()),
            std::cmp::Ordering::Greater => window = &mut current[..p],
            std::cmp::Ordering::Less => {
                window = &mut current[p + 1..];
                target -= p + 1;
            }
        }
    }
}

/// Dutch national flag: sorts a slice of 0s, 1s and 2s in one pass.
///
/// `[0, low)` holds 0s, `[low, mid)` 1s, `(high, n)` 2s and `[mid, high]` is
/// unexplored. Any value above 2 is rejected; the slice is then left in an
/// unspecified permutation.
///
/// ```
/// use textbook_algorithms::sorting::sort_012;
///
/// let mut values = [0, 1, 2, 0, 1, 2];
/// sort_012(&mut values).unwrap();
/// assert_eq!(values, [0, 0, 1, 1, 2, 2]);
/// ```
pub fn sort_012(values: &mut [u8]) -> AlgoResult<()> {
    if values.is_empty() {
        return Ok(());
    }
    let mut low = 0usize;
    let mut mid = 0usize;
    let mut high = values.len() - 1;
    while mid <= high {
        match values[mid] {
            0 => {
                values.swap(low, mid);
                low += 1;
                mid += 1;
            }
            1 => mid += 1,
            2 => {
                values.swap(mid, high);
                if high == 0 {
                    break;
                }
                high -= 1;
            }
            other => {
                tracing::debug!(value = other, index = mid, "sort_012 saw a value outside 0..=2");
                return Err(AlgoError::InvalidArgument(format!(
                    "value {other} at index {mid} is not 0, 1 or 2"
                )));
            }
        }
    }
    Ok(())
}

/// Moves negative values before non-negative ones (Hoare-style two
/// pointers). Relative order is not preserved.
pub fn segregate_negatives(values: &mut [i32]) {
    if values.is_empty() {
        return;
    }
    let (mut i, mut j) = (0usize, values.len() - 1);
    loop {
        while i < values.len() && values[i] < 0 {
            i += 1;
        }
        while j > 0 && values[j] >= 0 {
            j -= 1;
        }
        if i >= j {
            return;
        }
        values.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn partition_known_cases() {
        let mut values = [10, 80, 30, 90, 40, 50, 70];
        let p = lomuto_partition(&mut values);
        assert_eq!(values[p], 70);
        assert!(values[..p].iter().all(|&v| v <= 70));
        assert!(values[p + 1..].iter().all(|&v| v > 70));

        let mut values = [5, 3, 8, 4, 2, 7, 1, 10];
        let p = hoare_partition(&mut values);
        let left_max = values[..=p].iter().max().copied().unwrap();
        assert!(values[p + 1..].iter().all(|&v| v >= left_max));
    }

    #[test]
    fn dutch_flag_cases() {
        let mut values = [0, 1, 1, 2, 0, 1, 1, 2];
        assert_eq!(sort_012(&mut values), Ok(()));
        assert_eq!(values, [0, 0, 1, 1, 1, 1, 2, 2]);

        let mut twos = [2, 2, 2];
        assert_eq!(sort_012(&mut twos), Ok(()));
        assert_eq!(twos, [2, 2, 2]);

        let mut empty: [u8; 0] = [];
        assert_eq!(sort_012(&mut empty), Ok(()));

        let mut bad = [0, 3, 1];
        assert!(matches!(sort_012(&mut bad), Err(AlgoError::InvalidArgument(_))));
    }

    #[test]
    fn kth_and_segregate_cases() {
        assert_eq!(kth_smallest(&[10, 5, 30, 12], 2), Some(10));
        assert_eq!(kth_smallest(&[30, 20, 5, 10, 8], 4), Some(20));
        assert_eq!(kth_smallest(&[1, 2], 0), None);
        assert_eq!(kth_smallest(&[1, 2], 3), None);

        let mut values = [-12, 18, -10, 15];
        segregate_negatives(&mut values);
        assert!(values[..2].iter().all(|&v| v < 0));
        assert!(values[2..].iter().all(|&v| v >= 0));
    }

    proptest! {
        #[test]
        fn quick_sorts_match_std(values in prop::collection::vec(-50i32..50, 0..200)) {
            let mut expected = values.clone();
            expected.sort();

            let mut lomuto = values.clone();
            quick_sort(&mut lomuto);
            prop_assert_eq!(&lomuto, &expected);

            let mut hoare = values;
            quick_sort_hoare(&mut hoare);
            prop_assert_eq!(&hoare, &expected);
        }

        #[test]
        fn kth_matches_sorted(values in prop::collection::vec(any::<i32>(), 1..100), k in 1usize..100) {
            prop_assume!(k <= values.len());
            let mut sorted = values.clone();
            sorted.sort();
            prop_assert_eq!(kth_smallest(&values, k), Some(sorted[k - 1]));
        }

        #[test]
        fn dutch_flag_sorts(mut values in prop::collection::vec(0u8..3, 0..200)) {
            let mut expected = values.clone();
            expected.sort();
            prop_assert_eq!(sort_012(&mut values), Ok(()));
            prop_assert_eq!(values, expected);
        }

        #[test]
        fn segregation_splits_signs(mut values in prop::collection::vec(-10i32..10, 0..100)) {
            let mut before = values.clone();
            segregate_negatives(&mut values);
            let negatives = values.iter().filter(|&&v| v < 0).count();
            prop_assert!(values[..negatives].iter().all(|&v| v < 0));
            prop_assert!(values[negatives..].iter().all(|&v| v >= 0));
            let mut after = values.clone();
            before.sort();
            after.sort();
            prop_assert_eq!(before, after);
        }
    }
}
