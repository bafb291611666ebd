//! Merge-based algorithms: merging, merge sort, inversion counting and
//! surpasser counts.

/// Merges two sorted slices. Ties take from `a` first, which keeps merge sort
/// stable.
pub fn merge_sorted<T: Ord + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if b[j] < a[i] {
            out.push(b[j].clone());
            j += 1;
        } else {
            out.push(a[i].clone());
            i += 1;
        }
    }
    out.extend_from_slice(&a[i..]);
    out.extend_from_slice(&b[j..]);
    out
}

/// Top-down merge sort. Stable, O(n log n) time, O(n) extra space.
pub fn merge_sort<T: Ord + Clone>(values: &mut [T]) {
    if values.len() <= 1 {
        return;
    }
    let mid = values.len() / 2;
    merge_sort(&mut values[..mid]);
    merge_sort(&mut values[mid..]);
    let merged = merge_sorted(&values[..mid], &values[mid..]);
    values.clone_from_slice(&merged);
}

/// Number of pairs `i < j` with `values[i] > values[j]`.
///
/// While merging, taking an element from the right half means it is smaller
/// than everything left in the left half, so all of those form inversions.
pub fn count_inversions<T: Ord + Clone>(values: &[T]) -> u64 {
    fn sort_count<T: Ord + Clone>(values: &mut [T]) -> u64 {
        if values.len() <= 1 {
            return 0;
        }
        let mid = values.len() / 2;
        let mut count = sort_count(&mut values[..mid]) + sort_count(&mut values[mid..]);

        let (left, right) = values.split_at(mid);
        let mut merged = Vec::with_capacity(values.len());
        let (mut i, mut j) = (0, 0);
        while i < left.len() && j < right.len() {
            if right[j] < left[i] {
                count += (left.len() - i) as u64;
                merged.push(right[j].clone());
                j += 1;
            } else {
                merged.push(left[i].clone());
                i += 1;
            }
        }
        merged.extend_from_slice(&left[i..]);
        merged.extend_from_slice(&right[j..]);
        values.clone_from_slice(&merged);
        count
    }

    let mut scratch = values.to_vec();
    sort_count(&mut scratch)
}

/// O(n²) reference for [`surpasser_counts`].
pub fn surpasser_counts_naive<T: Ord>(values: &[T]) -> Vec<usize> {
    (0..values.len())
        .map(|i| values[i + 1..].iter().filter(|v| **v > values[i]).count())
        .collect()
}

/// For each element, how many strictly greater elements lie to its right.
///
/// Merge sort over indices: when a left-half element is emitted, every
/// right-half element not yet emitted is greater than it. Ties emit the
/// right-half element first so equal values are not counted.
pub fn surpasser_counts<T: Ord>(values: &[T]) -> Vec<usize> {
    let n = values.len();
    let mut counts = vec![0usize; n];
    let mut order: Vec<usize> = (0..n).collect();
    let mut buffer = Vec::with_capacity(n);
    sort_indices(values, &mut order, &mut buffer, &mut counts);
    tracing::trace!(len = n, "computed surpasser counts");
    counts
}

fn sort_indices<T: Ord>(
    values: &[T],
    order: &mut [usize],
    buffer: &mut Vec<usize>,
    counts: &mut [usize],
) {
    if order.len() <= 1 {
        return;
    }
    let mid = order.len() / 2;
    sort_indices(values, &mut order[..mid], buffer, counts);
    sort_indices(values, &mut order[mid..], buffer, counts);

    buffer.clear();
    let (left, right) = order.split_at(mid);
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if values[left[i]] < values[right[j]] {
            counts[left[i]] += right.len() - j;
            buffer.push(left[i]);
            i += 1;
        } else {
            buffer.push(right[j]);
            j += 1;
        }
    }
    buffer.extend_from_slice(&left[i..]);
    buffer.extend_from_slice(&right[j..]);
    order.copy_from_slice(buffer);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn merge_known_cases() {
        assert_eq!(merge_sorted(&[10, 15, 20], &[5, 6, 6, 15]), vec![5, 6, 6, 10, 15, 15, 20]);
        assert_eq!(merge_sorted::<i32>(&[], &[]), Vec::<i32>::new());
        let mut values = [10, 5, 30, 15, 7];
        merge_sort(&mut values);
        assert_eq!(values, [5, 7, 10, 15, 30]);
    }

    #[test]
    fn inversion_and_surpasser_cases() {
        assert_eq!(count_inversions(&[2, 4, 1, 3, 5]), 3);
        assert_eq!(count_inversions(&[10, 20, 30, 40]), 0);
        assert_eq!(count_inversions(&[40, 30, 20, 10]), 6);
        assert_eq!(count_inversions::<i32>(&[]), 0);
        assert_eq!(surpasser_counts(&[2, 7, 5, 3, 0, 8, 1]), vec![4, 1, 1, 1, 2, 0, 0]);
        assert_eq!(surpasser_counts(&[3, 3, 3]), vec![0, 0, 0]);
    }

    proptest! {
        #[test]
        fn merge_sort_matches_std(values in prop::collection::vec(any::<i32>(), 0..200)) {
            let mut expected = values.clone();
            expected.sort();
            let mut sorted = values;
            merge_sort(&mut sorted);
            prop_assert_eq!(sorted, expected);
        }

        /// Equal keys must keep their input order, both in the merge step and
        /// across the whole sort.
        #[test]
        fn merge_sort_is_stable(keys in prop::collection::vec(0u8..4, 0..80), split in 0usize..80) {
            #[derive(Debug, Clone, PartialEq, Eq)]
            struct Keyed(u8, usize);
            impl PartialOrd for Keyed {
                fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                    Some(self.cmp(other))
                }
            }
            impl Ord for Keyed {
                fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                    self.0.cmp(&other.0)
                }
            }

            let items: Vec<Keyed> = keys.iter().enumerate().map(|(i, &k)| Keyed(k, i)).collect();
            let mut expected = items.clone();
            expected.sort_by_key(|k| k.0);

            let mut sorted = items.clone();
            merge_sort(&mut sorted);
            prop_assert_eq!(&sorted, &expected);

            let mid = split.min(items.len());
            let mut left = items[..mid].to_vec();
            let mut right = items[mid..].to_vec();
            left.sort_by_key(|k| k.0);
            right.sort_by_key(|k| k.0);
            prop_assert_eq!(merge_sorted(&left, &right), expected);
        }

        #[test]
        fn inversions_match_pairwise(values in prop::collection::vec(-20i32..20, 0..100)) {
            let mut expected = 0u64;
            for i in 0..values.len() {
                for j in i + 1..values.len() {
                    if values[i] > values[j] {
                        expected += 1;
                    }
                }
            }
            prop_assert_eq!(count_inversions(&values), expected);
        }

        #[test]
        fn surpassers_match_naive(values in prop::collection::vec(-20i32..20, 0..100)) {
            prop_assert_eq!(surpasser_counts(&values), surpasser_counts_naive(&values));
        }
    }
}
