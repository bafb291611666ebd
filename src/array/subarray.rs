//! Contiguous-subarray problems: Kadane, circular Kadane, fixed windows and runs.

/// O(n²) reference for [`max_subarray_sum`].
pub fn max_subarray_sum_naive(values: &[i32]) -> Option<i64> {
    let mut best: Option<i64> = None;
    for i in 0..values.len() {
        let mut sum = 0i64;
        for &v in &values[i..] {
            sum += v as i64;
            best = Some(best.map_or(sum, |b| b.max(sum)));
        }
    }
    best
}

/// Kadane's algorithm: the best sum ending at `i` either extends the best
/// sum ending at `i - 1` or restarts at `values[i]`.
///
/// Returns `None` for an empty slice. For all-negative input the answer is
/// the largest single element.
pub fn max_subarray_sum(values: &[i32]) -> Option<i64> {
    let (&first, rest) = values.split_first()?;
    let mut ending_here = first as i64;
    let mut best = ending_here;
    for &v in rest {
        let v = v as i64;
        ending_here = v.max(ending_here + v);
        best = best.max(ending_here);
    }
    Some(best)
}

fn min_subarray_sum(values: &[i32]) -> Option<i64> {
    let (&first, rest) = values.split_first()?;
    let mut ending_here = first as i64;
    let mut best = ending_here;
    for &v in rest {
        let v = v as i64;
        ending_here = v.min(ending_here + v);
        best = best.min(ending_here);
    }
    Some(best)
}

/// Maximum subarray sum when the array wraps around.
///
/// A wrapping subarray is the total minus a non-wrapping minimum subarray.
/// When every element is negative the wrapping form would be empty, so the
/// plain Kadane answer is used.
pub fn max_circular_subarray_sum(values: &[i32]) -> Option<i64> {
    let normal = max_subarray_sum(values)?;
    if normal < 0 {
        return Some(normal);
    }
    let total: i64 = values.iter().map(|&v| v as i64).sum();
    let wrapped = total - min_subarray_sum(values)?;
    Some(normal.max(wrapped))
}

/// Maximum sum over all windows of exactly `k` elements.
pub fn max_window_sum(values: &[i32], k: usize) -> Option<i64> {
    if k == 0 || k > values.len() {
        return None;
    }
    let mut window: i64 = values[..k].iter().map(|&v| v as i64).sum();
    let mut best = window;
    for i in k..values.len() {
        window += values[i] as i64 - values[i - k] as i64;
        best = best.max(window);
    }
    Some(best)
}

/// Length of the longest run whose adjacent elements alternate parity.
pub fn longest_even_odd_subarray(values: &[i32]) -> usize {
    if values.is_empty() {
        return 0;
    }
    let mut best = 1;
    let mut run = 1;
    for pair in values.windows(2) {
        if (pair[0] % 2 == 0) != (pair[1] % 2 == 0) {
            run += 1;
            best = best.max(run);
        } else {
            run = 1;
        }
    }
    best
}

/// Longest run of non-zero entries in a 0/1 slice.
pub fn max_consecutive_ones(bits: &[u8]) -> usize {
    let mut best = 0;
    let mut run = 0;
    for &b in bits {
        if b == 0 {
            run = 0;
        } else {
            run += 1;
            best = best.max(run);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn circular_naive(values: &[i32]) -> Option<i64> {
        let n = values.len();
        let mut best: Option<i64> = None;
        for start in 0..n {
            let mut sum = 0i64;
            for len in 1..=n {
                sum += values[(start + len - 1) % n] as i64;
                best = Some(best.map_or(sum, |b| b.max(sum)));
            }
        }
        best
    }

    #[test]
    fn kadane_known_cases() {
        assert_eq!(max_subarray_sum(&[2, 3, -8, 7, -1, 2, 3]), Some(11));
        assert_eq!(max_subarray_sum(&[5, 8, 3]), Some(16));
        assert_eq!(max_subarray_sum(&[-6, -1, -8]), Some(-1));
        assert_eq!(max_subarray_sum(&[]), None);
    }

    #[test]
    fn circular_known_cases() {
        assert_eq!(max_circular_subarray_sum(&[5, -2, 3, 4]), Some(12));
        assert_eq!(max_circular_subarray_sum(&[8, -4, 3, -5, 4]), Some(12));
        assert_eq!(max_circular_subarray_sum(&[-3, -4, -5]), Some(-3));
        assert_eq!(max_circular_subarray_sum(&[]), None);
    }

    #[test]
    fn window_and_run_cases() {
        assert_eq!(max_window_sum(&[1, 8, 30, -5, 20, 7], 3), Some(45));
        assert_eq!(max_window_sum(&[1, 2], 3), None);
        assert_eq!(max_window_sum(&[1, 2], 0), None);
        assert_eq!(longest_even_odd_subarray(&[10, 12, 14, 7, 8]), 3);
        assert_eq!(longest_even_odd_subarray(&[7, 10, 13, 14]), 4);
        assert_eq!(longest_even_odd_subarray(&[-3, 2, -5]), 3);
        assert_eq!(max_consecutive_ones(&[0, 1, 1, 0, 1, 1, 1, 0]), 3);
        assert_eq!(max_consecutive_ones(&[0, 0]), 0);
    }

    proptest! {
        #[test]
        fn kadane_matches_naive(values in prop::collection::vec(any::<i32>(), 0..100)) {
            prop_assert_eq!(max_subarray_sum(&values), max_subarray_sum_naive(&values));
        }

        #[test]
        fn circular_matches_naive(values in prop::collection::vec(-1_000i32..1_000, 0..60)) {
            prop_assert_eq!(max_circular_subarray_sum(&values), circular_naive(&values));
        }

        #[test]
        fn window_matches_naive(values in prop::collection::vec(any::<i32>(), 0..100), k in 0usize..20) {
            let expected = if k == 0 || k > values.len() {
                None
            } else {
                values.windows(k).map(|w| w.iter().map(|&v| v as i64).sum::<i64>()).max()
            };
            prop_assert_eq!(max_window_sum(&values, k), expected);
        }
    }
}
