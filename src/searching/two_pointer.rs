//! Two-pointer scans over sorted input, the median of two sorted arrays,
//! Floyd's duplicate finder and binary search on the answer.

use std::cmp::Ordering;

/// Indices `(i, j)`, `i < j`, of a pair in a sorted slice summing to `sum`.
pub fn pair_sum_sorted(values: &[i32], sum: i64) -> Option<(usize, usize)> {
    if values.len() < 2 {
        return None;
    }
    let (mut lo, mut hi) = (0usize, values.len() - 1);
    while lo < hi {
        match (values[lo] as i64 + values[hi] as i64).cmp(&sum) {
            Ordering::Equal => return Some((lo, hi)),
            Ordering::Less => lo += 1,
            Ordering::Greater => hi -= 1,
        }
    }
    None
}

/// Indices `(i, j, k)`, `i < j < k`, of a triplet in a sorted slice summing
/// to `sum`. O(n²).
pub fn triplet_sum_sorted(values: &[i32], sum: i64) -> Option<(usize, usize, usize)> {
    for i in 0..values.len().saturating_sub(2) {
        let Some(remaining) = sum.checked_sub(values[i] as i64) else {
            continue;
        };
        if let Some((j, k)) = pair_sum_sorted(&values[i + 1..], remaining) {
            return Some((i, i + 1 + j, i + 1 + k));
        }
    }
    None
}

/// Median of the union of two sorted slices in O(log min(n, m)).
///
/// Binary searches a cut of the shorter slice such that everything left of
/// both cuts is no greater than everything right of them.
pub fn median_of_sorted_pair(a: &[i32], b: &[i32]) -> Option<f64> {
    let (a, b) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let (n, m) = (a.len(), b.len());
    if n + m == 0 {
        return None;
    }
    let half = (n + m + 1) / 2;
    let (mut lo, mut hi) = (0usize, n);
    loop {
        let cut_a = lo + (hi - lo) / 2;
        let cut_b = half - cut_a;
        let left_a = if cut_a == 0 { i64::MIN } else { a[cut_a - 1] as i64 };
        let right_a = if cut_a == n { i64::MAX } else { a[cut_a] as i64 };
        let left_b = if cut_b == 0 { i64::MIN } else { b[cut_b - 1] as i64 };
        let right_b = if cut_b == m { i64::MAX } else { b[cut_b] as i64 };

        if left_a > right_b {
            hi = cut_a - 1;
        } else if left_b > right_a {
            lo = cut_a + 1;
        } else {
            let left = left_a.max(left_b) as f64;
            if (n + m) % 2 == 1 {
                return Some(left);
            }
            let right = right_a.min(right_b) as f64;
            return Some((left + right) / 2.0);
        }
    }
}

/// The repeated value among `n + 1` values drawn from `1..=n`.
///
/// Treats `i -> values[i]` as a linked list; the duplicate is the entry of its
/// cycle, found with Floyd's tortoise and hare in O(n) time and O(1) space.
/// Returns `None` when a value is outside `1..=n`.
pub fn find_repeating(values: &[usize]) -> Option<usize> {
    let n = values.len().checked_sub(1)?;
    if n == 0 || values.iter().any(|&v| v == 0 || v > n) {
        return None;
    }
    let mut slow = values[0];
    let mut fast = values[values[0]];
    while slow != fast {
        slow = values[slow];
        fast = values[values[fast]];
    }
    slow = 0;
    while slow != fast {
        slow = values[slow];
        fast = values[fast];
    }
    Some(slow)
}

/// Minimum possible maximum of pages assigned to one student, where each
/// student reads a contiguous run of books.
///
/// Binary searches the answer between the largest book and the total,
/// checking feasibility greedily. `None` if `students` is zero or exceeds the
/// number of books.
pub fn allocate_min_pages(pages: &[u32], students: usize) -> Option<u64> {
    if students == 0 || students > pages.len() {
        return None;
    }
    let feasible = |limit: u64| {
        let mut needed = 1;
        let mut load = 0u64;
        for &p in pages {
            if load + p as u64 > limit {
                needed += 1;
                load = p as u64;
            } else {
                load += p as u64;
            }
        }
        needed <= students
    };

    let mut lo = pages.iter().copied().max().map_or(0, u64::from);
    let mut hi: u64 = pages.iter().map(|&p| p as u64).sum();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if feasible(mid) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    Some(lo)
}
