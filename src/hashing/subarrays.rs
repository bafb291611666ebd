//! Subarray problems solved with prefix sums stored in hash maps.
//!
//! A subarray `values[i..j]` sums to `s` exactly when
//! `prefix[j] - prefix[i] == s`, so remembering earlier prefix sums turns
//! each question into a lookup.

use std::collections::{HashMap, HashSet};

pub fn has_zero_sum_subarray(values: &[i32]) -> bool {
    has_subarray_with_sum(values, 0)
}

/// Whether some non-empty subarray sums to `sum`. Negative values are fine.
pub fn has_subarray_with_sum(values: &[i32], sum: i64) -> bool {
    let mut seen: HashSet<i64> = HashSet::from([0]);
    let mut prefix = 0i64;
    for &v in values {
        prefix += v as i64;
        if prefix.checked_sub(sum).is_some_and(|want| seen.contains(&want)) {
            return true;
        }
        seen.insert(prefix);
    }
    false
}

/// Length of the longest subarray summing to `sum`.
///
/// Only the first index of each prefix sum is stored, which maximises the
/// span.
pub fn longest_subarray_with_sum(values: &[i32], sum: i64) -> usize {
    let mut first_at: HashMap<i64, usize> = HashMap::from([(0, 0)]);
    let mut prefix = 0i64;
    let mut best = 0;
    for (i, &v) in values.iter().enumerate() {
        prefix += v as i64;
        if let Some(&start) = prefix.checked_sub(sum).and_then(|want| first_at.get(&want)) {
            best = best.max(i + 1 - start);
        }
        first_at.entry(prefix).or_insert(i + 1);
    }
    best
}

/// Longest subarray with as many 0s as 1s. Zeros count as -1, which reduces
/// the problem to a zero-sum search.
pub fn longest_balanced_binary_subarray(bits: &[u8]) -> usize {
    let signed: Vec<i32> = bits.iter().map(|&b| if b == 0 { -1 } else { 1 }).collect();
    longest_subarray_with_sum(&signed, 0)
}

/// Longest span `[i, j]` where the two binary arrays have equal sums.
///
/// Equivalent to the longest zero-sum subarray of `a - b`. Only the common
/// prefix of the two slices is considered.
pub fn longest_common_span(a: &[u8], b: &[u8]) -> usize {
    let diff: Vec<i32> = a.iter().zip(b).map(|(&x, &y)| x as i32 - y as i32).collect();
    longest_subarray_with_sum(&diff, 0)
}

/// Size of the largest set of values forming consecutive integers, in any
/// order. Each run is walked only from its smallest member.
pub fn longest_consecutive_run(values: &[i32]) -> usize {
    let set: HashSet<i64> = values.iter().map(|&v| v as i64).collect();
    let mut best = 0;
    for &v in &set {
        if set.contains(&(v - 1)) {
            continue;
        }
        let mut len = 1;
        while set.contains(&(v + len as i64)) {
            len += 1;
        }
        best = best.max(len);
    }
    best
}

/// Distinct-element count of every window of size `k`. Empty if `k == 0` or
/// `k` exceeds the length.
pub fn distinct_in_windows(values: &[i32], k: usize) -> Vec<usize> {
    if k == 0 || k > values.len() {
        return Vec::new();
    }
    let mut counts: HashMap<i32, usize> = HashMap::new();
    for &v in &values[..k] {
        *counts.entry(v).or_default() += 1;
    }
    let mut out = Vec::with_capacity(values.len() - k + 1);
    out.push(counts.len());
    for i in k..values.len() {
        let leaving = values[i - k];
        if let Some(c) = counts.get_mut(&leaving) {
            *c -= 1;
            if *c == 0 {
                counts.remove(&leaving);
            }
        }
        *counts.entry(values[i]).or_default() += 1;
        out.push(counts.len());
    }
    out
}
