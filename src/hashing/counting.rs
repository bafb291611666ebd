//! Hash-set and hash-map counting.

use std::collections::{HashMap, HashSet};

pub fn count_distinct(values: &[i32]) -> usize {
    values.iter().collect::<HashSet<_>>().len()
}

/// `(value, count)` pairs in order of first appearance.
pub fn frequencies(values: &[i32]) -> Vec<(i32, usize)> {
    let mut counts: HashMap<i32, usize> = HashMap::new();
    for &v in values {
        *counts.entry(v).or_default() += 1;
    }
    let mut out = Vec::with_capacity(counts.len());
    for &v in values {
        if let Some(count) = counts.remove(&v) {
            out.push((v, count));
        }
    }
    out
}

/// Number of distinct values present in both slices.
pub fn intersection_count(a: &[i32], b: &[i32]) -> usize {
    let set: HashSet<i32> = a.iter().copied().collect();
    let mut seen = HashSet::new();
    b.iter().filter(|v| set.contains(*v) && seen.insert(**v)).count()
}

/// Number of distinct values present in either slice.
pub fn union_count(a: &[i32], b: &[i32]) -> usize {
    a.iter().chain(b).collect::<HashSet<_>>().len()
}

/// Values occurring more than `n / k` times, ascending. Empty when `k == 0`.
pub fn more_than_n_by_k(values: &[i32], k: usize) -> Vec<i32> {
    if k == 0 {
        return Vec::new();
    }
    let threshold = values.len() / k;
    let mut counts: HashMap<i32, usize> = HashMap::new();
    for &v in values {
        *counts.entry(v).or_default() += 1;
    }
    let mut out: Vec<i32> = counts
        .into_iter()
        .filter(|&(_, c)| c > threshold)
        .map(|(v, _)| v)
        .collect();
    out.sort_unstable();
    out
}
