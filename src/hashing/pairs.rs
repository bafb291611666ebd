use std::collections::{HashMap, HashSet};

/// Whether two distinct positions sum to `sum`, using a set of values seen so
/// far.
pub fn has_pair_with_sum(values: &[i32], sum: i64) -> bool {
    let mut seen: HashSet<i64> = HashSet::new();
    for &v in values {
        let v = v as i64;
        if sum.checked_sub(v).is_some_and(|want| seen.contains(&want)) {
            return true;
        }
        seen.insert(v);
    }
    false
}

/// Number of index pairs `i < j` with `values[i] + values[j] == sum`.
pub fn count_pairs_with_sum(values: &[i32], sum: i64) -> usize {
    let mut seen: HashMap<i64, usize> = HashMap::new();
    let mut pairs = 0;
    for &v in values {
        let v = v as i64;
        pairs += sum
            .checked_sub(v)
            .and_then(|want| seen.get(&want).copied())
            .unwrap_or(0);
        *seen.entry(v).or_default() += 1;
    }
    pairs
}
