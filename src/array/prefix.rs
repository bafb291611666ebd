//! Prefix-sum techniques: inclusive scans, O(1) range sums, equilibrium points
//! and difference arrays.

use crate::error::{AlgoError, AlgoResult};

/// Inclusive prefix sums widened to `i64`.
pub fn prefix_sums(values: &[i32]) -> Vec<i64> {
    let mut output = Vec::with_capacity(values.len());
    let mut sum = 0i64;
    for &value in values {
        sum += value as i64;
        output.push(sum);
    }
    output
}

/// Precomputed prefix sums answering inclusive range-sum queries in O(1).
///
/// Stored with a leading zero so `sum(l..=r) = sums[r + 1] - sums[l]`.
#[derive(Clone, Debug)]
pub struct PrefixSums {
    sums: Vec<i64>,
}

impl PrefixSums {
    pub fn new(values: &[i32]) -> Self {
        tracing::trace!(len = values.len(), "building prefix sums");
        let mut sums = Vec::with_capacity(values.len() + 1);
        sums.push(0);
        sums.extend(prefix_sums(values));
        Self { sums }
    }

    /// Number of elements in the original slice.
    pub fn len(&self) -> usize {
        self.sums.len() - 1
    }

    /// Returns true when the original slice was empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of `values[l..=r]`.
    pub fn range_sum(&self, l: usize, r: usize) -> AlgoResult<i64> {
        if l > r || r >= self.len() {
            tracing::debug!(l, r, len = self.len(), "rejected range-sum query");
            return Err(AlgoError::InvalidArgument(format!(
                "range {l}..={r} is not within 0..{}",
                self.len()
            )));
        }
        Ok(self.sums[r + 1] - self.sums[l])
    }
}

/// First index where the sum of the elements before it equals the sum of the
/// elements after it.
pub fn equilibrium_index(values: &[i32]) -> Option<usize> {
    let total: i64 = values.iter().map(|&v| v as i64).sum();
    let mut left = 0i64;
    for (i, &v) in values.iter().enumerate() {
        let right = total - left - v as i64;
        if left == right {
            return Some(i);
        }
        left += v as i64;
    }
    None
}

/// Value covered by the most inclusive ranges `[lefts[i], rights[i]]`.
///
/// A sparse difference array: +1 at each left bound and -1 just past each
/// right bound, sorted by position and prefix-summed. Cost depends on the
/// number of ranges, not on how large the bounds are. Ties resolve to the
/// smallest value. Returns `InvalidArgument` for mismatched lengths or a
/// range with `left > right`.
pub fn max_appearing_in_ranges(lefts: &[usize], rights: &[usize]) -> AlgoResult<Option<usize>> {
    if lefts.len() != rights.len() {
        return Err(AlgoError::InvalidArgument(format!(
            "{} left bounds but {} right bounds",
            lefts.len(),
            rights.len()
        )));
    }
    if let Some((l, r)) = lefts.iter().zip(rights).find(|(l, r)| l > r) {
        return Err(AlgoError::InvalidArgument(format!("range {l}..={r} is reversed")));
    }

    let mut events: Vec<(usize, i64)> = Vec::with_capacity(2 * lefts.len());
    for (&l, &r) in lefts.iter().zip(rights) {
        events.push((l, 1));
        // A range ending at usize::MAX never closes.
        if let Some(past) = r.checked_add(1) {
            events.push((past, -1));
        }
    }
    events.sort_unstable();

    let mut best: Option<(usize, i64)> = None;
    let mut running = 0i64;
    for group in events.chunk_by(|x, y| x.0 == y.0) {
        running += group.iter().map(|&(_, delta)| delta).sum::<i64>();
        if best.is_none_or(|(_, count)| running > count) {
            best = Some((group[0].0, running));
        }
    }
    Ok(best.map(|(value, _)| value))
}
