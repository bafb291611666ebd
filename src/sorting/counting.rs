//! Non-comparison sorts over small unsigned keys.

use crate::error::{AlgoError, AlgoResult};

/// Stable counting sort of values in `0..k`. O(n + k).
///
/// Returns `InvalidArgument` if any value is `>= k`.
pub fn counting_sort(values: &[u32], k: u32) -> AlgoResult<Vec<u32>> {
    let mut counts = vec![0usize; k as usize];
    for (index, &v) in values.iter().enumerate() {
        let Some(slot) = counts.get_mut(v as usize) else {
            tracing::debug!(value = v, index, k, "counting_sort value out of range");
            return Err(AlgoError::InvalidArgument(format!(
                "value {v} at index {index} is not below {k}"
            )));
        };
        *slot += 1;
    }
    // Turn counts into exclusive end positions.
    for i in 1..counts.len() {
        counts[i] += counts[i - 1];
    }
    let mut out = vec![0u32; values.len()];
    for &v in values.iter().rev() {
        counts[v as usize] -= 1;
        out[counts[v as usize]] = v;
    }
    Ok(out)
}

/// LSD radix sort, base 10, one stable counting pass per digit.
pub fn radix_sort(values: &mut [u32]) {
    let Some(&max) = values.iter().max() else {
        return;
    };
    let mut buffer = vec![0u32; values.len()];
    let mut exp = 1u64;
    while max as u64 / exp > 0 {
        let digit = |v: u32| ((v as u64 / exp) % 10) as usize;
        let mut counts = [0usize; 10];
        for &v in values.iter() {
            counts[digit(v)] += 1;
        }
        for d in 1..10 {
            counts[d] += counts[d - 1];
        }
        for &v in values.iter().rev() {
            let d = digit(v);
            counts[d] -= 1;
            buffer[counts[d]] = v;
        }
        values.copy_from_slice(&buffer);
        exp *= 10;
    }
}
