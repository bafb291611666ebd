//! Single-pass array warm-ups.

/// Index of the first occurrence of the maximum.
pub fn largest_index(values: &[i32]) -> Option<usize> {
    let mut iter = values.iter().enumerate();
    let (mut idx, mut max) = match iter.next() {
        Some((i, &v)) => (i, v),
        None => return None,
    };

    for (i, &v) in iter {
        if v > max {
            max = v;
            idx = i;
        }
    }

    Some(idx)
}

/// Index of the first occurrence of the largest value strictly below the
/// maximum. `None` when all values are equal or the slice is empty.
pub fn second_largest_index(values: &[i32]) -> Option<usize> {
    let mut largest = *values.first()?;
    let mut largest_idx = 0usize;
    let mut second: Option<usize> = None;
    for (i, &v) in values.iter().enumerate().skip(1) {
        if v > largest {
            second = Some(largest_idx);
            largest = v;
            largest_idx = i;
        } else if v < largest && second.is_none_or(|s| v > values[s]) {
            second = Some(i);
        }
    }
    second
}

pub fn is_sorted_non_decreasing(values: &[i32]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

/// Compacts a sorted slice in place so the first `k` entries are its distinct
/// values, and returns `k`. Entries past `k` are left in an unspecified order.
pub fn remove_duplicates_sorted(values: &mut [i32]) -> usize {
    if values.is_empty() {
        return 0;
    }
    let mut write = 1;
    for read in 1..values.len() {
        if values[read] != values[write - 1] {
            values[write] = values[read];
            write += 1;
        }
    }
    write
}

/// Moves zeros to the end while keeping non-zero elements in order.
pub fn move_zeros_to_end(values: &mut [i32]) {
    let mut write = 0;
    for read in 0..values.len() {
        if values[read] != 0 {
            values.swap(write, read);
            write += 1;
        }
    }
}

/// Run-length `(value, count)` pairs of a sorted slice.
pub fn frequencies_sorted(values: &[i32]) -> Vec<(i32, usize)> {
    let mut out: Vec<(i32, usize)> = Vec::new();
    for &v in values {
        match out.last_mut() {
            Some((last, count)) if *last == v => *count += 1,
            _ => out.push((v, 1)),
        }
    }
    out
}

/// Boyer–Moore majority vote.
///
/// Returns the index of one occurrence of the element that appears more than
/// `n / 2` times, or `None` if there is no such element.
pub fn majority_element(values: &[i32]) -> Option<usize> {
    let mut candidate = 0usize;
    let mut count = 0usize;
    for (i, &v) in values.iter().enumerate() {
        if count == 0 {
            candidate = i;
            count = 1;
        } else if v == values[candidate] {
            count += 1;
        } else {
            count -= 1;
        }
    }
    if values.is_empty() {
        return None;
    }
    let occurrences = values.iter().filter(|&&v| v == values[candidate]).count();
    (occurrences > values.len() / 2).then_some(candidate)
}

/// Inclusive index ranges of the groups to flip so every bit becomes equal,
/// using the fewest flips.
///
/// The groups of the value that differs from the first bit are never more
/// numerous than the others, so those are the ones returned.
pub fn min_group_flips(bits: &[u8]) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    let Some(&first) = bits.first() else {
        return ranges;
    };
    let mut start = None;
    for (i, &b) in bits.iter().enumerate() {
        match (b != first, start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                ranges.push((s, i - 1));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        ranges.push((s, bits.len() - 1));
    }
    ranges
}
