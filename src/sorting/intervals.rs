//! Problems that reduce to sorting first: interval merging, meeting the most
//! guests, chocolate distribution and sorted set operations.

use std::cmp::Ordering;

use crate::error::{AlgoError, AlgoResult};

/// A closed interval `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: i64,
    pub end: i64,
}

impl Interval {
    pub const fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }
}

/// Merges overlapping intervals. Intervals sharing an endpoint overlap. The
/// result is sorted by start.
pub fn merge_intervals(intervals: &[Interval]) -> Vec<Interval> {
    let mut sorted = intervals.to_vec();
    sorted.sort_unstable_by_key(|iv| iv.start);

    let mut merged: Vec<Interval> = Vec::with_capacity(sorted.len());
    for iv in sorted {
        match merged.last_mut() {
            Some(last) if iv.start <= last.end => last.end = last.end.max(iv.end),
            _ => merged.push(iv),
        }
    }
    merged
}

/// The largest number of guests present at once, and the earliest time it is
/// reached, as `(guests, time)`.
///
/// A guest arriving at the instant another departs is counted with them.
/// Returns `Ok(None)` for no guests and `InvalidArgument` when the slices
/// differ in length or a guest departs before arriving.
pub fn max_guests(arrivals: &[u32], departures: &[u32]) -> AlgoResult<Option<(usize, u32)>> {
    if arrivals.len() != departures.len() {
        tracing::debug!(
            arrivals = arrivals.len(),
            departures = departures.len(),
            "max_guests called with mismatched lengths"
        );
        return Err(AlgoError::InvalidArgument(format!(
            "{} arrivals but {} departures",
            arrivals.len(),
            departures.len()
        )));
    }
    if let Some(guest) = arrivals.iter().zip(departures).position(|(a, d)| d < a) {
        tracing::debug!(guest, "max_guests called with a departure before its arrival");
        return Err(AlgoError::InvalidArgument(format!(
            "guest {guest} departs at {} before arriving at {}",
            departures[guest], arrivals[guest]
        )));
    }
    if arrivals.is_empty() {
        return Ok(None);
    }

    let mut arr = arrivals.to_vec();
    let mut dep = departures.to_vec();
    arr.sort_unstable();
    dep.sort_unstable();

    let (mut i, mut j) = (0usize, 0usize);
    let mut present = 0usize;
    let mut best = (0usize, arr[0]);
    while i < arr.len() {
        if arr[i] <= dep[j] {
            present += 1;
            if present > best.0 {
                best = (present, arr[i]);
            }
            i += 1;
        } else {
            present -= 1;
            j += 1;
        }
    }
    Ok(Some(best))
}

/// Smallest possible difference between the largest and smallest packet when
/// handing one packet to each of `m` children.
///
/// `None` if `m` is zero or exceeds the number of packets.
pub fn min_chocolate_difference(packets: &[u32], m: usize) -> Option<u32> {
    if m == 0 || m > packets.len() {
        return None;
    }
    let mut sorted = packets.to_vec();
    sorted.sort_unstable();
    sorted.windows(m).map(|w| w[m - 1] - w[0]).min()
}

/// Distinct values common to two sorted slices.
pub fn intersection_sorted(a: &[i32], b: &[i32]) -> Vec<i32> {
    let mut out: Vec<i32> = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                if out.last() != Some(&a[i]) {
                    out.push(a[i]);
                }
                i += 1;
                j += 1;
            }
        }
    }
    out
}

/// Distinct values appearing in either of two sorted slices.
pub fn union_sorted(a: &[i32], b: &[i32]) -> Vec<i32> {
    let mut out: Vec<i32> = Vec::with_capacity(a.len() + b.len());
    let mut push = |v: i32| {
        if out.last() != Some(&v) {
            out.push(v);
        }
    };
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => {
                push(a[i]);
                i += 1;
            }
            Ordering::Greater => {
                push(b[j]);
                j += 1;
            }
            Ordering::Equal => {
                push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    a[i..].iter().chain(&b[j..]).for_each(|&v| push(v));
    out
}
