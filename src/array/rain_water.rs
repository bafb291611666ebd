//! Trapping rain water between bars of the given heights.
//!
//! The water above bar `i` is `min(max_left(i), max_right(i)) - height[i]`,
//! where both maxima include the bar itself.
//!
//! | Function | Strategy | Time | Space |
//! |----------|----------|------|-------|
//! | [`trapped_water_naive`] | Rescan both sides per bar | O(n²) | O(1) |
//! | [`trapped_water_prefix`] | Precomputed left/right maxima | O(n) | O(n) |
//! | [`trapped_water_two_pointer`] | Move the lower side inward | O(n) | O(1) |

pub fn trapped_water_naive(heights: &[u32]) -> u64 {
    let n = heights.len();
    if n < 3 {
        return 0;
    }
    let mut total = 0u64;
    for i in 1..n - 1 {
        let left = heights[..=i].iter().copied().max().unwrap_or(0);
        let right = heights[i..].iter().copied().max().unwrap_or(0);
        total += (left.min(right) - heights[i]) as u64;
    }
    total
}

pub fn trapped_water_prefix(heights: &[u32]) -> u64 {
    let n = heights.len();
    if n < 3 {
        return 0;
    }
    let mut left_max = vec![0u32; n];
    let mut right_max = vec![0u32; n];

    left_max[0] = heights[0];
    for i in 1..n {
        left_max[i] = left_max[i - 1].max(heights[i]);
    }
    right_max[n - 1] = heights[n - 1];
    for i in (0..n - 1).rev() {
        right_max[i] = right_max[i + 1].max(heights[i]);
    }

    (1..n - 1)
        .map(|i| (left_max[i].min(right_max[i]) - heights[i]) as u64)
        .sum()
}

/// The side with the smaller running maximum bounds the water level, so it can
/// be settled without knowing the rest of the array.
pub fn trapped_water_two_pointer(heights: &[u32]) -> u64 {
    if heights.len() < 3 {
        return 0;
    }
    let (mut lo, mut hi) = (0usize, heights.len() - 1);
    let (mut left_max, mut right_max) = (0u32, 0u32);
    let mut total = 0u64;
    while lo < hi {
        if heights[lo] <= heights[hi] {
            left_max = left_max.max(heights[lo]);
            total += (left_max - heights[lo]) as u64;
            lo += 1;
        } else {
            right_max = right_max.max(heights[hi]);
            total += (right_max - heights[hi]) as u64;
            hi -= 1;
        }
    }
    total
}
