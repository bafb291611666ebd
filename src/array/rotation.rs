//! Array rotation by `d` positions.
//!
//! # Strategies
//!
//! | Function | Strategy | Extra space |
//! |----------|----------|-------------|
//! | [`rotate_left_naive`] | Copy the first `d` out, shift, copy back | O(d) |
//! | [`rotate_left_juggling`] | `gcd(n, d)` independent move cycles | O(1) |
//! | [`rotate_left_reversal`] | Reverse `[0, d)`, `[d, n)`, then the whole slice | O(1) |
//!
//! All variants reduce `d` modulo the slice length, so rotating by `n + 1` is
//! the same as rotating by 1.

use crate::logic_building::gcd_u64;

pub fn rotate_left_naive<T: Clone>(values: &mut [T], d: usize) {
    let n = values.len();
    if n == 0 {
        return;
    }
    let d = d % n;
    let head: Vec<T> = values[..d].to_vec();
    for i in d..n {
        values[i - d] = values[i].clone();
    }
    for (i, value) in head.into_iter().enumerate() {
        values[n - d + i] = value;
    }
}

/// Juggling rotation: element `i` moves to `i - d` along each of the
/// `gcd(n, d)` cycles.
pub fn rotate_left_juggling<T>(values: &mut [T], d: usize) {
    let n = values.len();
    if n == 0 {
        return;
    }
    let d = d % n;
    if d == 0 {
        return;
    }
    let cycles = gcd_u64(n as u64, d as u64) as usize;
    for start in 0..cycles {
        let mut current = start;
        loop {
            let next = (current + d) % n;
            if next == start {
                break;
            }
            values.swap(current, next);
            current = next;
        }
    }
}

pub fn rotate_left_reversal<T>(values: &mut [T], d: usize) {
    let n = values.len();
    if n == 0 {
        return;
    }
    let d = d % n;
    values[..d].reverse();
    values[d..].reverse();
    values.reverse();
}

/// Right rotation expressed as a left rotation by `n - d`.
pub fn rotate_right<T>(values: &mut [T], d: usize) {
    let n = values.len();
    if n == 0 {
        return;
    }
    rotate_left_reversal(values, n - d % n);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rotate_known_cases() {
        let cases: [(&[i32], usize, &[i32]); 5] = [
            (&[1, 2, 3, 4, 5], 2, &[3, 4, 5, 1, 2]),
            (&[1, 2, 3, 4, 5, 6], 2, &[3, 4, 5, 6, 1, 2]),
            (&[1, 2, 3], 0, &[1, 2, 3]),
            (&[1, 2, 3], 4, &[2, 3, 1]),
            (&[], 3, &[]),
        ];

        for (input, d, expected) in cases {
            let mut naive = input.to_vec();
            rotate_left_naive(&mut naive, d);
            assert_eq!(naive, expected, "naive d={d}");

            let mut juggling = input.to_vec();
            rotate_left_juggling(&mut juggling, d);
            assert_eq!(juggling, expected, "juggling d={d}");

            let mut reversal = input.to_vec();
            rotate_left_reversal(&mut reversal, d);
            assert_eq!(reversal, expected, "reversal d={d}");
        }
    }

    #[test]
    fn rotate_right_basic() {
        let mut values = [1, 2, 3, 4, 5];
        rotate_right(&mut values, 2);
        assert_eq!(values, [4, 5, 1, 2, 3]);
    }

    proptest! {
        #[test]
        fn variants_match_std(values in prop::collection::vec(any::<i32>(), 0..128), d in 0usize..300) {
            let mut expected = values.clone();
            if !expected.is_empty() {
                let len = expected.len();
                expected.rotate_left(d % len);
            }

            let mut naive = values.clone();
            rotate_left_naive(&mut naive, d);
            prop_assert_eq!(&naive, &expected);

            let mut juggling = values.clone();
            rotate_left_juggling(&mut juggling, d);
            prop_assert_eq!(&juggling, &expected);

            let mut reversal = values.clone();
            rotate_left_reversal(&mut reversal, d);
            prop_assert_eq!(&reversal, &expected);
        }

        #[test]
        fn right_undoes_left(values in prop::collection::vec(any::<i32>(), 0..128), d in 0usize..300) {
            let mut rotated = values.clone();
            rotate_left_juggling(&mut rotated, d);
            rotate_right(&mut rotated, d);
            prop_assert_eq!(rotated, values);
        }
    }
}
