//! Fibonacci, factorial and the Josephus problem.

use crate::error::{AlgoError, AlgoResult};

/// Largest index whose Fibonacci number fits in a `u64`.
const MAX_FIB_INDEX: i64 = 93;

/// `F(n)` with `F(0) = 0` and `F(1) = 1`, computed iteratively.
///
/// Negative indices return `NegativeInput` and indices above 93 return
/// `Overflow`.
///
/// ```
/// use textbook_algorithms::recursion::fibonacci;
///
/// assert_eq!(fibonacci(10), Ok(55));
/// assert!(fibonacci(-1).is_err());
/// ```
pub fn fibonacci(n: i64) -> AlgoResult<u64> {
    if n < 0 {
        tracing::debug!(n, "fibonacci called with a negative index");
        return Err(AlgoError::NegativeInput { what: "fibonacci index", value: n });
    }
    if n > MAX_FIB_INDEX {
        tracing::debug!(n, "fibonacci index past u64 range");
        return Err(AlgoError::Overflow("fibonacci exceeds u64"));
    }
    let (mut a, mut b) = (0u64, 1u64);
    for _ in 0..n {
        (a, b) = (b, a.wrapping_add(b));
    }
    Ok(a)
}

/// The exponential two-call recursion. Keep `n` small.
pub fn fibonacci_naive(n: u32) -> u64 {
    if n < 2 {
        return n as u64;
    }
    fibonacci_naive(n - 1) + fibonacci_naive(n - 2)
}

/// `n!`, with `Overflow` from 21 onwards.
pub fn factorial(n: u32) -> AlgoResult<u64> {
    (2..=n as u64).try_fold(1u64, |acc, k| {
        acc.checked_mul(k).ok_or_else(|| {
            tracing::debug!(n, "factorial past u64 range");
            AlgoError::Overflow("factorial exceeds u64")
        })
    })
}

fn check_josephus(n: usize, k: usize) -> AlgoResult<()> {
    if n == 0 || k == 0 {
        tracing::debug!(n, k, "josephus needs at least one person and a positive step");
        return Err(AlgoError::InvalidArgument(format!(
            "josephus needs n > 0 and k > 0, got n={n}, k={k}"
        )));
    }
    Ok(())
}

/// 0-based position of the survivor when every `k`-th of `n` people in a
/// circle is eliminated. Uses `J(1) = 0`, `J(n) = (J(n - 1) + k) mod n`.
///
/// Recurses `n` frames deep; use [`josephus_iterative`] for large circles.
pub fn josephus(n: usize, k: usize) -> AlgoResult<usize> {
    fn go(n: usize, k: usize) -> usize {
        if n == 1 {
            return 0;
        }
        (go(n - 1, k) + k % n) % n
    }
    check_josephus(n, k)?;
    Ok(go(n, k))
}

/// Same recurrence unrolled bottom-up, so large `n` does not grow the stack.
pub fn josephus_iterative(n: usize, k: usize) -> AlgoResult<usize> {
    check_josephus(n, k)?;
    Ok((2..=n).fold(0, |survivor, size| (survivor + k % size) % size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::VecDeque;

    fn josephus_simulated(n: usize, k: usize) -> usize {
        let mut circle: VecDeque<usize> = (0..n).collect();
        while circle.len() > 1 {
            let steps = (k - 1) % circle.len();
            circle.rotate_left(steps);
            circle.pop_front();
        }
        circle[0]
    }

    #[test]
    fn fibonacci_cases() {
        assert_eq!(fibonacci(0), Ok(0));
        assert_eq!(fibonacci(1), Ok(1));
        assert_eq!(fibonacci(93), Ok(12_200_160_415_121_876_738));
        assert_eq!(fibonacci(94), Err(AlgoError::Overflow("fibonacci exceeds u64")));
        assert_eq!(
            fibonacci(-3),
            Err(AlgoError::NegativeInput { what: "fibonacci index", value: -3 })
        );
    }

    #[test]
    fn factorial_cases() {
        assert_eq!(factorial(0), Ok(1));
        assert_eq!(factorial(5), Ok(120));
        assert_eq!(factorial(20), Ok(2_432_902_008_176_640_000));
        assert_eq!(factorial(21), Err(AlgoError::Overflow("factorial exceeds u64")));
    }

    #[test]
    fn josephus_cases() {
        assert_eq!(josephus(7, 3), Ok(3));
        assert_eq!(josephus(5, 3), Ok(3));
        assert_eq!(josephus(1, 10), Ok(0));
        assert_eq!(josephus_iterative(7, 3), Ok(3));
        assert!(matches!(josephus(0, 3), Err(AlgoError::InvalidArgument(_))));
        assert!(matches!(josephus_iterative(4, 0), Err(AlgoError::InvalidArgument(_))));
        assert_eq!(josephus_iterative(1_000_000, 2), Ok(951_424));
    }

    proptest! {
        #[test]
        fn fibonacci_matches_naive(n in 0u32..25) {
            prop_assert_eq!(fibonacci(n as i64), Ok(fibonacci_naive(n)));
        }

        #[test]
        fn josephus_variants_match_simulation(n in 1usize..60, k in 1usize..80) {
            let expected = josephus_simulated(n, k);
            prop_assert_eq!(josephus(n, k), Ok(expected));
            prop_assert_eq!(josephus_iterative(n, k), Ok(expected));
        }
    }
}
