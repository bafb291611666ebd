//! GCD, LCM, trailing zeros of factorials and modular exponentiation.

use crate::error::{AlgoError, AlgoResult};

/// Euclidean GCD of the magnitudes of `a` and `b`.
///
/// Returned unsigned because `gcd(i64::MIN, 0)` is `2^63`.
pub fn gcd_euclid(a: i64, b: i64) -> u64 {
    gcd_u64(a.unsigned_abs(), b.unsigned_abs())
}

pub(crate) fn gcd_u64(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Binary (Stein's) GCD: replaces division with shifts and subtraction.
pub fn gcd_binary(a: i64, b: i64) -> u64 {
    let mut a = a.unsigned_abs();
    let mut b = b.unsigned_abs();
    if a == 0 {
        return b;
    }
    if b == 0 {
        return a;
    }

    let mut az = a.trailing_zeros();
    let bz = b.trailing_zeros();
    let shift = az.min(bz);
    b >>= bz;

    while a != 0 {
        a >>= az;
        if a == b {
            return b << shift;
        }
        let (min_ab, diff) = if a < b { (a, b - a) } else { (b, a - b) };
        az = diff.trailing_zeros();
        b = min_ab;
        a = diff;
    }

    b << shift
}

/// Least common multiple via `a / gcd(a, b) * b`.
///
/// `lcm(0, x)` is 0. Returns [`AlgoError::Overflow`] if the result does not fit.
pub fn lcm(a: i64, b: i64) -> AlgoResult<i64> {
    if a == 0 || b == 0 {
        return Ok(0);
    }
    let g = gcd_u64(a.unsigned_abs(), b.unsigned_abs());
    (a.unsigned_abs() / g)
        .checked_mul(b.unsigned_abs())
        .and_then(|v| i64::try_from(v).ok())
        .ok_or(AlgoError::Overflow("lcm exceeds i64"))
}

/// Number of trailing zeros in `n!`, counting factors of 5.
pub fn factorial_trailing_zeros(n: u64) -> u64 {
    let mut count = 0;
    let mut n = n;
    while n >= 5 {
        n /= 5;
        count += n;
    }
    count
}

/// `base^exp mod modulus` by repeated squaring in O(log exp).
pub fn pow_mod(base: u64, exp: u64, modulus: u64) -> AlgoResult<u64> {
    if modulus == 0 {
        tracing::debug!(base, exp, "pow_mod called with zero modulus");
        return Err(AlgoError::DivisionByZero);
    }
    let m = modulus as u128;
    let mut result = 1u128 % m;
    let mut b = base as u128 % m;
    let mut e = exp;
    while e > 0 {
        if e & 1 == 1 {
            result = result * b % m;
        }
        b = b * b % m;
        e >>= 1;
    }
    Ok(result as u64)
}
