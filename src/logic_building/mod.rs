//! Number-theory warm-ups: digits, GCD/LCM, modular powers and primes.

mod arithmetic;
mod digits;
mod primes;

pub(crate) use arithmetic::gcd_u64;
pub use arithmetic::{factorial_trailing_zeros, gcd_binary, gcd_euclid, lcm, pow_mod};
pub use digits::*;
pub use primes::*;
