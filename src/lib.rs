//! Textbook algorithms over arrays, strings, hash tables, sorted data and
//! recursion, each written in plain safe Rust.
//!
//! Many problems ship a straightforward variant next to the one a textbook
//! would call optimal, so the two can be compared in tests and benchmarks.
//!
//! # Modules
//!
//! - [`array`]: rotation, trapped rain water, leaders, Kadane, prefix sums
//! - [`string`]: palindromes (Manacher), KMP, Rabin-Karp, anagrams
//! - [`hashing`]: frequency counting, pair and subarray sums, recurring decimals
//! - [`searching`]: binary search variations, two pointers, search on the answer
//! - [`sorting`]: elementary sorts, merge sort, partitioning, counting/radix, intervals
//! - [`recursion`]: Fibonacci, Josephus, Tower of Hanoi, subsets and permutations
//! - [`logic_building`]: digits, GCD/LCM, modular power, primes
//!
//! # Conventions
//!
//! An answer that may not exist comes back as [`Option`]. Input that cannot be
//! answered at all (a negative index, a zero modulus, a result that overflows)
//! comes back as an [`AlgoError`].

pub mod array;
mod error;
pub mod hashing;
pub mod logic_building;
pub mod recursion;
pub mod searching;
pub mod sorting;
pub mod string;

pub use error::{AlgoError, AlgoResult};
