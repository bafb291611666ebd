//! String processing: palindromes, pattern search, rotations and anagrams.

mod anagram;
mod palindrome;
mod pattern;
mod rotation;
mod words;

pub use anagram::*;
pub use palindrome::*;
pub use pattern::{kmp_search, lps_array, naive_search, naive_search_distinct, rabin_karp_search};
pub use rotation::*;
pub use words::*;
