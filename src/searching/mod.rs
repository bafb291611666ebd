//! Searching: binary search variations, two-pointer scans and binary search
//! on the answer.

mod binary;
mod two_pointer;

pub use binary::*;
pub use two_pointer::*;
