//! Hashing tricks: distinct counts, pair sums, prefix-sum lookups and
//! recurring decimals.

mod counting;
mod fraction;
mod pairs;
mod subarrays;

pub use counting::*;
pub use fraction::*;
pub use pairs::*;
pub use subarrays::*;
