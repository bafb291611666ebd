//! Comparison sorts, partitioning, non-comparison sorts and the problems that
//! fall out of sorting first.

mod counting;
mod elementary;
mod intervals;
mod merge;
mod partition;

pub use counting::*;
pub use elementary::*;
pub use intervals::*;
pub use merge::*;
pub use partition::*;
