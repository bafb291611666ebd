//! Classic recursion exercises: sequences, Josephus, Tower of Hanoi and
//! include/exclude enumeration.

mod basics;
mod choices;
mod hanoi;
mod sequences;

pub use basics::*;
pub use choices::*;
pub use hanoi::*;
pub use sequences::*;
