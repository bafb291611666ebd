//! Array manipulation: rotation, rain water, leaders, subarray sums, prefix
//! sums and stock-span style scans.

mod basics;
mod leaders;
mod prefix;
mod rain_water;
mod rotation;
mod stock;
mod subarray;

pub use basics::*;
pub use leaders::*;
pub use prefix::*;
pub use rain_water::*;
pub use rotation::*;
pub use stock::*;
pub use subarray::*;
