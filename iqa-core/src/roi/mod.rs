//! ROI geometry, random generation, and pairwise overlap statistics

mod generate;
mod overlap;
mod rect;

pub use generate::RoiParams;
pub use overlap::{OverlapReport, pairwise};
pub use rect::{OverlapResult, Roi};
