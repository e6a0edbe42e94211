//! Image difference maps and significant-change regions

mod map;
mod regions;

pub use map::DiffMap;
pub use regions::{DEFAULT_MIN_AREA, DiffRegion, find_regions};
