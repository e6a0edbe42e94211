pub mod diff;
pub mod error;
pub mod roi;

pub use diff::{DEFAULT_MIN_AREA, DiffMap, DiffRegion, find_regions};
pub use error::{DiffError, IqaError, Result, RoiError};
pub use roi::{OverlapReport, OverlapResult, Roi, RoiParams, pairwise};
