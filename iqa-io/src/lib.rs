//! I/O operations for the image QA tools

pub mod cases;
pub mod error;
pub mod image;
pub mod render;
pub mod report;
pub mod table;

pub use self::image::GrayImage8;
pub use cases::TestCase;
pub use error::{IoError, Result};
pub use table::BatchRow;
