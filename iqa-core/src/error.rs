use thiserror::Error;

/// Common errors across the image QA toolkit
#[derive(Error, Debug)]
pub enum IqaError {
    #[error("ROI generation error: {0}")]
    Roi(#[from] RoiError),

    #[error("Image difference error: {0}")]
    Diff(#[from] DiffError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[derive(Error, Debug)]
pub enum RoiError {
    #[error("Canvas must be nonzero, got {width}x{height}")]
    EmptyCanvas { width: u32, height: u32 },

    #[error("Minimum ROI size must be nonzero")]
    ZeroSize,

    #[error("Minimum size {min} exceeds maximum size {max}")]
    SizeRangeInverted { min: u32, max: u32 },

    #[error("Maximum size {max} does not fit a {width}x{height} canvas")]
    SizeExceedsCanvas { max: u32, width: u32, height: u32 },
}

#[derive(Error, Debug)]
pub enum DiffError {
    #[error("Images must have the same dimensions, got {0}x{1} and {2}x{3}")]
    DimensionMismatch(usize, usize, usize, usize),

    #[error("Images must be non-empty")]
    EmptyImage,
}

pub type Result<T> = std::result::Result<T, IqaError>;
