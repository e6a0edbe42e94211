use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IoError {
    #[error("Failed to decode image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to encode image {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Test case {case} must contain exactly 2 images, found {found}")]
    ImagePairCount { case: String, found: usize },
}

pub type Result<T> = std::result::Result<T, IoError>;
