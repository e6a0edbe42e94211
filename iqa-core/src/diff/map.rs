use ndarray::Array2;

use crate::error::DiffError;

/// Thresholded absolute difference of two same-sized grayscale images.
///
/// Pixels whose absolute difference exceeds the threshold keep their
/// difference value; all others are zeroed.
#[derive(Debug, Clone)]
pub struct DiffMap {
    values: Array2<u8>,
    threshold: u8,
}

impl DiffMap {
    /// Compare two grayscale grids.
    ///
    /// Returns an error when the grids differ in shape or are empty.
    pub fn compute(a: &Array2<u8>, b: &Array2<u8>, threshold: u8) -> Result<Self, DiffError> {
        let (height, width) = a.dim();
        let (b_height, b_width) = b.dim();

        if (height, width) != (b_height, b_width) {
            return Err(DiffError::DimensionMismatch(
                width, height, b_width, b_height,
            ));
        }
        if height == 0 || width == 0 {
            return Err(DiffError::EmptyImage);
        }

        let mut values = Array2::<u8>::zeros((height, width));
        for row in 0..height {
            for col in 0..width {
                let diff = a[[row, col]].abs_diff(b[[row, col]]);
                if diff > threshold {
                    values[[row, col]] = diff;
                }
            }
        }

        Ok(Self { values, threshold })
    }

    /// Grid width in pixels
    pub fn width(&self) -> usize {
        self.values.ncols()
    }

    /// Grid height in pixels
    pub fn height(&self) -> usize {
        self.values.nrows()
    }

    /// Dimensions as (width, height)
    pub fn size(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    /// The thresholded difference grid, indexed [row, col]
    pub fn values(&self) -> &Array2<u8> {
        &self.values
    }

    /// Threshold the map was computed with
    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Number of pixels whose difference survived the threshold
    pub fn changed_pixels(&self) -> usize {
        self.values.iter().filter(|&&v| v != 0).count()
    }
}
