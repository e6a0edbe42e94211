use super::rect::Roi;
use crate::error::RoiError;

/// Validated parameter set for one ROI generation run
#[derive(Debug, Clone)]
pub struct RoiParams {
    count: usize,
    canvas_width: u32,
    canvas_height: u32,
    min_size: u32,
    max_size: u32,
    seed: Option<u64>,
}

impl RoiParams {
    /// Validate a parameter set.
    ///
    /// The canvas and minimum size must be nonzero, the size range must not
    /// be inverted, and the maximum size must fit within both canvas
    /// dimensions so every ROI has at least one valid placement.
    pub fn new(
        count: usize,
        canvas_width: u32,
        canvas_height: u32,
        min_size: u32,
        max_size: u32,
    ) -> Result<Self, RoiError> {
        if canvas_width == 0 || canvas_height == 0 {
            return Err(RoiError::EmptyCanvas {
                width: canvas_width,
                height: canvas_height,
            });
        }
        if min_size == 0 {
            return Err(RoiError::ZeroSize);
        }
        if min_size > max_size {
            return Err(RoiError::SizeRangeInverted {
                min: min_size,
                max: max_size,
            });
        }
        if max_size > canvas_width || max_size > canvas_height {
            return Err(RoiError::SizeExceedsCanvas {
                max: max_size,
                width: canvas_width,
                height: canvas_height,
            });
        }

        Ok(Self {
            count,
            canvas_width,
            canvas_height,
            min_size,
            max_size,
            seed: None,
        })
    }

    /// Fix the RNG seed so repeated runs draw the same ROIs
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn canvas_width(&self) -> u32 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> u32 {
        self.canvas_height
    }

    pub fn min_size(&self) -> u32 {
        self.min_size
    }

    pub fn max_size(&self) -> u32 {
        self.max_size
    }

    /// Draw `count` square ROIs with uniformly random size and position.
    ///
    /// Positions are drawn over all placements that keep the ROI fully
    /// inside the canvas. Unseeded runs vary; a fixed seed reproduces the
    /// exact sequence.
    pub fn generate(&self) -> Vec<Roi> {
        let mut rng = match self.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };

        (0..self.count)
            .map(|_| {
                let size = rng.u32(self.min_size..=self.max_size);
                let x = rng.u32(0..=self.canvas_width - size);
                let y = rng.u32(0..=self.canvas_height - size);
                Roi::new(x, y, size, size)
            })
            .collect()
    }
}
