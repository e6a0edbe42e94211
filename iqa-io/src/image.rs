use std::path::Path;

use image::{GrayImage, Luma};
use ndarray::Array2;

use crate::error::{IoError, Result};

/// 8-bit grayscale image backed by an ndarray grid, indexed [row, col]
pub struct GrayImage8 {
    pixels: Array2<u8>,
}

impl GrayImage8 {
    /// Decode an image file and convert it to 8-bit grayscale
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let decoded = image::open(path).map_err(|source| IoError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let gray = decoded.to_luma8();
        let (width, height) = gray.dimensions();

        let mut pixels = Array2::<u8>::zeros((height as usize, width as usize));
        for y in 0..height {
            for x in 0..width {
                pixels[[y as usize, x as usize]] = gray.get_pixel(x, y)[0];
            }
        }

        Ok(Self { pixels })
    }

    /// Wrap an existing grayscale grid
    pub fn from_pixels(pixels: Array2<u8>) -> Self {
        Self { pixels }
    }

    /// Get width
    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    /// Get height
    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    /// Get image dimensions (width, height)
    pub fn size(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    /// The pixel grid
    pub fn pixels(&self) -> &Array2<u8> {
        &self.pixels
    }
}

/// Encode a grayscale grid as an image file (format from the extension)
pub fn save_gray<P: AsRef<Path>>(path: P, values: &Array2<u8>) -> Result<()> {
    let path = path.as_ref();
    let (height, width) = values.dim();

    let mut out = GrayImage::new(width as u32, height as u32);
    for y in 0..height {
        for x in 0..width {
            out.put_pixel(x as u32, y as u32, Luma([values[[y, x]]]));
        }
    }

    out.save(path).map_err(|source| IoError::Encode {
        path: path.to_path_buf(),
        source,
    })
}
