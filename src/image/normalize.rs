//! Resampling to a square RGB grid and row-major flattening.

use image::{imageops::FilterType, RgbImage};
use ndarray::Array3;

use super::RGB_CHANNELS;

/// An RGB image resampled to `size x size`, stored as `(row, col, channel)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedImage {
    pixels: Array3<u8>,
}

impl NormalizedImage {
    /// Edge length of the square image.
    #[must_use]
    pub fn size(&self) -> usize {
        self.pixels.shape()[0]
    }

    /// Borrow the pixel array in `(row, col, channel)` order.
    #[must_use]
    pub fn pixels(&self) -> &Array3<u8> {
        &self.pixels
    }

    /// Flatten into `size * size * 3` bytes, channel varying fastest.
    ///
    /// Byte `i` is `(row * size + col) * 3 + channel`.
    #[must_use]
    pub fn flatten(self) -> Vec<u8> {
        self.pixels.iter().copied().collect()
    }
}

/// Resample `source` to `size x size` with bilinear interpolation.
///
/// A source that already has the target dimensions is copied unchanged.
#[must_use]
pub fn normalize(source: &RgbImage, size: u32) -> NormalizedImage {
    let resized = if source.dimensions() == (size, size) {
        source.clone()
    } else {
        image::imageops::resize(source, size, size, FilterType::Triangle)
    };

    let edge = size as usize;
    let raw = resized.as_raw();
    let pixels = Array3::from_shape_fn((edge, edge, RGB_CHANNELS), |(y, x, c)| {
        raw[(y * edge + x) * RGB_CHANNELS + c]
    });

    NormalizedImage { pixels }
}
