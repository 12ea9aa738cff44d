//! Float intensity field owned by the diffusion scan

use crate::image::GrayImage;

/// Mutable `f32` intensity per pixel, row-major, indexed `y * width + x`.
///
/// Values start at the grayscale intensity and accumulate diffused error,
/// so they may leave `0.0..=255.0` before being quantized.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct IntensityField {
    width: usize,
    height: usize,
    values: Vec<f32>,
}

impl IntensityField {
    pub(crate) fn from_gray(image: &GrayImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            values: image.as_raw().iter().map(|&v| v as f32).collect(),
        }
    }

    #[inline]
    pub(crate) fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub(crate) fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub(crate) fn get(&self, x: usize, y: usize) -> f32 {
        self.values[y * self.width + x]
    }

    #[inline]
    pub(crate) fn set(&mut self, x: usize, y: usize, value: f32) {
        self.values[y * self.width + x] = value;
    }

    /// Add `delta` at `(x, y)`. Targets outside the field are dropped.
    #[inline]
    pub(crate) fn add(&mut self, x: i64, y: i64, delta: f32) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        self.values[y as usize * self.width + x as usize] += delta;
    }

    /// Narrow every value to a byte: truncate toward zero to an integer,
    /// then keep the low eight bits.
    ///
    /// Out of range values wrap modulo 256, so -40.0 becomes 216 and 300.0
    /// becomes 44.
    pub(crate) fn into_gray(self) -> GrayImage {
        GrayImage::from_fn(self.width, self.height, |x, y| {
            self.values[y * self.width + x] as i32 as u8
        })
    }
}
