//! Contrast stretch over the luminosity grayscale.

use crate::color::Color;
use crate::gray::luminosity;
use crate::image::{GrayImage, Grid};

/// Linear contrast stretch.
///
/// Converts to luminosity gray, then maps the darkest level to 0 and scales
/// the rest by `(v - min) * (255.0 / (max - min))` in `f64`, truncated. The
/// scale factor is rounded before the multiply, so for some ranges (25, 100,
/// 105, ...) the brightest level lands on 254 rather than 255. A flat image
/// (every pixel the same level) has no range to stretch and is returned as
/// its grayscale.
///
/// ```
/// use gray_dither::{GrayImage, Normalize};
///
/// let image = GrayImage::from_raw(2, 2, vec![0, 25, 50, 127]).unwrap();
/// assert_eq!(Normalize.convert(&image).as_raw(), &[0, 50, 100, 255]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Normalize;

impl Normalize {
    pub fn convert<C: Color>(&self, image: &Grid<C>) -> GrayImage {
        let gray = luminosity(image);
        let min = gray.as_raw().iter().copied().min();
        let max = gray.as_raw().iter().copied().max();
        let (Some(min), Some(max)) = (min, max) else {
            return gray;
        };
        if min == max {
            return gray;
        }

        tracing::debug!(min, max, "Normalizing");
        let scale = 255.0 / (max - min) as f64;
        gray.map(|v| ((v - min) as f64 * scale) as u8)
    }
}
