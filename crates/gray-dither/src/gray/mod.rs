//! Grayscale conversion.
//!
//! A [`GrayPolicy`] maps one color sample to one intensity. [`Gray`] applies
//! a policy across a whole image. The dithering, threshold and normalize
//! filters always use [`GrayPolicy::Luminosity`]; only [`Gray`] is
//! configurable.

mod policy;

pub use policy::GrayPolicy;

use crate::color::Color;
use crate::image::{GrayImage, Grid};

/// Grayscale conversion filter.
///
/// # Example
///
/// ```
/// use gray_dither::{Gray, GrayPolicy, Grid, Rgba8};
///
/// let image = Grid::filled(1, 1, Rgba8::rgb(0xFF, 0x00, 0x0F));
///
/// assert_eq!(Gray::new(GrayPolicy::Lightness).convert(&image).pixel(0, 0), 127);
/// assert_eq!(Gray::new(GrayPolicy::Average).convert(&image).pixel(0, 0), 90);
/// assert_eq!(Gray::new(GrayPolicy::Luminosity).convert(&image).pixel(0, 0), 54);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Gray {
    policy: GrayPolicy,
}

impl Gray {
    #[inline]
    pub fn new(policy: GrayPolicy) -> Self {
        Self { policy }
    }

    #[inline]
    pub fn policy(&self) -> GrayPolicy {
        self.policy
    }

    /// Convert every pixel of `image` to an 8-bit intensity.
    pub fn convert<C: Color>(&self, image: &Grid<C>) -> GrayImage {
        tracing::debug!(
            policy = self.policy.name(),
            width = image.width(),
            height = image.height(),
            "Converting to grayscale"
        );
        let policy = self.policy;
        image.map(|c| policy.intensity(&c))
    }
}

/// Luminosity grayscale, the fixed first stage of every binarizing filter.
#[inline]
pub(crate) fn luminosity<C: Color>(image: &Grid<C>) -> GrayImage {
    Gray::new(GrayPolicy::Luminosity).convert(image)
}
