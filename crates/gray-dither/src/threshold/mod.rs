//! Threshold binarization and its numeric building blocks.
//!
//! - [`Histogram`]: per-level pixel counts of a grayscale image
//! - [`otsu_threshold`]: automatic level selection from a histogram
//! - [`Threshold`]: the binarizing filter (static or Otsu level)
//!
//! The dithering engine reuses the histogram and Otsu pieces, but compares
//! with a strict `<` where [`Threshold`] uses `<=`. A pixel exactly at the
//! level therefore turns black here and white in a dither.

mod histogram;
mod otsu;

pub use histogram::Histogram;
pub use otsu::otsu_threshold;

use crate::color::Color;
use crate::gray::luminosity;
use crate::image::{GrayImage, Grid};

/// Level used by [`ThresholdAlgorithm::Static`] when none is configured.
pub const DEFAULT_STATIC_LEVEL: u8 = 127;

/// How [`Threshold`] chooses its level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThresholdAlgorithm {
    /// Caller-supplied level ([`DEFAULT_STATIC_LEVEL`] when unset or zero).
    Static,

    /// Level computed per image with Otsu's method.
    #[default]
    Otsu,
}

impl ThresholdAlgorithm {
    pub const ALL: [ThresholdAlgorithm; 2] = [ThresholdAlgorithm::Static, ThresholdAlgorithm::Otsu];

    pub fn name(self) -> &'static str {
        match self {
            ThresholdAlgorithm::Static => "static",
            ThresholdAlgorithm::Otsu => "otsu",
        }
    }

    /// Resolve an algorithm by name; anything unrecognized means Otsu.
    pub fn from_name(name: &str) -> Self {
        let wanted = crate::canonical_name(name);
        match Self::ALL.into_iter().find(|a| a.name() == wanted) {
            Some(algorithm) => algorithm,
            None => {
                tracing::warn!(name, "Unknown threshold algorithm, using otsu");
                ThresholdAlgorithm::Otsu
            }
        }
    }
}

/// Threshold filter: luminosity grayscale, then `value <= level ? 0 : 255`.
///
/// # Example
///
/// ```
/// use gray_dither::{GrayImage, Threshold, ThresholdAlgorithm};
///
/// let ramp = GrayImage::from_fn(16, 16, |x, y| (y * 16 + x) as u8);
///
/// let out = Threshold::new(ThresholdAlgorithm::Static).convert(&ramp);
/// let white = out.as_raw().iter().filter(|&&v| v == 255).count();
/// assert_eq!(white, 128); // levels 128..=255
///
/// let inverted = Threshold::new(ThresholdAlgorithm::Static)
///     .static_level(99)
///     .invert(true)
///     .convert(&ramp);
/// assert_eq!(inverted.as_raw().iter().filter(|&&v| v == 255).count(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Threshold {
    algorithm: ThresholdAlgorithm,
    static_level: Option<u8>,
    invert: bool,
}

impl Threshold {
    #[inline]
    pub fn new(algorithm: ThresholdAlgorithm) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }

    /// Set the level used by [`ThresholdAlgorithm::Static`].
    ///
    /// Zero counts as unset and falls back to [`DEFAULT_STATIC_LEVEL`].
    #[inline]
    pub fn static_level(mut self, level: u8) -> Self {
        self.static_level = Some(level);
        self
    }

    /// Swap black and white after classification.
    #[inline]
    pub fn invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    #[inline]
    pub fn algorithm(&self) -> ThresholdAlgorithm {
        self.algorithm
    }

    /// The level a static threshold will use.
    pub fn effective_static_level(&self) -> u8 {
        match self.static_level {
            Some(level) if level != 0 => level,
            _ => DEFAULT_STATIC_LEVEL,
        }
    }

    /// Binarize `image`.
    pub fn convert<C: Color>(&self, image: &Grid<C>) -> GrayImage {
        let gray = luminosity(image);
        let level = match self.algorithm {
            ThresholdAlgorithm::Static => self.effective_static_level(),
            ThresholdAlgorithm::Otsu => otsu_threshold(&Histogram::from_image(&gray)),
        };
        tracing::debug!(
            algorithm = self.algorithm.name(),
            level,
            invert = self.invert,
            "Applying threshold"
        );

        let invert = self.invert;
        gray.map(|v| {
            let out = if v <= level { 0x00 } else { 0xFF };
            if invert {
                255 - out
            } else {
                out
            }
        })
    }
}
