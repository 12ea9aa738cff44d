//! Error diffusion dithering to pure black and white.
//!
//! # Pipeline
//!
//! 1. Luminosity grayscale of the source
//! 2. Threshold from Otsu's method over that grayscale (or a fixed override)
//! 3. One forward scan over a float intensity field: quantize each visited
//!    pixel to 0 or 255 and push the quantization error onto unvisited
//!    neighbors through the selected [`Kernel`]
//! 4. Narrow the field back to bytes
//!
//! # Scan Region
//!
//! The scan visits rows `0..height-1` and columns `1..width-1`. The first
//! and last column and the whole last row are never quantized: they keep
//! their grayscale intensity plus whatever error the interior pushed onto
//! them. Outputs therefore carry a gray frame on three sides.
//!
//! # Ordering
//!
//! The scan is strictly sequential. Every decision depends on error written
//! by earlier pixels, so it cannot be split across threads, and kernels must
//! be [forward-only](Kernel::is_forward_only).

mod field;
mod kernel;

pub use kernel::*;

use field::IntensityField;

use crate::color::Color;
use crate::gray::luminosity;
use crate::image::{GrayImage, Grid};
use crate::threshold::{otsu_threshold, Histogram};

/// Error diffusion algorithm selection.
///
/// Each variant names one entry of the kernel registry; see
/// [`DiffusionAlgorithm::kernel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DiffusionAlgorithm {
    /// Floyd-Steinberg: 4 neighbors, 100% propagation. The fallback for
    /// unrecognized names.
    #[default]
    FloydSteinberg,

    /// Jarvis-Judice-Ninke: 12 neighbors over 3 rows.
    JarvisJudiceNinke,

    /// Stucki: JJN layout with heavier center weights.
    Stucki,

    /// Atkinson: 6 neighbors, only 75% of the error propagates.
    Atkinson,

    /// Burkes: the first two rows of Stucki.
    Burkes,

    /// Sierra (Sierra-3): 10 neighbors over 3 rows.
    Sierra,

    /// Two-Row Sierra: 7 neighbors over 2 rows.
    SierraTwoRow,

    /// Sierra Lite: 3 neighbors.
    SierraLite,
}

impl DiffusionAlgorithm {
    /// Every registered algorithm.
    pub const ALL: [DiffusionAlgorithm; 8] = [
        DiffusionAlgorithm::FloydSteinberg,
        DiffusionAlgorithm::JarvisJudiceNinke,
        DiffusionAlgorithm::Stucki,
        DiffusionAlgorithm::Atkinson,
        DiffusionAlgorithm::Burkes,
        DiffusionAlgorithm::Sierra,
        DiffusionAlgorithm::SierraTwoRow,
        DiffusionAlgorithm::SierraLite,
    ];

    /// The diffusion kernel for this algorithm.
    pub fn kernel(self) -> &'static Kernel {
        match self {
            DiffusionAlgorithm::FloydSteinberg => &FLOYD_STEINBERG,
            DiffusionAlgorithm::JarvisJudiceNinke => &JARVIS_JUDICE_NINKE,
            DiffusionAlgorithm::Stucki => &STUCKI,
            DiffusionAlgorithm::Atkinson => &ATKINSON,
            DiffusionAlgorithm::Burkes => &BURKES,
            DiffusionAlgorithm::Sierra => &SIERRA,
            DiffusionAlgorithm::SierraTwoRow => &SIERRA_TWO_ROW,
            DiffusionAlgorithm::SierraLite => &SIERRA_LITE,
        }
    }

    /// Canonical kebab-case name.
    pub fn name(self) -> &'static str {
        match self {
            DiffusionAlgorithm::FloydSteinberg => "floyd-steinberg",
            DiffusionAlgorithm::JarvisJudiceNinke => "jarvis-judice-ninke",
            DiffusionAlgorithm::Stucki => "stucki",
            DiffusionAlgorithm::Atkinson => "atkinson",
            DiffusionAlgorithm::Burkes => "burkes",
            DiffusionAlgorithm::Sierra => "sierra",
            DiffusionAlgorithm::SierraTwoRow => "sierra-two-row",
            DiffusionAlgorithm::SierraLite => "sierra-lite",
        }
    }

    /// Resolve an algorithm by name.
    ///
    /// Matching ignores case and treats `_` and spaces like `-`. Besides the
    /// canonical names, a few common aliases are accepted (`fs`, `jjn`,
    /// `sierra-3`, `sierra-2`, `two-row-sierra`). Anything else resolves to
    /// [`DiffusionAlgorithm::FloydSteinberg`].
    ///
    /// ```
    /// use gray_dither::DiffusionAlgorithm;
    ///
    /// assert_eq!(DiffusionAlgorithm::from_name("JJN"), DiffusionAlgorithm::JarvisJudiceNinke);
    /// assert_eq!(DiffusionAlgorithm::from_name("sierra_lite"), DiffusionAlgorithm::SierraLite);
    /// assert_eq!(DiffusionAlgorithm::from_name("bayer"), DiffusionAlgorithm::FloydSteinberg);
    /// ```
    pub fn from_name(name: &str) -> Self {
        let wanted = crate::canonical_name(name);
        if let Some(algorithm) = Self::ALL.into_iter().find(|a| a.name() == wanted) {
            return algorithm;
        }
        match wanted.as_str() {
            "fs" | "floyd" => DiffusionAlgorithm::FloydSteinberg,
            "jjn" | "jarvis" => DiffusionAlgorithm::JarvisJudiceNinke,
            "sierra-3" | "sierra3" => DiffusionAlgorithm::Sierra,
            "sierra-2" | "sierra2" | "two-row-sierra" => DiffusionAlgorithm::SierraTwoRow,
            _ => {
                tracing::warn!(name, "Unknown diffusion algorithm, using floyd-steinberg");
                DiffusionAlgorithm::FloydSteinberg
            }
        }
    }
}

/// Error diffusion dithering filter.
///
/// Reusable: [`convert`](Self::convert) takes `&self` and keeps no state
/// between calls.
///
/// # Example
///
/// ```
/// use gray_dither::{DiffusionAlgorithm, Dithering, GrayImage};
///
/// let image = GrayImage::from_fn(32, 32, |x, _| (x * 8) as u8);
/// let out = Dithering::new(DiffusionAlgorithm::Atkinson).convert(&image);
///
/// // Interior pixels are always pure black or white.
/// for y in 0..31 {
///     for x in 1..31 {
///         assert!(matches!(out.pixel(x, y), 0 | 255));
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dithering {
    algorithm: DiffusionAlgorithm,
    threshold: Option<u8>,
}

impl Dithering {
    #[inline]
    pub fn new(algorithm: DiffusionAlgorithm) -> Self {
        Self {
            algorithm,
            threshold: None,
        }
    }

    /// Quantize against a fixed level instead of the per-image Otsu level.
    #[inline]
    pub fn threshold(mut self, level: u8) -> Self {
        self.threshold = Some(level);
        self
    }

    #[inline]
    pub fn algorithm(&self) -> DiffusionAlgorithm {
        self.algorithm
    }

    /// Dither `image` to black and white.
    pub fn convert<C: Color>(&self, image: &Grid<C>) -> GrayImage {
        if image.is_empty() {
            return GrayImage::filled(image.width(), image.height(), 0);
        }

        let gray = luminosity(image);
        // Computed from the untouched grayscale, before any error is diffused.
        let threshold = match self.threshold {
            Some(level) => level,
            None => otsu_threshold(&Histogram::from_image(&gray)),
        };
        tracing::debug!(
            algorithm = self.algorithm.name(),
            threshold,
            width = gray.width(),
            height = gray.height(),
            "Dithering"
        );

        let mut field = IntensityField::from_gray(&gray);
        diffuse(&mut field, self.algorithm.kernel(), threshold);
        field.into_gray()
    }
}

/// Binary quantization. Strict `<`: a value equal to the threshold is white.
#[inline]
fn quantize(value: f32, threshold: f32) -> f32 {
    if value < threshold {
        0.0
    } else {
        255.0
    }
}

/// Run the error diffusion scan over `field` in place.
fn diffuse(field: &mut IntensityField, kernel: &Kernel, threshold: u8) {
    let width = field.width();
    let height = field.height();
    let threshold = threshold as f32;
    let divisor = kernel.divisor as f32;

    for y in 0..height.saturating_sub(1) {
        for x in 1..width.saturating_sub(1) {
            let old = field.get(x, y);
            let new = quantize(old, threshold);
            field.set(x, y, new);

            let error = old - new;
            for &(dx, dy, weight) in kernel.entries {
                field.add(
                    x as i64 + dx as i64,
                    y as i64 + dy as i64,
                    error * weight as f32 / divisor,
                );
            }
        }
    }
}
