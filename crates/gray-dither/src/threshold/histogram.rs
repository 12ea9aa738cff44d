//! Intensity histogram over an 8-bit grayscale image

use crate::image::GrayImage;

/// Pixel counts for each of the 256 intensity levels.
///
/// Levels that never occur read as zero. The sum of all counts equals the
/// number of pixels in the source image.
///
/// # Example
///
/// ```
/// use gray_dither::{GrayImage, Histogram};
///
/// let image = GrayImage::from_raw(2, 2, vec![0, 0, 255, 7]).unwrap();
/// let hist = Histogram::from_image(&image);
///
/// assert_eq!(hist.count(0), 2);
/// assert_eq!(hist.count(128), 0);
/// assert_eq!(hist.total(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: [u64; 256],
    total: u64,
}

impl Default for Histogram {
    fn default() -> Self {
        Self {
            counts: [0; 256],
            total: 0,
        }
    }
}

impl Histogram {
    /// Tabulate every pixel of `image`.
    pub fn from_image(image: &GrayImage) -> Self {
        let mut hist = Self::default();
        for &v in image.as_raw() {
            hist.counts[v as usize] += 1;
        }
        hist.total = image.len() as u64;
        hist
    }

    /// Build a histogram from explicit `(level, count)` pairs.
    ///
    /// Repeated levels accumulate.
    pub fn from_counts(pairs: impl IntoIterator<Item = (u8, u64)>) -> Self {
        let mut hist = Self::default();
        for (level, count) in pairs {
            hist.counts[level as usize] += count;
            hist.total += count;
        }
        hist
    }

    /// Number of pixels at `level`.
    #[inline]
    pub fn count(&self, level: u8) -> u64 {
        self.counts[level as usize]
    }

    /// Number of pixels tabulated.
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// All 256 counts, indexed by level.
    #[inline]
    pub fn counts(&self) -> &[u64; 256] {
        &self.counts
    }

    /// Levels that occur at least once, ascending, with their counts.
    pub fn levels(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        (0..=255u8)
            .map(|level| (level, self.counts[level as usize]))
            .filter(|&(_, count)| count > 0)
    }

    /// Mean intensity, or `None` for an empty histogram.
    pub fn mean(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        let sum: u64 = self.levels().map(|(level, count)| level as u64 * count).sum();
        Some(sum as f64 / self.total as f64)
    }
}
