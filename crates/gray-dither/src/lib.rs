//! gray-dither: monochrome error diffusion dithering
//!
//! Turns a color raster into pure black and white pixels whose local density
//! tracks the source's perceived brightness.
//!
//! # Quick Start
//!
//! ```
//! use gray_dither::{DiffusionAlgorithm, Dithering, Grid, Rgba8};
//!
//! let image = Grid::from_fn(16, 16, |x, y| Rgba8::rgb((x * 16) as u8, (y * 16) as u8, 128));
//! let out = Dithering::new(DiffusionAlgorithm::FloydSteinberg).convert(&image);
//!
//! assert_eq!(out.width(), 16);
//! assert_eq!(out.height(), 16);
//! ```
//!
//! # Filters
//!
//! Every filter takes any [`Grid`] of [`Color`] samples and returns a fresh
//! [`GrayImage`]:
//!
//! - [`Dithering`]: error diffusion with one of eight kernels
//! - [`Threshold`]: plain binarization at a static or Otsu level
//! - [`Gray`]: grayscale with a selectable [`GrayPolicy`]
//! - [`Normalize`]: linear contrast stretch
//!
//! # Channel Depth
//!
//! Colors are read as four 16-bit channels. 8-bit sources are widened by
//! `v * 0x101` so both depths produce the same grayscale:
//!
//! ```
//! use gray_dither::color::widen;
//!
//! assert_eq!(widen(0xFF), 0xFFFF);
//! assert_eq!(widen(0x80), 0x8080);
//! ```
//!
//! # Dithering Algorithms
//!
//! | Name | Cells | Divisor |
//! |------|-------|---------|
//! | `floyd-steinberg` (default) | 4 | 16 |
//! | `jarvis-judice-ninke` | 12 | 48 |
//! | `stucki` | 12 | 42 |
//! | `atkinson` | 6 | 8 (propagates 6/8) |
//! | `burkes` | 7 | 32 |
//! | `sierra` | 10 | 32 |
//! | `sierra-two-row` | 7 | 16 |
//! | `sierra-lite` | 3 | 4 |
//!
//! See [`DiffusionAlgorithm::from_name`] for name matching and aliases.

pub mod color;
pub mod dither;
pub mod error;
pub mod gray;
pub mod image;
pub mod normalize;
pub mod threshold;


pub use color::{Color, Rgba16, Rgba8};
pub use dither::{DiffusionAlgorithm, Dithering, Kernel};
pub use error::DitherError;
pub use gray::{Gray, GrayPolicy};
pub use image::{GrayImage, Grid, Rgba16Image, RgbaImage};
pub use normalize::Normalize;
pub use threshold::{otsu_threshold, Histogram, Threshold, ThresholdAlgorithm, DEFAULT_STATIC_LEVEL};

/// Lowercase, trimmed, with `_` and spaces turned into `-`.
pub(crate) fn canonical_name(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            '_' | ' ' => '-',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}
