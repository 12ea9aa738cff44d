//! Image containers.
//!
//! [`Grid`] is the single rectangular container used across the pipeline:
//! color sources (`Grid<Rgba8>`, `Grid<Rgba16>`), grayscale results
//! ([`GrayImage`]) and anything else that needs O(1) access by `(x, y)`.

mod grid;

pub use grid::Grid;

use crate::color::{Rgba16, Rgba8};

/// Single-channel 8-bit intensity image. Filter outputs use this type.
pub type GrayImage = Grid<u8>;

/// 8-bit RGBA source image.
pub type RgbaImage = Grid<Rgba8>;

/// 16-bit RGBA source image.
pub type Rgba16Image = Grid<Rgba16>;
