//! Pixel types and the 16-bit channel convention
//!
//! Every pixel type the filters accept implements [`Color`], which exposes
//! the four channels widened to 16 bits and premultiplied by alpha.
//! Grayscale policies compute on these widened values and narrow their
//! result with `>> 8`, so an 8-bit source and its 16-bit equivalent produce
//! identical intensities.
//!
//! # Example
//!
//! ```
//! use gray_dither::{Color, Rgba8, Rgba16};
//!
//! let red = Rgba8::new(255, 0, 0, 255);
//! assert_eq!(red.rgba16(), [0xFFFF, 0, 0, 0xFFFF]);
//!
//! let same = Rgba16::from(red);
//! assert_eq!(same.rgba16(), red.rgba16());
//!
//! let clear = Rgba8::new(255, 0, 0, 0);
//! assert_eq!(clear.rgba16(), [0, 0, 0, 0]);
//! ```

mod rgba;

pub use rgba::{widen, Rgba16, Rgba8};

/// A pixel readable as four channels widened to the 16-bit range.
///
/// Channels are returned as `[R, G, B, A]`, each in `0..=0xFFFF`. An 8-bit
/// channel value `v` widens to `v * 0x101` (so `0xFF` becomes `0xFFFF`).
/// Color channels are premultiplied by alpha (`c * a / 0xFFFF`), so a fully
/// transparent pixel reads as black.
pub trait Color: Copy {
    /// Return `[R, G, B, A]` widened to 16 bits, color premultiplied.
    fn rgba16(&self) -> [u16; 4];
}

/// A single 8-bit intensity is an opaque gray pixel.
impl Color for u8 {
    #[inline]
    fn rgba16(&self) -> [u16; 4] {
        let v = widen(*self);
        [v, v, v, 0xFFFF]
    }
}
