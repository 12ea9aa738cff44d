//! 8-bit and 16-bit RGBA pixel types

use super::Color;

/// Scale a 16-bit channel by a 16-bit alpha: `v * a / 0xFFFF`, floored.
#[inline]
const fn premultiply(v: u16, a: u16) -> u16 {
    (v as u32 * a as u32 / 0xFFFF) as u16
}

/// Widen an 8-bit channel to 16 bits by byte replication (`v * 0x101`).
///
/// # Example
/// ```
/// use gray_dither::color::widen;
/// assert_eq!(widen(0x0F), 0x0F0F);
/// assert_eq!(widen(0xFF), 0xFFFF);
/// ```
#[inline]
pub const fn widen(v: u8) -> u16 {
    (v as u16) << 8 | v as u16
}

/// An RGBA pixel with 8 bits per channel.
///
/// Channel values are stored straight (not premultiplied). Alpha is applied
/// when the pixel is read through [`Color::rgba16`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque pixel from red, green and blue.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 0xFF)
    }

    /// Opaque gray pixel.
    #[inline]
    pub const fn gray(v: u8) -> Self {
        Self::rgb(v, v, v)
    }
}

impl Color for Rgba8 {
    #[inline]
    fn rgba16(&self) -> [u16; 4] {
        Rgba16::from(*self).rgba16()
    }
}

/// An RGBA pixel with 16 bits per channel.
///
/// This is the decode target for 16-bit PNG sources; 8-bit sources are
/// widened into it without loss. Like [`Rgba8`], channels are stored
/// straight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba16 {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    pub a: u16,
}

impl Rgba16 {
    #[inline]
    pub const fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Rgba8> for Rgba16 {
    #[inline]
    fn from(c: Rgba8) -> Self {
        Self::new(widen(c.r), widen(c.g), widen(c.b), widen(c.a))
    }
}

impl Color for Rgba16 {
    #[inline]
    fn rgba16(&self) -> [u16; 4] {
        let a = self.a;
        [
            premultiply(self.r, a),
            premultiply(self.g, a),
            premultiply(self.b, a),
            a,
        ]
    }
}
