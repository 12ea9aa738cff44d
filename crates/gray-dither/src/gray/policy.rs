//! Grayscale weighting policies

use crate::color::Color;

/// Weighting policy for collapsing a color sample to one intensity.
///
/// All policies work on the 16-bit widened channels from
/// [`Color::rgba16`]. Those are premultiplied, so transparency darkens the
/// result and a fully transparent pixel is 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrayPolicy {
    /// `(max(R, G, B) + min(R, G, B)) / 2`
    Lightness,

    /// `(R + G + B) / 3`, floored.
    Average,

    /// `0.21 R + 0.72 G + 0.07 B`, truncated.
    ///
    /// These weights are fixed. They are neither BT.601 nor BT.709, and
    /// changing them changes every dithered and thresholded output.
    #[default]
    Luminosity,
}

impl GrayPolicy {
    /// Every policy, in declaration order.
    pub const ALL: [GrayPolicy; 3] = [
        GrayPolicy::Lightness,
        GrayPolicy::Average,
        GrayPolicy::Luminosity,
    ];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            GrayPolicy::Lightness => "lightness",
            GrayPolicy::Average => "average",
            GrayPolicy::Luminosity => "luminosity",
        }
    }

    /// Resolve a policy by name, case-insensitively.
    ///
    /// Unrecognized names resolve to [`GrayPolicy::Luminosity`].
    ///
    /// ```
    /// use gray_dither::GrayPolicy;
    ///
    /// assert_eq!(GrayPolicy::from_name("Average"), GrayPolicy::Average);
    /// assert_eq!(GrayPolicy::from_name("sepia"), GrayPolicy::Luminosity);
    /// ```
    pub fn from_name(name: &str) -> Self {
        let wanted = crate::canonical_name(name);
        match Self::ALL.into_iter().find(|p| p.name() == wanted) {
            Some(policy) => policy,
            None => {
                tracing::warn!(name, "Unknown grayscale policy, using luminosity");
                GrayPolicy::Luminosity
            }
        }
    }

    /// Intensity of `color` in the 16-bit range.
    pub fn intensity16<C: Color>(self, color: &C) -> u16 {
        let [r, g, b, _] = color.rgba16();
        let (r, g, b) = (r as u32, g as u32, b as u32);
        let value = match self {
            GrayPolicy::Lightness => (r.max(g).max(b) + r.min(g).min(b)) / 2,
            GrayPolicy::Average => (r + g + b) / 3,
            GrayPolicy::Luminosity => {
                (0.21_f32 * r as f32 + 0.72_f32 * g as f32 + 0.07_f32 * b as f32) as u32
            }
        };
        value.min(0xFFFF) as u16
    }

    /// Intensity of `color` narrowed to 8 bits.
    #[inline]
    pub fn intensity<C: Color>(self, color: &C) -> u8 {
        (self.intensity16(color) >> 8) as u8
    }
}
