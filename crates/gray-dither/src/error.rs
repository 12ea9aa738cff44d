//! Error type for the gray-dither public API.
//!
//! Filters themselves are total: unknown algorithm names and unset levels
//! fall back to documented defaults. Errors only arise when a caller hands
//! over a pixel buffer that cannot describe a valid grid.

use thiserror::Error;

/// Unified error type for grid construction.
///
/// # Example
///
/// ```
/// use gray_dither::{DitherError, GrayImage};
///
/// let err = GrayImage::from_raw(3, 2, vec![0; 5]).unwrap_err();
/// assert_eq!(err, DitherError::BufferLength { expected: 6, actual: 5 });
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DitherError {
    /// The requested dimensions cannot be represented (overflowing
    /// `width * height`, or zero where a positive size is required).
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// A raw pixel buffer does not hold exactly `width * height` pixels.
    #[error("pixel buffer holds {actual} pixels, expected {expected}")]
    BufferLength { expected: usize, actual: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimensions_message() {
        let err = DitherError::InvalidDimensions {
            width: 0,
            height: 480,
        };
        assert_eq!(err.to_string(), "invalid dimensions: 0x480");
    }

    #[test]
    fn test_buffer_length_message() {
        let err = DitherError::BufferLength {
            expected: 6,
            actual: 5,
        };
        assert_eq!(err.to_string(), "pixel buffer holds 5 pixels, expected 6");
    }
}
