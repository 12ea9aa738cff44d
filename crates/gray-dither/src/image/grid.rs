//! Row-major 2D pixel grid

use crate::error::DitherError;

/// A rectangular grid of pixels stored row-major in one `Vec`.
///
/// Width or height may be zero; such a grid holds no pixels and every filter
/// maps it to another zero-area grid.
///
/// # Example
///
/// ```
/// use gray_dither::GrayImage;
///
/// let mut image = GrayImage::filled(3, 2, 0);
/// image.set(2, 1, 255);
///
/// assert_eq!(image.pixel(2, 1), 255);
/// assert_eq!(image.get(3, 0), None);
/// assert_eq!(image.as_raw(), &[0, 0, 0, 0, 0, 255]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

/// Number of pixels in a `width x height` grid, or `None` on overflow.
fn area(width: usize, height: usize) -> Option<usize> {
    width.checked_mul(height)
}

impl<T: Copy> Grid<T> {
    /// Create a grid with every pixel set to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` overflows `usize`.
    pub fn filled(width: usize, height: usize, value: T) -> Self {
        let Some(len) = area(width, height) else {
            panic!("grid dimensions {width}x{height} overflow");
        };
        Self {
            width,
            height,
            data: vec![value; len],
        }
    }

    /// Create a grid by evaluating `f(x, y)` for every pixel in row-major order.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` overflows `usize`.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let Some(len) = area(width, height) else {
            panic!("grid dimensions {width}x{height} overflow");
        };
        let mut data = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Wrap an existing row-major pixel buffer.
    ///
    /// # Errors
    ///
    /// - [`DitherError::InvalidDimensions`] if `width * height` overflows
    /// - [`DitherError::BufferLength`] if `data.len() != width * height`
    pub fn from_raw(width: usize, height: usize, data: Vec<T>) -> Result<Self, DitherError> {
        let expected = area(width, height).ok_or(DitherError::InvalidDimensions { width, height })?;
        if data.len() != expected {
            return Err(DitherError::BufferLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total pixel count (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when either dimension is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Pixel at `(x, y)`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<T> {
        self.index(x, y).map(|i| self.data[i])
    }

    /// Pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the grid.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> T {
        match self.get(x, y) {
            Some(v) => v,
            None => panic!(
                "pixel ({x}, {y}) out of bounds for {}x{} grid",
                self.width, self.height
            ),
        }
    }

    /// Overwrite the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the grid.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: T) {
        match self.index(x, y) {
            Some(i) => self.data[i] = value,
            None => panic!(
                "pixel ({x}, {y}) out of bounds for {}x{} grid",
                self.width, self.height
            ),
        }
    }

    /// Row-major pixel slice.
    #[inline]
    pub fn as_raw(&self) -> &[T] {
        &self.data
    }

    /// Consume the grid, returning its row-major pixel buffer.
    #[inline]
    pub fn into_raw(self) -> Vec<T> {
        self.data
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks() rejects a zero chunk size; a zero-width grid has no rows to yield.
        self.data.chunks(self.width.max(1)).take(self.height)
    }

    /// Apply `f` to every pixel, producing a grid of the same dimensions.
    pub fn map<U: Copy>(&self, f: impl FnMut(T) -> U) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            data: self.data.iter().copied().map(f).collect(),
        }
    }
}
