//! Error diffusion kernel definitions.
//!
//! Each kernel lists the neighbors that receive a share of a pixel's
//! quantization error, relative to the pixel being quantized (`X` in the
//! diagrams), together with the divisor that turns integer weights into
//! fractions.

/// An error diffusion kernel.
///
/// Each entry is `(dx, dy, weight)`: the neighbor at `(x + dx, y + dy)`
/// receives `error * weight / divisor`.
///
/// # Ordering
///
/// `dy` is unsigned, and every entry with `dy == 0` must have `dx > 0`.
/// Together these guarantee that a left-to-right, top-to-bottom scan only
/// ever pushes error onto pixels it has not quantized yet. See
/// [`Kernel::is_forward_only`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel {
    /// `(dx, dy, weight)` entries.
    pub entries: &'static [(i32, u32, u8)],

    /// Shared divisor for every entry's weight.
    pub divisor: u8,
}

impl Kernel {
    /// Number of neighbors receiving error.
    #[inline]
    pub fn cells(&self) -> usize {
        self.entries.len()
    }

    /// Sum of all entry weights.
    pub fn weight_sum(&self) -> u32 {
        self.entries.iter().map(|&(_, _, w)| w as u32).sum()
    }

    /// Fraction of the quantization error this kernel passes on.
    ///
    /// 1.0 for every kernel except [`ATKINSON`] (0.75).
    pub fn propagation(&self) -> f64 {
        self.weight_sum() as f64 / self.divisor as f64
    }

    /// Number of rows below the current one the kernel reaches.
    pub fn max_dy(&self) -> u32 {
        self.entries.iter().map(|&(_, dy, _)| dy).max().unwrap_or(0)
    }

    /// True when no entry targets the current pixel or a pixel to its left
    /// on the same row.
    pub fn is_forward_only(&self) -> bool {
        self.entries.iter().all(|&(dx, dy, _)| dy > 0 || dx > 0)
    }
}

/// Floyd-Steinberg, 4 neighbors, 16/16.
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[(1, 0, 7), (-1, 1, 3), (0, 1, 5), (1, 1, 1)],
    divisor: 16,
};

/// Jarvis-Judice-Ninke, 12 neighbors over 3 rows, 48/48.
///
/// ```text
///            X   7   5
///    3   5   7   5   3
///    1   3   5   3   1
/// ```
pub const JARVIS_JUDICE_NINKE: Kernel = Kernel {
    entries: &[
        (1, 0, 7),
        (2, 0, 5),
        (-2, 1, 3),
        (-1, 1, 5),
        (0, 1, 7),
        (1, 1, 5),
        (2, 1, 3),
        (-2, 2, 1),
        (-1, 2, 3),
        (0, 2, 5),
        (1, 2, 3),
        (2, 2, 1),
    ],
    divisor: 48,
};

/// Stucki, 12 neighbors over 3 rows, 42/42.
///
/// ```text
///            X   8   4
///    2   4   8   4   2
///    1   2   4   2   1
/// ```
pub const STUCKI: Kernel = Kernel {
    entries: &[
        (1, 0, 8),
        (2, 0, 4),
        (-2, 1, 2),
        (-1, 1, 4),
        (0, 1, 8),
        (1, 1, 4),
        (2, 1, 2),
        (-2, 2, 1),
        (-1, 2, 2),
        (0, 2, 4),
        (1, 2, 2),
        (2, 2, 1),
    ],
    divisor: 42,
};

/// Atkinson, 6 neighbors, 6/8.
///
/// A quarter of the error is deliberately discarded, which keeps highlights
/// and shadows clean at the cost of exact tone reproduction.
///
/// ```text
///        X   1   1
///    1   1   1
///        1
/// ```
pub const ATKINSON: Kernel = Kernel {
    entries: &[
        (1, 0, 1),
        (2, 0, 1),
        (-1, 1, 1),
        (0, 1, 1),
        (1, 1, 1),
        (0, 2, 1),
    ],
    divisor: 8,
};

/// Burkes, 7 neighbors over 2 rows, 32/32.
///
/// ```text
///            X   8   4
///    2   4   8   4   2
/// ```
pub const BURKES: Kernel = Kernel {
    entries: &[
        (1, 0, 8),
        (2, 0, 4),
        (-2, 1, 2),
        (-1, 1, 4),
        (0, 1, 8),
        (1, 1, 4),
        (2, 1, 2),
    ],
    divisor: 32,
};

/// Sierra (Sierra-3), 10 neighbors over 3 rows, 32/32.
///
/// ```text
///            X   5   3
///    2   4   5   4   2
///        2   3   2
/// ```
pub const SIERRA: Kernel = Kernel {
    entries: &[
        (1, 0, 5),
        (2, 0, 3),
        (-2, 1, 2),
        (-1, 1, 4),
        (0, 1, 5),
        (1, 1, 4),
        (2, 1, 2),
        (-1, 2, 2),
        (0, 2, 3),
        (1, 2, 2),
    ],
    divisor: 32,
};

/// Two-Row Sierra, 7 neighbors over 2 rows, 16/16.
///
/// ```text
///            X   4   3
///    1   2   3   2   1
/// ```
pub const SIERRA_TWO_ROW: Kernel = Kernel {
    entries: &[
        (1, 0, 4),
        (2, 0, 3),
        (-2, 1, 1),
        (-1, 1, 2),
        (0, 1, 3),
        (1, 1, 2),
        (2, 1, 1),
    ],
    divisor: 16,
};

/// Sierra Lite, 3 neighbors, 4/4.
///
/// ```text
///    X   2
///    1   1
/// ```
pub const SIERRA_LITE: Kernel = Kernel {
    entries: &[(1, 0, 2), (-1, 1, 1), (0, 1, 1)],
    divisor: 4,
};
