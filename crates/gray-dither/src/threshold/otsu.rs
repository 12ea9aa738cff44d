//! Otsu's automatic threshold selection
//!
//! Picks the level `t` that maximizes the between-class variance
//!
//! ```text
//! σ²(t) = w_B(t) · w_F(t) · (μ_B(t) − μ_F(t))²
//! ```
//!
//! where the background class is every level `<= t` and the foreground is
//! the rest. One forward pass with running sums; no per-level re-summing.

use super::Histogram;

/// Compute the Otsu threshold for `hist`.
///
/// - Levels with an empty background are skipped (mean undefined).
/// - The pass stops at the first level that leaves no foreground.
/// - Only a strictly greater variance replaces the running best, so the
///   first maximizing level wins ties.
/// - An empty or single-level histogram yields 0.
///
/// # Example
///
/// ```
/// use gray_dither::{otsu_threshold, Histogram};
///
/// let hist = Histogram::from_counts([(50, 8), (200, 8)]);
/// assert_eq!(otsu_threshold(&hist), 50);
/// ```
pub fn otsu_threshold(hist: &Histogram) -> u8 {
    let total = hist.total();
    let counts = hist.counts();

    let sum: f64 = counts
        .iter()
        .enumerate()
        .map(|(level, &count)| (level as u64 * count) as f64)
        .sum();

    let mut sum_b = 0.0_f64;
    let mut weight_b = 0u64;
    let mut var_max = 0.0_f64;
    let mut threshold = 0u8;

    for (level, &count) in counts.iter().enumerate() {
        weight_b += count;
        if weight_b == 0 {
            continue;
        }
        let weight_f = total - weight_b;
        if weight_f == 0 {
            break;
        }
        sum_b += (level as u64 * count) as f64;

        let mean_b = sum_b / weight_b as f64;
        let mean_f = (sum - sum_b) / weight_f as f64;
        let var_between = weight_b as f64 * weight_f as f64 * (mean_b - mean_f) * (mean_b - mean_f);

        if var_between > var_max {
            var_max = var_between;
            threshold = level as u8;
        }
    }

    tracing::debug!(threshold, pixels = total, "Computed Otsu threshold");
    threshold
}
