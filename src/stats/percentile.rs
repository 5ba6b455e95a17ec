//! Linear-interpolation percentiles
//!
//! Implements the inclusive method known as R-7 (Hyndman & Fan) or "C = 1":
//! the default of NumPy's `percentile` and of Excel's `PERCENTILE.INC`.
//!
//! For an ascending sample of `N` values and `p` in `[0, 100]`:
//!
//! ```text
//! rank  = p / 100 * (N - 1)
//! lower = floor(rank)
//! frac  = rank - lower
//! value = x[lower] + (x[lower + 1] - x[lower]) * frac
//! ```
//!
//! When `lower` lands on the last index the last value is returned as is,
//! so `p = 100` never reads past the end.

use crate::math;

/// Percentile ranks included in every [`Report`](super::Report)
pub const STANDARD_RANKS: [f64; 13] = [
    25.0, 30.0, 40.0, 50.0, 60.0, 70.0, 75.0, 80.0, 90.0, 95.0, 99.0, 99.9, 99.99,
];

/// Percentile `p` (in `[0, 100]`) of an ascending slice
///
/// Returns `None` for an empty slice. Out-of-range `p` is clamped.
/// The result is meaningless if `sorted` is not in ascending order.
///
/// # Example
///
/// ```
/// use numcrunch::stats::percentile;
///
/// let sorted = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(percentile(&sorted, 0.0), Some(1.0));
/// assert_eq!(percentile(&sorted, 50.0), Some(2.5));
/// assert_eq!(percentile(&sorted, 100.0), Some(4.0));
/// ```
pub fn percentile(sorted: &[f64], p: f64) -> Option<f64> {
    if sorted.is_empty() {
        None
    } else {
        Some(interpolate(sorted, p))
    }
}

/// R-7 interpolation on a non-empty ascending slice
pub(crate) fn interpolate(sorted: &[f64], p: f64) -> f64 {
    debug_assert!(!sorted.is_empty(), "percentile of an empty sample");
    debug_assert!(!p.is_nan(), "percentile rank is NaN");

    let last = sorted.len() - 1;
    let p = p.clamp(0.0, 100.0);
    let rank = p / 100.0 * last as f64;
    let lower = math::floor(rank) as usize;

    if lower >= last {
        return sorted[last];
    }

    let frac = rank - lower as f64;
    let (a, b) = (sorted[lower], sorted[lower + 1]);
    // Exact on rank hits and plateaus, and keeps inf - inf out of the result
    if frac == 0.0 || a == b {
        return a;
    }
    let span = b - a;
    let value = if span.is_finite() {
        a + span * frac
    } else {
        // The span overflowed or an end is infinite: weigh the ends instead
        a * (1.0 - frac) + b * frac
    };
    // -inf..inf has no point in between
    if value.is_nan() {
        return a;
    }
    // Rounding must not carry the result past the upper neighbour
    value.min(b)
}
