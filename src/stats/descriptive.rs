//! Descriptive statistics over slices
//!
//! Sums are always accumulated in index order so output is reproducible
//! bit for bit. Variance uses the two-pass algorithm: one pass for the mean,
//! a second for the squared deviations from it.

use crate::math;

/// Sum of all values, accumulated in index order
///
/// The sum of an empty slice is `0.0`.
pub fn sum(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |acc, &v| acc + v)
}

/// Arithmetic mean, or `None` for an empty slice
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(sum(values) / values.len() as f64)
    }
}

/// Population variance (divisor N), or `None` for an empty slice
pub fn variance(values: &[f64]) -> Option<f64> {
    let mean = mean(values)?;
    Some(squared_deviations(values, mean) / values.len() as f64)
}

/// Population standard deviation, or `None` for an empty slice
pub fn stddev(values: &[f64]) -> Option<f64> {
    variance(values).map(math::sqrt)
}

/// Smallest value of an ascending slice
pub fn min(sorted: &[f64]) -> Option<f64> {
    sorted.first().copied()
}

/// Largest value of an ascending slice
pub fn max(sorted: &[f64]) -> Option<f64> {
    sorted.last().copied()
}

/// Sum of squared deviations from `mean`, in index order
pub(crate) fn squared_deviations(values: &[f64], mean: f64) -> f64 {
    values
        .iter()
        .fold(0.0, |acc, &v| acc + math::powi(v - mean, 2))
}
