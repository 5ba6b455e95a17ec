//! The derived report for one sample

use super::percentile::STANDARD_RANKS;
use crate::sample::SortedSample;

/// Output field names, in output order
pub const FIELD_NAMES: [&str; 20] = [
    "Sum", "Count", "Mean", "Variance", "StdDev", "Min", "Max", "p25", "p30", "p40", "p50",
    "p60", "p70", "p75", "p80", "p90", "p95", "p99", "p99.9", "p99.99",
];

/// A single report value, as handed to serializers
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field {
    /// Number of values (rendered as a plain integer)
    Count(usize),
    /// Floating-point statistic (rendered with two decimals)
    Value(f64),
}

/// Every statistic derived from one sorted sample
///
/// Built in one go by [`Report::from_sorted`]; there is no partially filled
/// report.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub sum: f64,
    pub count: usize,
    pub mean: f64,
    /// Population variance
    pub variance: f64,
    pub stddev: f64,
    pub min: f64,
    pub max: f64,
    /// Values at [`STANDARD_RANKS`], same order
    pub percentiles: [f64; STANDARD_RANKS.len()],
}

impl Report {
    /// Compute every statistic of `sample`
    pub fn from_sorted(sample: &SortedSample) -> Self {
        let variance = sample.variance();

        Self {
            sum: sample.sum(),
            count: sample.len(),
            mean: sample.mean(),
            variance,
            stddev: crate::math::sqrt(variance),
            min: sample.min(),
            max: sample.max(),
            percentiles: STANDARD_RANKS.map(|p| sample.percentile(p)),
        }
    }

    /// Value at one of the [`STANDARD_RANKS`], or `None` for any other rank
    pub fn percentile(&self, rank: f64) -> Option<f64> {
        STANDARD_RANKS
            .iter()
            .position(|&r| r == rank)
            .map(|i| self.percentiles[i])
    }

    /// All fields paired with their names, in output order
    pub fn fields(&self) -> [(&'static str, Field); FIELD_NAMES.len()] {
        let head = [
            Field::Value(self.sum),
            Field::Count(self.count),
            Field::Value(self.mean),
            Field::Value(self.variance),
            Field::Value(self.stddev),
            Field::Value(self.min),
            Field::Value(self.max),
        ];

        core::array::from_fn(|i| {
            let field = if i < head.len() {
                head[i]
            } else {
                Field::Value(self.percentiles[i - head.len()])
            };
            (FIELD_NAMES[i], field)
        })
    }
}
