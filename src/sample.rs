//! Numeric sample storage
//!
//! A [`Sample`] is the growable buffer values are appended to during
//! ingestion. Once ingestion is over it is sorted exactly once, in place,
//! and becomes a [`SortedSample`]: a read-only, ascending, non-empty sequence
//! that the statistics engine queries.
//!
//! # Growth Policy
//!
//! The buffer starts at [`DEFAULT_INITIAL_CAPACITY`] values and its capacity
//! is multiplied by [`GROWTH_FACTOR`] whenever an append would overflow it.
//! Appends are O(1) amortized and a sample of `n` values costs O(log n)
//! reallocations. Capacity only grows.

use crate::math;
use crate::stats::{descriptive, percentile};
use core::fmt;

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Initial number of values a sample can hold before its first reallocation
pub const DEFAULT_INITIAL_CAPACITY: usize = 4096;

/// Factor applied to the capacity on every reallocation
pub const GROWTH_FACTOR: usize = 2;

/// Error returned when an empty sample is turned into a [`SortedSample`]
///
/// Every statistic is undefined on zero values, so an empty sample is
/// rejected before any of them is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptySampleError;

impl fmt::Display for EmptySampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sample contains no values")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EmptySampleError {}

/// Growable, unsorted sequence of parsed values
///
/// # Example
///
/// ```
/// use numcrunch::sample::Sample;
///
/// let mut sample = Sample::with_capacity(2);
/// sample.push(3.5);
/// sample.push(2.0);
/// sample.push(1.0);
///
/// assert_eq!(sample.as_slice(), &[3.5, 2.0, 1.0]);
/// assert_eq!(sample.reallocations(), 1);
///
/// let sorted = sample.into_sorted().unwrap();
/// assert_eq!(sorted.as_slice(), &[1.0, 2.0, 3.5]);
/// ```
#[derive(Clone, Debug)]
pub struct Sample {
    /// Accepted values in arrival order
    values: Vec<f64>,
    /// Number of times the backing storage was grown
    reallocations: u32,
}

impl Default for Sample {
    fn default() -> Self {
        Self::new()
    }
}

impl Sample {
    /// Create an empty sample with [`DEFAULT_INITIAL_CAPACITY`]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_INITIAL_CAPACITY)
    }

    /// Create an empty sample able to hold `capacity` values before growing
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be positive");

        Self {
            values: Vec::with_capacity(capacity),
            reallocations: 0,
        }
    }

    /// Append a value, doubling the capacity first if the buffer is full
    ///
    /// NaN values are ignored so the sample stays totally ordered.
    pub fn push(&mut self, value: f64) {
        if value.is_nan() {
            return;
        }

        if self.values.len() == self.values.capacity() {
            self.grow();
        }
        self.values.push(value);
    }

    fn grow(&mut self) {
        let capacity = self.values.capacity();
        self.values.reserve_exact(capacity * (GROWTH_FACTOR - 1));
        self.reallocations += 1;

        log::trace!(
            "sample buffer grown from {} to {} values",
            capacity,
            self.values.capacity()
        );
    }

    /// Number of values accepted so far
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no value has been accepted
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of values the sample can hold before growing again
    pub fn capacity(&self) -> usize {
        self.values.capacity()
    }

    /// Number of reallocations performed so far
    pub fn reallocations(&self) -> u32 {
        self.reallocations
    }

    /// Values in arrival order
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Sort the values ascending in place and seal the sample
    ///
    /// Returns [`EmptySampleError`] when no value was accepted.
    pub fn into_sorted(self) -> Result<SortedSample, EmptySampleError> {
        SortedSample::new(self.values)
    }
}

impl Extend<f64> for Sample {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl FromIterator<f64> for Sample {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut sample = Self::new();
        sample.extend(iter);
        sample
    }
}

/// Ascending, non-empty, read-only sample
///
/// Every statistic is total on a `SortedSample`: emptiness is ruled out on
/// construction, and min, max and percentiles read the sorted order directly.
#[derive(Clone, Debug, PartialEq)]
pub struct SortedSample {
    values: Vec<f64>,
}

#[allow(clippy::len_without_is_empty)]
impl SortedSample {
    /// Sort `values` in place and wrap them
    ///
    /// NaN values are dropped before sorting. Returns [`EmptySampleError`]
    /// when nothing is left.
    pub fn new(mut values: Vec<f64>) -> Result<Self, EmptySampleError> {
        values.retain(|v| !v.is_nan());
        if values.is_empty() {
            return Err(EmptySampleError);
        }

        values.sort_unstable_by(f64::total_cmp);
        Ok(Self { values })
    }

    /// Number of values (always at least one)
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Values in ascending order
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Give the sorted values back
    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }

    /// Sum of all values, accumulated in index order
    pub fn sum(&self) -> f64 {
        descriptive::sum(&self.values)
    }

    /// Arithmetic mean
    pub fn mean(&self) -> f64 {
        self.sum() / self.len() as f64
    }

    /// Population variance (divisor N)
    ///
    /// Exactly zero when all values are equal.
    pub fn variance(&self) -> f64 {
        if self.min() == self.max() {
            return 0.0;
        }
        descriptive::squared_deviations(&self.values, self.mean()) / self.len() as f64
    }

    /// Population standard deviation
    pub fn stddev(&self) -> f64 {
        math::sqrt(self.variance())
    }

    /// Smallest value
    pub fn min(&self) -> f64 {
        self.values[0]
    }

    /// Largest value
    pub fn max(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// Linear-interpolation percentile (R-7), `p` in `[0, 100]`
    ///
    /// Out-of-range `p` is clamped.
    pub fn percentile(&self, p: f64) -> f64 {
        percentile::interpolate(&self.values, p)
    }
}

impl AsRef<[f64]> for SortedSample {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}
