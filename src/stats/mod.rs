//! Statistics engine over sorted samples
//!
//! The engine never sorts: it is handed a [`SortedSample`](crate::sample::SortedSample)
//! (or, for the slice functions, a slice the caller already sorted ascending)
//! and derives every value from it.
//!
//! - [`descriptive`]: sum, mean, population variance, standard deviation, min, max
//! - [`percentile`]: linear-interpolation percentiles (R-7, as in NumPy and
//!   Excel's `PERCENTILE.INC`)
//! - [`Report`]: the full set of derived values for one sample
//!
//! # Example
//!
//! ```
//! use numcrunch::sample::Sample;
//! use numcrunch::stats::Report;
//!
//! let sample: Sample = (1..=10).map(f64::from).collect();
//! let sorted = sample.into_sorted().unwrap();
//! let report = Report::from_sorted(&sorted);
//!
//! assert_eq!(report.count, 10);
//! assert_eq!(report.mean, 5.5);
//! assert_eq!(report.percentile(25.0), Some(3.25));
//! ```

pub mod descriptive;
pub mod percentile;
mod report;

pub use percentile::{percentile, STANDARD_RANKS};
pub use report::{Field, Report, FIELD_NAMES};
