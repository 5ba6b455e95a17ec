//! # numcrunch
//!
//! Descriptive statistics and exact percentiles over newline-delimited numbers.
//!
//! numcrunch reads one number per line from a file or standard input, keeps
//! every value in memory, sorts them once, and derives a fixed report: sum,
//! count, mean, population variance, standard deviation, min, max, and the
//! percentiles 25, 30, 40, 50, 60, 70, 75, 80, 90, 95, 99, 99.9 and 99.99.
//!
//! ## Pipeline
//!
//! 1. **Ingestion** ([`ingest`](mod@ingest)): lines are parsed like C's `strtod`, so only
//!    the numeric prefix matters (`12ms` is `12`); lines without one are skipped.
//!    Values accumulate in a [`Sample`] whose capacity doubles as needed.
//! 2. **Sorting** ([`Sample::into_sorted`]): one in-place sort yields a
//!    [`SortedSample`]. Empty input is rejected here.
//! 3. **Statistics** ([`stats`]): a [`Report`] is computed from the sorted
//!    sample, with percentiles by linear interpolation (R-7, as in NumPy).
//! 4. **Output** ([`output`]): the report is written as JSON or CSV.
//!
//! ## Quick Start
//!
//! ```rust
//! use numcrunch::prelude::*;
//!
//! let input = "1\n2\n3\n4\n5\n6\n7\n8\n9\n10\n";
//! let sample = ingest(input.as_bytes()).unwrap();
//! let sorted = sample.into_sorted().unwrap();
//! let report = Report::from_sorted(&sorted);
//!
//! assert_eq!(report.sum, 55.0);
//! assert_eq!(report.variance, 8.25);
//! assert_eq!(report.percentile(50.0), Some(5.5));
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): ingestion, input sources, progress, signal handling,
//!   JSON/CSV output
//! - `cli` (default): the `numcrunch` binary
//!
//! Without `std`, the sample, the parser and the statistics engine build on
//! `alloc` and `libm`.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod math;

pub mod parse;
pub mod sample;
pub mod stats;

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod error;

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod ingest;

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod output;

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod progress;

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod signal;

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod source;

pub mod prelude {
    pub use crate::sample::{EmptySampleError, Sample, SortedSample};
    pub use crate::stats::{Report, STANDARD_RANKS};

    #[cfg(feature = "std")]
    pub use crate::error::{Error, Result};

    #[cfg(feature = "std")]
    pub use crate::ingest::{ingest, IngestConfig, Ingestor};

    #[cfg(feature = "std")]
    pub use crate::output::{write_report, OutputFormat};
}

pub use sample::{Sample, SortedSample};
pub use stats::Report;

#[cfg(feature = "std")]
pub use error::{Error, Result};

#[cfg(feature = "std")]
pub use ingest::ingest;
