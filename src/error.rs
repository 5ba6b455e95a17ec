//! Errors raised while reading input and writing the report
//!
//! Every variant is fatal for a run: nothing is retried and no partial
//! report is produced.

use crate::sample::EmptySampleError;
use std::io;
use std::path::PathBuf;

/// Result type used throughout the I/O layer
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input file could not be opened
    #[error("cannot open input file `{}`", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading from the input failed midway
    #[error("failed to read input")]
    Read(#[source] io::Error),

    /// No line of the input held a number
    #[error(transparent)]
    EmptySample(#[from] EmptySampleError),

    /// SIGINT or SIGTERM arrived while reading
    #[error("interrupted")]
    Interrupted,

    /// Signal handlers could not be installed
    #[error("failed to install signal handler")]
    Signal(#[source] io::Error),

    #[error("failed to encode JSON report")]
    Json(#[source] serde_json::Error),

    #[error("failed to encode CSV report")]
    Csv(#[from] csv::Error),

    /// The report could not be written out
    #[error("failed to write report")]
    Write(#[source] io::Error),
}

impl Error {
    /// Check if the run was cancelled rather than failed
    pub fn is_interrupted(&self) -> bool {
        matches!(self, Error::Interrupted)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        // serde_json reports writer failures as its own errors
        if err.is_io() {
            Error::Write(err.into())
        } else {
            Error::Json(err)
        }
    }
}
