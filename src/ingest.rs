//! Line-oriented ingestion into a [`Sample`]
//!
//! The input is read line by line (a line ends with `\n` or at end of
//! stream). Each line's numeric prefix is parsed with
//! [`parse_prefix`](crate::parse::parse_prefix); lines without one are
//! skipped silently. Bytes need not be UTF-8.
//!
//! # Example
//!
//! ```
//! use numcrunch::ingest::ingest;
//!
//! let input = "3.5\nx\n2\n\n1.0\n";
//! let sample = ingest(input.as_bytes()).unwrap();
//! assert_eq!(sample.as_slice(), &[3.5, 2.0, 1.0]);
//! ```

use crate::error::{Error, Result};
use crate::parse::parse_prefix;
use crate::progress::ProgressSink;
use crate::sample::{Sample, DEFAULT_INITIAL_CAPACITY};
use crate::signal::Interrupt;
use std::io::BufRead;

/// Inputs larger than this many bytes get progress reports
pub const DEFAULT_PROGRESS_THRESHOLD_BYTES: u64 = 4096 * 1000;

/// Lines between two progress reports
pub const DEFAULT_PROGRESS_EVERY_LINES: u64 = 1000;

/// Ingestion tuning
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IngestConfig {
    /// Values the sample holds before its first reallocation
    pub initial_capacity: usize,
    /// Minimum known input size, in bytes, for progress to be reported
    pub progress_threshold_bytes: u64,
    /// Lines between two progress reports
    pub progress_every_lines: u64,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            progress_threshold_bytes: DEFAULT_PROGRESS_THRESHOLD_BYTES,
            progress_every_lines: DEFAULT_PROGRESS_EVERY_LINES,
        }
    }
}

impl IngestConfig {
    /// Check if an input of `size` bytes is large enough for progress reports
    ///
    /// Inputs of unknown size never get them.
    pub fn wants_progress(&self, size: Option<u64>) -> bool {
        matches!(size, Some(size) if size > self.progress_threshold_bytes)
    }
}

struct Progress<'a> {
    sink: &'a mut dyn ProgressSink,
    total_bytes: u64,
}

/// Counters for one ingestion run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IngestStats {
    /// Lines read, accepted or not
    pub lines: u64,
    /// Lines without a numeric prefix
    pub skipped: u64,
    /// Bytes read, line terminators included
    pub bytes: u64,
}

/// Configurable ingestion run
///
/// ```
/// use numcrunch::ingest::{IngestConfig, Ingestor};
///
/// let config = IngestConfig {
///     initial_capacity: 16,
///     ..IngestConfig::default()
/// };
/// let sample = Ingestor::new(config).run("1\n2\n".as_bytes()).unwrap();
/// assert_eq!(sample.len(), 2);
/// ```
pub struct Ingestor<'a> {
    config: IngestConfig,
    progress: Option<Progress<'a>>,
    interrupt: Option<&'a Interrupt>,
    stats: IngestStats,
}

impl<'a> Ingestor<'a> {
    /// Create an ingestion run without progress or cancellation
    pub fn new(config: IngestConfig) -> Self {
        Self {
            config,
            progress: None,
            interrupt: None,
            stats: IngestStats::default(),
        }
    }

    /// Report progress to `sink`, measured against `total_bytes`
    ///
    /// Ignored unless `total_bytes` exceeds the configured threshold.
    pub fn with_progress(mut self, sink: &'a mut dyn ProgressSink, total_bytes: u64) -> Self {
        if self.config.wants_progress(Some(total_bytes)) {
            self.progress = Some(Progress { sink, total_bytes });
        }
        self
    }

    /// Abort with [`Error::Interrupted`] once `interrupt` is raised
    pub fn with_interrupt(mut self, interrupt: &'a Interrupt) -> Self {
        self.interrupt = Some(interrupt);
        self
    }

    /// Read `reader` to the end and collect every parsed value
    pub fn run<R: BufRead>(self, reader: R) -> Result<Sample> {
        self.run_with_stats(reader).map(|(sample, _)| sample)
    }

    /// Like [`run`](Self::run), also returning the line counters
    pub fn run_with_stats<R: BufRead>(mut self, mut reader: R) -> Result<(Sample, IngestStats)> {
        let mut sample = Sample::with_capacity(self.config.initial_capacity.max(1));
        let every = self.config.progress_every_lines.max(1);
        let mut line = Vec::new();

        loop {
            if let Some(interrupt) = self.interrupt {
                interrupt.check()?;
            }
            if let Some(progress) = self.progress.as_mut() {
                if self.stats.lines % every == 0 {
                    progress
                        .sink
                        .update(self.stats.bytes as f64 / progress.total_bytes as f64);
                }
            }

            line.clear();
            let read = reader.read_until(b'\n', &mut line).map_err(Error::Read)?;
            if read == 0 {
                break;
            }
            self.stats.lines += 1;
            self.stats.bytes += read as u64;

            match parse_prefix(strip_newline(&line)) {
                Some(value) => sample.push(value),
                None => self.stats.skipped += 1,
            }
        }

        if let Some(progress) = self.progress.as_mut() {
            progress.sink.finish();
        }

        log::debug!(
            "read {} lines ({} bytes): {} values, {} skipped, {} reallocations",
            self.stats.lines,
            self.stats.bytes,
            sample.len(),
            self.stats.skipped,
            sample.reallocations()
        );
        Ok((sample, self.stats))
    }
}

fn strip_newline(line: &[u8]) -> &[u8] {
    line.strip_suffix(b"\n").unwrap_or(line)
}

/// Read `reader` to the end with the default configuration
pub fn ingest<R: BufRead>(reader: R) -> Result<Sample> {
    Ingestor::new(IngestConfig::default()).run(reader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Read};

    #[derive(Default)]
    struct Recorder {
        updates: Vec<f64>,
        finished: bool,
    }

    impl ProgressSink for Recorder {
        fn update(&mut self, fraction: f64) {
            self.updates.push(fraction);
        }

        fn finish(&mut self) {
            self.finished = true;
        }
    }

    /// Reader that fails after yielding its prefix
    struct Broken(&'static [u8]);

    impl Read for Broken {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.0.is_empty() {
                return Err(io::Error::new(io::ErrorKind::Other, "disk on fire"));
            }
            let n = self.0.len().min(buf.len());
            buf[..n].copy_from_slice(&self.0[..n]);
            self.0 = &self.0[n..];
            Ok(n)
        }
    }

    #[test]
    fn test_skips_and_preserves_order() {
        let sample = ingest("3.5\nx\n2\n\n1.0\n".as_bytes()).unwrap();
        assert_eq!(sample.as_slice(), &[3.5, 2.0, 1.0]);
    }

    #[test]
    fn test_last_line_without_newline() {
        let sample = ingest("1\n2\n10".as_bytes()).unwrap();
        assert_eq!(sample.as_slice(), &[1.0, 2.0, 10.0]);
    }

    #[test]
    fn test_crlf_and_noise() {
        let sample = ingest("12ms\r\n  7 apples\r\nGET / 200\r\n".as_bytes()).unwrap();
        assert_eq!(sample.as_slice(), &[12.0, 7.0]);
    }

    #[test]
    fn test_invalid_utf8() {
        let sample = ingest(&b"4\xff\xfe\n\xff\n5\n"[..]).unwrap();
        assert_eq!(sample.as_slice(), &[4.0, 5.0]);
    }

    #[test]
    fn test_empty_input() {
        let sample = ingest(io::empty()).unwrap();
        assert!(sample.is_empty());
    }

    #[test]
    fn test_stats() {
        let (sample, stats) = Ingestor::new(IngestConfig::default())
            .run_with_stats("1\nfoo\n2\n".as_bytes())
            .unwrap();
        assert_eq!(sample.len(), 2);
        assert_eq!(
            stats,
            IngestStats {
                lines: 3,
                skipped: 1,
                bytes: 8,
            }
        );
    }

    #[test]
    fn test_initial_capacity_honored() {
        let config = IngestConfig {
            initial_capacity: 2,
            ..IngestConfig::default()
        };
        let sample = Ingestor::new(config).run("1\n2\n3\n".as_bytes()).unwrap();
        assert_eq!(sample.reallocations(), 1);
        assert!(sample.capacity() >= 4);
    }

    #[test]
    fn test_read_error() {
        let reader = io::BufReader::new(Broken(b"1\n2\n"));
        assert!(matches!(ingest(reader), Err(Error::Read(_))));
    }

    #[test]
    fn test_progress_reported() {
        let input = "1\n2\n3\n4\n5\n";
        let config = IngestConfig {
            progress_threshold_bytes: 4,
            progress_every_lines: 2,
            ..IngestConfig::default()
        };
        let mut recorder = Recorder::default();

        let sample = Ingestor::new(config)
            .with_progress(&mut recorder, input.len() as u64)
            .run(input.as_bytes())
            .unwrap();

        assert_eq!(sample.len(), 5);
        // Before lines 0, 2 and 4
        assert_eq!(recorder.updates, vec![0.0, 0.4, 0.8]);
        assert!(recorder.finished);
    }

    #[test]
    fn test_progress_below_threshold() {
        let mut recorder = Recorder::default();
        let sample = Ingestor::new(IngestConfig::default())
            .with_progress(&mut recorder, 6)
            .run("1\n2\n3\n".as_bytes())
            .unwrap();

        assert_eq!(sample.len(), 3);
        assert!(recorder.updates.is_empty());
        assert!(!recorder.finished);
    }

    #[test]
    fn test_wants_progress() {
        let config = IngestConfig::default();
        assert!(!config.wants_progress(None));
        assert!(!config.wants_progress(Some(DEFAULT_PROGRESS_THRESHOLD_BYTES)));
        assert!(config.wants_progress(Some(DEFAULT_PROGRESS_THRESHOLD_BYTES + 1)));
    }

    #[test]
    fn test_interrupt_wins() {
        let interrupt = Interrupt::new();
        interrupt.raise();

        let result = Ingestor::new(IngestConfig::default())
            .with_interrupt(&interrupt)
            .run("1\n2\n".as_bytes());
        assert!(matches!(result, Err(Error::Interrupted)));
    }

    #[test]
    fn test_interrupt_not_raised() {
        let interrupt = Interrupt::new();
        let sample = Ingestor::new(IngestConfig::default())
            .with_interrupt(&interrupt)
            .run("1\n2\n".as_bytes())
            .unwrap();
        assert_eq!(sample.len(), 2);
    }
}
