use clap::builder::RangedU64ValueParser;
use clap::{ArgAction, Parser};
use log::LevelFilter;
use numcrunch::ingest::{
    IngestConfig, DEFAULT_PROGRESS_EVERY_LINES, DEFAULT_PROGRESS_THRESHOLD_BYTES,
};
use numcrunch::output::OutputFormat;
use numcrunch::sample::DEFAULT_INITIAL_CAPACITY;
use std::path::PathBuf;

/// Summary statistics and percentiles of newline-delimited numbers
#[derive(Parser, Debug)]
#[command(name = "numcrunch", version, about)]
pub struct Cli {
    /// File to read numbers from; standard input when omitted
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Values held before the buffer first grows
    #[arg(
        long,
        default_value_t = DEFAULT_INITIAL_CAPACITY,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub initial_capacity: usize,

    /// Minimum file size in bytes for the progress bar to be shown
    #[arg(long, default_value_t = DEFAULT_PROGRESS_THRESHOLD_BYTES)]
    pub progress_threshold: u64,

    /// Lines between two progress bar redraws
    #[arg(
        long,
        default_value_t = DEFAULT_PROGRESS_EVERY_LINES,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub progress_every: u64,

    /// Never show the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// More logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn ingest_config(&self) -> IngestConfig {
        IngestConfig {
            initial_capacity: self.initial_capacity,
            progress_threshold_bytes: self.progress_threshold,
            progress_every_lines: self.progress_every,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
