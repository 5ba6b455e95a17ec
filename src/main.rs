use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use numcrunch::ingest::Ingestor;
use numcrunch::output::write_report;
use numcrunch::progress::ProgressBar;
use numcrunch::signal::InterruptGuard;
use numcrunch::source::InputSource;
use numcrunch::stats::Report;
use std::io::{self, BufWriter};
use std::process::ExitCode;

mod cli;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let interrupted = err
                .downcast_ref::<numcrunch::Error>()
                .is_some_and(numcrunch::Error::is_interrupted);
            if interrupted {
                eprintln!("Exiting...");
            } else {
                eprintln!("Error: {:#}", err);
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.ingest_config();
    let source = InputSource::from(cli.file.clone());
    let input = source.open()?;
    log::info!("reading numbers from {}", source);

    let size = input.size().filter(|_| !cli.no_progress);
    let show_progress = config.wants_progress(size);

    // Signals are only caught while the progress bar owns the terminal
    let guard = show_progress.then(InterruptGuard::install).transpose()?;
    let mut bar = show_progress.then(ProgressBar::stderr);

    let mut ingestor = Ingestor::new(config);
    if let (Some(bar), Some(size)) = (bar.as_mut(), size) {
        ingestor = ingestor.with_progress(bar, size);
    }
    if let Some(guard) = &guard {
        ingestor = ingestor.with_interrupt(guard.interrupt());
    }
    let sample = ingestor.run(input.into_reader())?;
    drop(bar);

    log::trace!("sample as read: {:?}", sample.as_slice());
    let sorted = sample
        .into_sorted()
        .with_context(|| format!("no numeric values found in {}", source))?;
    log::trace!("sample sorted: {:?}", sorted.as_slice());

    if let Some(guard) = &guard {
        guard.interrupt().check()?;
    }

    let report = Report::from_sorted(&sorted);
    log::info!("{} values summarized", report.count);

    let stdout = BufWriter::new(io::stdout().lock());
    write_report(&report, cli.format, stdout)?;
    Ok(())
}
