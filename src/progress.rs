//! Progress reporting during ingestion
//!
//! Ingestion reports the fraction of input bytes consumed to a
//! [`ProgressSink`]. Reports are advisory: a sink never influences what is
//! parsed.
//!
//! [`ProgressBar`] is the terminal sink. It hides the cursor for as long as it
//! lives and restores it when dropped, whether ingestion finished, failed or
//! was interrupted.

use std::io::{self, Write};

/// Number of cells between the brackets of the bar
pub const BAR_WIDTH: usize = 50;

const HIDE_CURSOR: &str = "\x1b[?25l";
const SHOW_CURSOR: &str = "\x1b[?25h";

/// Receiver of ingestion progress
pub trait ProgressSink {
    /// Report the fraction of input consumed, in `[0, 1]`
    fn update(&mut self, fraction: f64);

    /// Called once after the whole input was read
    fn finish(&mut self) {}
}

/// Render one frame of the bar, carriage return included
///
/// ```
/// use numcrunch::progress::render_bar;
///
/// let frame = render_bar(0.5);
/// assert!(frame.starts_with("\rReading file: [#########"));
/// assert!(frame.ends_with("] ( 50%)"));
/// ```
pub fn render_bar(fraction: f64) -> String {
    let fraction = fraction.clamp(0.0, 1.0);
    let filled = ((BAR_WIDTH as f64 * fraction) as usize).min(BAR_WIDTH);

    let mut frame = String::with_capacity(BAR_WIDTH + 32);
    frame.push_str("\rReading file: [");
    frame.extend(std::iter::repeat('#').take(filled));
    frame.extend(std::iter::repeat(' ').take(BAR_WIDTH - filled));
    frame.push_str(&format!("] ({:3.0}%)", fraction * 100.0));
    frame
}

/// Redrawing progress bar on a terminal stream
///
/// Write failures are ignored: losing a frame must not abort ingestion.
pub struct ProgressBar<W: Write> {
    out: W,
    finished: bool,
}

impl ProgressBar<io::Stderr> {
    /// Progress bar drawn on standard error
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> ProgressBar<W> {
    /// Hide the cursor on `out` and start drawing there
    pub fn new(mut out: W) -> Self {
        let _ = out.write_all(HIDE_CURSOR.as_bytes());
        let _ = out.flush();
        Self {
            out,
            finished: false,
        }
    }

    fn restore(&mut self) {
        let _ = writeln!(self.out, "{}", SHOW_CURSOR);
        let _ = self.out.flush();
    }
}

impl<W: Write> ProgressSink for ProgressBar<W> {
    fn update(&mut self, fraction: f64) {
        let _ = self.out.write_all(render_bar(fraction).as_bytes());
        let _ = self.out.flush();
    }

    fn finish(&mut self) {
        if self.finished {
            return;
        }
        self.update(1.0);
        self.restore();
        let _ = writeln!(self.out, "Complete");
        let _ = self.out.flush();
        self.finished = true;
    }
}

impl<W: Write> Drop for ProgressBar<W> {
    fn drop(&mut self) {
        if !self.finished {
            self.restore();
        }
    }
}
