//! Progress indicator using indicatif

use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;
use tracing_subscriber::fmt::MakeWriter;

/// Spinner on stderr showing which domain is being looked up
#[derive(Clone)]
pub struct ProgressIndicator {
    spinner: Option<ProgressBar>,
}

impl ProgressIndicator {
    /// Create the indicator. Nothing is drawn until [`start`](Self::start).
    pub fn new(enabled: bool) -> Self {
        if !enabled {
            return Self::disabled();
        }

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            spinner.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
        }

        Self {
            spinner: Some(spinner),
        }
    }

    pub fn disabled() -> Self {
        Self { spinner: None }
    }

    /// Begin animating the spinner
    pub fn start(&self) {
        if let Some(ref spinner) = self.spinner {
            spinner.enable_steady_tick(Duration::from_millis(100));
        }
    }

    /// Show `[index/total] domain`
    pub fn set_domain(&self, index: usize, total: usize, domain: &str) {
        self.set_message(format!("[{}/{}] {}", index, total, domain));
    }

    pub fn set_message(&self, msg: impl Into<String>) {
        if let Some(ref spinner) = self.spinner {
            spinner.set_message(msg.into());
        }
    }

    /// Stderr writer for log output that hides the spinner while writing
    pub fn log_writer(&self) -> LogWriter {
        LogWriter {
            spinner: self.spinner.clone(),
        }
    }

    pub fn finish(&self) {
        if let Some(ref spinner) = self.spinner {
            spinner.finish_and_clear();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.spinner.is_some()
    }
}

impl Drop for ProgressIndicator {
    fn drop(&mut self) {
        self.finish();
    }
}

/// Writes to stderr, suspending the spinner around each write so log lines
/// never land on the spinner's line
#[derive(Clone)]
pub struct LogWriter {
    spinner: Option<ProgressBar>,
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.spinner {
            Some(ref spinner) => spinner.suspend(|| io::stderr().write_all(buf))?,
            None => io::stderr().write_all(buf)?,
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}

impl<'a> MakeWriter<'a> for LogWriter {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
