//! Result output for ct-subfind
//!
//! Results are written once, after every domain has been processed.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use anyhow::Context;

pub mod csv;
pub mod json;
pub mod plain;

/// Trait for handlers that write the final sorted subdomain list
pub trait OutputHandler: Send + Sync {
    /// Write every name, in the given order
    fn emit_all(&self, names: &[String]) -> anyhow::Result<()>;

    /// Flush any buffered output
    fn flush(&self) -> anyhow::Result<()>;
}

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One hostname per line (default)
    Plain,
    /// A single JSON array of hostnames
    Json,
    /// CSV with a `subdomain` header
    Csv,
}

pub(crate) type SharedWriter = Mutex<Box<dyn Write + Send>>;

pub(crate) fn stdout_writer() -> SharedWriter {
    Mutex::new(Box::new(io::stdout()))
}

pub(crate) fn lock(writer: &SharedWriter) -> anyhow::Result<std::sync::MutexGuard<'_, Box<dyn Write + Send>>> {
    writer
        .lock()
        .map_err(|_| anyhow::anyhow!("output writer lock poisoned"))
}

/// Build the handler for `format`, writing to `path` or stdout
pub fn build_handler(format: OutputFormat, path: Option<&Path>) -> anyhow::Result<Box<dyn OutputHandler>> {
    let file = match path {
        Some(path) => Some(
            File::create(path).with_context(|| format!("Failed to create output file {:?}", path))?,
        ),
        None => None,
    };

    let handler: Box<dyn OutputHandler> = match (format, file) {
        (OutputFormat::Plain, Some(file)) => Box::new(plain::PlainOutput::to_file(file)),
        (OutputFormat::Plain, None) => Box::new(plain::PlainOutput::new()),
        (OutputFormat::Json, Some(file)) => Box::new(json::JsonOutput::to_file(file)),
        (OutputFormat::Json, None) => Box::new(json::JsonOutput::new()),
        (OutputFormat::Csv, Some(file)) => Box::new(csv::CsvOutput::to_file(file)),
        (OutputFormat::Csv, None) => Box::new(csv::CsvOutput::new()),
    };

    Ok(handler)
}
