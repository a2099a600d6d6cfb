//! JSON output handler

use crate::output::{lock, stdout_writer, OutputHandler, SharedWriter};
use std::io::Write;
use std::sync::Mutex;

/// Writes the names as a single JSON array followed by a newline
pub struct JsonOutput {
    writer: SharedWriter,
}

impl JsonOutput {
    /// Create a new JsonOutput that writes to stdout
    pub fn new() -> Self {
        Self {
            writer: stdout_writer(),
        }
    }

    /// Create a new JsonOutput that writes to a file
    pub fn to_file(file: std::fs::File) -> Self {
        Self {
            writer: Mutex::new(Box::new(file)),
        }
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputHandler for JsonOutput {
    fn emit_all(&self, names: &[String]) -> anyhow::Result<()> {
        let mut writer = lock(&self.writer)?;

        let json = serde_json::to_string(names)?;
        writeln!(writer, "{}", json)?;
        writer.flush()?;

        Ok(())
    }

    fn flush(&self) -> anyhow::Result<()> {
        lock(&self.writer)?.flush()?;
        Ok(())
    }
}
