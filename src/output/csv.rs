//! CSV output handler

use crate::output::{lock, stdout_writer, OutputHandler, SharedWriter};
use std::io::Write;
use std::sync::Mutex;

/// CSV output with a single `subdomain` column
pub struct CsvOutput {
    writer: SharedWriter,
}

impl CsvOutput {
    /// Create a new CsvOutput that writes to stdout
    pub fn new() -> Self {
        Self {
            writer: stdout_writer(),
        }
    }

    /// Create a new CsvOutput that writes to a file
    pub fn to_file(file: std::fs::File) -> Self {
        Self {
            writer: Mutex::new(Box::new(file)),
        }
    }
}

impl Default for CsvOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputHandler for CsvOutput {
    fn emit_all(&self, names: &[String]) -> anyhow::Result<()> {
        let mut guard = lock(&self.writer)?;

        {
            let mut csv_writer = ::csv::Writer::from_writer(&mut *guard);
            csv_writer.write_record(["subdomain"])?;
            for name in names {
                csv_writer.write_record([name])?;
            }
            csv_writer.flush()?;
        }

        guard.flush()?;
        Ok(())
    }

    fn flush(&self) -> anyhow::Result<()> {
        lock(&self.writer)?.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_csv_output() {
        let temp_file = NamedTempFile::new().unwrap();
        let handler = CsvOutput::to_file(temp_file.reopen().unwrap());

        handler
            .emit_all(&["a.example.com".to_string(), "b.example.com".to_string()])
            .unwrap();
        handler.flush().unwrap();

        let written = std::fs::read_to_string(temp_file.path()).unwrap();
        assert_eq!(written, "subdomain\na.example.com\nb.example.com\n");
    }
}
