//! Plain text output: one hostname per line, nothing else

use crate::output::{lock, stdout_writer, OutputHandler, SharedWriter};
use std::io::Write;
use std::sync::Mutex;

pub struct PlainOutput {
    writer: SharedWriter,
}

impl PlainOutput {
    /// Create a new PlainOutput that writes to stdout
    pub fn new() -> Self {
        Self {
            writer: stdout_writer(),
        }
    }

    /// Create a new PlainOutput that writes to a file
    pub fn to_file(file: std::fs::File) -> Self {
        Self::to_writer(Box::new(file))
    }

    pub fn to_writer(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }
}

impl Default for PlainOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputHandler for PlainOutput {
    fn emit_all(&self, names: &[String]) -> anyhow::Result<()> {
        let mut writer = lock(&self.writer)?;

        for name in names {
            writeln!(writer, "{}", name)?;
        }

        writer.flush()?;
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
    use std::sync::{Arc, Mutex as StdMutex};

    /// Writer that keeps everything in a shared buffer
    #[derive(Clone, Default)]
    struct Capture(Arc<StdMutex<Vec<u8>>>);

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_plain_output_lines() {
        let capture = Capture::default();
        let handler = PlainOutput::to_writer(Box::new(capture.clone()));

        handler
            .emit_all(&["dev.example.com".to_string(), "www.example.com".to_string()])
            .unwrap();

        let written = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
        assert_eq!(written, "dev.example.com\nwww.example.com\n");
    }

    #[test]
    fn test_plain_output_empty() {
        let capture = Capture::default();
        let handler = PlainOutput::to_writer(Box::new(capture.clone()));

        handler.emit_all(&[]).unwrap();

        assert!(capture.0.lock().unwrap().is_empty());
    }
}
