//! Synchronous log sink.

use crate::error::Result;
use crate::log_message::LogMessage;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Destination shared by every clone of a logger.
pub(crate) struct LogWriter {
    sink: Box<dyn Write + Send>,
}

impl LogWriter {
    /// Opens or creates `log_path` in append mode.
    pub fn open(log_path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;
        Ok(Self::new(file))
    }

    pub fn new<W: Write + Send + 'static>(sink: W) -> Self {
        Self {
            sink: Box::new(sink),
        }
    }

    /// Writes and flushes one record. Failures are reported on stderr and
    /// never reach the caller.
    pub fn write_message(&mut self, message: &LogMessage<'_>) {
        if let Err(e) = self.sink.write_all(message.format().as_bytes()) {
            eprintln!("Error writing log: {}", e);
            return;
        }
        if let Err(e) = self.sink.flush() {
            eprintln!("Error flushing log: {}", e);
        }
    }
}
