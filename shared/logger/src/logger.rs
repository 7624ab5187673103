//! Thread-safe logger implementation.
//!
//! This module provides the main [`Logger`] interface. Every clone writes to
//! the same sink, so records from several threads never interleave within
//! a line.

use crate::error::Result;
use crate::log_level::LogLevel;
use crate::log_message::LogMessage;
use crate::log_writer::LogWriter;
use std::fmt;
use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

/// Thread-safe, leveled logger.
///
/// # Examples
///
/// ```
/// use logging::{LogLevel, Logger};
///
/// let logger = Logger::from_writer(std::io::sink(), LogLevel::Info);
/// logger.info("Checking 3 documents");
/// logger.debug("Not recorded at Info level");
///
/// let decoder_logger = logger.for_component("Decoder");
/// decoder_logger.warn("Rejected document");
/// ```
#[derive(Clone)]
pub struct Logger {
    writer: Arc<Mutex<LogWriter>>,
    level: LogLevel,
    component: Option<String>,
    console_output: bool,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .field("component", &self.component)
            .field("console_output", &self.console_output)
            .finish()
    }
}

impl Logger {
    /// Creates a logger that appends to a file.
    ///
    /// # Arguments
    ///
    /// * `log_path` - Path to log file (created if it doesn't exist)
    /// * `level` - Minimum log level to record
    ///
    /// # Errors
    ///
    /// Returns error if the log file cannot be created or opened.
    pub fn new(log_path: &Path, level: LogLevel) -> Result<Self> {
        let writer = LogWriter::open(log_path)?;
        Ok(Self::with_writer(writer, level, None, false))
    }

    /// Creates a file logger with component identification.
    ///
    /// # Arguments
    ///
    /// * `log_path` - Path to log file (created if it doesn't exist)
    /// * `level` - Minimum log level to record
    /// * `component` - Component name (e.g., "Checker", "Decoder")
    /// * `console_output` - Also echo records to stderr
    ///
    /// # Errors
    ///
    /// Returns error if the log file cannot be created or opened.
    pub fn with_component(
        log_path: &Path,
        level: LogLevel,
        component: &str,
        console_output: bool,
    ) -> Result<Self> {
        let writer = LogWriter::open(log_path)?;
        Ok(Self::with_writer(
            writer,
            level,
            Some(component.to_string()),
            console_output,
        ))
    }

    /// Creates a logger writing to any sink, such as stderr or a buffer.
    pub fn from_writer<W: Write + Send + 'static>(sink: W, level: LogLevel) -> Self {
        Self::with_writer(LogWriter::new(sink), level, None, false)
    }

    fn with_writer(
        writer: LogWriter,
        level: LogLevel,
        component: Option<String>,
        console_output: bool,
    ) -> Self {
        Logger {
            writer: Arc::new(Mutex::new(writer)),
            level,
            component,
            console_output,
        }
    }

    /// Returns a logger for another component that shares this logger's
    /// sink, level and console setting.
    pub fn for_component(&self, component: &str) -> Self {
        Logger {
            writer: Arc::clone(&self.writer),
            level: self.level,
            component: Some(component.to_string()),
            console_output: self.console_output,
        }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Returns true if records at `level` would be written.
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.level
    }

    /// Logs a debug message (only if level is Debug).
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    /// Logs an info message (only if level is Info or lower).
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    /// Logs a warning message (only if level is Warn or lower).
    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    /// Logs an error message (always recorded).
    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    /// Filters by level and writes the record to the shared sink.
    fn log(&self, level: LogLevel, message: &str) {
        if !self.enabled(level) {
            return;
        }

        let msg = LogMessage::new(level, self.component.as_deref(), message);

        if self.console_output {
            eprint!("{}", msg.format());
        }

        self.writer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .write_message(&msg);
    }
}
