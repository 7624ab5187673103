//! Internal log record.

use crate::log_level::LogLevel;
use chrono::Local;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// A single formatted-on-demand log record.
#[derive(Debug, Clone)]
pub(crate) struct LogMessage<'a> {
    pub timestamp: String,
    pub level: LogLevel,
    pub component: Option<&'a str>,
    pub message: &'a str,
}

impl<'a> LogMessage<'a> {
    /// Creates a record stamped with the current local time.
    pub fn new(level: LogLevel, component: Option<&'a str>, message: &'a str) -> Self {
        Self {
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            level,
            component,
            message,
        }
    }

    /// Formats the record as one line: `[timestamp] LEVEL [component: name]: message\n`
    pub fn format(&self) -> String {
        match self.component {
            Some(component) => format!(
                "[{}] {} [component: {}]: {}\n",
                self.timestamp,
                self.level.as_str(),
                component,
                self.message
            ),
            None => format!(
                "[{}] {}: {}\n",
                self.timestamp,
                self.level.as_str(),
                self.message
            ),
        }
    }
}
