//! Error types for logging operations.

use std::fmt;
use std::io;

/// Result type for logging operations.
pub type Result<T> = std::result::Result<T, LoggingError>;

/// Errors that can occur while setting up a logger.
#[derive(Debug)]
pub enum LoggingError {
    /// I/O error from opening the log file.
    Io(io::Error),
    /// A level name that is not one of debug, info, warn or error.
    UnknownLevel(String),
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggingError::Io(err) => write!(f, "I/O error: {}", err),
            LoggingError::UnknownLevel(name) => write!(
                f,
                "Unknown log level '{}' (expected debug, info, warn or error)",
                name
            ),
        }
    }
}

impl std::error::Error for LoggingError {}

impl From<io::Error> for LoggingError {
    fn from(err: io::Error) -> Self {
        LoggingError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_unknown_level_display() {
        let err = LoggingError::UnknownLevel("trace".to_string());
        assert_eq!(
            err.to_string(),
            "Unknown log level 'trace' (expected debug, info, warn or error)"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = Error::new(ErrorKind::PermissionDenied, "read-only directory");
        let logging_err: LoggingError = io_err.into();

        match logging_err {
            LoggingError::Io(_) => {}
            _ => panic!("Expected LoggingError::Io"),
        }
    }
}
