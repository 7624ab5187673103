//! Errors that stop a checker run.

use config_loader::ConfigError;
use json_decoder::ParseError;
use logging::LoggingError;
use std::fmt;

/// Result type for checker setup.
pub type Result<T> = std::result::Result<T, CheckError>;

/// A failure outside the documents being checked.
#[derive(Debug)]
pub enum CheckError {
    /// The configuration file could not be read.
    Load(ConfigError),
    /// The configuration file is not valid JSON.
    Decode(ParseError),
    /// The configuration file has a field of the wrong type or range.
    Config(String),
    /// The logger could not be set up.
    Logging(LoggingError),
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::Load(err) => write!(f, "Cannot load configuration: {}", err),
            CheckError::Decode(err) => write!(f, "Configuration is not valid JSON: {}", err),
            CheckError::Config(msg) => write!(f, "Invalid configuration: {}", msg),
            CheckError::Logging(err) => write!(f, "Cannot set up logging: {}", err),
        }
    }
}

impl std::error::Error for CheckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CheckError::Load(err) => Some(err),
            CheckError::Decode(err) => Some(err),
            CheckError::Config(_) => None,
            CheckError::Logging(err) => Some(err),
        }
    }
}

impl From<ConfigError> for CheckError {
    fn from(err: ConfigError) -> Self {
        CheckError::Load(err)
    }
}

impl From<ParseError> for CheckError {
    fn from(err: ParseError) -> Self {
        CheckError::Decode(err)
    }
}

impl From<LoggingError> for CheckError {
    fn from(err: LoggingError) -> Self {
        CheckError::Logging(err)
    }
}
