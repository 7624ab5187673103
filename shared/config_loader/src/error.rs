use std::fmt;

/// Result type used throughout the library.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while locating or reading input.
#[derive(Debug)]
pub enum ConfigError {
    /// The file does not exist.
    FileNotFound(String),

    /// The file or stream exists but could not be read as UTF-8 text.
    ReadError(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "File not found: {}", path),
            ConfigError::ReadError(msg) => write!(f, "Read error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
