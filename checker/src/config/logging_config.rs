use super::fields::{as_section, bool_field, reject_unknown, string_field};
use crate::error::Result;
use json_decoder::Value;
use logging::{LogLevel, Logger};
use std::io;
use std::path::Path;

/// Logging configuration
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    pub log_file_path: String,
    pub log_level: String,
    pub enable_console: bool,
    pub enable_file: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_file_path: "json-check.log".to_string(),
            log_level: "info".to_string(),
            enable_console: false,
            enable_file: true,
        }
    }
}

impl LoggingConfig {
    /// Reads the `logging` section; missing members keep their defaults.
    pub fn from_json(value: &Value) -> Result<Self> {
        let section = as_section(value, "logging")?;
        reject_unknown(
            section,
            &["log_file_path", "log_level", "enable_console", "enable_file"],
            "logging",
        )?;

        let defaults = Self::default();
        Ok(LoggingConfig {
            log_file_path: string_field(section, "log_file_path", "logging")?
                .unwrap_or(defaults.log_file_path),
            log_level: string_field(section, "log_level", "logging")?.unwrap_or(defaults.log_level),
            enable_console: bool_field(section, "enable_console", "logging")?
                .unwrap_or(defaults.enable_console),
            enable_file: bool_field(section, "enable_file", "logging")?
                .unwrap_or(defaults.enable_file),
        })
    }

    /// Builds the checker's logger. Records go to the log file, to stderr,
    /// to both, or nowhere.
    pub fn build_logger(&self) -> Result<Logger> {
        let level: LogLevel = self.log_level.parse()?;

        let logger = match (self.enable_file, self.enable_console) {
            (true, console) => {
                Logger::with_component(Path::new(&self.log_file_path), level, "Checker", console)?
            }
            (false, true) => Logger::from_writer(io::stderr(), level).for_component("Checker"),
            (false, false) => Logger::from_writer(io::sink(), level),
        };
        Ok(logger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CheckError;
    use json_decoder::parse;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_partial_section_keeps_defaults() {
        let json = parse(r#"{"log_level": "debug"}"#).unwrap();
        let config = LoggingConfig::from_json(&json).unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_file_path, "json-check.log");
        assert!(config.enable_file);
    }

    #[test]
    fn test_build_file_logger() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("check.log");
        let config = LoggingConfig {
            log_file_path: log_path.to_string_lossy().into_owned(),
            log_level: "warn".to_string(),
            enable_console: false,
            enable_file: true,
        };

        let logger = config.build_logger().unwrap();
        logger.info("not recorded");
        logger.warn("recorded");

        let content = fs::read_to_string(log_path).unwrap();
        assert!(!content.contains("not recorded"));
        assert!(content.contains("WARN [component: Checker]: recorded"));
    }

    #[test]
    fn test_unknown_level_is_an_error() {
        let config = LoggingConfig {
            log_level: "verbose".to_string(),
            enable_file: false,
            ..LoggingConfig::default()
        };
        assert!(matches!(config.build_logger(), Err(CheckError::Logging(_))));
    }

    #[test]
    fn test_disabled_logger() {
        let config = LoggingConfig {
            enable_file: false,
            enable_console: false,
            ..LoggingConfig::default()
        };
        assert_eq!(config.build_logger().unwrap().level(), LogLevel::Info);
    }
}
