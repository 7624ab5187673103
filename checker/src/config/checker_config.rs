use super::CONFIG_FILE_NAME;
use super::decoder_config::DecoderConfig;
use super::fields::{as_section, reject_unknown};
use super::logging_config::LoggingConfig;
use crate::error::Result;
use config_loader::{ConfigError, find_config_file, load_config_file};
use json_decoder::Value;
use std::path::Path;

/// Main checker configuration
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CheckerConfig {
    pub decoder: DecoderConfig,
    pub logging: LoggingConfig,
}

impl CheckerConfig {
    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = load_config_file(path)?;
        Self::from_json_str(&content)
    }

    /// Uses the first `json-check.json` found by
    /// [`config_loader::find_config_file`], or the defaults when there is none.
    pub fn discover() -> Result<Self> {
        match find_config_file(CONFIG_FILE_NAME) {
            Ok(path) => Self::load_from_file(path),
            Err(ConfigError::FileNotFound(_)) => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let root: Value = content.parse()?;
        Self::from_json(&root)
    }

    pub fn from_json(root: &Value) -> Result<Self> {
        let root = as_section(root, "")?;
        reject_unknown(root, &["decoder", "logging"], "")?;

        let decoder = match root.get("decoder") {
            Some(section) => DecoderConfig::from_json(section)?,
            None => DecoderConfig::default(),
        };
        let logging = match root.get("logging") {
            Some(section) => LoggingConfig::from_json(section)?,
            None => LoggingConfig::default(),
        };

        Ok(CheckerConfig { decoder, logging })
    }
}
