//! Checker configuration

pub mod checker_config;
pub mod decoder_config;
mod fields;
pub mod logging_config;

pub use checker_config::CheckerConfig;
pub use decoder_config::DecoderConfig;
pub use logging_config::LoggingConfig;

/// File searched for when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "json-check.json";
