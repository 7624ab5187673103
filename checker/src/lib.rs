//! `json-check`: validates JSON documents with the strict decoder.

pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod runner;

pub use cli::Cli;
pub use config::CheckerConfig;
pub use error::{CheckError, Result};
pub use report::{FileReport, Outcome, TreeStats};
pub use runner::{RunSummary, check_sources, run};
