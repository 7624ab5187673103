//! Command-line arguments.

use crate::config::CheckerConfig;
use clap::Parser;
use std::path::PathBuf;

/// Validate JSON documents with a strict decoder
#[derive(Debug, Parser)]
#[command(name = "json-check", version)]
pub struct Cli {
    /// Documents to check; `-` reads standard input
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<String>,

    /// Configuration file [default: first json-check.json found]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Maximum nesting of objects and arrays
    #[arg(long, value_name = "N", conflicts_with = "no_depth_limit")]
    pub max_depth: Option<usize>,

    /// Accept any nesting depth
    #[arg(long)]
    pub no_depth_limit: bool,

    /// Accept raw control characters inside strings
    #[arg(long)]
    pub allow_control_characters: bool,

    /// Minimum log level: debug, info, warn or error
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Print only the documents that fail
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Lets flags given on the command line win over the configuration file.
    pub fn apply_to(&self, config: &mut CheckerConfig) {
        if let Some(depth) = self.max_depth {
            config.decoder.max_depth = Some(depth);
        }
        if self.no_depth_limit {
            config.decoder.max_depth = None;
        }
        if self.allow_control_characters {
            config.decoder.allow_control_characters = true;
        }
        if let Some(level) = &self.log_level {
            config.logging.log_level = level.clone();
        }
    }
}
