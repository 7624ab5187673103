//! # Config Loader
//!
//! Reads text from disk or stdin and locates configuration files. Parsing is
//! left to the caller.
//!
//! ```no_run
//! use config_loader::{find_config_file, load_config_file, read_source};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Option 1: search the usual locations
//!     let path = find_config_file("json-check.json")?;
//!     let config = load_config_file(&path)?;
//!
//!     // Option 2: a document named on the command line, `-` for stdin
//!     let document = read_source("-")?;
//!
//!     // The caller decides how to decode, e.g. with json_decoder::parse
//!     Ok(())
//! }
//! ```

pub mod error;

pub use error::{ConfigError, Result};

use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Environment variable naming the configuration file explicitly.
pub const CONFIG_ENV_VAR: &str = "JSON_CHECK_CONFIG";

/// Source name that stands for standard input.
pub const STDIN_SOURCE: &str = "-";

/// Reads a file as UTF-8 text.
///
/// # Examples
///
/// ```no_run
/// use config_loader::load_config_file;
///
/// let content = load_config_file("./config/json-check.json")?;
/// println!("Config content: {}", content);
/// # Ok::<(), config_loader::ConfigError>(())
/// ```
pub fn load_config_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    fs::read_to_string(path).map_err(|e| ConfigError::ReadError(format!("{}: {}", path.display(), e)))
}

/// Reads a whole document from a path, or from stdin when `source` is `-`.
pub fn read_source(source: &str) -> Result<String> {
    if source == STDIN_SOURCE {
        read_stream(io::stdin().lock(), "<stdin>")
    } else {
        load_config_file(source)
    }
}

/// Reads a stream to its end as UTF-8 text. `name` labels errors.
pub fn read_stream<R: Read>(mut reader: R, name: &str) -> Result<String> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|e| ConfigError::ReadError(format!("{}: {}", name, e)))?;
    Ok(content)
}

/// Searches for a configuration file in the usual locations.
///
/// Search order:
/// 1. Environment variable `JSON_CHECK_CONFIG` (if set and the file exists)
/// 2. `./config/{filename}`
/// 3. `./{filename}`
///
/// # Examples
///
/// ```no_run
/// use config_loader::find_config_file;
///
/// let path = find_config_file("json-check.json")?;
/// println!("Found config at: {}", path.display());
/// # Ok::<(), config_loader::ConfigError>(())
/// ```
pub fn find_config_file(filename: &str) -> Result<PathBuf> {
    let from_env = env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
    locate(filename, from_env, Path::new("."))
}

/// Finds and loads a configuration file in one step.
pub fn find_and_load(filename: &str) -> Result<String> {
    let path = find_config_file(filename)?;
    load_config_file(path)
}

fn locate(filename: &str, from_env: Option<PathBuf>, base_dir: &Path) -> Result<PathBuf> {
    let candidates = from_env.into_iter().chain([
        base_dir.join("config").join(filename),
        base_dir.join(filename),
    ]);

    for candidate in candidates {
        if candidate.is_file() {
            return Ok(candidate);
        }
    }

    Err(ConfigError::FileNotFound(format!(
        "'{}' not found. Searched: {} env var, ./config/{}, ./{}",
        filename, CONFIG_ENV_VAR, filename, filename
    )))
}
