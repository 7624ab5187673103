//! Leveled, timestamped logging shared by the decoder and the checker.
//!
//! Records are written synchronously, so nothing is lost when a short-lived
//! process exits right after logging.

pub mod error;
mod log_level;
mod log_message;
mod log_writer;
mod logger;

pub use error::{LoggingError, Result};
pub use log_level::LogLevel;
pub use logger::Logger;
