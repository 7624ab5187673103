//! Per-parse settings.

use std::fmt;

#[cfg(feature = "logging")]
use logging::Logger;

/// Nesting limit applied by [`ParseOptions::default`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Settings for a single call to [`parse_with_options`](crate::parse_with_options).
///
/// # Examples
///
/// ```
/// use json_decoder::{ErrorKind, ParseOptions, parse_with_options};
///
/// let options = ParseOptions::new().with_max_depth(2);
/// assert!(parse_with_options("[[1]]", &options).is_ok());
///
/// let err = parse_with_options("[[[1]]]", &options).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::MaxDepthExceeded);
/// ```
#[derive(Clone)]
pub struct ParseOptions {
    max_depth: Option<usize>,
    allow_control_characters: bool,
    #[cfg(feature = "logging")]
    logger: Option<Logger>,
}

impl fmt::Debug for ParseOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("ParseOptions");
        debug
            .field("max_depth", &self.max_depth)
            .field("allow_control_characters", &self.allow_control_characters);
        #[cfg(feature = "logging")]
        debug.field("logger", &self.logger.is_some());
        debug.finish()
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
            allow_control_characters: false,
            #[cfg(feature = "logging")]
            logger: None,
        }
    }
}

impl ParseOptions {
    /// Strict settings with the default depth limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allows at most `depth` nested objects and arrays.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Removes the nesting limit. Deep enough input will then exhaust the stack.
    pub fn without_depth_limit(mut self) -> Self {
        self.max_depth = None;
        self
    }

    /// Copies raw control characters inside strings instead of rejecting them.
    pub fn allow_control_characters(mut self, allow: bool) -> Self {
        self.allow_control_characters = allow;
        self
    }

    /// Sets a logger that records the start and outcome of every parse.
    #[cfg(feature = "logging")]
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    pub fn allows_control_characters(&self) -> bool {
        self.allow_control_characters
    }

    /// Internal logging helper
    #[cfg(feature = "logging")]
    pub(crate) fn log_debug(&self, message: impl FnOnce() -> String) {
        if let Some(ref logger) = self.logger {
            logger.debug(&message());
        }
    }

    /// Internal logging helper for failures
    #[cfg(feature = "logging")]
    pub(crate) fn log_warn(&self, message: impl FnOnce() -> String) {
        if let Some(ref logger) = self.logger {
            logger.warn(&message());
        }
    }

    #[cfg(not(feature = "logging"))]
    pub(crate) fn log_debug(&self, _message: impl FnOnce() -> String) {}

    #[cfg(not(feature = "logging"))]
    pub(crate) fn log_warn(&self, _message: impl FnOnce() -> String) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_strict() {
        let options = ParseOptions::default();
        assert_eq!(options.max_depth(), Some(DEFAULT_MAX_DEPTH));
        assert!(!options.allows_control_characters());
    }

    #[test]
    fn test_builders() {
        let options = ParseOptions::new()
            .with_max_depth(4)
            .allow_control_characters(true);
        assert_eq!(options.max_depth(), Some(4));
        assert!(options.allows_control_characters());

        assert_eq!(options.without_depth_limit().max_depth(), None);
    }

    #[test]
    fn test_debug_output() {
        let rendered = format!("{:?}", ParseOptions::new().with_max_depth(3));
        assert!(rendered.contains("max_depth: Some(3)"));
        assert!(rendered.contains("allow_control_characters: false"));
    }
}
