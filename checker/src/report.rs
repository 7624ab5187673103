//! Per-document results.

use config_loader::ConfigError;
use json_decoder::{ParseError, Value, ValueKind};
use std::fmt;

/// Size and nesting of a decoded tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeStats {
    /// Every node, containers included.
    pub values: usize,
    /// Deepest container nesting; 0 for a scalar.
    pub depth: usize,
}

impl TreeStats {
    /// Walks the tree with an explicit stack, so arbitrarily deep trees are safe.
    pub fn measure(root: &Value) -> Self {
        let mut stats = TreeStats { values: 0, depth: 0 };
        let mut pending = vec![(root, 0)];

        while let Some((value, enclosing)) = pending.pop() {
            stats.values += 1;
            match value {
                Value::Object(map) => {
                    stats.depth = stats.depth.max(enclosing + 1);
                    pending.extend(map.values().map(|child| (child, enclosing + 1)));
                }
                Value::Array(items) => {
                    stats.depth = stats.depth.max(enclosing + 1);
                    pending.extend(items.iter().map(|child| (child, enclosing + 1)));
                }
                _ => {}
            }
        }

        stats
    }
}

/// What happened to one document.
#[derive(Debug)]
pub enum Outcome {
    Valid { kind: ValueKind, stats: TreeStats },
    Invalid(ParseError),
    Unreadable(ConfigError),
}

#[derive(Debug)]
pub struct FileReport {
    pub source: String,
    pub outcome: Outcome,
}

impl FileReport {
    pub fn new(source: &str, outcome: Outcome) -> Self {
        FileReport {
            source: source.to_string(),
            outcome,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self.outcome, Outcome::Valid { .. })
    }
}

impl fmt::Display for FileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Outcome::Valid { kind, stats } => write!(
                f,
                "OK {}: {} ({} values, depth {})",
                self.source, kind, stats.values, stats.depth
            ),
            Outcome::Invalid(err) => write!(f, "FAIL {}: {}", self.source, err),
            Outcome::Unreadable(err) => write!(f, "FAIL {}: {}", self.source, err),
        }
    }
}
