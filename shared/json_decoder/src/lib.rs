//! Strict JSON decoding into a dynamically-typed value tree.
//!
//! The decoder is a single-pass recursive-descent parser. It accepts exactly
//! one JSON value surrounded by optional whitespace and rejects everything
//! else with a [`ParseError`] that names the violated rule and the position
//! where it was detected.
//!
//! Arrays stay heterogeneous and objects keep their keys in source order.
//!
//! # Example
//!
//! ```
//! use json_decoder::{ErrorKind, Value, parse};
//!
//! let value = parse(r#"[1, "two", true, null, {"k": 3.5e2}]"#).unwrap();
//! let items = value.as_array().unwrap();
//! assert_eq!(items.len(), 5);
//! assert_eq!(items[4].get("k").and_then(Value::as_number), Some(350.0));
//!
//! let err = parse(r#"{"a": 1,}"#).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::MissingOpenQuote);
//! assert_eq!(err.position(), 9);
//! ```

pub mod error;
mod number;
mod options;
mod parser;
mod string;
mod value;

pub use error::{ErrorKind, ParseError, Result};
pub use options::{DEFAULT_MAX_DEPTH, ParseOptions};
pub use parser::{parse, parse_with_options};
pub use value::{Map, Value, ValueKind};
