//! Typed access to members of configuration objects.

use crate::error::{CheckError, Result};
use json_decoder::{Map, Value};

pub(crate) fn as_section<'v>(value: &'v Value, path: &str) -> Result<&'v Map> {
    value
        .as_object()
        .ok_or_else(|| wrong_type(path, "an object", value))
}

/// Fails on members not named in `allowed`, which catches misspelled keys.
pub(crate) fn reject_unknown(section: &Map, allowed: &[&str], path: &str) -> Result<()> {
    match section.keys().find(|key| !allowed.contains(&key.as_str())) {
        Some(key) => Err(CheckError::Config(format!(
            "unknown field '{}' (expected one of: {})",
            join(path, key),
            allowed.join(", ")
        ))),
        None => Ok(()),
    }
}

pub(crate) fn bool_field(section: &Map, key: &str, path: &str) -> Result<Option<bool>> {
    section
        .get(key)
        .map(|value| {
            value
                .as_bool()
                .ok_or_else(|| wrong_type(&join(path, key), "a boolean", value))
        })
        .transpose()
}

pub(crate) fn string_field(section: &Map, key: &str, path: &str) -> Result<Option<String>> {
    section
        .get(key)
        .map(|value| {
            value
                .as_string()
                .map(str::to_string)
                .ok_or_else(|| wrong_type(&join(path, key), "a string", value))
        })
        .transpose()
}

/// Reads a depth limit: a non-negative integer, or `null` for no limit.
pub(crate) fn depth_field(section: &Map, key: &str, path: &str) -> Result<Option<Option<usize>>> {
    let Some(value) = section.get(key) else {
        return Ok(None);
    };
    match value {
        Value::Null => Ok(Some(None)),
        Value::Number(n) if n.fract() == 0.0 && *n >= 0.0 && *n <= f64::from(u32::MAX) => {
            Ok(Some(Some(*n as usize)))
        }
        other => Err(wrong_type(
            &join(path, key),
            "a non-negative integer or null",
            other,
        )),
    }
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

fn wrong_type(path: &str, expected: &str, found: &Value) -> CheckError {
    let path = if path.is_empty() { "<root>" } else { path };
    CheckError::Config(format!(
        "'{}' must be {}, found {}",
        path,
        expected,
        found.kind()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use json_decoder::parse;

    fn section(json: &str) -> Map {
        parse(json).unwrap().as_object().unwrap().clone()
    }

    #[test]
    fn test_missing_fields_are_none() {
        let map = section("{}");
        assert_eq!(bool_field(&map, "flag", "s").unwrap(), None);
        assert_eq!(string_field(&map, "name", "s").unwrap(), None);
        assert_eq!(depth_field(&map, "depth", "s").unwrap(), None);
    }

    #[test]
    fn test_depth_field_values() {
        let map = section(r#"{"a": 64, "b": null, "c": -1, "d": 2.5, "e": "8"}"#);
        assert_eq!(depth_field(&map, "a", "s").unwrap(), Some(Some(64)));
        assert_eq!(depth_field(&map, "b", "s").unwrap(), Some(None));
        assert!(depth_field(&map, "c", "s").is_err());
        assert!(depth_field(&map, "d", "s").is_err());

        let err = depth_field(&map, "e", "s").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid configuration: 's.e' must be a non-negative integer or null, found string"
        );
    }

    #[test]
    fn test_wrong_types() {
        let map = section(r#"{"flag": "yes", "name": 3}"#);
        assert!(bool_field(&map, "flag", "s").is_err());
        assert!(string_field(&map, "name", "s").is_err());
        assert!(as_section(&Value::Null, "").is_err());
    }

    #[test]
    fn test_reject_unknown() {
        let map = section(r#"{"max_depth": 1, "max_dept": 2}"#);
        let err = reject_unknown(&map, &["max_depth"], "decoder").unwrap_err();
        assert!(err.to_string().contains("unknown field 'decoder.max_dept'"));
        assert!(reject_unknown(&section(r#"{"max_depth": 1}"#), &["max_depth"], "decoder").is_ok());
    }
}
