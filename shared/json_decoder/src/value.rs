//! JSON value representation.

use indexmap::IndexMap;
use std::fmt;
use std::str::FromStr;

/// Object members in source order. A repeated key keeps its first slot and
/// holds the last value written to it.
pub type Map = IndexMap<String, Value>;

/// Represents a JSON value that can be an object, array, string, number, boolean, or null.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// JSON object: `{"key": "value"}`
    Object(Map),
    /// JSON array: `["item1", 2, null]`
    Array(Vec<Value>),
    /// JSON string: `"hello"`
    String(String),
    /// JSON number: `42` or `3.14`
    Number(f64),
    /// JSON boolean: `true` or `false`
    Bool(bool),
    /// JSON null: `null`
    Null,
}

/// The variant of a [`Value`], without its contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Object,
    Array,
    String,
    Number,
    Bool,
    Null,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Object => "object",
            ValueKind::Array => "array",
            ValueKind::String => "string",
            ValueKind::Number => "number",
            ValueKind::Bool => "boolean",
            ValueKind::Null => "null",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    /// Returns the variant of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Object(_) => ValueKind::Object,
            Value::Array(_) => ValueKind::Array,
            Value::String(_) => ValueKind::String,
            Value::Number(_) => ValueKind::Number,
            Value::Bool(_) => ValueKind::Bool,
            Value::Null => ValueKind::Null,
        }
    }

    /// Returns the string value if this is a JSON string, otherwise None.
    pub fn as_string(&self) -> Option<&str> {
        if let Value::String(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    /// Returns the number value if this is a JSON number, otherwise None.
    pub fn as_number(&self) -> Option<f64> {
        if let Value::Number(n) = self {
            Some(*n)
        } else {
            None
        }
    }

    /// Returns the boolean value if this is a JSON boolean, otherwise None.
    pub fn as_bool(&self) -> Option<bool> {
        if let Value::Bool(b) = self {
            Some(*b)
        } else {
            None
        }
    }

    /// Returns true if this is JSON null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the members if this is a JSON object, otherwise None.
    pub fn as_object(&self) -> Option<&Map> {
        if let Value::Object(map) = self {
            Some(map)
        } else {
            None
        }
    }

    /// Returns the elements if this is a JSON array, otherwise None.
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        if let Value::Array(arr) = self {
            Some(arr)
        } else {
            None
        }
    }

    /// Looks up a member of a JSON object. None for missing keys and non-objects.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object()?.get(key)
    }

    /// Gets a value from nested JSON objects by key path (dot notation).
    ///
    /// # Examples
    ///
    /// ```
    /// use json_decoder::parse;
    ///
    /// let json = parse(r#"{"user":{"name":"Alice","profile":{"age":30}}}"#).unwrap();
    ///
    /// assert_eq!(json.get_path("user.name").and_then(|v| v.as_string()), Some("Alice"));
    /// assert_eq!(json.get_path("user.profile.age").and_then(|v| v.as_number()), Some(30.0));
    /// assert!(json.get_path("user.email").is_none());
    /// ```
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        path.split('.').try_fold(self, |current, key| current.get(key))
    }
}

impl FromStr for Value {
    type Err = crate::error::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(members: Vec<(&str, Value)>) -> Value {
        Value::Object(
            members
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }

    #[test]
    fn test_kind() {
        assert_eq!(Value::Null.kind(), ValueKind::Null);
        assert_eq!(Value::from(true).kind(), ValueKind::Bool);
        assert_eq!(Value::from(1).kind(), ValueKind::Number);
        assert_eq!(Value::from("x").kind(), ValueKind::String);
        assert_eq!(Value::Array(Vec::new()).kind(), ValueKind::Array);
        assert_eq!(Value::from(Map::new()).kind(), ValueKind::Object);
        assert_eq!(ValueKind::Bool.to_string(), "boolean");
    }

    #[test]
    fn test_as_string() {
        let value = Value::String("hello".to_string());
        assert_eq!(value.as_string(), Some("hello"));
        assert_eq!(Value::Number(42.0).as_string(), None);
    }

    #[test]
    fn test_as_number() {
        assert_eq!(Value::Number(42.0).as_number(), Some(42.0));
        assert_eq!(Value::from("42").as_number(), None);
    }

    #[test]
    fn test_as_bool() {
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Null.as_bool(), None);
    }

    #[test]
    fn test_is_null() {
        assert!(Value::Null.is_null());
        assert!(!Value::from("null").is_null());
    }

    #[test]
    fn test_as_object_and_array() {
        let obj = object(vec![("key", Value::from("value"))]);
        assert!(obj.as_object().is_some());
        assert!(obj.as_array().is_none());

        let arr = Value::Array(vec![Value::Number(1.0), Value::Null]);
        assert_eq!(arr.as_array().map(Vec::len), Some(2));
        assert!(arr.as_object().is_none());
    }

    #[test]
    fn test_get_path() {
        let json = object(vec![(
            "user",
            object(vec![("age", Value::Number(30.0))]),
        )]);

        assert_eq!(
            json.get_path("user.age").and_then(Value::as_number),
            Some(30.0)
        );
        assert!(json.get_path("user.age.years").is_none());
        assert!(json.get_path("nonexistent").is_none());
        assert!(Value::Null.get("user").is_none());
    }

    #[test]
    fn test_object_equality_ignores_member_order() {
        let a = object(vec![("x", Value::from(1)), ("y", Value::from(2))]);
        let b = object(vec![("y", Value::from(2)), ("x", Value::from(1))]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_str() {
        let value: Value = "[true, null]".parse().unwrap();
        assert_eq!(value, Value::from(vec![Value::Bool(true), Value::Null]));
        assert!("[true,".parse::<Value>().is_err());
    }
}
