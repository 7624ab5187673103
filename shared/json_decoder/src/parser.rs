//! JSON parsing implementation.
//!
//! Strings and numbers live in their own modules as further `impl Parser`
//! blocks; this module holds the cursor, the value dispatcher, the
//! containers and the keyword literals.

use crate::error::{ErrorKind, ParseError, Result};
use crate::options::ParseOptions;
use crate::value::{Map, Value};

/// Parses a JSON document into a [`Value`] using the default options.
///
/// The document must hold exactly one value, optionally surrounded by
/// spaces, tabs, carriage returns and newlines.
///
/// # Errors
///
/// Returns a `ParseError` if the input is not valid JSON.
///
/// # Examples
///
/// ```
/// use json_decoder::{ErrorKind, Value, parse};
///
/// assert_eq!(parse(" null ").unwrap(), Value::Null);
/// assert_eq!(parse(r#""a\tb""#).unwrap(), Value::from("a\tb"));
///
/// let err = parse(r#"{"x":1}{"y":2}"#).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::TrailingContent);
/// ```
pub fn parse(input: &str) -> Result<Value> {
    parse_with_options(input, &ParseOptions::default())
}

/// Parses a JSON document into a [`Value`] with explicit options.
///
/// # Errors
///
/// Returns a `ParseError` if the input is not valid JSON or breaks a limit
/// set in `options`.
pub fn parse_with_options(input: &str, options: &ParseOptions) -> Result<Value> {
    options.log_debug(|| format!("Decoding document of {} bytes", input.len()));

    let result = Parser::new(input, options).parse_document();

    match &result {
        Ok(value) => options.log_debug(|| format!("Decoded top-level {}", value.kind())),
        Err(err) => options.log_warn(|| format!("Rejected document: {}", err)),
    }
    result
}

/// Recursive-descent parser state for one document.
///
/// `position` is a byte offset that only moves forward and always sits on a
/// char boundary of `input`.
pub(crate) struct Parser<'a> {
    pub(crate) input: &'a str,
    pub(crate) position: usize,
    pub(crate) options: &'a ParseOptions,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(input: &'a str, options: &'a ParseOptions) -> Self {
        Self {
            input,
            position: 0,
            options,
            depth: 0,
        }
    }

    fn parse_document(&mut self) -> Result<Value> {
        self.skip_whitespace();
        let value = self.parse_value()?;
        self.skip_whitespace();

        if let Some(ch) = self.peek() {
            return Err(self.error(
                ErrorKind::TrailingContent,
                format!("unexpected '{}' after the top-level value", ch),
            ));
        }
        Ok(value)
    }

    /// Dispatches on the current character. The cursor must already be on
    /// the first significant character of the value.
    pub(crate) fn parse_value(&mut self) -> Result<Value> {
        let Some(ch) = self.peek() else {
            return Err(self.error(
                ErrorKind::UnexpectedEndOfInput,
                "expected a value but the input ended",
            ));
        };

        match ch {
            '"' => self.parse_string().map(Value::String),
            '-' | '0'..='9' => self.parse_number().map(Value::Number),
            '{' => self.nested(Self::parse_object).map(Value::Object),
            '[' => self.nested(Self::parse_array).map(Value::Array),
            't' => self.parse_literal("true", Value::Bool(true)),
            'f' => self.parse_literal("false", Value::Bool(false)),
            'n' => self.parse_literal("null", Value::Null),
            _ => Err(self.error(
                ErrorKind::UnexpectedCharacter,
                format!("unexpected character '{}' where a value was expected", ch),
            )),
        }
    }

    /// Runs a container parser one level deeper, enforcing the depth limit.
    fn nested<T>(&mut self, parse: fn(&mut Self) -> Result<T>) -> Result<T> {
        if let Some(max_depth) = self.options.max_depth() {
            if self.depth >= max_depth {
                return Err(self.error(
                    ErrorKind::MaxDepthExceeded,
                    format!("nesting exceeds the maximum depth of {}", max_depth),
                ));
            }
        }

        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    pub(crate) fn parse_object(&mut self) -> Result<Map> {
        if self.peek() != Some('{') {
            return Err(self.error(ErrorKind::MissingOpenBrace, "expected '{' to open an object"));
        }
        self.advance();
        self.skip_whitespace();

        let mut map = Map::new();

        match self.peek() {
            Some('}') => {
                self.advance();
                return Ok(map);
            }
            None => return Err(self.unclosed_object()),
            Some(_) => {}
        }

        loop {
            let key = self.parse_string()?;

            self.skip_whitespace();
            if self.peek() != Some(':') {
                return Err(self.error(
                    ErrorKind::MissingColon,
                    format!("expected ':' after object key \"{}\"", key.escape_debug()),
                ));
            }
            self.advance();
            self.skip_whitespace();

            let value = self.parse_value()?;
            map.insert(key, value);

            self.skip_whitespace();
            match self.peek() {
                Some(',') => {
                    self.advance();
                    self.skip_whitespace();
                    if self.is_at_end() {
                        return Err(self.unclosed_object());
                    }
                }
                Some('}') => {
                    self.advance();
                    return Ok(map);
                }
                Some(ch) => {
                    return Err(self.error(
                        ErrorKind::UnknownObjectSeparator,
                        format!("expected ',' or '}}' after object member, found '{}'", ch),
                    ));
                }
                None => return Err(self.unclosed_object()),
            }
        }
    }

    pub(crate) fn parse_array(&mut self) -> Result<Vec<Value>> {
        if self.peek() != Some('[') {
            return Err(self.error(
                ErrorKind::MissingOpenBracket,
                "expected '[' to open an array",
            ));
        }
        self.advance();
        self.skip_whitespace();

        let mut array = Vec::new();

        match self.peek() {
            Some(']') => {
                self.advance();
                return Ok(array);
            }
            None => return Err(self.unclosed_array()),
            Some(_) => {}
        }

        loop {
            array.push(self.parse_value()?);

            self.skip_whitespace();
            match self.peek() {
                Some(',') => {
                    self.advance();
                    self.skip_whitespace();
                    if self.is_at_end() {
                        return Err(self.unclosed_array());
                    }
                }
                Some(']') => {
                    self.advance();
                    return Ok(array);
                }
                Some(ch) => {
                    return Err(self.error(
                        ErrorKind::UnknownArraySeparator,
                        format!("expected ',' or ']' after array element, found '{}'", ch),
                    ));
                }
                None => return Err(self.unclosed_array()),
            }
        }
    }

    /// Matches one of the ASCII keywords `true`, `false` or `null`.
    fn parse_literal(&mut self, keyword: &'static str, value: Value) -> Result<Value> {
        let rest = &self.input[self.position..];

        if rest.chars().take(keyword.len()).count() < keyword.len() {
            return Err(self.error(
                ErrorKind::TruncatedKeyword,
                format!("input ended before the keyword '{}' was complete", keyword),
            ));
        }
        if !rest.starts_with(keyword) {
            let found: String = rest.chars().take(keyword.len()).collect();
            return Err(self.error(
                ErrorKind::MisspelledKeyword,
                format!("expected '{}', found '{}'", keyword, found.escape_debug()),
            ));
        }

        self.position += keyword.len();
        Ok(value)
    }

    fn unclosed_object(&self) -> ParseError {
        self.error(
            ErrorKind::MissingCloseBrace,
            "input ended inside an object; expected '}'",
        )
    }

    fn unclosed_array(&self) -> ParseError {
        self.error(
            ErrorKind::MissingCloseBracket,
            "input ended inside an array; expected ']'",
        )
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    /// Moves past the current character.
    pub(crate) fn advance(&mut self) {
        if let Some(ch) = self.peek() {
            self.position += ch.len_utf8();
        }
    }

    /// Skips JSON whitespace: space, tab, carriage return and newline.
    pub(crate) fn skip_whitespace(&mut self) {
        let rest = &self.input[self.position..];
        let trimmed = rest.trim_start_matches([' ', '\t', '\r', '\n']);
        self.position += rest.len() - trimmed.len();
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// 1-based character offset of a byte offset into the input.
    pub(crate) fn char_position(&self, offset: usize) -> usize {
        self.input[..offset].chars().count() + 1
    }

    pub(crate) fn error(&self, kind: ErrorKind, message: impl Into<String>) -> ParseError {
        self.error_at(self.position, kind, message)
    }

    pub(crate) fn error_at(
        &self,
        offset: usize,
        kind: ErrorKind,
        message: impl Into<String>,
    ) -> ParseError {
        ParseError::new(kind, message.into(), self.input, offset)
    }
}
