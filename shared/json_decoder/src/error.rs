//! Error types for JSON decoding.

use std::fmt;

/// Result type for decoding operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Number of characters of input captured after the error position.
const CONTEXT_CHARS: usize = 20;

/// The grammar rule a document violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A value was expected but the character starts no JSON value.
    UnexpectedCharacter,
    /// A value was expected but the input ended.
    UnexpectedEndOfInput,
    /// A string (or object key) does not start with `"`.
    MissingOpenQuote,
    /// The input ended before the closing `"` of a string.
    UnterminatedString,
    /// A backslash escape other than `\t \r \n \f \b \/ \\ \" \uXXXX`.
    UnknownEscapeSequence,
    /// A `\u` escape naming an unpaired UTF-16 surrogate.
    InvalidUnicodeEscape,
    /// An unescaped control character (U+0000 to U+001F) inside a string.
    ControlCharacterInString,
    /// A number without digits in its integer part.
    MissingLeadingDigit,
    /// A `.` in a number not followed by a digit.
    MissingFractionDigit,
    /// An exponent marker in a number not followed by a digit.
    MissingExponentDigit,
    /// An object does not start with `{`.
    MissingOpenBrace,
    /// An object key is not followed by `:`.
    MissingColon,
    /// The input ended inside an object.
    MissingCloseBrace,
    /// An object member is followed by something other than `,` or `}`.
    UnknownObjectSeparator,
    /// An array does not start with `[`.
    MissingOpenBracket,
    /// The input ended inside an array.
    MissingCloseBracket,
    /// An array element is followed by something other than `,` or `]`.
    UnknownArraySeparator,
    /// The input ended in the middle of `true`, `false` or `null`.
    TruncatedKeyword,
    /// A value starting like a keyword does not spell it.
    MisspelledKeyword,
    /// Non-whitespace input after the top-level value.
    TrailingContent,
    /// Objects and arrays are nested deeper than the configured limit.
    MaxDepthExceeded,
}

impl ErrorKind {
    /// Returns a stable, human-readable name for the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::UnexpectedCharacter => "unexpected character",
            ErrorKind::UnexpectedEndOfInput => "unexpected end of input",
            ErrorKind::MissingOpenQuote => "missing opening quote",
            ErrorKind::UnterminatedString => "unterminated string",
            ErrorKind::UnknownEscapeSequence => "unknown escape sequence",
            ErrorKind::InvalidUnicodeEscape => "invalid unicode escape",
            ErrorKind::ControlCharacterInString => "control character in string",
            ErrorKind::MissingLeadingDigit => "missing leading digit",
            ErrorKind::MissingFractionDigit => "missing fraction digit",
            ErrorKind::MissingExponentDigit => "missing exponent digit",
            ErrorKind::MissingOpenBrace => "missing opening brace",
            ErrorKind::MissingColon => "missing colon",
            ErrorKind::MissingCloseBrace => "missing closing brace",
            ErrorKind::UnknownObjectSeparator => "unknown object separator",
            ErrorKind::MissingOpenBracket => "missing opening bracket",
            ErrorKind::MissingCloseBracket => "missing closing bracket",
            ErrorKind::UnknownArraySeparator => "unknown array separator",
            ErrorKind::TruncatedKeyword => "truncated keyword",
            ErrorKind::MisspelledKeyword => "misspelled keyword",
            ErrorKind::TrailingContent => "trailing content",
            ErrorKind::MaxDepthExceeded => "maximum depth exceeded",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a document is not valid JSON.
///
/// Positions are 1-based and counted in characters, so the end of the input
/// is reported as `length + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    kind: ErrorKind,
    message: String,
    position: usize,
    line: usize,
    column: usize,
    context: String,
}

impl ParseError {
    /// Builds an error detected at byte `offset` of `input`.
    ///
    /// `offset` must lie on a char boundary.
    pub(crate) fn new(kind: ErrorKind, message: String, input: &str, offset: usize) -> Self {
        let (before, after) = input.split_at(offset);

        let mut position = 1;
        let mut line = 1;
        let mut column = 1;
        for ch in before.chars() {
            position += 1;
            if ch == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }

        Self {
            kind,
            message,
            position,
            line,
            column,
            context: after.chars().take(CONTEXT_CHARS).collect(),
        }
    }

    /// The rule that was violated.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Description of the failure, without location.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// 1-based character offset where the failure was detected.
    pub fn position(&self) -> usize {
        self.position
    }

    /// 1-based line of [`position`](Self::position).
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based column of [`position`](Self::position), in characters.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Input text starting at the error position, truncated.
    ///
    /// Empty when the failure was detected at the end of the input.
    pub fn context(&self) -> &str {
        &self.context
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at position {} (line {}, column {})",
            self.message, self.position, self.line, self.column
        )?;
        if !self.context.is_empty() {
            write!(f, " near '{}'", self.context.escape_debug())?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}
