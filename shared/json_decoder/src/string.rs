//! String decoding.
//!
//! Escapes are decoded in one left-to-right pass: every escape consumes
//! exactly its own characters and yields exactly one character, so an
//! escaped backslash can never combine with the text that follows it.

use crate::error::{ErrorKind, Result};
use crate::parser::Parser;

impl Parser<'_> {
    /// Parses a quoted string, leaving the cursor after the closing quote.
    pub(crate) fn parse_string(&mut self) -> Result<String> {
        if self.peek() != Some('"') {
            let message = match self.peek() {
                Some(ch) => format!("expected '\"' to open a string, found '{}'", ch),
                None => "expected '\"' to open a string but the input ended".to_string(),
            };
            return Err(self.error(ErrorKind::MissingOpenQuote, message));
        }
        let start = self.position;
        self.advance();

        let allow_control = self.options.allows_control_characters();
        let mut decoded = String::new();

        loop {
            let rest = &self.input[self.position..];
            let run = rest
                .find(|ch: char| ch == '"' || ch == '\\' || (!allow_control && ch < ' '))
                .unwrap_or(rest.len());
            decoded.push_str(&rest[..run]);
            self.position += run;

            match self.peek() {
                Some('"') => {
                    self.advance();
                    return Ok(decoded);
                }
                Some('\\') => {
                    let ch = self.parse_escape(start)?;
                    decoded.push(ch);
                }
                Some(ch) => {
                    return Err(self.error(
                        ErrorKind::ControlCharacterInString,
                        format!(
                            "control character U+{:04X} must be escaped inside a string",
                            u32::from(ch)
                        ),
                    ));
                }
                None => return Err(self.unterminated(start)),
            }
        }
    }

    /// Decodes the escape sequence under the cursor, which sits on `\`.
    fn parse_escape(&mut self, string_start: usize) -> Result<char> {
        let escape_start = self.position;
        self.advance();

        let Some(ch) = self.peek() else {
            return Err(self.unterminated(string_start));
        };
        self.advance();

        let decoded = match ch {
            '"' => '"',
            '\\' => '\\',
            '/' => '/',
            'b' => '\u{08}',
            'f' => '\u{0C}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'u' => self.parse_unicode_escape(escape_start)?,
            other => {
                return Err(self.error_at(
                    escape_start,
                    ErrorKind::UnknownEscapeSequence,
                    format!("unknown escape sequence '\\{}'", other.escape_debug()),
                ));
            }
        };
        Ok(decoded)
    }

    /// Decodes the digits of a `\u` escape, joining surrogate pairs.
    ///
    /// The cursor sits just after `\u`; `escape_start` is the offset of `\`.
    fn parse_unicode_escape(&mut self, escape_start: usize) -> Result<char> {
        let code = self.read_hex4(escape_start)?;

        match code {
            0xD800..=0xDBFF => {
                let low_start = self.position;
                let low = if self.input[low_start..].starts_with("\\u") {
                    self.position += 2;
                    Some(self.read_hex4(low_start)?)
                } else {
                    None
                };

                match low {
                    Some(low @ 0xDC00..=0xDFFF) => {
                        let combined = 0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00);
                        char::from_u32(combined)
                            .ok_or_else(|| self.invalid_unicode(escape_start, combined))
                    }
                    _ => Err(self.error_at(
                        escape_start,
                        ErrorKind::InvalidUnicodeEscape,
                        format!(
                            "high surrogate \\u{:04X} is not followed by a low surrogate",
                            code
                        ),
                    )),
                }
            }
            0xDC00..=0xDFFF => Err(self.error_at(
                escape_start,
                ErrorKind::InvalidUnicodeEscape,
                format!("low surrogate \\u{:04X} has no preceding high surrogate", code),
            )),
            _ => char::from_u32(code).ok_or_else(|| self.invalid_unicode(escape_start, code)),
        }
    }

    /// Reads exactly four hex digits (either case) at the cursor.
    fn read_hex4(&mut self, escape_start: usize) -> Result<u32> {
        let digits = self
            .input
            .get(self.position..self.position + 4)
            .filter(|digits| digits.bytes().all(|b| b.is_ascii_hexdigit()));

        let Some(digits) = digits else {
            let sequence: String = self.input[escape_start..].chars().take(6).collect();
            return Err(self.error_at(
                escape_start,
                ErrorKind::UnknownEscapeSequence,
                format!(
                    "unknown escape sequence '{}'; \\u needs four hex digits",
                    sequence.escape_debug()
                ),
            ));
        };

        let code = digits
            .chars()
            .filter_map(|ch| ch.to_digit(16))
            .fold(0, |acc, digit| acc * 16 + digit);
        self.position += 4;
        Ok(code)
    }

    fn invalid_unicode(&self, escape_start: usize, code: u32) -> crate::error::ParseError {
        self.error_at(
            escape_start,
            ErrorKind::InvalidUnicodeEscape,
            format!("\\u{:04X} is not a valid character", code),
        )
    }

    fn unterminated(&self, string_start: usize) -> crate::error::ParseError {
        self.error(
            ErrorKind::UnterminatedString,
            format!(
                "string starting at position {} is not terminated",
                self.char_position(string_start)
            ),
        )
    }
}
