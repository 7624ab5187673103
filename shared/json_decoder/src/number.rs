//! Number lexing.

use crate::error::{ErrorKind, Result};
use crate::parser::Parser;

impl Parser<'_> {
    /// Scans `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?` and
    /// converts the matched text to a double.
    ///
    /// Only ASCII bytes are consumed, so the cursor stays on a char boundary.
    pub(crate) fn parse_number(&mut self) -> Result<f64> {
        let start = self.position;

        if self.peek_byte() == Some(b'-') {
            self.position += 1;
        }

        match self.peek_byte() {
            Some(b'0') => self.position += 1,
            Some(b'1'..=b'9') => {
                self.skip_digits();
            }
            _ => {
                return Err(self.error(
                    ErrorKind::MissingLeadingDigit,
                    self.found("expected a digit to start the number"),
                ));
            }
        }

        if self.peek_byte() == Some(b'.') {
            self.position += 1;
            if self.skip_digits() == 0 {
                return Err(self.error(
                    ErrorKind::MissingFractionDigit,
                    self.found("expected a digit after the decimal point"),
                ));
            }
        }

        if matches!(self.peek_byte(), Some(b'e' | b'E')) {
            self.position += 1;
            if matches!(self.peek_byte(), Some(b'+' | b'-')) {
                self.position += 1;
            }
            if self.skip_digits() == 0 {
                return Err(self.error(
                    ErrorKind::MissingExponentDigit,
                    self.found("expected a digit in the exponent"),
                ));
            }
        }

        // Out-of-range magnitudes round to infinity or zero.
        let text = &self.input[start..self.position];
        text.parse::<f64>().map_err(|_| {
            self.error_at(
                start,
                ErrorKind::MissingLeadingDigit,
                format!("'{}' is not a number", text),
            )
        })
    }

    fn peek_byte(&self) -> Option<u8> {
        self.input.as_bytes().get(self.position).copied()
    }

    /// Consumes a run of ASCII digits and returns how many there were.
    fn skip_digits(&mut self) -> usize {
        let count = self.input.as_bytes()[self.position..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        self.position += count;
        count
    }

    fn found(&self, expected: &str) -> String {
        match self.peek() {
            Some(ch) => format!("{}, found '{}'", expected, ch.escape_debug()),
            None => format!("{} but the input ended", expected),
        }
    }
}
