//! Number literal lexing.
//!
//! Grammar, after the driver has picked the path:
//!
//! - decimal: `digits ( '.' digits? exponent? )?`
//! - leading dot: `'.' digits exponent?`
//! - hex: `'0' [xX] hexdigits` (integer only)
//! - exponent: `[eE] [+-]? digits`, only after a fraction
//!
//! A literal with a `.` is a float, everything else an integer.

use crate::chars::{is_dec_digit, is_hex_digit};
use crate::error::{LexErrorKind, LexResult};
use crate::token::TokenKind;
use crate::Lexer;

impl<'a, 'd> Lexer<'a, 'd> {
    /// Lexes a literal whose leading `0` has been consumed.
    ///
    /// Handles: `0x1F`, `0X1f`, and falls back to the decimal path.
    pub(crate) fn read_number_prefix(&mut self) -> LexResult<TokenKind> {
        if !matches!(self.stream.current(), Some(b'x' | b'X')) {
            return self.read_number();
        }

        self.stream.get();
        match self.stream.current() {
            Some(c) if is_hex_digit(c) => {
                self.stream.read_sequence(is_hex_digit);
                Ok(TokenKind::Integer)
            },
            _ => Err(self
                .stream
                .fail(LexErrorKind::MalformedHexLiteral(self.stream.current_char()))),
        }
    }

    /// Lexes a decimal literal starting at the cursor.
    pub(crate) fn read_number(&mut self) -> LexResult<TokenKind> {
        self.stream.read_sequence(is_dec_digit);

        if self.stream.current() == Some(b'.') {
            self.stream.get();
            return self.read_float_fraction();
        }

        Ok(TokenKind::Integer)
    }

    /// Lexes the fraction digits (possibly none) and an optional exponent.
    ///
    /// The `.` has already been consumed.
    pub(crate) fn read_float_fraction(&mut self) -> LexResult<TokenKind> {
        self.stream.read_sequence(is_dec_digit);
        self.read_float_exponent()?;
        Ok(TokenKind::Float)
    }

    fn read_float_exponent(&mut self) -> LexResult<()> {
        if !matches!(self.stream.current(), Some(b'e' | b'E')) {
            return Ok(());
        }

        if matches!(self.stream.next()?, b'+' | b'-') {
            self.stream.get();
        }

        match self.stream.current() {
            Some(c) if is_dec_digit(c) => {
                self.stream.read_sequence(is_dec_digit);
                Ok(())
            },
            _ => Err(self
                .stream
                .fail(LexErrorKind::MalformedExponent(self.stream.current_char()))),
        }
    }
}
