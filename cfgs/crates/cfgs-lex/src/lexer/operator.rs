//! Operator and punctuation lexing.
//!
//! The first character picks an operator family; one byte of lookahead
//! then decides between the single-character form and a two-character
//! extension. `/`, `.` and `%` never get here: the driver resolves them
//! against comments, floats and identifiers first.

use crate::error::{LexErrorKind, LexResult};
use crate::token::Operator;
use crate::Lexer;

impl<'a, 'd> Lexer<'a, 'd> {
    /// Lexes an operator starting at the cursor.
    ///
    /// Handles: `+ - -> * ^ ~ ( ) { } [ ] ? : , ; = == ! != < <= << > >= >> & && | ||`
    ///
    /// Any other character is reported as an invalid input character, at
    /// its own position, before anything is consumed.
    pub(crate) fn read_operator(&mut self) -> LexResult<Operator> {
        let Some(c) = self.stream.current() else {
            return Err(self.stream.fail(LexErrorKind::UnexpectedEof));
        };

        let first = match c {
            b'+' => Operator::Plus,
            b'-' => Operator::Minus,
            b'*' => Operator::Asterisk,
            b'^' => Operator::Circumflex,
            b'~' => Operator::Tilde,
            b'(' => Operator::LParen,
            b')' => Operator::RParen,
            b'{' => Operator::LBrace,
            b'}' => Operator::RBrace,
            b'[' => Operator::LBracket,
            b']' => Operator::RBracket,
            b'?' => Operator::Quest,
            b':' => Operator::Colon,
            b',' => Operator::Comma,
            b';' => Operator::Semicolon,
            b'<' => Operator::Lt,
            b'>' => Operator::Gt,
            b'&' => Operator::And,
            b'|' => Operator::Or,
            b'=' => Operator::Eq,
            b'!' => Operator::Bang,
            _ => {
                let found = self.stream.current_char().unwrap_or(char::from(c));
                return Err(self.stream.fail(LexErrorKind::InvalidCharacter(found)));
            },
        };
        self.stream.get();

        let op = match (first, self.stream.current()) {
            (Operator::Minus, Some(b'>')) => Operator::Arrow,
            (Operator::Lt, Some(b'=')) => Operator::LtEq,
            (Operator::Lt, Some(b'<')) => Operator::Shl,
            (Operator::Gt, Some(b'=')) => Operator::GtEq,
            (Operator::Gt, Some(b'>')) => Operator::Shr,
            (Operator::And, Some(b'&')) => Operator::AndAnd,
            (Operator::Or, Some(b'|')) => Operator::OrOr,
            (Operator::Eq, Some(b'=')) => Operator::EqEq,
            (Operator::Bang, Some(b'=')) => Operator::NotEq,
            _ => return Ok(first),
        };
        self.stream.get();

        Ok(op)
    }
}
