//! String literal lexing.
//!
//! Escapes are tracked, not decoded: a backslash only keeps the character
//! after it from closing the literal. The token text is the literal exactly
//! as written, quotes included.

use crate::error::{LexErrorKind, LexResult};
use crate::Lexer;

impl<'a, 'd> Lexer<'a, 'd> {
    /// Consumes a string literal through its closing quote.
    ///
    /// The opening `"` has already been consumed.
    pub(crate) fn read_string_literal(&mut self) -> LexResult<()> {
        let mut escape = false;

        loop {
            let c = match self.stream.current() {
                Some(c) => c,
                None => return Err(self.stream.fail(LexErrorKind::EofInString)),
            };

            if c == b'\n' {
                return Err(self.stream.fail(LexErrorKind::LineBreakInString));
            }

            match c {
                b'"' if !escape => {
                    self.stream.get();
                    return Ok(());
                },
                b'\\' if !escape => {
                    self.stream.next()?;
                    escape = true;
                },
                _ => {
                    self.stream.get();
                    escape = false;
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::LexErrorKind;
    use crate::test_util::{lex, lex_err};
    use crate::token::TokenKind;

    #[test]
    fn test_simple_string() {
        assert_eq!(lex(r#""hello""#)[0], (TokenKind::String, r#""hello""#));
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(lex(r#""""#)[0], (TokenKind::String, r#""""#));
    }

    #[test]
    fn test_escaped_quote_does_not_close() {
        assert_eq!(
            lex(r#""hi\"there""#)[0],
            (TokenKind::String, r#""hi\"there""#)
        );
    }

    #[test]
    fn test_escaped_backslash_then_quote_closes() {
        let tokens = lex(r#""a\\" b"#);
        assert_eq!(tokens[0], (TokenKind::String, r#""a\\""#));
        assert_eq!(tokens[1], (TokenKind::Identifier, "b"));
    }

    #[test]
    fn test_escapes_are_not_decoded() {
        assert_eq!(lex(r#""\t\x41""#)[0], (TokenKind::String, r#""\t\x41""#));
    }

    #[test]
    fn test_non_ascii_inside_string() {
        assert_eq!(lex("\"héllo\"")[0], (TokenKind::String, "\"héllo\""));
    }

    #[test]
    fn test_line_break_in_string() {
        let (err, diags) = lex_err("\"abc\ndef\"");
        assert_eq!(err.kind(), LexErrorKind::LineBreakInString);
        assert_eq!((err.line(), err.column()), (1, 4));
        assert_eq!(diags[0].message, "line break in string literal");
    }

    #[test]
    fn test_escaped_line_break_is_still_an_error() {
        let (err, _) = lex_err("\"abc\\\ndef\"");
        assert_eq!(err.kind(), LexErrorKind::LineBreakInString);
    }

    #[test]
    fn test_eof_in_string() {
        let (err, diags) = lex_err("\"abc");
        assert_eq!(err.kind(), LexErrorKind::EofInString);
        assert_eq!((err.line(), err.column()), (1, 4));
        assert_eq!(diags[0].message, "end of file in string literal");
    }

    #[test]
    fn test_eof_after_backslash() {
        let (err, diags) = lex_err("\"abc\\");
        assert_eq!(err.kind(), LexErrorKind::UnexpectedEof);
        assert_eq!(diags.len(), 1);
    }
}
