//! Identifier lexing.

use crate::chars::is_alnum;
use crate::Lexer;

impl<'a, 'd> Lexer<'a, 'd> {
    /// Consumes the rest of an identifier.
    ///
    /// The first character (a letter, `$`, `_`, `.`, `@` or `%`) has
    /// already been consumed by the driver.
    pub(crate) fn read_identifier(&mut self) {
        self.stream.read_sequence(is_alnum);
    }

    /// Returns true if the current character can continue a word.
    pub(crate) fn starts_word(&self) -> bool {
        self.stream.current().is_some_and(is_alnum)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_util::lex;
    use crate::token::{Operator, TokenKind};

    #[test]
    fn test_simple_identifier() {
        assert_eq!(lex("foo")[0], (TokenKind::Identifier, "foo"));
    }

    #[test]
    fn test_identifier_with_digits_and_specials() {
        assert_eq!(lex("a1_$b@c.d")[0], (TokenKind::Identifier, "a1_$b@c.d"));
    }

    #[test]
    fn test_identifier_may_start_with_special() {
        for src in ["$home", "_x", "@attr"] {
            assert_eq!(lex(src)[0], (TokenKind::Identifier, src));
        }
    }

    #[test]
    fn test_percent_prefixed_identifier() {
        assert_eq!(lex("%PATH")[0], (TokenKind::Identifier, "%PATH"));
        assert_eq!(lex("%1")[0], (TokenKind::Identifier, "%1"));
    }

    #[test]
    fn test_lone_percent_is_operator() {
        let tokens = lex("a % b");
        assert_eq!(tokens[1], (TokenKind::Operator(Operator::Percent), "%"));
        assert_eq!(lex("%")[0], (TokenKind::Operator(Operator::Percent), "%"));
    }

    #[test]
    fn test_identifier_stops_at_operator() {
        let tokens = lex("key=value");
        assert_eq!(tokens[0], (TokenKind::Identifier, "key"));
        assert_eq!(tokens[1], (TokenKind::Operator(Operator::Eq), "="));
        assert_eq!(tokens[2], (TokenKind::Identifier, "value"));
    }

    #[test]
    fn test_dotted_path_is_one_identifier() {
        assert_eq!(lex("a.b.c")[0], (TokenKind::Identifier, "a.b.c"));
    }
}
