//! Consumer side of the push lexer.
//!
//! The lexer drives itself and hands each recognized unit to a
//! [`LexerCallback`]. Every method returns whether scanning should go on:
//! `true` continues, `false` makes [`Lexer::consume`](crate::Lexer::consume)
//! return at once, without the trailing end-of-line/end-of-file calls.
//!
//! Each method also gets the [`Stream`], so a consumer can ask for the
//! current line or report its own position-annotated diagnostics.

use crate::stream::Stream;
use crate::token::{Operator, Token};

/// Receives classified tokens from [`Lexer::consume`](crate::Lexer::consume).
///
/// Tokens borrow the scanned buffer (`'a`), so a consumer may keep them for
/// as long as the buffer lives.
///
/// # Example
///
/// ```
/// use cfgs_lex::{Lexer, LexerCallback, Stream, Token};
/// use cfgs_util::Handler;
///
/// #[derive(Default)]
/// struct Idents<'a>(Vec<&'a str>);
///
/// impl<'a> LexerCallback<'a> for Idents<'a> {
///     fn consume_identifier(&mut self, _: &Stream<'a, '_>, token: Token<'a>) -> bool {
///         self.0.push(token.text());
///         true
///     }
///     fn consume_integer_literal(&mut self, _: &Stream<'a, '_>, _: Token<'a>) -> bool { true }
///     fn consume_float_literal(&mut self, _: &Stream<'a, '_>, _: Token<'a>) -> bool { true }
///     fn consume_string_literal(&mut self, _: &Stream<'a, '_>, _: Token<'a>) -> bool { true }
///     fn consume_operator(&mut self, _: &Stream<'a, '_>, _: cfgs_lex::Operator, _: Token<'a>) -> bool { true }
///     fn consume_eol(&mut self, _: &Stream<'a, '_>) -> bool { true }
///     fn consume_eof(&mut self, _: &Stream<'a, '_>) -> bool { true }
/// }
///
/// let handler = Handler::new();
/// let mut idents = Idents::default();
/// Lexer::new("width = 3 * height", "demo", &handler)
///     .consume(&mut idents)
///     .unwrap();
/// assert_eq!(idents.0, ["width", "height"]);
/// ```
pub trait LexerCallback<'a> {
    /// An identifier, including `%`-prefixed ones.
    fn consume_identifier(&mut self, stream: &Stream<'a, '_>, token: Token<'a>) -> bool;

    /// A decimal or `0x` hexadecimal integer literal.
    fn consume_integer_literal(&mut self, stream: &Stream<'a, '_>, token: Token<'a>) -> bool;

    /// A floating point literal.
    fn consume_float_literal(&mut self, stream: &Stream<'a, '_>, token: Token<'a>) -> bool;

    /// A string literal, surrounding quotes and escapes left as written.
    fn consume_string_literal(&mut self, stream: &Stream<'a, '_>, token: Token<'a>) -> bool;

    /// An operator of kind `op`, spelled as `token`.
    fn consume_operator(&mut self, stream: &Stream<'a, '_>, op: Operator, token: Token<'a>)
        -> bool;

    /// A line or block comment. Ignored unless overridden.
    fn consume_comment(&mut self, stream: &Stream<'a, '_>, token: Token<'a>) -> bool {
        let _ = (stream, token);
        true
    }

    /// A line break, or the synthetic one issued at end of input.
    fn consume_eol(&mut self, stream: &Stream<'a, '_>) -> bool;

    /// End of input. Issued once, right after the final end of line.
    fn consume_eof(&mut self, stream: &Stream<'a, '_>) -> bool;
}

impl<'a, C: LexerCallback<'a> + ?Sized> LexerCallback<'a> for &mut C {
    fn consume_identifier(&mut self, stream: &Stream<'a, '_>, token: Token<'a>) -> bool {
        (**self).consume_identifier(stream, token)
    }

    fn consume_integer_literal(&mut self, stream: &Stream<'a, '_>, token: Token<'a>) -> bool {
        (**self).consume_integer_literal(stream, token)
    }

    fn consume_float_literal(&mut self, stream: &Stream<'a, '_>, token: Token<'a>) -> bool {
        (**self).consume_float_literal(stream, token)
    }

    fn consume_string_literal(&mut self, stream: &Stream<'a, '_>, token: Token<'a>) -> bool {
        (**self).consume_string_literal(stream, token)
    }

    fn consume_operator(
        &mut self,
        stream: &Stream<'a, '_>,
        op: Operator,
        token: Token<'a>,
    ) -> bool {
        (**self).consume_operator(stream, op, token)
    }

    fn consume_comment(&mut self, stream: &Stream<'a, '_>, token: Token<'a>) -> bool {
        (**self).consume_comment(stream, token)
    }

    fn consume_eol(&mut self, stream: &Stream<'a, '_>) -> bool {
        (**self).consume_eol(stream)
    }

    fn consume_eof(&mut self, stream: &Stream<'a, '_>) -> bool {
        (**self).consume_eof(stream)
    }
}
