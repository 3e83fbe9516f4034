//! A ready-made callback that records every token.
//!
//! [`TokenCollector`] is what most tools want: run the lexer once, get a
//! `Vec` of [`Lexeme`]s back. It can also stop early after a fixed number
//! of tokens, which goes through the regular cancellation protocol.

use cfgs_util::{DiagnosticSink, Span};
use serde::Serialize;

use crate::callback::LexerCallback;
use crate::error::LexResult;
use crate::lexer::Lexer;
use crate::stream::Stream;
use crate::token::{Operator, Token, TokenKind};

/// One recorded unit of a scan.
///
/// `text` borrows the scanned buffer. A line break delivered for a real
/// `\n` spans that byte; the synthetic end-of-line and the end-of-file
/// event have empty text at the end of the buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Lexeme<'a> {
    /// Classification
    pub kind: TokenKind,
    /// Exact source text
    pub text: &'a str,
    /// Byte range in the buffer
    pub span: Span,
    /// Line the lexeme starts on (1-based)
    pub line: usize,
}

/// Collects tokens into a `Vec`.
///
/// # Example
///
/// ```
/// use cfgs_lex::{Lexer, TokenCollector, TokenKind};
/// use cfgs_util::Handler;
///
/// let handler = Handler::new();
/// let mut collector = TokenCollector::new().with_limit(2);
/// Lexer::new("a b c", "demo", &handler).consume(&mut collector).unwrap();
///
/// let texts: Vec<_> = collector.lexemes().iter().map(|l| l.text).collect();
/// assert_eq!(texts, ["a", "b"]);
/// assert!(collector.stopped());
/// ```
#[derive(Debug, Default)]
pub struct TokenCollector<'a> {
    lexemes: Vec<Lexeme<'a>>,
    limit: Option<usize>,
    skip_comments: bool,
    content: usize,
    last_end: Option<usize>,
    stopped: bool,
}

impl<'a> TokenCollector<'a> {
    /// Creates a collector that records everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stops the scan once `limit` content tokens have been recorded.
    ///
    /// Line breaks and end of file do not count towards the limit. With a
    /// limit of zero the first content token stops the scan unrecorded.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Drops comments instead of recording them.
    pub fn skip_comments(mut self, skip: bool) -> Self {
        self.skip_comments = skip;
        self
    }

    /// Everything recorded so far, in scan order.
    pub fn lexemes(&self) -> &[Lexeme<'a>] {
        &self.lexemes
    }

    /// Consumes the collector, returning what it recorded.
    pub fn into_lexemes(self) -> Vec<Lexeme<'a>> {
        self.lexemes
    }

    /// Returns true if the collector asked the lexer to stop.
    pub fn stopped(&self) -> bool {
        self.stopped
    }

    fn record(&mut self, stream: &Stream<'a, '_>, kind: TokenKind, text: &'a str, span: Span) {
        let line = stream.line_starts().partition_point(|&start| start <= span.start);
        self.last_end = Some(span.end);
        self.lexemes.push(Lexeme {
            kind,
            text,
            span,
            line,
        });
    }

    fn limit_reached(&self) -> bool {
        self.limit.is_some_and(|limit| self.content >= limit)
    }

    fn content(&mut self, stream: &Stream<'a, '_>, kind: TokenKind, token: Token<'a>) -> bool {
        if !self.limit_reached() {
            self.record(stream, kind, token.text(), token.span());
            self.content += 1;
        }
        if self.limit_reached() {
            self.stopped = true;
            return false;
        }
        true
    }

    fn event(&mut self, stream: &Stream<'a, '_>, kind: TokenKind) {
        let pos = stream.position();
        let source = stream.source();
        let after_newline = pos > 0 && source.as_bytes()[pos - 1] == b'\n';

        if kind == TokenKind::Eol && after_newline && self.last_end != Some(pos) {
            self.record(stream, kind, &source[pos - 1..pos], Span::new(pos - 1, pos));
        } else {
            self.record(stream, kind, &source[pos..pos], Span::new(pos, pos));
        }
    }
}

impl<'a> LexerCallback<'a> for TokenCollector<'a> {
    fn consume_identifier(&mut self, stream: &Stream<'a, '_>, token: Token<'a>) -> bool {
        self.content(stream, TokenKind::Identifier, token)
    }

    fn consume_integer_literal(&mut self, stream: &Stream<'a, '_>, token: Token<'a>) -> bool {
        self.content(stream, TokenKind::Integer, token)
    }

    fn consume_float_literal(&mut self, stream: &Stream<'a, '_>, token: Token<'a>) -> bool {
        self.content(stream, TokenKind::Float, token)
    }

    fn consume_string_literal(&mut self, stream: &Stream<'a, '_>, token: Token<'a>) -> bool {
        self.content(stream, TokenKind::String, token)
    }

    fn consume_operator(
        &mut self,
        stream: &Stream<'a, '_>,
        op: Operator,
        token: Token<'a>,
    ) -> bool {
        self.content(stream, TokenKind::Operator(op), token)
    }

    fn consume_comment(&mut self, stream: &Stream<'a, '_>, token: Token<'a>) -> bool {
        if self.skip_comments {
            self.last_end = Some(token.span().end);
            return true;
        }
        self.content(stream, TokenKind::Comment, token)
    }

    fn consume_eol(&mut self, stream: &Stream<'a, '_>) -> bool {
        self.event(stream, TokenKind::Eol);
        true
    }

    fn consume_eof(&mut self, stream: &Stream<'a, '_>) -> bool {
        self.event(stream, TokenKind::Eof);
        true
    }
}

/// Scans `source` completely and returns every lexeme, comments included.
///
/// # Errors
///
/// Returns the first lexical error; it has already been reported to `sink`.
///
/// # Example
///
/// ```
/// use cfgs_lex::{tokenize, TokenKind};
/// use cfgs_util::Handler;
///
/// let handler = Handler::new();
/// let lexemes = tokenize("name = \"cfgs\"\n", "demo", &handler).unwrap();
/// assert_eq!(lexemes[2].kind, TokenKind::String);
/// assert_eq!(lexemes[2].text, "\"cfgs\"");
/// assert_eq!(lexemes.last().map(|l| l.kind), Some(TokenKind::Eof));
/// ```
pub fn tokenize<'a>(
    source: &'a str,
    name: &str,
    sink: &dyn DiagnosticSink,
) -> LexResult<Vec<Lexeme<'a>>> {
    let mut collector = TokenCollector::new();
    Lexer::new(source, name, sink).consume(&mut collector)?;
    Ok(collector.into_lexemes())
}
