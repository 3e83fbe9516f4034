//! Core lexer implementation.
//!
//! This module contains the `Lexer` struct and the driver loop that
//! dispatches on the current byte and pushes tokens to a callback.

use cfgs_util::DiagnosticSink;
use tracing::{debug, trace};

use crate::callback::LexerCallback;
use crate::chars::{is_dec_digit, is_ident_start};
use crate::error::LexResult;
use crate::stream::Stream;
use crate::token::{Operator, Token, TokenKind};

/// Push lexer for the configuration language.
///
/// A `Lexer` owns one [`Stream`] and scans it once. Tokens are delivered to
/// a [`LexerCallback`] as they are recognized.
pub struct Lexer<'a, 'd> {
    /// Cursor over the source buffer.
    pub(crate) stream: Stream<'a, 'd>,
}

impl<'a, 'd> Lexer<'a, 'd> {
    /// Creates a lexer over `source`, reporting diagnostics as `name`.
    pub fn new(source: &'a str, name: impl Into<String>, sink: &'d dyn DiagnosticSink) -> Self {
        Self::from_stream(Stream::new(source, name, sink))
    }

    /// Creates a lexer that continues from an existing stream.
    pub fn from_stream(stream: Stream<'a, 'd>) -> Self {
        Self { stream }
    }

    /// The underlying stream.
    pub fn stream(&self) -> &Stream<'a, 'd> {
        &self.stream
    }

    /// Gives the stream back, e.g. to inspect line starts after a scan.
    pub fn into_stream(self) -> Stream<'a, 'd> {
        self.stream
    }

    /// Scans the rest of the input, pushing every token to `callback`.
    ///
    /// Spaces, tabs and carriage returns are skipped without a callback.
    /// Each `\n` is delivered through `consume_eol`.
    ///
    /// If a callback method returns `false` the scan returns `Ok(())`
    /// right away. If the input runs out instead, `consume_eol` and then
    /// `consume_eof` are called once more, whatever they return.
    ///
    /// # Errors
    ///
    /// The first lexical error aborts the scan. Its message has already
    /// been reported to the stream's sink when the error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use cfgs_lex::{Lexer, TokenCollector, TokenKind, Operator};
    /// use cfgs_util::Handler;
    ///
    /// let handler = Handler::new();
    /// let mut tokens = TokenCollector::new();
    /// Lexer::new("abc + 0x1F", "demo", &handler)
    ///     .consume(&mut tokens)
    ///     .unwrap();
    ///
    /// let kinds: Vec<_> = tokens.lexemes().iter().map(|l| l.kind).collect();
    /// assert_eq!(
    ///     kinds,
    ///     [
    ///         TokenKind::Identifier,
    ///         TokenKind::Operator(Operator::Plus),
    ///         TokenKind::Integer,
    ///         TokenKind::Eol,
    ///         TokenKind::Eof,
    ///     ]
    /// );
    /// ```
    pub fn consume<C: LexerCallback<'a>>(&mut self, mut callback: C) -> LexResult<()> {
        debug!(
            stream = self.stream.name(),
            len = self.stream.source().len(),
            "scan started"
        );

        while let Some(c) = self.stream.current() {
            let start = self.stream.position();

            let kind = match c {
                b'/' => {
                    self.stream.get();
                    match self.stream.current() {
                        Some(b'/') => {
                            self.read_line_comment();
                            TokenKind::Comment
                        },
                        Some(b'*') => {
                            self.read_block_comment()?;
                            TokenKind::Comment
                        },
                        _ => TokenKind::Operator(Operator::Slash),
                    }
                },
                b'.' => {
                    self.stream.get();
                    match self.stream.current() {
                        Some(d) if is_dec_digit(d) => self.read_float_fraction()?,
                        _ => TokenKind::Operator(Operator::Dot),
                    }
                },
                b'%' => {
                    self.stream.get();
                    if self.starts_word() {
                        self.read_identifier();
                        TokenKind::Identifier
                    } else {
                        TokenKind::Operator(Operator::Percent)
                    }
                },
                b'0' => {
                    self.stream.get();
                    self.read_number_prefix()?
                },
                b'"' => {
                    self.stream.get();
                    self.read_string_literal()?;
                    TokenKind::String
                },
                b'\n' => {
                    self.stream.get();
                    TokenKind::Eol
                },
                b'\r' | b'\t' | b' ' => {
                    self.stream.get();
                    continue;
                },
                c if is_dec_digit(c) => self.read_number()?,
                c if is_ident_start(c) => {
                    self.stream.get();
                    self.read_identifier();
                    TokenKind::Identifier
                },
                _ => TokenKind::Operator(self.read_operator()?),
            };

            if !self.emit(&mut callback, kind, start) {
                debug!(
                    stream = self.stream.name(),
                    line = self.stream.line(),
                    "scan stopped by consumer"
                );
                return Ok(());
            }
        }

        callback.consume_eol(&self.stream);
        callback.consume_eof(&self.stream);

        debug!(
            stream = self.stream.name(),
            lines = self.stream.line(),
            "scan finished"
        );
        Ok(())
    }

    /// Hands the unit that started at `start` to the matching callback.
    fn emit<C: LexerCallback<'a>>(&self, callback: &mut C, kind: TokenKind, start: usize) -> bool {
        let token = Token::new(self.stream.slice_from(start), start);
        trace!(kind = %kind, text = token.text(), line = self.stream.line(), "token");

        let stream = &self.stream;
        match kind {
            TokenKind::Identifier => callback.consume_identifier(stream, token),
            TokenKind::Integer => callback.consume_integer_literal(stream, token),
            TokenKind::Float => callback.consume_float_literal(stream, token),
            TokenKind::String => callback.consume_string_literal(stream, token),
            TokenKind::Operator(op) => callback.consume_operator(stream, op, token),
            TokenKind::Comment => callback.consume_comment(stream, token),
            TokenKind::Eol => callback.consume_eol(stream),
            TokenKind::Eof => callback.consume_eof(stream),
        }
    }
}

impl std::fmt::Debug for Lexer<'_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexer").field("stream", &self.stream).finish()
    }
}
