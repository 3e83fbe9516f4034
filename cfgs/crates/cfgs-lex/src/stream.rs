//! Scanning cursor over a source buffer.
//!
//! This module provides the [`Stream`] struct which owns the scan position
//! over a borrowed buffer, remembers where every line seen so far begins,
//! and forwards position-annotated messages to a [`DiagnosticSink`].
//!
//! Positions are byte offsets. Lines are 1-based; columns are the 0-based
//! byte distance from the start of the current line.

use cfgs_util::DiagnosticSink;

use crate::error::{LexError, LexErrorKind, LexResult};

/// Mutable scanning state over one immutable buffer.
///
/// The position only moves forward and never passes the end of the buffer.
/// The line-start list always holds at least one entry (offset `0`) and
/// grows by exactly one entry each time a `\n` is consumed.
///
/// # Example
///
/// ```
/// use cfgs_lex::Stream;
/// use cfgs_util::Handler;
///
/// let handler = Handler::new();
/// let mut stream = Stream::new("a\nb", "demo.cfg", &handler);
///
/// assert_eq!(stream.get(), Some(b'a'));
/// assert_eq!(stream.get(), Some(b'\n'));
/// assert_eq!(stream.line(), 2);
/// assert_eq!(stream.column(), 0);
/// assert_eq!(stream.current(), Some(b'b'));
/// ```
pub struct Stream<'a, 'd> {
    /// The buffer being scanned.
    source: &'a str,

    /// Current byte position in the buffer.
    pos: usize,

    /// Stream name used to attribute diagnostics.
    name: String,

    /// Start offset of every line seen so far.
    lines: Vec<usize>,

    /// Where warnings and errors go.
    sink: &'d dyn DiagnosticSink,
}

impl<'a, 'd> Stream<'a, 'd> {
    /// Creates a stream positioned at the start of `source`.
    pub fn new(source: &'a str, name: impl Into<String>, sink: &'d dyn DiagnosticSink) -> Self {
        Self {
            source,
            pos: 0,
            name: name.into(),
            lines: vec![0],
            sink,
        }
    }

    /// Returns the byte at the current position without advancing.
    ///
    /// Returns `None` once the end of the buffer has been reached.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }

    /// Returns the byte after the current one without advancing.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos + 1).copied()
    }

    /// Returns the current byte and advances past it.
    ///
    /// Consuming a `\n` records the following offset as the start of a new
    /// line. At end of input nothing moves and `None` is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use cfgs_lex::Stream;
    /// use cfgs_util::Handler;
    ///
    /// let handler = Handler::new();
    /// let mut stream = Stream::new("\n\n", "s", &handler);
    /// stream.get();
    /// stream.get();
    /// assert_eq!(stream.line_starts(), &[0, 1, 2]);
    /// assert_eq!(stream.get(), None);
    /// ```
    #[inline]
    pub fn get(&mut self) -> Option<u8> {
        let c = self.current()?;
        self.pos += 1;
        if c == b'\n' {
            self.lines.push(self.pos);
        }
        Some(c)
    }

    /// Returns true when the whole buffer has been consumed.
    #[inline]
    pub fn eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Advances one byte and requires that another byte follows.
    ///
    /// Returns the byte now under the cursor. Landing on the end of the
    /// buffer reports "unexpected end of file" and returns that error.
    ///
    /// # Example
    ///
    /// ```
    /// use cfgs_lex::{LexErrorKind, Stream};
    /// use cfgs_util::Handler;
    ///
    /// let handler = Handler::new();
    /// let mut stream = Stream::new("ab", "s", &handler);
    /// assert_eq!(stream.next(), Ok(b'b'));
    ///
    /// let err = stream.next().unwrap_err();
    /// assert_eq!(err.kind(), LexErrorKind::UnexpectedEof);
    /// assert_eq!(handler.error_count(), 1);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> LexResult<u8> {
        self.get();
        self.current()
            .ok_or_else(|| self.fail(LexErrorKind::UnexpectedEof))
    }

    /// Consumes bytes while `pred` holds, stopping at the first mismatch or
    /// at end of input. Never looks past the current byte.
    pub fn read_sequence(&mut self, pred: impl Fn(u8) -> bool) -> &mut Self {
        while let Some(c) = self.current() {
            if !pred(c) {
                break;
            }
            self.get();
        }
        self
    }

    /// Forwards an error message for the current position to the sink.
    ///
    /// This does not abort anything; see [`Stream::fail`].
    pub fn error(&self, message: &str) {
        self.sink
            .error(message, &self.name, self.line(), self.column());
    }

    /// Forwards a warning message for the current position to the sink.
    pub fn warning(&self, message: &str) {
        self.sink
            .warning(message, &self.name, self.line(), self.column());
    }

    /// Reports `kind` to the sink, then builds the error to propagate.
    ///
    /// Every [`LexError`] a scan returns is created here, so the sink has
    /// always seen the message before the caller sees the error.
    pub fn fail(&self, kind: LexErrorKind) -> LexError {
        self.error(&kind.to_string());
        LexError::new(kind, self.line(), self.column())
    }

    /// Current line number (1-based).
    #[inline]
    pub fn line(&self) -> usize {
        self.lines.len()
    }

    /// Current column: bytes since the start of the current line.
    #[inline]
    pub fn column(&self) -> usize {
        self.pos - self.lines.last().copied().unwrap_or(0)
    }

    /// Current byte position in the buffer.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Name the stream reports diagnostics under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Start offsets of every line seen so far, first entry `0`.
    pub fn line_starts(&self) -> &[usize] {
        &self.lines
    }

    /// Start offset of a (1-based) line that has already been reached.
    pub fn line_start(&self, line: usize) -> Option<usize> {
        line.checked_sub(1).and_then(|idx| self.lines.get(idx).copied())
    }

    /// The whole buffer.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Buffer text from `start` up to the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use cfgs_lex::Stream;
    /// use cfgs_util::Handler;
    ///
    /// let handler = Handler::new();
    /// let mut stream = Stream::new("key = 1", "s", &handler);
    /// stream.read_sequence(|c| c.is_ascii_alphabetic());
    /// assert_eq!(stream.slice_from(0), "key");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.pos]
    }

    /// Decodes the full character starting at the current position.
    ///
    /// Used when reporting a byte that is not part of the grammar, so that a
    /// multi-byte character shows up whole in the message.
    pub(crate) fn current_char(&self) -> Option<char> {
        self.source.get(self.pos..).and_then(|rest| rest.chars().next())
    }
}

impl std::fmt::Debug for Stream<'_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stream")
            .field("name", &self.name)
            .field("pos", &self.pos)
            .field("len", &self.source.len())
            .field("lines", &self.lines.len())
            .finish()
    }
}
