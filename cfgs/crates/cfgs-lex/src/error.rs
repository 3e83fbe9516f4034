//! Lexical error types.
//!
//! A [`LexError`] is only ever produced after its message has been handed to
//! the stream's diagnostic sink, so a caller that receives one can rely on
//! the position-annotated diagnostic already being recorded.

use thiserror::Error;

/// What went wrong during a scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    /// The current character cannot start any token
    #[error("invalid input character: '{0}'")]
    InvalidCharacter(char),

    /// A scanner needed at least one more character but the buffer ended
    #[error("unexpected end of file")]
    UnexpectedEof,

    /// A raw newline appeared before the closing quote
    #[error("line break in string literal")]
    LineBreakInString,

    /// The buffer ended before the closing quote
    #[error("end of file in string literal")]
    EofInString,

    /// `0x`/`0X` not followed by a hexadecimal digit
    #[error("invalid input character: {}", describe(.0))]
    MalformedHexLiteral(Option<char>),

    /// `e`/`E` (optionally signed) not followed by a decimal digit
    #[error("invalid input character: {}", describe(.0))]
    MalformedExponent(Option<char>),
}

fn describe(found: &Option<char>) -> String {
    match found {
        Some(c) => format!("'{c}'"),
        None => "end of file".to_string(),
    }
}

/// A lexical error, positioned where the scan stopped
///
/// The `Display` output is exactly the message forwarded to the sink.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct LexError {
    kind: LexErrorKind,
    line: usize,
    column: usize,
}

impl LexError {
    /// Create an error at a given line (1-based) and byte column (0-based)
    pub fn new(kind: LexErrorKind, line: usize, column: usize) -> Self {
        Self { kind, line, column }
    }

    /// The kind of failure
    pub fn kind(&self) -> LexErrorKind {
        self.kind
    }

    /// Line the scan stopped on (1-based)
    pub fn line(&self) -> usize {
        self.line
    }

    /// Byte column the scan stopped at (0-based)
    pub fn column(&self) -> usize {
        self.column
    }
}

/// Result type alias for scanning operations
pub type LexResult<T> = std::result::Result<T, LexError>;
