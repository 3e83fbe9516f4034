//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! A scanner never prints anything itself. It hands every message, together
//! with the stream name and the line/column it computed, to a
//! [`DiagnosticSink`]. What happens next is up to the sink:
//!
//! [`Handler`] collects [`Diagnostic`]s for later inspection and
//! [`Renderer`] turns collected diagnostics into terminal output.
//!
//! # Examples
//!
//! ```
//! use cfgs_util::diagnostic::{DiagnosticSink, Handler, Level};
//!
//! let handler = Handler::new();
//! handler.warning("suspicious spacing", "main.cfg", 1, 4);
//! handler.error("invalid input character: '#'", "main.cfg", 2, 0);
//!
//! assert_eq!(handler.error_count(), 1);
//! assert_eq!(handler.warning_count(), 1);
//! assert_eq!(handler.diagnostics()[1].level, Level::Error);
//! ```

mod level;
mod render;

pub use level::{ColorConfig, Level};
pub use render::Renderer;

use std::cell::RefCell;
use std::fmt;

use serde::Serialize;

use crate::span::Position;

/// Receiver for position-annotated scanner messages
///
/// `line` is 1-based; `column` is the 0-based byte offset from the start of
/// that line. Calls are synchronous and must not block.
pub trait DiagnosticSink {
    /// Record a warning
    fn warning(&self, message: &str, stream: &str, line: usize, column: usize);

    /// Record an error
    ///
    /// Recording an error does not abort anything by itself; the reporting
    /// code raises its own error right after this call returns.
    fn error(&self, message: &str, stream: &str, line: usize, column: usize);
}

/// A diagnostic message with severity and location
///
/// # Examples
///
/// ```
/// use cfgs_util::diagnostic::{Diagnostic, Level};
/// use cfgs_util::span::Position;
///
/// let diag = Diagnostic::error("unexpected end of file", "a.cfg", Position::new(4, 2));
/// assert_eq!(diag.level, Level::Error);
/// assert_eq!(diag.to_string(), "a.cfg:4:2: error: unexpected end of file");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Name of the stream the message is attributed to
    pub stream: String,
    /// Source location
    pub position: Position,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(
        level: Level,
        message: impl Into<String>,
        stream: impl Into<String>,
        position: Position,
    ) -> Self {
        Self {
            level,
            message: message.into(),
            stream: stream.into(),
            position,
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, stream: impl Into<String>, position: Position) -> Self {
        Self::new(Level::Error, message, stream, position)
    }

    /// Create a warning diagnostic
    pub fn warning(
        message: impl Into<String>,
        stream: impl Into<String>,
        position: Position,
    ) -> Self {
        Self::new(Level::Warning, message, stream, position)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {}: {}",
            self.stream, self.position, self.level, self.message
        )
    }
}

/// Handler for collecting and reporting diagnostics
///
/// The `Handler` collects diagnostics and provides methods for querying
/// their counts. It can be configured to panic on errors for testing.
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
    /// Whether to panic on errors (for testing)
    panic_on_error: bool,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            panic_on_error: false,
        }
    }

    /// Create a handler that panics on errors (for testing)
    pub fn new_panicking() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            panic_on_error: true,
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        if self.panic_on_error && diagnostic.level.is_error() {
            panic!("Diagnostic error: {}", diagnostic);
        }
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level.is_error())
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.count(Level::Error)
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.count(Level::Warning)
    }

    fn count(&self, level: Level) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == level)
            .count()
    }

    /// Get all diagnostics, in the order they were reported
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Take all diagnostics, leaving the handler empty
    pub fn take_diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.take()
    }

    /// Clear all diagnostics
    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticSink for Handler {
    fn warning(&self, message: &str, stream: &str, line: usize, column: usize) {
        self.emit_diagnostic(Diagnostic::warning(
            message,
            stream,
            Position::new(line, column),
        ));
    }

    fn error(&self, message: &str, stream: &str, line: usize, column: usize) {
        self.emit_diagnostic(Diagnostic::error(
            message,
            stream,
            Position::new(line, column),
        ));
    }
}
