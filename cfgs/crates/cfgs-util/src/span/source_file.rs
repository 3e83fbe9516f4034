//! Loaded source text with a precomputed line index.
//!
//! The scanner tracks line starts incrementally while it runs; a
//! [`SourceFile`] computes the same index up front so that tooling can look
//! up arbitrary lines after a scan has finished (for example to print the
//! offending line under a diagnostic).

use std::sync::Arc;

use super::{Position, Span};
use crate::error::{SourceError, SourceResult};

/// A source file with its content and metadata
///
/// # Examples
///
/// ```
/// use cfgs_util::span::SourceFile;
///
/// let file = SourceFile::new("main.cfg", "width = 640\nheight = 480");
/// assert_eq!(file.name(), "main.cfg");
/// assert_eq!(file.line_count(), 2);
/// assert_eq!(file.line_at(2), Some("height = 480"));
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<str>,
    /// Precomputed line start offsets
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::compute_line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    fn compute_line_starts(content: &str) -> Arc<[usize]> {
        std::iter::once(0)
            .chain(
                content
                    .bytes()
                    .enumerate()
                    .filter(|&(_, b)| b == b'\n')
                    .map(|(i, _)| i + 1),
            )
            .collect()
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the total number of lines
    ///
    /// A trailing newline opens a final, empty line, matching how the
    /// scanner counts lines.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the byte offset where a line starts (1-based line number)
    ///
    /// # Examples
    ///
    /// ```
    /// use cfgs_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a.cfg", "line1\nline2\nline3");
    /// assert_eq!(file.line_start(1), Some(0));
    /// assert_eq!(file.line_start(2), Some(6));
    /// assert_eq!(file.line_start(10), None);
    /// ```
    #[inline]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        line.checked_sub(1)
            .and_then(|index| self.line_starts.get(index).copied())
    }

    /// Convert a byte offset to a [`Position`]
    ///
    /// # Examples
    ///
    /// ```
    /// use cfgs_util::span::{Position, SourceFile};
    ///
    /// let file = SourceFile::new("a.cfg", "a = 1\nbb = 2");
    /// assert_eq!(file.position_of(8), Position::new(2, 2));
    /// ```
    pub fn position_of(&self, offset: usize) -> Position {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert_point) => insert_point.saturating_sub(1),
        };
        let column = offset.saturating_sub(self.line_starts[line]);
        Position::new(line + 1, column)
    }

    /// Get a specific source line (1-based), without its line terminator
    pub fn line_at(&self, line: usize) -> Option<&str> {
        let start = self.line_start(line)?;
        let end = self.line_start(line + 1).unwrap_or(self.content.len());
        let text = self.content.get(start..end)?;
        Some(text.trim_end_matches(['\n', '\r']))
    }

    /// Get a specific source line, failing with a typed error when absent
    pub fn try_line_at(&self, line: usize) -> SourceResult<&str> {
        self.line_at(line).ok_or(SourceError::InvalidLineNumber {
            line,
            max_lines: self.line_count(),
        })
    }

    /// Extract the text covered by `span` with bounds checking
    ///
    /// # Examples
    ///
    /// ```
    /// use cfgs_util::span::{SourceFile, Span};
    ///
    /// let file = SourceFile::new("a.cfg", "abc + 0x1F");
    /// assert_eq!(file.extract(Span::new(6, 10)).unwrap(), "0x1F");
    /// assert!(file.extract(Span::new(6, 20)).is_err());
    /// ```
    pub fn extract(&self, span: Span) -> SourceResult<&str> {
        let Span { start, end } = span;
        if start > end {
            return Err(SourceError::InvalidSpan { start, end });
        }
        if end > self.content.len() {
            return Err(SourceError::SpanOutOfBounds {
                file_len: self.content.len(),
                span_start: start,
                span_end: end,
            });
        }
        self.content
            .get(start..end)
            .ok_or(SourceError::NotCharBoundary { start, end })
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}
