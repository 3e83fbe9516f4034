//! Span module - Source location tracking.
//!
//! This module provides types for representing source code locations:
//! byte-offset [`Span`]s into a buffer and human-readable [`Position`]s.
//!
//! # Examples
//!
//! ```
//! use cfgs_util::span::{Position, Span};
//!
//! let source = "abc + 0x1F";
//! let span = Span::new(6, 10);
//! assert_eq!(span.slice(source), Some("0x1F"));
//!
//! let pos = Position::new(1, 6);
//! assert_eq!(pos.to_string(), "1:6");
//! ```

mod source_file;

pub use source_file::SourceFile;

use std::fmt;

use serde::Serialize;

/// Source location span
///
/// A `Span` is a half-open byte range `start..end` into a source buffer.
/// Spans are plain offsets; they do not borrow the buffer they describe.
///
/// # Examples
///
/// ```
/// use cfgs_util::span::Span;
///
/// let span = Span::new(10, 20);
/// assert_eq!(span.len(), 10);
/// assert!(span.contains(15));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
}

impl Span {
    /// Dummy span for text that has no backing source range
    ///
    /// # Examples
    ///
    /// ```
    /// use cfgs_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert!(Span::DUMMY.is_empty());
    /// ```
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    /// Create a new span
    ///
    /// # Examples
    ///
    /// ```
    /// use cfgs_util::span::Span;
    ///
    /// let span = Span::new(10, 20);
    /// assert_eq!(span.start, 10);
    /// assert_eq!(span.end, 20);
    /// ```
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if this span contains a byte offset
    #[inline]
    pub const fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Check if this span contains another span
    #[inline]
    pub const fn contains_span(&self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Merge two spans into a single span covering both
    ///
    /// # Examples
    ///
    /// ```
    /// use cfgs_util::span::Span;
    ///
    /// let merged = Span::new(10, 20).merge(Span::new(25, 35));
    /// assert_eq!(merged, Span::new(10, 35));
    /// ```
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Join two adjacent spans into a single span
    ///
    /// Returns `None` if the spans are not adjacent (self.end != other.start).
    #[inline]
    pub fn join(self, other: Span) -> Option<Span> {
        (self.end == other.start).then_some(Span::new(self.start, other.end))
    }

    /// Returns the text this span covers in `source`
    ///
    /// Returns `None` when the span lies outside `source` or does not fall
    /// on character boundaries.
    #[inline]
    pub fn slice(self, source: &str) -> Option<&str> {
        source.get(self.start..self.end)
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(range: std::ops::Range<usize>) -> Self {
        Span::new(range.start, range.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A human-readable source position
///
/// `line` is 1-based. `column` is the 0-based byte distance from the start
/// of the line, which is how the scanner's line index measures it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    /// Line number (1-based)
    pub line: usize,
    /// Byte column within the line (0-based)
    pub column: usize,
}

impl Position {
    /// Create a new position
    #[inline]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn ordered(a: usize, b: usize) -> Span {
        Span::new(a.min(b), a.max(b))
    }

    #[test]
    fn test_span_new() {
        let span = Span::new(3, 7);
        assert_eq!(span.start, 3);
        assert_eq!(span.end, 7);
        assert_eq!(span.len(), 4);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_span_join() {
        assert_eq!(Span::new(0, 3).join(Span::new(3, 5)), Some(Span::new(0, 5)));
        assert_eq!(Span::new(0, 3).join(Span::new(4, 5)), None);
    }

    #[test]
    fn test_span_slice() {
        let source = "abc + 0x1F";
        assert_eq!(Span::new(0, 3).slice(source), Some("abc"));
        assert_eq!(Span::new(6, 10).slice(source), Some("0x1F"));
        assert_eq!(Span::new(6, 11).slice(source), None);
    }

    #[test]
    fn test_span_slice_rejects_split_char() {
        let source = "\"é\"";
        assert_eq!(Span::new(0, 2).slice(source), None);
        assert_eq!(Span::new(0, 4).slice(source), Some("\"é\""));
    }

    #[test]
    fn test_span_from_range() {
        assert_eq!(Span::from(2..9), Span::new(2, 9));
    }

    #[test]
    fn test_display() {
        assert_eq!(Span::new(1, 4).to_string(), "1..4");
        assert_eq!(Position::new(2, 0).to_string(), "2:0");
    }

    #[quickcheck]
    fn prop_merge_contains_both(a: usize, b: usize, c: usize, d: usize) -> bool {
        let x = ordered(a, b);
        let y = ordered(c, d);
        let merged = x.merge(y);
        merged.contains_span(x) && merged.contains_span(y)
    }

    #[quickcheck]
    fn prop_join_len_is_sum(a: u16, b: u16, c: u16) -> bool {
        let (a, b, c) = (a as usize, a as usize + b as usize, a as usize + b as usize + c as usize);
        let left = Span::new(a, b);
        let right = Span::new(b, c);
        left.join(right).map(|s| s.len()) == Some(left.len() + right.len())
    }
}
