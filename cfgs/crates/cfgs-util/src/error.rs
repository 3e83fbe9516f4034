//! Core error types for cfgs-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for source file operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// Invalid span range
    #[error("Invalid span: start {start} > end {end}")]
    InvalidSpan {
        /// Start offset of the span
        start: usize,
        /// End offset of the span
        end: usize,
    },

    /// Span out of bounds for file
    #[error("Span out of bounds: file has {file_len} bytes, span is {span_start}..{span_end}")]
    SpanOutOfBounds {
        /// Length of the file in bytes
        file_len: usize,
        /// Start offset of the span
        span_start: usize,
        /// End offset of the span
        span_end: usize,
    },

    /// Span does not fall on UTF-8 character boundaries
    #[error("Span {start}..{end} is not on character boundaries")]
    NotCharBoundary {
        /// Start offset of the span
        start: usize,
        /// End offset of the span
        end: usize,
    },

    /// Invalid line number
    #[error("Invalid line number: {line} (file has {max_lines} lines)")]
    InvalidLineNumber {
        /// Requested line (1-based)
        line: usize,
        /// Number of lines in the file
        max_lines: usize,
    },
}

/// Result type alias for source file operations
pub type SourceResult<T> = std::result::Result<T, SourceError>;
