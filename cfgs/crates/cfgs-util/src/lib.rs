//! cfgs-util - Shared foundation types for the cfgs front end
//!
//! This crate holds the pieces every phase of the configuration-language
//! front end needs but none of them owns:
//!
//! - [`diagnostic`] - the [`DiagnosticSink`] contract through which a scanner
//!   reports position-annotated warnings and errors, plus a collecting
//!   [`Handler`] and terminal rendering.
//! - [`span`] - byte-offset [`Span`]s, line/column [`Position`]s and a
//!   [`SourceFile`] with a precomputed line index for rendering snippets.
//! - [`error`] - error types for the fallible operations above.
//!
//! # Example
//!
//! ```
//! use cfgs_util::{DiagnosticSink, Handler};
//!
//! let handler = Handler::new();
//! handler.error("unexpected end of file", "main.cfg", 3, 7);
//!
//! assert!(handler.has_errors());
//! assert_eq!(
//!     handler.diagnostics()[0].to_string(),
//!     "main.cfg:3:7: error: unexpected end of file"
//! );
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{ColorConfig, Diagnostic, DiagnosticSink, Handler, Level, Renderer};
pub use error::{SourceError, SourceResult};
pub use span::{Position, SourceFile, Span};
