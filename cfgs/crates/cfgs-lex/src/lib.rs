//! cfgs-lex - Lexical Analyzer for the cfgs configuration language
//!
//! This crate provides a single-pass push lexer. It walks a borrowed text
//! buffer once and hands every classified token to a consumer-supplied
//! [`LexerCallback`], which decides after each token whether scanning goes
//! on.
//!
//! # Overview
//!
//! - [`chars`] - character classes of the grammar
//! - [`Stream`] - the cursor: position, line starts, diagnostics
//! - [`Lexer`] - sub-scanners and the driver loop ([`Lexer::consume`])
//! - [`Token`], [`Operator`], [`TokenKind`] - what the callback receives
//! - [`TokenCollector`], [`tokenize`] - collect a whole scan into a `Vec`
//!
//! # Example Usage
//!
//! ```
//! use cfgs_lex::{tokenize, Operator, TokenKind};
//! use cfgs_util::Handler;
//!
//! let handler = Handler::new();
//! let lexemes = tokenize("abc + 0x1F", "demo.cfg", &handler).unwrap();
//!
//! let seen: Vec<_> = lexemes.iter().map(|l| (l.kind, l.text)).collect();
//! assert_eq!(
//!     seen,
//!     [
//!         (TokenKind::Identifier, "abc"),
//!         (TokenKind::Operator(Operator::Plus), "+"),
//!         (TokenKind::Integer, "0x1F"),
//!         (TokenKind::Eol, ""),
//!         (TokenKind::Eof, ""),
//!     ]
//! );
//! ```
//!
//! # Errors
//!
//! Lexing stops at the first error. Before the [`LexError`] is returned,
//! its message has been sent to the sink with the stream name, line and
//! column:
//!
//! ```
//! use cfgs_lex::{tokenize, LexErrorKind};
//! use cfgs_util::Handler;
//!
//! let handler = Handler::new();
//! let err = tokenize("port = 0x", "demo.cfg", &handler).unwrap_err();
//!
//! assert_eq!(err.kind(), LexErrorKind::MalformedHexLiteral(None));
//! assert_eq!(
//!     handler.diagnostics()[0].to_string(),
//!     "demo.cfg:1:9: error: invalid input character: end of file"
//! );
//! ```
//!
//! # Token Categories
//!
//! - **Identifiers**: letters, digits, `$`, `_`, `.`, `@`; may not start
//!   with a digit; may start with `%` (`%PATH`)
//! - **Integers**: `42`, `007`, `0x1F`
//! - **Floats**: `3.14`, `1.`, `.5`, `6.02e+23` (an exponent needs a `.`)
//! - **Strings**: `"text"`, with `\` escaping the next character
//! - **Comments**: `// to end of line`, `/* up to the first */`
//! - **Operators**: `+ - * / ^ ~ ( ) [ ] { } ? . : , ; = == != < <= << > >= >> & && | || ! % ->`
//! - **Line breaks**: each `\n`; spaces, tabs and `\r` are skipped

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod callback;
pub mod chars;
pub mod collect;
pub mod error;
pub mod lexer;
pub mod stream;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use callback::LexerCallback;
pub use chars::{
    is_alnum, is_bin_digit, is_dec_digit, is_hex_digit, is_ident_continue, is_ident_start,
    is_oct_digit,
};
pub use collect::{tokenize, Lexeme, TokenCollector};
pub use error::{LexError, LexErrorKind, LexResult};
pub use lexer::Lexer;
pub use stream::Stream;
pub use token::{Operator, Token, TokenKind, UnknownOperator};
