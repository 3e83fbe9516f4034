//! Lexer module.
//!
//! The lexer implementation is split into focused components:
//! - `core` - `Lexer` struct and the driver loop
//! - `comment` - line and block comments
//! - `identifier` - identifiers
//! - `string` - string literals
//! - `number` - integer, float and hex literals
//! - `operator` - operator disambiguation

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use core::Lexer;
