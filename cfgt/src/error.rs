//! Error handling module for the cfgt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use cfgs_lex::LexError;
use thiserror::Error;

/// Main error type for the cfgt CLI application.
#[derive(Error, Debug)]
pub enum CfgtError {
    /// Error when the configuration cannot be found or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when an input file cannot be used.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when command-line input is invalid.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when a command cannot run to completion.
    #[error("Command execution failed: {0}")]
    CommandExecution(String),

    /// A file failed to lex; the diagnostic has already been printed.
    #[error("{path}: {source}")]
    Lex {
        /// File the error occurred in
        path: String,
        /// The underlying lexical error
        #[source]
        source: LexError,
    },

    /// One or more files failed `check`.
    #[error("{0} file(s) failed to lex")]
    CheckFailed(usize),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using CfgtError.
pub type Result<T> = std::result::Result<T, CfgtError>;
