//! Common types and utilities for cfgt commands.
//!
//! This module provides shared types, constants, and utility functions
//! used across all command implementations to ensure consistency.

use std::io::IsTerminal;
use std::path::Path;
use std::str::FromStr;

use cfgs_util::{ColorConfig, Diagnostic, Renderer, SourceFile};

use crate::error::{CfgtError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported formats for token dumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One line per token
    Text,
    /// A JSON array of files with their tokens
    Json,
}

impl FromStr for OutputFormat {
    type Err = CfgtError;

    /// Parse a format name (case-insensitive).
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(CfgtError::Validation(format!(
                "{} {}",
                error_messages::UNKNOWN_FORMAT,
                s
            ))),
        }
    }
}

// ============================================================================
// Input and Diagnostics
// ============================================================================

/// Read an input file as UTF-8 text.
pub fn read_source(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(CfgtError::FileOperation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_EXIST,
            path.display()
        )));
    }

    if !path.is_file() {
        return Err(CfgtError::FileOperation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }

    std::fs::read_to_string(path).map_err(|e| {
        CfgtError::FileOperation(format!("{}: {}", path.display(), e))
    })
}

/// Build the diagnostic renderer for standard error.
pub fn stderr_renderer(no_color: bool) -> Renderer {
    let color = if no_color {
        ColorConfig::Never
    } else {
        ColorConfig::Auto
    };
    Renderer::new(color.use_color(std::io::stderr().is_terminal()))
}

/// Print diagnostics for one file to standard error.
pub fn print_diagnostics(renderer: &Renderer, diagnostics: &[Diagnostic], source: &SourceFile) {
    if !diagnostics.is_empty() {
        eprint!("{}", renderer.render_all(diagnostics, Some(source)));
    }
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when no input files are specified.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist:";

    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file:";

    /// Error when an unknown format is specified.
    pub const UNKNOWN_FORMAT: &str = "Unknown format:";

    /// Error when the job count is zero.
    pub const ZERO_JOBS: &str = "Number of jobs must be at least 1";
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        let err = "yaml".parse::<OutputFormat>().unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Unknown format: yaml");
    }

    #[test]
    fn test_read_source() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("a.cfg");
        std::fs::write(&file, "x = 1\n").unwrap();
        assert_eq!(read_source(&file).unwrap(), "x = 1\n");
    }

    #[test]
    fn test_read_source_missing() {
        let result = read_source(Path::new("/nonexistent/a.cfg"));
        assert!(matches!(result, Err(CfgtError::FileOperation(msg)) if msg.contains("does not exist")));
    }

    #[test]
    fn test_read_source_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = read_source(temp_dir.path());
        assert!(matches!(result, Err(CfgtError::FileOperation(msg)) if msg.contains("not a file")));
    }
}
