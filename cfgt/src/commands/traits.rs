//! Command trait and common types for the cfgt CLI.
//!
//! This module defines the standard command traits that all commands
//! implement to keep their structure consistent.

use crate::config::Config;
use crate::error::Result;

/// Standard command trait that all cfgt commands implement.
///
/// # Type Parameters
/// * `Args` - The arguments type for this command
/// * `Output` - The output type returned by this command
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a command that falls back to `config` for anything the
    /// arguments leave unset.
    fn new(args: Self::Args, config: Config) -> Self;

    /// Execute the command, writing its report to standard output.
    fn execute(&self) -> Result<Self::Output>;

    /// Get the command name, as typed on the command line.
    fn name() -> &'static str;
}

/// Trait for providing command descriptions and help text.
///
/// The CLI uses these as the `about` and `long_about` of each subcommand.
pub trait CommandDescription {
    /// Get a short description of the command.
    fn description() -> &'static str;

    /// Get detailed help text for the command.
    fn help() -> &'static str;
}

/// Command execution result with per-file counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult {
    /// Number of files processed without error.
    pub items_processed: usize,

    /// Number of files that failed.
    pub items_failed: usize,

    /// Execution time in milliseconds.
    pub execution_time_ms: u64,
}

impl CommandResult {
    /// Returns true if no file failed.
    pub fn success(&self) -> bool {
        self.items_failed == 0
    }

    /// Set the number of items processed.
    pub fn with_items_processed(mut self, count: usize) -> Self {
        self.items_processed = count;
        self
    }

    /// Set the number of items failed.
    pub fn with_items_failed(mut self, count: usize) -> Self {
        self.items_failed = count;
        self
    }

    /// Set the execution time.
    pub fn with_execution_time_ms(mut self, time_ms: u64) -> Self {
        self.execution_time_ms = time_ms;
        self
    }
}
