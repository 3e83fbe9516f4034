//! Diagnostic severity levels and color configuration.
//!
//! # Examples
//!
//! ```
//! use cfgs_util::diagnostic::{ColorConfig, Level};
//!
//! assert!(Level::Error.is_error());
//! assert!(!Level::Warning.is_error());
//! assert!(!ColorConfig::Never.use_color(true));
//! ```

use std::fmt;

use serde::Serialize;

/// Diagnostic severity level
///
/// The scanner only ever reports two severities: a warning leaves the scan
/// running, an error is always followed by the scan aborting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// A problem that aborts the current scan
    Error,
    /// A suspicious construct that does not stop scanning
    Warning,
}

impl Level {
    /// Returns true if this level represents an error
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Level::Error)
    }

    /// Returns the lowercase name used in rendered output
    ///
    /// # Examples
    ///
    /// ```
    /// use cfgs_util::diagnostic::Level;
    ///
    /// assert_eq!(Level::Error.name(), "error");
    /// assert_eq!(Level::Warning.name(), "warning");
    /// ```
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
        }
    }

    /// Returns the ANSI SGR sequence used to color this level
    #[inline]
    pub const fn ansi_color(&self) -> &'static str {
        match self {
            Level::Error => "\x1b[1;31m",
            Level::Warning => "\x1b[1;33m",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Color configuration for diagnostic rendering
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ColorConfig {
    /// Automatically detect terminal color support
    #[default]
    Auto,
    /// Always use colors, even in pipes
    Always,
    /// Never use colors
    Never,
}

impl ColorConfig {
    /// Returns true if colors should be used for the given environment
    ///
    /// # Examples
    ///
    /// ```
    /// use cfgs_util::diagnostic::ColorConfig;
    ///
    /// assert!(ColorConfig::Always.use_color(false));
    /// assert!(ColorConfig::Auto.use_color(true));
    /// assert!(!ColorConfig::Auto.use_color(false));
    /// ```
    pub fn use_color(&self, is_tty: bool) -> bool {
        match self {
            ColorConfig::Auto => is_tty,
            ColorConfig::Always => true,
            ColorConfig::Never => false,
        }
    }
}
