//! Terminal rendering of collected diagnostics.
//!
//! This module turns a [`Diagnostic`] into a human-readable block, showing
//! the offending source line with a caret under the reported column when
//! the source text is available.

use super::{Diagnostic, Level};
use crate::span::SourceFile;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const GUTTER: &str = "\x1b[1;34m";

/// Renders diagnostics for terminal output
///
/// # Examples
///
/// ```
/// use cfgs_util::diagnostic::{Diagnostic, Renderer};
/// use cfgs_util::span::{Position, SourceFile};
///
/// let file = SourceFile::new("a.cfg", "x = 0x\n");
/// let diag = Diagnostic::error("invalid input character: end of file", "a.cfg", Position::new(1, 6));
///
/// let text = Renderer::plain().render(&diag, Some(&file));
/// assert_eq!(
///     text,
///     "error: invalid input character: end of file\n  --> a.cfg:1:6\n   |\n 1 | x = 0x\n   |       ^\n"
/// );
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    /// Create a renderer, optionally emitting ANSI colors
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    /// Create a renderer that never emits colors
    pub const fn plain() -> Self {
        Self::new(false)
    }

    fn paint(&self, style: &str, text: &str) -> String {
        if self.color {
            format!("{style}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn header(&self, level: Level, message: &str) -> String {
        format!(
            "{}{}\n",
            self.paint(level.ansi_color(), level.name()),
            self.paint(BOLD, &format!(": {message}"))
        )
    }

    /// Render one diagnostic, with a source snippet when `source` is given
    pub fn render(&self, diagnostic: &Diagnostic, source: Option<&SourceFile>) -> String {
        let position = diagnostic.position;
        let mut result = self.header(diagnostic.level, &diagnostic.message);

        let line_text = source.and_then(|file| file.line_at(position.line));
        let width = position.line.to_string().len().max(2);

        result.push_str(&format!(
            "{:>width$}{} {}:{}\n",
            "",
            self.paint(GUTTER, "-->"),
            diagnostic.stream,
            position,
            width = width
        ));

        if let Some(line_text) = line_text {
            // Columns are byte offsets; the caret is placed by character.
            let indent = line_text
                .get(..position.column)
                .map_or(position.column, |prefix| prefix.chars().count());
            let bar = self.paint(GUTTER, "|");
            result.push_str(&format!("{:>width$} {}\n", "", bar, width = width));
            result.push_str(&format!(
                "{:>width$} {} {}\n",
                position.line,
                bar,
                line_text,
                width = width
            ));
            result.push_str(&format!(
                "{:>width$} {} {}{}\n",
                "",
                bar,
                " ".repeat(indent),
                self.paint(diagnostic.level.ansi_color(), "^"),
                width = width
            ));
        }

        result
    }

    /// Render every diagnostic in order, separated by blank lines
    pub fn render_all(&self, diagnostics: &[Diagnostic], source: Option<&SourceFile>) -> String {
        diagnostics
            .iter()
            .map(|diag| self.render(diag, source))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
