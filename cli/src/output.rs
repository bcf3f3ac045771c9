//! Terminal output utilities for styled CLI output.
//!
//! Rendered tables go to stdout untouched so they can be piped; status lines
//! go through [`Output::stderr`].

use console::{Term, style};
use std::fmt::Display;

/// Styled lines on one terminal stream.
pub struct Output {
    term: Term,
}

impl Output {
    /// Writes to stdout; used for rendered tables.
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    /// Writes to stderr; used for status and diagnostics.
    pub fn stderr() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    /// Print a success message with a green checkmark.
    pub fn success(&self, message: impl Display) {
        drop(
            self.term
                .write_line(&format!("{} {}", style("✓").green().bold(), message)),
        );
    }

    /// Print an error message with a red X.
    pub fn error(&self, message: impl Display) {
        drop(
            self.term
                .write_line(&format!("{} {}", style("✗").red().bold(), message)),
        );
    }

    /// Print a warning message with a yellow warning sign.
    pub fn warning(&self, message: impl Display) {
        drop(
            self.term
                .write_line(&format!("{} {}", style("⚠").yellow().bold(), message)),
        );
    }

    /// Print a plain message without any prefix or styling.
    pub fn print(&self, message: impl Display) {
        drop(self.term.write_line(&message.to_string()));
    }

    /// Print a dim/muted message.
    pub fn dim(&self, message: impl Display) {
        drop(self.term.write_line(&style(message).dim().to_string()));
    }

    /// `label: count`, e.g. after `check`.
    pub fn count(&self, label: impl Display, count: usize) {
        drop(self.term.write_line(&format!(
            "{}: {}",
            style(label).dim(),
            style(count).cyan().bold()
        )));
    }
}
