//! Diagnostic reporting for lexical analysis.

pub mod position;

use std::fmt;

use serde::Serialize;

pub use position::{Position, Span};

/// Severity level of a diagnostic message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Severity {
    /// Error: indicates a problem that prevents compilation
    Error,
    /// Warning: indicates a potential problem that doesn't prevent compilation
    Warning,
    /// Note: provides additional context or information
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Note => "note",
        };
        f.write_str(s)
    }
}

/// A single reported problem, anchored to a source position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    severity: Severity,
    message: String,
    file: Option<String>,
    position: Option<Position>,
}

impl Diagnostic {
    /// Create a new error diagnostic with the given message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            file: None,
            position: None,
        }
    }

    /// Create a new warning diagnostic with the given message.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            file: None,
            position: None,
        }
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// Render as a single `file:line:column: severity: message` line.
    /// Location segments are omitted when unknown.
    pub fn render(&self) -> String {
        let mut out = String::new();

        if let Some(file) = &self.file {
            out.push_str(file);
            out.push(':');
        }

        if let Some(position) = self.position {
            out.push_str(&position.to_string());
            out.push(':');
        }

        if !out.is_empty() {
            out.push(' ');
        }

        out.push_str(&self.severity.to_string());
        out.push_str(": ");
        out.push_str(&self.message);
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Render multiple diagnostics, one per line.
pub fn render_diagnostics(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(Diagnostic::render)
        .collect::<Vec<_>>()
        .join("\n")
}
