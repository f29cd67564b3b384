//! Core types for the event code generator
//!
//! Errors are reserved for conditions that abort a processing round (missing
//! output directory, unreadable or unparsable input, invalid emitted code).
//! Everything else that makes the generator skip a declaration or a member is
//! reported as a [`Diagnostic`] and the round continues.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that abort code generation
#[derive(Debug, thiserror::Error)]
pub enum CodegenError {
    /// Carries the error diagnostic so callers can report it like any other
    #[error("Cannot find generated output dir")]
    MissingOutputDir { diagnostic: Diagnostic },

    #[error("Failed to parse Rust source {origin}: {message}")]
    RustParse { origin: String, message: String },

    #[error("Failed to parse declaration manifest {origin}: {message}")]
    ManifestParse { origin: String, message: String },

    #[error("Generated code for {declaration} is invalid: {message}")]
    Emit { declaration: String, message: String },

    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A message produced while processing declarations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Qualified path of the declaration or member the message is about
    pub subject: Option<String>,
    /// Source location (`file:line`), when known
    pub location: Option<String>,
    pub message: String,
}

impl Diagnostic {
    /// An error that is not tied to a declaration
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            subject: None,
            location: None,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(location) => write!(f, "{}: {}: {}", location, self.severity, self.message),
            None => write!(f, "{}: {}", self.severity, self.message),
        }
    }
}

/// Collects diagnostics for one processing round
///
/// Every diagnostic is also mirrored to the `log` facade at the matching level.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning about `subject`
    pub fn warning(
        &mut self,
        subject: impl Into<String>,
        location: Option<String>,
        message: impl Into<String>,
    ) {
        let diagnostic = Diagnostic {
            severity: Severity::Warning,
            subject: Some(subject.into()),
            location,
            message: message.into(),
        };
        log::warn!("{}", diagnostic);
        self.items.push(diagnostic);
    }

    /// Record an error that is not tied to a declaration
    pub fn error(&mut self, message: impl Into<String>) {
        let diagnostic = Diagnostic::error(message);
        log::error!("{}", diagnostic);
        self.items.push(diagnostic);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of warnings recorded
    pub fn warning_count(&self) -> usize {
        self.items
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    /// Number of errors recorded
    pub fn error_count(&self) -> usize {
        self.items
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    /// Diagnostics about one subject
    pub fn for_subject<'a>(&'a self, subject: &'a str) -> impl Iterator<Item = &'a Diagnostic> + 'a {
        self.items
            .iter()
            .filter(move |d| d.subject.as_deref() == Some(subject))
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}
