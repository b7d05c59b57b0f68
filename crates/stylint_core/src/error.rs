//! Linter error types.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during a lint invocation.
///
/// Only [`LinterError::Syntax`] is recoverable: the batch executor turns it
/// into an errored result record. Every other variant aborts the invocation.
#[derive(Debug, Error)]
pub enum LinterError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The ignore file exists but could not be read.
    #[error("Failed to read ignore file {}: {source}", path.display())]
    IgnoreFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Structural error while parsing one input.
    #[error("{0}")]
    Syntax(#[from] SyntaxError),

    /// File error.
    #[error("File error: {0}")]
    File(String),

    /// Lint engine error.
    #[error("Engine error: {0}")]
    Engine(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl LinterError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a file error.
    pub fn file(message: impl Into<String>) -> Self {
        Self::File(message.into())
    }

    /// Creates an engine error.
    pub fn engine(message: impl Into<String>) -> Self {
        Self::Engine(message.into())
    }

    /// Returns true if the error only affects the input that raised it.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Syntax(_))
    }
}

/// A structural error raised while parsing an input's source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// Error type name, e.g. `CssSyntaxError`. Reported as the rule id.
    pub name: String,
    /// Human-readable reason, e.g. `Unclosed block`.
    pub reason: String,
    /// 1-based line.
    pub line: u32,
    /// 1-based column.
    pub column: u32,
    /// File the error belongs to, if the input came from a file.
    pub file: Option<String>,
}

impl SyntaxError {
    pub fn new(name: impl Into<String>, reason: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            name: name.into(),
            reason: reason.into(),
            line,
            column,
            file: None,
        }
    }

    /// Associates the error with a file.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = self.file.as_deref().unwrap_or(crate::INLINE_SOURCE);
        write!(
            f,
            "{}: {}:{}:{}: {}",
            self.name, file, self.line, self.column, self.reason
        )
    }
}

impl std::error::Error for SyntaxError {}
