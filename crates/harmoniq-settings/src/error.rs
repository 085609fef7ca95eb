use std::fmt;
use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error while writing settings: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode settings: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Where and why a settings document failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    /// Name of the document that was being read, usually its path.
    pub source_name: String,
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl ParseFailure {
    pub(crate) fn from_json(source_name: impl Into<String>, err: &serde_json::Error) -> Self {
        Self {
            source_name: source_name.into(),
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}:{} {}",
            self.source_name, self.line, self.column, self.message
        )
    }
}

impl std::error::Error for ParseFailure {}
