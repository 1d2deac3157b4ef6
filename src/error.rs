//! Custom error types for the utilisation table
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for utilisation table operations
#[derive(Error, Debug)]
pub enum UtilisationError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Dataset could not be located or parsed
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// A month history array was present but held fewer than three entries
    #[error("Month history for '{person}' has {len} entries, expected at least 3")]
    MonthHistory { person: String, len: usize },

    /// Validation errors for command input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl UtilisationError {
    /// Create a month history error for the named person
    pub fn month_history(person: impl Into<String>, len: usize) -> Self {
        Self::MonthHistory {
            person: person.into(),
            len,
        }
    }
}

impl From<std::io::Error> for UtilisationError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for UtilisationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for utilisation table operations
pub type UtilisationResult<T> = Result<T, UtilisationError>;
