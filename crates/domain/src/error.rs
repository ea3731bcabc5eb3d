//! Unified error types for the domain layer
//!
//! Provides a common error type that can be used across all domain operations,
//! enabling consistent error handling without forcing adapters to use String or anyhow.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., a variant's content is incomplete)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Text input could not be parsed (JSON text fields, numeric fields)
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Parse error (for stored payloads and value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for incomplete slide content.
    ///
    /// # Example
    /// ```ignore
    /// if phrases.is_empty() {
    ///     return Err(DomainError::validation("Add at least one phrase"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a malformed input error
    pub fn malformed_input(msg: impl Into<String>) -> Self {
        Self::MalformedInput(msg.into())
    }

    /// Creates a parse error for payloads or strings that don't match
    /// the expected shape.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// The human-readable reason without the category prefix.
    pub fn reason(&self) -> &str {
        match self {
            Self::Validation(msg) | Self::MalformedInput(msg) | Self::Parse(msg) => msg,
        }
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
