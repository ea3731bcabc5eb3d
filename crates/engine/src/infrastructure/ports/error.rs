//! Error types for port operations.

/// Content store errors with context for debugging.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// Row not found - includes entity type and ID for actionable error messages.
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// The store could not answer - includes operation name for tracing.
    #[error("Query failed in {operation}: {message}")]
    QueryFailed {
        operation: &'static str,
        message: String,
    },
}

impl RepoError {
    /// Create a NotFound error with entity type and ID context.
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    /// Create a QueryFailed error with operation context.
    pub fn query_failed(operation: &'static str, message: impl ToString) -> Self {
        Self::QueryFailed {
            operation,
            message: message.to_string(),
        }
    }

    /// The store's own failure text, without the operation prefix.
    pub fn store_message(&self) -> String {
        match self {
            Self::QueryFailed { message, .. } => message.clone(),
            Self::NotFound { .. } => self.to_string(),
        }
    }

    /// Check if this is a NotFound error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
