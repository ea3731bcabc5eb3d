//! Slide editor errors.

use lessonbldr_domain::{DomainError, SlideId};

use crate::infrastructure::ports::RepoError;

/// Errors that can occur while opening a slide for editing.
#[derive(Debug, thiserror::Error)]
pub enum SlideEditorError {
    #[error("Slide not found: {0}")]
    NotFound(SlideId),
    /// The stored payload does not decode as its declared type
    #[error("Malformed input: {0}")]
    MalformedInput(String),
    #[error("Repository error: {0}")]
    Repo(RepoError),
}

/// Errors that can occur while saving a slide.
///
/// Every variant aborts the save before anything is written, except
/// `PersistFailed`, which is the write itself failing.
#[derive(Debug, thiserror::Error)]
pub enum SaveSlideError {
    #[error("Slide not found: {0}")]
    NotFound(SlideId),
    #[error("Malformed input: {0}")]
    MalformedInput(String),
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
    #[error("Persist failed: {0}")]
    PersistFailed(String),
    #[error("Repository error: {0}")]
    Repo(RepoError),
}

impl SaveSlideError {
    /// Short reason suitable for showing next to the editor.
    pub fn reason(&self) -> String {
        match self {
            Self::NotFound(id) => format!("Slide {} no longer exists", id),
            Self::MalformedInput(msg) | Self::ValidationFailed(msg) | Self::PersistFailed(msg) => {
                msg.clone()
            }
            Self::Repo(err) => err.to_string(),
        }
    }
}

impl From<DomainError> for SaveSlideError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::ValidationFailed(msg),
            DomainError::MalformedInput(msg) | DomainError::Parse(msg) => Self::MalformedInput(msg),
        }
    }
}
