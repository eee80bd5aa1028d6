//! Error types for study-tracker operations

use thiserror::Error;
use uuid::Uuid;

/// Failure of a store or scheduling operation.
///
/// A failed operation never produces a new snapshot, so the caller's current
/// snapshot stays exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    #[error("Subject not found: {0}")]
    SubjectNotFound(String),

    #[error("Topic not found: {0}")]
    TopicNotFound(String),

    #[error("Mistake not found: {0}")]
    MistakeNotFound(Uuid),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl TrackerError {
    /// Whether this error refers to a missing subject, topic or mistake
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::SubjectNotFound(_) | Self::TopicNotFound(_) | Self::MistakeNotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
