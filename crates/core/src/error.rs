//! Error types for the task core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Caller supplied an empty title or a category outside the allowed set
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Task not found: {0}")]
    TaskNotFound(String),

    /// A generated id is already present in the stored collection
    #[error("Task with ID {0} already exists")]
    DuplicateId(String),

    /// The value under the tasks key is not a valid task collection
    #[error("Corrupt store under key '{key}': {reason}")]
    CorruptStore { key: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl Error {
    /// Create a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a CorruptStore error for the given key
    pub fn corrupt(key: impl Into<String>, reason: impl ToString) -> Self {
        Self::CorruptStore {
            key: key.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether the error came from the durable medium rather than the data
    pub fn is_storage_failure(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Storage(_))
    }
}
