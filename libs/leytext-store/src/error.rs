//! Storage and word store error types.

use leytext_core::ValidationError;
use thiserror::Error;
use uuid::Uuid;

/// Durable read or write failure.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("corrupt payload under {key}: {reason}")]
    Corrupt { key: String, reason: String },

    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("storage lock poisoned")]
    LockPoisoned,

    #[error("storage task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Errors returned by word store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("index {index} out of range for {len} words")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("word not found: {0}")]
    NotFound(Uuid),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl StoreError {
    /// The caller addressed a word its view no longer matches.
    pub fn is_stale_view(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. } | Self::NotFound(_))
    }

    /// Message for the alert shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(e) => e.user_message().to_string(),
            Self::IndexOutOfRange { .. } | Self::NotFound(_) => {
                "This word was changed elsewhere. The list has been refreshed.".to_string()
            }
            Self::Storage(_) => "Failed to save the word.".to_string(),
        }
    }
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
