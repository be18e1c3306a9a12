//! Error taxonomy for every PrivacyDesk layer.
//!
//! Reads resolve misses to `Ok(None)`; errors are reserved for validation
//! failures, storage failures, and mutations that reference missing or
//! closed requests.

pub mod storage_error;
pub mod validation_error;

pub use storage_error::StorageError;
pub use validation_error::ValidationError;

use crate::request::RequestStatus;

/// Umbrella error for PrivacyDesk operations.
#[derive(Debug, thiserror::Error)]
pub enum DeskError {
    /// A mutation referenced a request id that does not exist.
    #[error("request not found: {id}")]
    RequestNotFound { id: String },

    /// A status-changing mutation targeted a request already closed.
    #[error("request {id} is already {status} and can no longer change state")]
    TerminalState { id: String, status: RequestStatus },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type DeskResult<T> = Result<T, DeskError>;
