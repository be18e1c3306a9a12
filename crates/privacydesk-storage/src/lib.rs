//! # privacydesk-storage
//!
//! SQLite persistence layer for PrivacyDesk: connection pool, version-gated
//! migrations, per-collection query modules, the bundled seed dataset, and
//! the explicit crash-recovery snapshot.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;
pub mod seed;
pub mod snapshot;

pub use engine::StorageEngine;

use privacydesk_core::errors::{DeskError, StorageError};

/// Map a driver-level failure message into a [`StorageError::Sqlite`].
pub(crate) fn to_storage_err(message: impl Into<String>) -> DeskError {
    StorageError::Sqlite {
        message: message.into(),
    }
    .into()
}
