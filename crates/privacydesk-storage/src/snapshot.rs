//! Explicit crash-recovery snapshot: a JSON file mirroring
//! `{requests, consents, settings}`.
//!
//! The snapshot is never consulted implicitly — the structured collections
//! are the sole source of truth on load, and restore happens only through
//! the store's explicit restore operation.

use std::fs;
use std::path::Path;

use privacydesk_core::errors::{DeskError, DeskResult, StorageError};
use privacydesk_core::StateSnapshot;

fn io_err(path: &Path, message: impl ToString) -> DeskError {
    StorageError::FileIo {
        path: path.display().to_string(),
        message: message.to_string(),
    }
    .into()
}

/// Write the snapshot to `path`, replacing any previous one.
pub fn write(path: &Path, snapshot: &StateSnapshot) -> DeskResult<()> {
    let text = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, text).map_err(|e| io_err(path, e))?;
    tracing::debug!(path = %path.display(), requests = snapshot.requests.len(), "wrote state snapshot");
    Ok(())
}

/// Read a snapshot back. A missing or unreadable file is an error here:
/// restore is an explicit operation and the caller needs to know.
pub fn read(path: &Path) -> DeskResult<StateSnapshot> {
    let raw = fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    Ok(serde_json::from_str(&raw)?)
}
