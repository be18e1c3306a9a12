//! Connection management. A single write connection serves both reads and
//! writes; mutation serialization happens one level up in the store.

pub mod pragmas;
pub mod write_connection;

use std::path::{Path, PathBuf};

use privacydesk_core::errors::DeskResult;

pub use write_connection::WriteConnection;

/// Owns the write connection and remembers where the database lives.
pub struct ConnectionPool {
    pub writer: WriteConnection,
    pub db_path: Option<PathBuf>,
}

impl ConnectionPool {
    /// Open a pool for the given database file.
    pub fn open(path: &Path, busy_timeout_ms: u64) -> DeskResult<Self> {
        let writer = WriteConnection::open(path, busy_timeout_ms)?;
        Ok(Self {
            writer,
            db_path: Some(path.to_path_buf()),
        })
    }

    /// Open an in-memory pool (for testing).
    pub fn open_in_memory() -> DeskResult<Self> {
        let writer = WriteConnection::open_in_memory()?;
        Ok(Self {
            writer,
            db_path: None,
        })
    }
}
