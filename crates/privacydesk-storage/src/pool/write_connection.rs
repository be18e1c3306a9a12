//! The single write connection, serialized behind a mutex.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use privacydesk_core::errors::DeskResult;

use crate::pool::pragmas;
use crate::to_storage_err;

pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    pub fn open(path: &Path, busy_timeout_ms: u64) -> DeskResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        pragmas::configure(&conn, busy_timeout_ms, true)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// In-memory database (for testing). WAL is skipped: it only applies to
    /// file-backed databases.
    pub fn open_in_memory() -> DeskResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        pragmas::configure(&conn, 0, false)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Run a closure against the connection. Callers never observe a
    /// half-applied write: the mutex admits one caller at a time.
    pub fn with_conn_sync<F, T>(&self, f: F) -> DeskResult<T>
    where
        F: FnOnce(&Connection) -> DeskResult<T>,
    {
        let conn = self
            .conn
            .lock()
            .map_err(|_| to_storage_err("write connection mutex poisoned"))?;
        f(&conn)
    }
}
