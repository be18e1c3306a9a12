//! Startup pragma configuration.

use rusqlite::Connection;

use privacydesk_core::errors::DeskResult;

use crate::to_storage_err;

/// Configure a fresh connection: WAL journaling (file-backed only),
/// foreign keys, busy timeout.
pub fn configure(conn: &Connection, busy_timeout_ms: u64, wal: bool) -> DeskResult<()> {
    if wal {
        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| to_storage_err(format!("journal_mode: {e}")))?;
    }
    conn.pragma_update(None, "foreign_keys", "ON")
        .map_err(|e| to_storage_err(format!("foreign_keys: {e}")))?;
    if busy_timeout_ms > 0 {
        conn.pragma_update(None, "busy_timeout", busy_timeout_ms as i64)
            .map_err(|e| to_storage_err(format!("busy_timeout: {e}")))?;
    }
    Ok(())
}

/// Check whether WAL mode is active on this connection.
pub fn verify_wal_mode(conn: &Connection) -> DeskResult<bool> {
    let mode: String = conn
        .query_row("PRAGMA journal_mode", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(mode.eq_ignore_ascii_case("wal"))
}
