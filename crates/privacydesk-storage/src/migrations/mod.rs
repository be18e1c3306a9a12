//! Version-gated schema migrations driven by `PRAGMA user_version`.
//!
//! The runner applies only versions above the database's current one, in
//! order. Adding a collection later means appending a module here; data in
//! existing tables is never touched.

pub mod v001_collections;

use rusqlite::Connection;

use privacydesk_core::errors::{DeskResult, StorageError};

use crate::to_storage_err;

/// Latest schema version.
pub const SCHEMA_VERSION: u32 = 1;

type Migration = fn(&Connection) -> DeskResult<()>;

const MIGRATIONS: [(u32, Migration); 1] = [(1, v001_collections::migrate)];

pub fn run_migrations(conn: &Connection) -> DeskResult<()> {
    let current = schema_version(conn)?;
    for (version, migrate) in MIGRATIONS {
        if version <= current {
            continue;
        }
        if let Err(e) = migrate(conn) {
            return Err(StorageError::MigrationFailed {
                version,
                reason: e.to_string(),
            }
            .into());
        }
        set_schema_version(conn, version)?;
        tracing::info!(version, "applied schema migration");
    }
    Ok(())
}

pub fn schema_version(conn: &Connection) -> DeskResult<u32> {
    conn.query_row("PRAGMA user_version", [], |row| row.get::<_, i64>(0))
        .map(|v| v as u32)
        .map_err(|e| to_storage_err(e.to_string()))
}

fn set_schema_version(conn: &Connection, version: u32) -> DeskResult<()> {
    conn.pragma_update(None, "user_version", version as i64)
        .map_err(|e| to_storage_err(e.to_string()))
}
