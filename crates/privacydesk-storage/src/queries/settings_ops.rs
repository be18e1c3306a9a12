//! The settings collection: a single JSON row under a constant key.

use rusqlite::{params, Connection, OptionalExtension};

use privacydesk_core::constants::SETTINGS_KEY;
use privacydesk_core::errors::DeskResult;
use privacydesk_core::Settings;

use crate::to_storage_err;

pub fn put_settings(conn: &Connection, settings: &Settings) -> DeskResult<()> {
    let value = serde_json::to_string(settings)?;
    conn.execute(
        "INSERT INTO settings (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![SETTINGS_KEY, value],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

pub fn get_settings(conn: &Connection) -> DeskResult<Option<Settings>> {
    let value: Option<String> = conn
        .query_row(
            "SELECT value FROM settings WHERE key = ?1",
            params![SETTINGS_KEY],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    match value {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}
