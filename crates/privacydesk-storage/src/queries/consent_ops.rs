//! Upsert, get, get-all, delete for the consents collection.

use rusqlite::{params, Connection, OptionalExtension};

use privacydesk_core::errors::DeskResult;
use privacydesk_core::ConsentRecord;

use super::request_ops::parse_dt;
use crate::to_storage_err;

pub fn put_consent(conn: &Connection, consent: &ConsentRecord) -> DeskResult<()> {
    conn.execute(
        "INSERT INTO consents (id, subject_email, purpose, granted_at, withdrawn_at, channel)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)
         ON CONFLICT(id) DO UPDATE SET
            subject_email = excluded.subject_email,
            purpose = excluded.purpose,
            granted_at = excluded.granted_at,
            withdrawn_at = excluded.withdrawn_at,
            channel = excluded.channel",
        params![
            consent.id,
            consent.subject_email,
            consent.purpose,
            consent.granted_at.to_rfc3339(),
            consent.withdrawn_at.map(|t| t.to_rfc3339()),
            consent.channel,
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

pub fn get_consent(conn: &Connection, id: &str) -> DeskResult<Option<ConsentRecord>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, subject_email, purpose, granted_at, withdrawn_at, channel
             FROM consents WHERE id = ?1",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let row = stmt
        .query_row(params![id], row_to_consent)
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    row.transpose()
}

pub fn all_consents(conn: &Connection) -> DeskResult<Vec<ConsentRecord>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, subject_email, purpose, granted_at, withdrawn_at, channel
             FROM consents ORDER BY id",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map([], row_to_consent)
        .map_err(|e| to_storage_err(e.to_string()))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.into_iter().collect()
}

pub fn delete_consent(conn: &Connection, id: &str) -> DeskResult<()> {
    conn.execute("DELETE FROM consents WHERE id = ?1", params![id])
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

fn row_to_consent(row: &rusqlite::Row<'_>) -> rusqlite::Result<DeskResult<ConsentRecord>> {
    let id: String = row.get(0)?;
    let subject_email: String = row.get(1)?;
    let purpose: String = row.get(2)?;
    let granted_at_str: String = row.get(3)?;
    let withdrawn_at_str: Option<String> = row.get(4)?;
    let channel: String = row.get(5)?;

    Ok(build_consent(
        id,
        subject_email,
        purpose,
        granted_at_str,
        withdrawn_at_str,
        channel,
    ))
}

fn build_consent(
    id: String,
    subject_email: String,
    purpose: String,
    granted_at_str: String,
    withdrawn_at_str: Option<String>,
    channel: String,
) -> DeskResult<ConsentRecord> {
    Ok(ConsentRecord {
        id,
        subject_email,
        purpose,
        granted_at: parse_dt(&granted_at_str)?,
        withdrawn_at: withdrawn_at_str.as_deref().map(parse_dt).transpose()?,
        channel,
    })
}
