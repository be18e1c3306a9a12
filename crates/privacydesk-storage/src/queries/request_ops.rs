//! Upsert, get, get-all, delete, count for the requests collection.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use privacydesk_core::errors::{DeskResult, StorageError};
use privacydesk_core::request::{
    Attachment, HistoryEntry, Note, PrivacyRequest, RequestId, RequestKind, RequestStatus,
    Requester,
};

use crate::to_storage_err;

const SELECT_COLUMNS: &str = "id, kind, status, owner, requester_name, requester_email,
            requester_country, submitted_at, due_at, notes, attachments, history";

/// Insert or replace a request. Put semantics: the stored record always
/// matches the argument verbatim after this returns.
pub fn put_request(conn: &Connection, request: &PrivacyRequest) -> DeskResult<()> {
    let notes_json = serde_json::to_string(&request.notes)?;
    let attachments_json = serde_json::to_string(&request.attachments)?;
    let history_json = serde_json::to_string(&request.history)?;

    conn.execute(
        "INSERT INTO requests (
            id, kind, status, owner, requester_name, requester_email,
            requester_country, submitted_at, due_at, notes, attachments, history
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
        ON CONFLICT(id) DO UPDATE SET
            kind = excluded.kind,
            status = excluded.status,
            owner = excluded.owner,
            requester_name = excluded.requester_name,
            requester_email = excluded.requester_email,
            requester_country = excluded.requester_country,
            submitted_at = excluded.submitted_at,
            due_at = excluded.due_at,
            notes = excluded.notes,
            attachments = excluded.attachments,
            history = excluded.history",
        params![
            request.id.as_str(),
            request.kind.as_str(),
            request.status.as_str(),
            request.owner,
            request.requester.name,
            request.requester.email,
            request.requester.country,
            request.submitted_at.to_rfc3339(),
            request.due_at.to_rfc3339(),
            notes_json,
            attachments_json,
            history_json,
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Get a single request by id. Misses resolve to `Ok(None)`.
pub fn get_request(conn: &Connection, id: &RequestId) -> DeskResult<Option<PrivacyRequest>> {
    let mut stmt = conn
        .prepare(&format!("SELECT {SELECT_COLUMNS} FROM requests WHERE id = ?1"))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let row = stmt
        .query_row(params![id.as_str()], row_to_request)
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    row.transpose()
}

/// All requests, ordered by id for deterministic loads.
pub fn all_requests(conn: &Connection) -> DeskResult<Vec<PrivacyRequest>> {
    let mut stmt = conn
        .prepare(&format!("SELECT {SELECT_COLUMNS} FROM requests ORDER BY id"))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map([], row_to_request)
        .map_err(|e| to_storage_err(e.to_string()))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.into_iter().collect()
}

/// Delete by id. Deleting a missing key is a no-op, per the collection
/// contract.
pub fn delete_request(conn: &Connection, id: &RequestId) -> DeskResult<()> {
    conn.execute("DELETE FROM requests WHERE id = ?1", params![id.as_str()])
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

pub fn request_count(conn: &Connection) -> DeskResult<usize> {
    conn.query_row("SELECT COUNT(*) FROM requests", [], |row| {
        row.get::<_, i64>(0)
    })
    .map(|n| n as usize)
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Parse a row from the requests table. Returns the inner result so the
/// rusqlite layer never sees our error type.
fn row_to_request(row: &rusqlite::Row<'_>) -> rusqlite::Result<DeskResult<PrivacyRequest>> {
    let id: String = row.get(0)?;
    let kind_str: String = row.get(1)?;
    let status_str: String = row.get(2)?;
    let owner: Option<String> = row.get(3)?;
    let requester_name: String = row.get(4)?;
    let requester_email: String = row.get(5)?;
    let requester_country: Option<String> = row.get(6)?;
    let submitted_at_str: String = row.get(7)?;
    let due_at_str: String = row.get(8)?;
    let notes_json: String = row.get(9)?;
    let attachments_json: String = row.get(10)?;
    let history_json: String = row.get(11)?;

    Ok(build_request(
        id,
        kind_str,
        status_str,
        owner,
        requester_name,
        requester_email,
        requester_country,
        submitted_at_str,
        due_at_str,
        notes_json,
        attachments_json,
        history_json,
    ))
}

#[allow(clippy::too_many_arguments)]
fn build_request(
    id: String,
    kind_str: String,
    status_str: String,
    owner: Option<String>,
    requester_name: String,
    requester_email: String,
    requester_country: Option<String>,
    submitted_at_str: String,
    due_at_str: String,
    notes_json: String,
    attachments_json: String,
    history_json: String,
) -> DeskResult<PrivacyRequest> {
    let kind = RequestKind::parse(&kind_str).ok_or_else(|| corrupt(&id, "kind", &kind_str))?;
    let status =
        RequestStatus::parse(&status_str).ok_or_else(|| corrupt(&id, "status", &status_str))?;
    let notes: Vec<Note> = serde_json::from_str(&notes_json)?;
    let attachments: Vec<Attachment> = serde_json::from_str(&attachments_json)?;
    let history: Vec<HistoryEntry> = serde_json::from_str(&history_json)?;

    Ok(PrivacyRequest {
        id: RequestId::from(id),
        kind,
        status,
        owner,
        requester: Requester {
            name: requester_name,
            email: requester_email,
            country: requester_country,
        },
        submitted_at: parse_dt(&submitted_at_str)?,
        due_at: parse_dt(&due_at_str)?,
        notes,
        attachments,
        history,
    })
}

fn corrupt(id: &str, field: &str, value: &str) -> privacydesk_core::DeskError {
    StorageError::Corruption {
        details: format!("request {id}: unknown {field} '{value}'"),
    }
    .into()
}

pub(crate) fn parse_dt(s: &str) -> DeskResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            StorageError::Corruption {
                details: format!("datetime '{s}': {e}"),
            }
            .into()
        })
}
