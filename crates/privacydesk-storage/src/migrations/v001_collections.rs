//! v001: the three collections — requests, consents, settings.

use rusqlite::Connection;

use privacydesk_core::errors::DeskResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> DeskResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS requests (
            id                TEXT PRIMARY KEY,
            kind              TEXT NOT NULL,
            status            TEXT NOT NULL,
            owner             TEXT,
            requester_name    TEXT NOT NULL,
            requester_email   TEXT NOT NULL,
            requester_country TEXT,
            submitted_at      TEXT NOT NULL,
            due_at            TEXT NOT NULL,
            notes             TEXT NOT NULL DEFAULT '[]',
            attachments       TEXT NOT NULL DEFAULT '[]',
            history           TEXT NOT NULL DEFAULT '[]'
        );

        CREATE INDEX IF NOT EXISTS idx_requests_status ON requests(status);
        CREATE INDEX IF NOT EXISTS idx_requests_owner ON requests(owner);
        CREATE INDEX IF NOT EXISTS idx_requests_submitted ON requests(submitted_at);

        CREATE TABLE IF NOT EXISTS consents (
            id            TEXT PRIMARY KEY,
            subject_email TEXT NOT NULL,
            purpose       TEXT NOT NULL,
            granted_at    TEXT NOT NULL,
            withdrawn_at  TEXT,
            channel       TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_consents_subject ON consents(subject_email);

        CREATE TABLE IF NOT EXISTS settings (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
