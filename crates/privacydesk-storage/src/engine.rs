//! StorageEngine — owns the ConnectionPool, implements RequestStorage,
//! runs migrations at startup.

use std::path::Path;

use privacydesk_core::config::{defaults, StorageConfig};
use privacydesk_core::errors::DeskResult;
use privacydesk_core::models::{ConsentRecord, Settings};
use privacydesk_core::request::{PrivacyRequest, RequestId};
use privacydesk_core::traits::RequestStorage;

use crate::migrations;
use crate::pool::ConnectionPool;

/// The storage engine for the three collections. All operations route
/// through the single write connection; the store above serializes
/// mutations, so reads here never race a half-applied write.
pub struct StorageEngine {
    pool: ConnectionPool,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk.
    pub fn open(path: &Path) -> DeskResult<Self> {
        let pool = ConnectionPool::open(path, defaults::DEFAULT_BUSY_TIMEOUT_MS)?;
        let engine = Self { pool };
        engine.initialize()?;
        Ok(engine)
    }

    /// Open according to config: file-backed when `db_path` is set,
    /// in-memory otherwise.
    pub fn open_with(config: &StorageConfig) -> DeskResult<Self> {
        match &config.db_path {
            Some(path) => {
                let pool = ConnectionPool::open(path, config.busy_timeout_ms)?;
                let engine = Self { pool };
                engine.initialize()?;
                Ok(engine)
            }
            None => Self::open_in_memory(),
        }
    }

    /// Open an in-memory storage engine (for testing).
    pub fn open_in_memory() -> DeskResult<Self> {
        let pool = ConnectionPool::open_in_memory()?;
        let engine = Self { pool };
        engine.initialize()?;
        Ok(engine)
    }

    /// Run migrations; creates missing collections, leaves existing data
    /// untouched.
    fn initialize(&self) -> DeskResult<()> {
        self.pool
            .writer
            .with_conn_sync(migrations::run_migrations)
    }

    /// Access the connection pool (for maintenance and tests).
    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }
}

impl RequestStorage for StorageEngine {
    fn put_request(&self, request: &PrivacyRequest) -> DeskResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| crate::queries::request_ops::put_request(conn, request))
    }

    fn get_request(&self, id: &RequestId) -> DeskResult<Option<PrivacyRequest>> {
        self.pool
            .writer
            .with_conn_sync(|conn| crate::queries::request_ops::get_request(conn, id))
    }

    fn all_requests(&self) -> DeskResult<Vec<PrivacyRequest>> {
        self.pool
            .writer
            .with_conn_sync(crate::queries::request_ops::all_requests)
    }

    fn delete_request(&self, id: &RequestId) -> DeskResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| crate::queries::request_ops::delete_request(conn, id))
    }

    fn request_count(&self) -> DeskResult<usize> {
        self.pool
            .writer
            .with_conn_sync(crate::queries::request_ops::request_count)
    }

    fn put_consent(&self, consent: &ConsentRecord) -> DeskResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| crate::queries::consent_ops::put_consent(conn, consent))
    }

    fn get_consent(&self, id: &str) -> DeskResult<Option<ConsentRecord>> {
        self.pool
            .writer
            .with_conn_sync(|conn| crate::queries::consent_ops::get_consent(conn, id))
    }

    fn all_consents(&self) -> DeskResult<Vec<ConsentRecord>> {
        self.pool
            .writer
            .with_conn_sync(crate::queries::consent_ops::all_consents)
    }

    fn delete_consent(&self, id: &str) -> DeskResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| crate::queries::consent_ops::delete_consent(conn, id))
    }

    fn put_settings(&self, settings: &Settings) -> DeskResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| crate::queries::settings_ops::put_settings(conn, settings))
    }

    fn get_settings(&self) -> DeskResult<Option<Settings>> {
        self.pool
            .writer
            .with_conn_sync(crate::queries::settings_ops::get_settings)
    }
}
