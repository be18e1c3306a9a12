/// Storage-layer errors for SQLite and snapshot I/O.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    Sqlite { message: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },

    #[error("file I/O failed for {path}: {message}")]
    FileIo { path: String, message: String },

    #[error("stored record is corrupt: {details}")]
    Corruption { details: String },
}
