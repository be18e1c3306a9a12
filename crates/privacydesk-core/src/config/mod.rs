//! Process configuration, deserialized from TOML.
//!
//! Distinct from [`crate::models::Settings`]: config is operator-supplied
//! at startup (paths, seeding), settings are user-mutable stored state.

pub mod defaults;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{DeskResult, StorageError};

/// Storage-layer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Database file path. `None` opens an in-memory database (tests).
    pub db_path: Option<PathBuf>,
    /// Destination for explicit crash-recovery snapshots.
    pub snapshot_path: PathBuf,
    /// SQLite busy timeout.
    pub busy_timeout_ms: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            snapshot_path: PathBuf::from(defaults::DEFAULT_SNAPSHOT_FILE),
            busy_timeout_ms: defaults::DEFAULT_BUSY_TIMEOUT_MS,
        }
    }
}

/// Top-level PrivacyDesk configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeskConfig {
    pub storage: StorageConfig,
    /// Seed the bundled demo dataset when the requests collection is empty.
    pub seed_on_empty: SeedPolicy,
}

/// Whether `load()` may write the demo dataset into an empty database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedPolicy {
    #[default]
    Enabled,
    Disabled,
}

impl DeskConfig {
    pub fn from_toml_str(raw: &str) -> DeskResult<Self> {
        toml::from_str(raw).map_err(|e| {
            StorageError::Corruption {
                details: format!("config parse: {e}"),
            }
            .into()
        })
    }

    pub fn load(path: &Path) -> DeskResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| StorageError::FileIo {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&raw)
    }
}
