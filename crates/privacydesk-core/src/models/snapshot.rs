use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::consent::ConsentRecord;
use super::settings::Settings;
use crate::request::PrivacyRequest;

/// Full-state mirror written for crash recovery.
///
/// The structured collections remain the sole source of truth on load;
/// a snapshot is only ever read back through the store's explicit
/// restore operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub snapshot_id: String,
    pub taken_at: DateTime<Utc>,
    pub requests: Vec<PrivacyRequest>,
    pub consents: Vec<ConsentRecord>,
    pub settings: Settings,
}

impl StateSnapshot {
    pub fn new(
        requests: Vec<PrivacyRequest>,
        consents: Vec<ConsentRecord>,
        settings: Settings,
    ) -> Self {
        Self {
            snapshot_id: uuid::Uuid::new_v4().to_string(),
            taken_at: Utc::now(),
            requests,
            consents,
            settings,
        }
    }
}
