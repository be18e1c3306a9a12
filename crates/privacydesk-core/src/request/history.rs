use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a history entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryAction {
    Created,
    OwnerSet,
    StatusChanged,
    Closed,
    Rejected,
}

/// One append-only audit entry on a request. Every mutation that changes
/// visible case state appends exactly one of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub at: DateTime<Utc>,
    pub who: String,
    pub action: HistoryAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl HistoryEntry {
    pub fn new(at: DateTime<Utc>, who: impl Into<String>, action: HistoryAction) -> Self {
        Self {
            at,
            who: who.into(),
            action,
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}
