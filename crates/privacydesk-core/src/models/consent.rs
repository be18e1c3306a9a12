use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recorded consent grant for a data subject, keyed by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsentRecord {
    pub id: String,
    pub subject_email: String,
    pub purpose: String,
    pub granted_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub withdrawn_at: Option<DateTime<Utc>>,
    /// Where the consent was collected (web form, email, phone, ...).
    pub channel: String,
}

impl ConsentRecord {
    pub fn is_active(&self) -> bool {
        self.withdrawn_at.is_none()
    }
}
