use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::history::HistoryEntry;
use super::id::RequestId;
use super::note::{Attachment, Note};
use super::types::{RequestKind, RequestStatus};
use crate::constants::UNASSIGNED_OWNER;

/// Contact data for the data subject. Free-form beyond the creation-time
/// checks in [`crate::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requester {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// A case record: one data-subject privacy request and everything attached
/// to it over its life.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrivacyRequest {
    /// `REQ-<n>` identifier, unique across the collection.
    pub id: RequestId,
    /// Immutable after creation.
    pub kind: RequestKind,
    pub requester: Requester,
    /// Creation timestamp (immutable).
    pub submitted_at: DateTime<Utc>,
    /// `submitted_at + SLA(kind)` computed once at creation; never
    /// recalculated when SLA settings change later.
    pub due_at: DateTime<Utc>,
    pub status: RequestStatus,
    /// Assignable team member; `None` renders as "Unassigned".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Append-only.
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    /// Append-only audit log; one entry per visible mutation.
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

impl PrivacyRequest {
    /// blake3 hash of the serialized record, for structural comparison and
    /// export dedup. Distinct from `PartialEq`, which only compares ids.
    pub fn content_fingerprint(&self) -> crate::errors::DeskResult<String> {
        let serialized = serde_json::to_string(self)?;
        Ok(blake3::hash(serialized.as_bytes()).to_hex().to_string())
    }

    pub fn display_owner(&self) -> &str {
        self.owner.as_deref().unwrap_or(UNASSIGNED_OWNER)
    }

    /// Whole days between submission and deadline.
    pub fn sla_window_days(&self) -> i64 {
        (self.due_at - self.submitted_at).num_days()
    }
}

/// Identity equality: two requests are equal if they have the same id.
/// For structural comparison, use [`PrivacyRequest::content_fingerprint`].
impl PartialEq for PrivacyRequest {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
