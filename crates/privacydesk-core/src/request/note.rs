use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A case note. Notes are append-only; the note itself is the record, so
/// adding one does not also write a history entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub at: DateTime<Utc>,
    pub who: String,
    pub text: String,
}

/// An evidence attachment reference. The url is optional because uploads
/// may be registered before their storage location is known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
