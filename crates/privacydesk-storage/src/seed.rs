//! Bundled demo dataset, written once into an empty database.

use chrono::{DateTime, Utc};

use privacydesk_core::constants::SYSTEM_ACTOR;
use privacydesk_core::errors::DeskResult;
use privacydesk_core::request::{
    HistoryAction, HistoryEntry, PrivacyRequest, RequestId, RequestKind, RequestStatus, Requester,
};
use privacydesk_core::traits::RequestStorage;
use privacydesk_core::{ConsentRecord, Settings};

fn ts(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .expect("seed timestamp literal")
        .with_timezone(&Utc)
}

#[allow(clippy::too_many_arguments)]
fn request(
    id: &str,
    kind: RequestKind,
    name: &str,
    email: &str,
    country: &str,
    submitted_at: &str,
    due_at: &str,
    status: RequestStatus,
    owner: &str,
    history: Vec<HistoryEntry>,
) -> PrivacyRequest {
    PrivacyRequest {
        id: RequestId::from(id),
        kind,
        requester: Requester {
            name: name.to_string(),
            email: email.to_string(),
            country: Some(country.to_string()),
        },
        submitted_at: ts(submitted_at),
        due_at: ts(due_at),
        status,
        owner: Some(owner.to_string()),
        notes: vec![],
        attachments: vec![],
        history,
    }
}

fn created(at: &str) -> HistoryEntry {
    HistoryEntry::new(ts(at), SYSTEM_ACTOR, HistoryAction::Created)
}

/// The five demo cases.
pub fn demo_requests() -> Vec<PrivacyRequest> {
    vec![
        request(
            "REQ-1001",
            RequestKind::Access,
            "Mina Kim",
            "mina@example.com",
            "US",
            "2025-09-10T14:20:00Z",
            "2025-10-10T00:00:00Z",
            RequestStatus::InProgress,
            "Alex",
            vec![
                created("2025-09-10T14:20:00Z"),
                HistoryEntry::new(ts("2025-09-11T04:30:00Z"), "Alex", HistoryAction::StatusChanged)
                    .with_details("in_progress"),
            ],
        ),
        request(
            "REQ-1002",
            RequestKind::Delete,
            "Lee Wong",
            "lee@example.com",
            "CA",
            "2025-09-08T09:12:00Z",
            "2025-10-23T00:00:00Z",
            RequestStatus::New,
            "Priya",
            vec![created("2025-09-08T09:12:00Z")],
        ),
        request(
            "REQ-1003",
            RequestKind::Export,
            "Ravi Rao",
            "ravi@example.com",
            "UK",
            "2025-09-12T18:40:00Z",
            "2025-10-12T00:00:00Z",
            RequestStatus::Waiting,
            "Jordan",
            vec![
                created("2025-09-12T18:40:00Z"),
                HistoryEntry::new(ts("2025-09-12T19:00:00Z"), "Jordan", HistoryAction::StatusChanged)
                    .with_details("waiting"),
            ],
        ),
        request(
            "REQ-1004",
            RequestKind::Correct,
            "Ana Silva",
            "ana@example.com",
            "PT",
            "2025-09-05T11:00:00Z",
            "2025-10-05T00:00:00Z",
            RequestStatus::Done,
            "Sam",
            vec![
                created("2025-09-05T11:00:00Z"),
                HistoryEntry::new(ts("2025-09-20T09:00:00Z"), "Sam", HistoryAction::Closed)
                    .with_details("correction applied"),
            ],
        ),
        request(
            "REQ-1005",
            RequestKind::Delete,
            "Chris Lee",
            "chris@example.com",
            "US",
            "2025-09-02T08:05:00Z",
            "2025-10-17T00:00:00Z",
            RequestStatus::Rejected,
            "Taylor",
            vec![
                created("2025-09-02T08:05:00Z"),
                HistoryEntry::new(ts("2025-09-15T06:00:00Z"), "Taylor", HistoryAction::Rejected)
                    .with_details("incomplete identity proof"),
            ],
        ),
    ]
}

/// Demo consent records for the same data subjects.
pub fn demo_consents() -> Vec<ConsentRecord> {
    vec![
        ConsentRecord {
            id: "CON-2001".to_string(),
            subject_email: "mina@example.com".to_string(),
            purpose: "marketing emails".to_string(),
            granted_at: ts("2025-03-14T10:00:00Z"),
            withdrawn_at: None,
            channel: "web_form".to_string(),
        },
        ConsentRecord {
            id: "CON-2002".to_string(),
            subject_email: "lee@example.com".to_string(),
            purpose: "product analytics".to_string(),
            granted_at: ts("2025-01-20T16:30:00Z"),
            withdrawn_at: Some(ts("2025-08-30T12:00:00Z")),
            channel: "web_form".to_string(),
        },
        ConsentRecord {
            id: "CON-2003".to_string(),
            subject_email: "ravi@example.com".to_string(),
            purpose: "newsletter".to_string(),
            granted_at: ts("2025-05-02T08:45:00Z"),
            withdrawn_at: None,
            channel: "support_email".to_string(),
        },
    ]
}

/// Write the demo dataset if and only if the requests collection is empty.
/// Returns whether seeding happened. Existing user data is never touched.
pub fn seed_if_empty(storage: &dyn RequestStorage) -> DeskResult<bool> {
    if storage.request_count()? > 0 {
        return Ok(false);
    }
    for request in demo_requests() {
        storage.put_request(&request)?;
    }
    for consent in demo_consents() {
        storage.put_consent(&consent)?;
    }
    storage.put_settings(&Settings::default())?;
    tracing::info!("seeded demo dataset into empty database");
    Ok(true)
}
