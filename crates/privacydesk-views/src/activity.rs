//! Recent-activity feed, flattened from request histories.

use chrono::{DateTime, Utc};

use privacydesk_core::request::{
    HistoryAction, HistoryEntry, PrivacyRequest, RequestId, RequestKind,
};

/// One line in the dashboard activity feed.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityEvent {
    pub request_id: RequestId,
    pub kind: RequestKind,
    pub at: DateTime<Utc>,
    pub text: String,
}

/// Newest-first feed of the latest `limit` history entries across all
/// requests.
pub fn recent_activity(requests: &[PrivacyRequest], limit: usize) -> Vec<ActivityEvent> {
    let mut events: Vec<ActivityEvent> = requests
        .iter()
        .flat_map(|request| {
            request.history.iter().map(|entry| ActivityEvent {
                request_id: request.id.clone(),
                kind: request.kind,
                at: entry.at,
                text: describe(entry),
            })
        })
        .collect();
    events.sort_by(|a, b| b.at.cmp(&a.at));
    events.truncate(limit);
    events
}

fn describe(entry: &HistoryEntry) -> String {
    let details = entry.details.as_deref().unwrap_or("?");
    match entry.action {
        HistoryAction::Created => format!("Request created by {}", entry.who),
        HistoryAction::OwnerSet => format!("Owner set to {details} by {}", entry.who),
        HistoryAction::StatusChanged => format!("Status changed to {details} by {}", entry.who),
        HistoryAction::Closed => format!("Status changed to done by {}", entry.who),
        HistoryAction::Rejected => format!("Status changed to rejected by {}", entry.who),
    }
}
