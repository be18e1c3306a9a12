//! Conjunctive request filtering.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use privacydesk_core::request::{PrivacyRequest, RequestKind, RequestStatus};

/// Grid filter state. Every predicate is optional; inactive predicates
/// match everything, and a request passes iff it matches all active ones.
#[derive(Debug, Clone, Default)]
pub struct RequestFilter {
    /// Exact kind, or `None` for all.
    pub kind: Option<RequestKind>,
    /// Exact status, or `None` for all.
    pub status: Option<RequestStatus>,
    /// Set membership over the assigned owner; empty set = no filter.
    pub owners: HashSet<String>,
    /// Inclusive submission-date lower bound.
    pub submitted_from: Option<DateTime<Utc>>,
    /// Inclusive submission-date upper bound.
    pub submitted_to: Option<DateTime<Utc>>,
    /// Case-insensitive substring over the requester email.
    pub email_contains: Option<String>,
}

impl RequestFilter {
    pub fn matches(&self, request: &PrivacyRequest) -> bool {
        if let Some(kind) = self.kind {
            if request.kind != kind {
                return false;
            }
        }
        if let Some(status) = self.status {
            if request.status != status {
                return false;
            }
        }
        if !self.owners.is_empty() {
            match &request.owner {
                Some(owner) if self.owners.contains(owner) => {}
                _ => return false,
            }
        }
        if let Some(from) = self.submitted_from {
            if request.submitted_at < from {
                return false;
            }
        }
        if let Some(to) = self.submitted_to {
            if request.submitted_at > to {
                return false;
            }
        }
        if let Some(needle) = &self.email_contains {
            let needle = needle.trim().to_lowercase();
            if !needle.is_empty()
                && !request.requester.email.to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        true
    }

    /// Filtered copy, preserving input order.
    pub fn apply(&self, requests: &[PrivacyRequest]) -> Vec<PrivacyRequest> {
        requests
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect()
    }
}
