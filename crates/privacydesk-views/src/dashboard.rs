//! Dashboard aggregate counts.

use chrono::{DateTime, Utc};

use privacydesk_core::constants::{AVG_CLOSE_FALLBACK_DAYS, WEEKLY_COMPLETION_TARGET};
use privacydesk_core::request::{PrivacyRequest, RequestStatus};

const DAY_MS: f64 = 86_400_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    /// Everything not yet done or rejected.
    pub open: usize,
    /// Deadline falls on today's UTC calendar date.
    pub due_today: usize,
    /// Past the deadline and not done. Rejected cases still count: the
    /// obligation existed when the deadline lapsed.
    pub overdue: usize,
    /// Mean days from submission to deadline over done requests, each
    /// clamped to at least one day; fallback when nothing is done yet.
    pub avg_days_to_close: i64,
    pub completed: usize,
    /// Percent of the weekly completion target, capped at 100.
    pub completion_pct: u32,
}

pub fn compute(requests: &[PrivacyRequest], now: DateTime<Utc>) -> DashboardStats {
    let open = requests.iter().filter(|r| r.status.is_open()).count();
    let due_today = requests
        .iter()
        .filter(|r| r.due_at.date_naive() == now.date_naive())
        .count();
    let overdue = requests
        .iter()
        .filter(|r| r.due_at < now && r.status != RequestStatus::Done)
        .count();

    let done: Vec<&PrivacyRequest> = requests
        .iter()
        .filter(|r| r.status == RequestStatus::Done)
        .collect();
    let avg_days_to_close = if done.is_empty() {
        AVG_CLOSE_FALLBACK_DAYS
    } else {
        let total_days: f64 = done
            .iter()
            .map(|r| ((r.due_at - r.submitted_at).num_milliseconds() as f64 / DAY_MS).max(1.0))
            .sum();
        (total_days / done.len() as f64).round() as i64
    };

    let completed = done.len();
    let completion_pct = ((completed as f64 / WEEKLY_COMPLETION_TARGET as f64) * 100.0)
        .round()
        .min(100.0) as u32;

    DashboardStats {
        open,
        due_today,
        overdue,
        avg_days_to_close,
        completed,
        completion_pct,
    }
}
