//! SLA arithmetic: due dates, window progress, time-remaining labels.

use chrono::{DateTime, Duration, Utc};

use privacydesk_core::constants::AT_RISK_THRESHOLD_DAYS;

const DAY_MS: f64 = 86_400_000.0;

/// Deadline for a request submitted at `submitted_at` under an SLA of
/// `sla_days`. Computed once at creation and never recomputed.
pub fn due_date(submitted_at: DateTime<Utc>, sla_days: u32) -> DateTime<Utc> {
    submitted_at + Duration::days(i64::from(sla_days))
}

/// Percentage of the SLA window already elapsed, clamped to [0, 100].
/// A zero-length window counts as fully elapsed once the deadline passes
/// and untouched before it.
pub fn progress_pct(
    submitted_at: DateTime<Utc>,
    due_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> f64 {
    let total = (due_at - submitted_at).num_milliseconds();
    if total <= 0 {
        return if now >= due_at { 100.0 } else { 0.0 };
    }
    let elapsed = (now - submitted_at).num_milliseconds() as f64;
    (elapsed / total as f64 * 100.0).clamp(0.0, 100.0)
}

/// Whole days until the deadline, rounded up; negative once overdue.
pub fn days_left(due_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (due_at - now).num_milliseconds();
    (millis as f64 / DAY_MS).ceil() as i64
}

/// Deadline banding for list styling and the SLA widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlaState {
    OnTrack,
    /// Within [`AT_RISK_THRESHOLD_DAYS`] of the deadline.
    AtRisk,
    Overdue,
}

pub fn sla_state(due_at: DateTime<Utc>, now: DateTime<Utc>) -> SlaState {
    let left = days_left(due_at, now);
    if left < 0 {
        SlaState::Overdue
    } else if left <= AT_RISK_THRESHOLD_DAYS {
        SlaState::AtRisk
    } else {
        SlaState::OnTrack
    }
}

/// "Due in Nd" / "Overdue Nd".
pub fn deadline_label(due_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let left = days_left(due_at, now);
    if left >= 0 {
        format!("Due in {left}d")
    } else {
        format!("Overdue {}d", left.abs())
    }
}
