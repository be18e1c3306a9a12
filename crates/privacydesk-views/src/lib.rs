//! # privacydesk-views
//!
//! Pure derived-view computations over request snapshots: SLA arithmetic,
//! multi-field sorting, filtering, pagination, dashboard aggregates, the
//! activity feed, and the deterministic case export. No state, no I/O;
//! `now` is always a parameter so results are reproducible.

pub mod activity;
pub mod dashboard;
pub mod export;
pub mod filter;
pub mod paging;
pub mod sla;
pub mod sort;

pub use activity::{recent_activity, ActivityEvent};
pub use dashboard::DashboardStats;
pub use filter::RequestFilter;
pub use paging::{Page, PageInfo};
pub use sla::SlaState;
pub use sort::{Direction, SortField, SortKey};
