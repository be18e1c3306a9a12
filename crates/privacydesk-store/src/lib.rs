//! # privacydesk-store
//!
//! The mutation layer: [`RequestStore`] owns the in-memory state, serializes
//! every mutation behind a single writer, and writes through to persistence
//! before committing to memory so a failed write never leaves the two out
//! of sync.

pub mod ids;
pub mod store;
pub mod telemetry;

pub use store::{CloseDecision, NewRequest, RequestStore};
