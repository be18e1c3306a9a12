//! # privacydesk-core
//!
//! Foundation crate for the PrivacyDesk case-management system.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod request;
pub mod traits;
pub mod validate;

// Re-export the most commonly used types at the crate root.
pub use config::DeskConfig;
pub use errors::{DeskError, DeskResult};
pub use models::{ConsentRecord, Settings, SettingsPatch, SlaDays, StateSnapshot};
pub use request::{PrivacyRequest, RequestId, RequestKind, RequestStatus};
