pub mod base;
pub mod history;
pub mod id;
pub mod note;
pub mod types;

pub use base::{PrivacyRequest, Requester};
pub use history::{HistoryAction, HistoryEntry};
pub use id::RequestId;
pub use note::{Attachment, Note};
pub use types::{RequestKind, RequestStatus};
