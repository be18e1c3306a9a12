use crate::errors::DeskResult;
use crate::models::{ConsentRecord, Settings};
use crate::request::{PrivacyRequest, RequestId};

/// Persistence contract for the three collections: requests, consents,
/// settings. Reads resolve misses to `Ok(None)` / empty; errors are
/// reserved for genuine storage failures, never "not found".
pub trait RequestStorage: Send + Sync {
    // --- Requests ---
    fn put_request(&self, request: &PrivacyRequest) -> DeskResult<()>;
    fn get_request(&self, id: &RequestId) -> DeskResult<Option<PrivacyRequest>>;
    fn all_requests(&self) -> DeskResult<Vec<PrivacyRequest>>;
    fn delete_request(&self, id: &RequestId) -> DeskResult<()>;
    fn request_count(&self) -> DeskResult<usize>;

    // --- Consents ---
    fn put_consent(&self, consent: &ConsentRecord) -> DeskResult<()>;
    fn get_consent(&self, id: &str) -> DeskResult<Option<ConsentRecord>>;
    fn all_consents(&self) -> DeskResult<Vec<ConsentRecord>>;
    fn delete_consent(&self, id: &str) -> DeskResult<()>;

    // --- Settings (single record) ---
    fn put_settings(&self, settings: &Settings) -> DeskResult<()>;
    fn get_settings(&self) -> DeskResult<Option<Settings>>;
}
