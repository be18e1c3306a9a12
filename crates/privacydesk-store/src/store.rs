//! RequestStore — validated mutations over the in-memory state, serialized
//! behind a single writer and written through to persistence.
//!
//! Ordering invariant: build the updated record, persist it, and only then
//! commit to memory. A storage failure therefore never leaves memory ahead
//! of disk.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;

use privacydesk_core::config::{DeskConfig, SeedPolicy};
use privacydesk_core::constants::SYSTEM_ACTOR;
use privacydesk_core::errors::{DeskError, DeskResult, ValidationError};
use privacydesk_core::request::{
    HistoryAction, HistoryEntry, Note, PrivacyRequest, RequestId, RequestKind, RequestStatus,
    Requester,
};
use privacydesk_core::traits::RequestStorage;
use privacydesk_core::validate;
use privacydesk_core::{ConsentRecord, Settings, SettingsPatch, StateSnapshot};
use privacydesk_storage::{seed, snapshot};

/// Input for [`RequestStore::add_request`]. Id, submission time, initial
/// history, and (usually) the due date are derived by the store.
#[derive(Debug, Clone)]
pub struct NewRequest {
    pub kind: RequestKind,
    pub requester: Requester,
    pub owner: Option<String>,
    /// Defaults to [`RequestStatus::New`].
    pub status: Option<RequestStatus>,
    /// Explicit deadline override; defaults to `now + SLA(kind)` from the
    /// current settings.
    pub due_at: Option<DateTime<Utc>>,
}

/// The two ways to close a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseDecision {
    Done,
    Rejected,
}

impl CloseDecision {
    fn status(self) -> RequestStatus {
        match self {
            CloseDecision::Done => RequestStatus::Done,
            CloseDecision::Rejected => RequestStatus::Rejected,
        }
    }

    fn action(self) -> HistoryAction {
        match self {
            CloseDecision::Done => HistoryAction::Closed,
            CloseDecision::Rejected => HistoryAction::Rejected,
        }
    }
}

struct StoreState {
    requests: Vec<PrivacyRequest>,
    consents: Vec<ConsentRecord>,
    settings: Settings,
}

/// The in-memory, persistence-backed state container. All mutations pass
/// through one `tokio::sync::Mutex`, so the read-modify-write pattern can
/// never interleave even on a multi-threaded runtime.
pub struct RequestStore {
    storage: Arc<dyn RequestStorage>,
    state: Mutex<StoreState>,
    /// Session marker: seeding is attempted at most once per store
    /// instance, regardless of how many times `load` runs.
    seed_attempted: AtomicBool,
    seed_policy: SeedPolicy,
    snapshot_path: PathBuf,
}

impl RequestStore {
    pub fn new(storage: Arc<dyn RequestStorage>) -> Self {
        Self {
            storage,
            state: Mutex::new(StoreState {
                requests: Vec::new(),
                consents: Vec::new(),
                settings: Settings::default(),
            }),
            seed_attempted: AtomicBool::new(false),
            seed_policy: SeedPolicy::Enabled,
            snapshot_path: DeskConfig::default().storage.snapshot_path,
        }
    }

    pub fn with_config(storage: Arc<dyn RequestStorage>, config: &DeskConfig) -> Self {
        let mut store = Self::new(storage);
        store.seed_policy = config.seed_on_empty;
        store.snapshot_path = config.storage.snapshot_path.clone();
        store
    }

    /// Seed an empty database (once per store instance), then load the
    /// three collections into memory. The structured collections are the
    /// sole load source; snapshots are only read through
    /// [`RequestStore::restore_from_snapshot`].
    pub async fn load(&self) -> DeskResult<()> {
        if self.seed_policy == SeedPolicy::Enabled && !self.seed_attempted.load(Ordering::Acquire) {
            seed::seed_if_empty(self.storage.as_ref())?;
            self.seed_attempted.store(true, Ordering::Release);
        }

        let requests = self.storage.all_requests()?;
        let consents = self.storage.all_consents()?;
        let settings = self.storage.get_settings()?.unwrap_or_default();

        let mut state = self.state.lock().await;
        tracing::debug!(
            requests = requests.len(),
            consents = consents.len(),
            "loaded store state"
        );
        *state = StoreState {
            requests,
            consents,
            settings,
        };
        Ok(())
    }

    // --- Accessors (cloned snapshots for view computation) ---

    pub async fn requests(&self) -> Vec<PrivacyRequest> {
        self.state.lock().await.requests.clone()
    }

    pub async fn consents(&self) -> Vec<ConsentRecord> {
        self.state.lock().await.consents.clone()
    }

    pub async fn settings(&self) -> Settings {
        self.state.lock().await.settings.clone()
    }

    pub async fn request(&self, id: &RequestId) -> Option<PrivacyRequest> {
        let state = self.state.lock().await;
        state.requests.iter().find(|r| &r.id == id).cloned()
    }

    // --- Mutations ---

    /// Create a request. Validates the requester, assigns the next id,
    /// stamps submission time, derives the due date from the current SLA
    /// settings unless one is supplied, and appends the `created` entry.
    pub async fn add_request(&self, input: NewRequest) -> DeskResult<PrivacyRequest> {
        validate::validate_requester(&input.requester)?;

        let mut state = self.state.lock().await;
        let submitted_at = Utc::now();
        let sla_days = state.settings.sla_days.days_for(input.kind);
        let due_at = input
            .due_at
            .unwrap_or_else(|| submitted_at + Duration::days(i64::from(sla_days)));
        if due_at < submitted_at {
            return Err(ValidationError::DueBeforeSubmitted {
                submitted_at: submitted_at.to_rfc3339(),
                due_at: due_at.to_rfc3339(),
            }
            .into());
        }

        let request = PrivacyRequest {
            id: crate::ids::next_request_id(&state.requests),
            kind: input.kind,
            requester: input.requester,
            submitted_at,
            due_at,
            status: input.status.unwrap_or(RequestStatus::New),
            owner: input.owner,
            notes: Vec::new(),
            attachments: Vec::new(),
            history: vec![HistoryEntry::new(
                submitted_at,
                SYSTEM_ACTOR,
                HistoryAction::Created,
            )],
        };

        self.storage.put_request(&request)?;
        tracing::debug!(id = %request.id, kind = %request.kind, "created request");
        state.requests.push(request.clone());
        Ok(request)
    }

    /// Replace a stored record verbatim (the attachment-edit escape hatch).
    /// Appends no history; that is the caller's responsibility.
    pub async fn update_request(&self, request: PrivacyRequest) -> DeskResult<()> {
        let mut state = self.state.lock().await;
        let index = state
            .requests
            .iter()
            .position(|r| r.id == request.id)
            .ok_or_else(|| DeskError::RequestNotFound {
                id: request.id.to_string(),
            })?;

        self.storage.put_request(&request)?;
        state.requests[index] = request;
        Ok(())
    }

    /// Reassign the case owner. Appends an `owner_set` entry with the new
    /// owner in the details.
    pub async fn set_owner(&self, id: &RequestId, owner: &str, actor: &str) -> DeskResult<()> {
        self.mutate_open_request(id, |request| {
            request.owner = Some(owner.to_string());
            request.history.push(
                HistoryEntry::new(Utc::now(), actor, HistoryAction::OwnerSet).with_details(owner),
            );
            Ok(())
        })
        .await
    }

    /// Non-closing status transition (new / in_progress / waiting).
    /// Terminal statuses must go through [`RequestStore::close_request`]
    /// so a rationale is always recorded.
    pub async fn set_status(
        &self,
        id: &RequestId,
        status: RequestStatus,
        actor: &str,
    ) -> DeskResult<()> {
        if status.is_terminal() {
            return Err(ValidationError::CloseRequired {
                status: status.to_string(),
            }
            .into());
        }
        self.mutate_open_request(id, |request| {
            request.status = status;
            request.history.push(
                HistoryEntry::new(Utc::now(), actor, HistoryAction::StatusChanged)
                    .with_details(status.as_str()),
            );
            Ok(())
        })
        .await
    }

    /// Append a note. The note itself is the record; no history entry.
    pub async fn add_note(&self, id: &RequestId, text: &str, who: Option<&str>) -> DeskResult<()> {
        let author = who.unwrap_or(SYSTEM_ACTOR).to_string();
        self.mutate_request(id, |request| {
            request.notes.push(Note {
                at: Utc::now(),
                who: author,
                text: text.to_string(),
            });
            Ok(())
        })
        .await
    }

    /// Close the case as done or rejected. Requires a non-empty rationale;
    /// the citation, when present, is appended in parentheses so the
    /// history entry carries both.
    pub async fn close_request(
        &self,
        id: &RequestId,
        decision: CloseDecision,
        rationale: &str,
        citation: Option<&str>,
        actor: &str,
    ) -> DeskResult<()> {
        validate::validate_rationale(rationale)?;
        let details = match citation {
            Some(citation) => format!("{rationale} ({citation})"),
            None => rationale.to_string(),
        };

        self.mutate_open_request(id, |request| {
            request.status = decision.status();
            request
                .history
                .push(HistoryEntry::new(Utc::now(), actor, decision.action()).with_details(details));
            Ok(())
        })
        .await
    }

    /// Shallow-merge a settings patch (`sla_days` merges field-wise) and
    /// persist the merged record.
    pub async fn save_settings(&self, patch: SettingsPatch) -> DeskResult<()> {
        let mut state = self.state.lock().await;
        let mut merged = state.settings.clone();
        merged.apply(patch);

        self.storage.put_settings(&merged)?;
        state.settings = merged;
        Ok(())
    }

    // --- Snapshot (explicit crash recovery) ---

    /// Write the full in-memory state to the configured snapshot path.
    pub async fn snapshot(&self) -> DeskResult<()> {
        let path = self.snapshot_path.clone();
        self.snapshot_to(&path).await
    }

    /// Write the full in-memory state to a snapshot file.
    pub async fn snapshot_to(&self, path: &Path) -> DeskResult<()> {
        let state = self.state.lock().await;
        let snap = StateSnapshot::new(
            state.requests.clone(),
            state.consents.clone(),
            state.settings.clone(),
        );
        snapshot::write(path, &snap)
    }

    /// Replace the collections and the in-memory state with a snapshot's
    /// contents. Records absent from the snapshot are deleted so storage
    /// matches the restored state exactly.
    pub async fn restore_from_snapshot(&self, path: &Path) -> DeskResult<()> {
        let snap = snapshot::read(path)?;
        let mut state = self.state.lock().await;

        for existing in self.storage.all_requests()? {
            if !snap.requests.iter().any(|r| r.id == existing.id) {
                self.storage.delete_request(&existing.id)?;
            }
        }
        for existing in self.storage.all_consents()? {
            if !snap.consents.iter().any(|c| c.id == existing.id) {
                self.storage.delete_consent(&existing.id)?;
            }
        }
        for request in &snap.requests {
            self.storage.put_request(request)?;
        }
        for consent in &snap.consents {
            self.storage.put_consent(consent)?;
        }
        self.storage.put_settings(&snap.settings)?;

        tracing::warn!(
            snapshot_id = %snap.snapshot_id,
            taken_at = %snap.taken_at,
            "restored state from snapshot"
        );
        *state = StoreState {
            requests: snap.requests,
            consents: snap.consents,
            settings: snap.settings,
        };
        Ok(())
    }

    // --- Internals ---

    /// Find the request, apply the edit to a clone, persist, then commit.
    async fn mutate_request<F>(&self, id: &RequestId, edit: F) -> DeskResult<()>
    where
        F: FnOnce(&mut PrivacyRequest) -> DeskResult<()>,
    {
        let mut state = self.state.lock().await;
        let index = state
            .requests
            .iter()
            .position(|r| &r.id == id)
            .ok_or_else(|| DeskError::RequestNotFound { id: id.to_string() })?;

        let mut updated = state.requests[index].clone();
        edit(&mut updated)?;

        self.storage.put_request(&updated)?;
        state.requests[index] = updated;
        Ok(())
    }

    /// Like [`Self::mutate_request`], but rejects requests already closed.
    async fn mutate_open_request<F>(&self, id: &RequestId, edit: F) -> DeskResult<()>
    where
        F: FnOnce(&mut PrivacyRequest) -> DeskResult<()>,
    {
        self.mutate_request(id, |request| {
            if request.status.is_terminal() {
                return Err(DeskError::TerminalState {
                    id: request.id.to_string(),
                    status: request.status,
                });
            }
            edit(request)
        })
        .await
    }
}
