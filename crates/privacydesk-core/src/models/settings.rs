use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::request::RequestKind;

/// Per-kind SLA windows in days. Consulted only at request creation;
/// changing these never rewrites existing due dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlaDays {
    pub access: u32,
    pub delete: u32,
    pub export: u32,
    pub correct: u32,
}

impl SlaDays {
    pub fn days_for(&self, kind: RequestKind) -> u32 {
        match kind {
            RequestKind::Access => self.access,
            RequestKind::Delete => self.delete,
            RequestKind::Export => self.export,
            RequestKind::Correct => self.correct,
        }
    }

    /// Field-wise merge: only the fields present in the patch change.
    pub fn apply(&mut self, patch: SlaDaysPatch) {
        if let Some(days) = patch.access {
            self.access = days;
        }
        if let Some(days) = patch.delete {
            self.delete = days;
        }
        if let Some(days) = patch.export {
            self.export = days;
        }
        if let Some(days) = patch.correct {
            self.correct = days;
        }
    }
}

impl Default for SlaDays {
    fn default() -> Self {
        Self {
            access: defaults::DEFAULT_SLA_DAYS,
            delete: defaults::DEFAULT_SLA_DAYS,
            export: defaults::DEFAULT_SLA_DAYS,
            correct: defaults::DEFAULT_SLA_DAYS,
        }
    }
}

/// Partial update for [`SlaDays`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SlaDaysPatch {
    pub access: Option<u32>,
    pub delete: Option<u32>,
    pub export: Option<u32>,
    pub correct: Option<u32>,
}

/// Process-wide configuration stored as the single row of the settings
/// collection. Loaded at startup, persisted immediately on save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub sla_days: SlaDays,
    /// Assignable team-member names.
    pub owners: Vec<String>,
    /// Free-text default response template.
    pub templates: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sla_days: SlaDays::default(),
            owners: defaults::DEFAULT_OWNERS.iter().map(|s| s.to_string()).collect(),
            templates: String::new(),
        }
    }
}

/// Shallow-merge patch for [`Settings`]; `sla_days` merges field-wise as
/// its own nested map rather than wholesale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsPatch {
    pub sla_days: Option<SlaDaysPatch>,
    pub owners: Option<Vec<String>>,
    pub templates: Option<String>,
}

impl Settings {
    pub fn apply(&mut self, patch: SettingsPatch) {
        if let Some(sla_patch) = patch.sla_days {
            self.sla_days.apply(sla_patch);
        }
        if let Some(owners) = patch.owners {
            self.owners = owners;
        }
        if let Some(templates) = patch.templates {
            self.templates = templates;
        }
    }
}
