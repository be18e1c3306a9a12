/// PrivacyDesk system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Floor for numeric id suffixes: the first generated id is `REQ-1001`.
pub const ID_SUFFIX_FLOOR: u64 = 1000;

/// Requests with this many days or fewer until their deadline are at risk.
pub const AT_RISK_THRESHOLD_DAYS: i64 = 3;

/// Dashboard fallback for average time-to-close when nothing is done yet.
pub const AVG_CLOSE_FALLBACK_DAYS: i64 = 30;

/// Weekly completion target shown on the dashboard.
pub const WEEKLY_COMPLETION_TARGET: usize = 10;

/// Key of the single row in the settings collection.
pub const SETTINGS_KEY: &str = "settings";

/// Display name for requests without an assigned owner.
pub const UNASSIGNED_OWNER: &str = "Unassigned";

/// Actor recorded for machine-initiated history entries.
pub const SYSTEM_ACTOR: &str = "system";
