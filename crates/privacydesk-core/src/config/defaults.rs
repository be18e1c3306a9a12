/// Default SLA window, applied to every request kind until changed.
pub const DEFAULT_SLA_DAYS: u32 = 30;

/// Default assignable team members.
pub const DEFAULT_OWNERS: [&str; 5] = ["Alex", "Priya", "Jordan", "Sam", "Taylor"];

/// Default snapshot file name, relative to the working directory.
pub const DEFAULT_SNAPSHOT_FILE: &str = "privacydesk-snapshot.json";

/// Default SQLite busy timeout.
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;
