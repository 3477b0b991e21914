use chrono::{DateTime, Utc};

/// One stored brag log entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LogEntry {
    pub(crate) id: i64,
    pub(crate) message: String,
    pub(crate) project: Option<String>,
    /// Assigned by SQLite at insert time (UTC, second resolution)
    pub(crate) created_at: DateTime<Utc>,
}
