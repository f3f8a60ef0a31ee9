use chrono::{DateTime, Utc};
use serde::Serialize;

/// One tracked time entry as retrieved from the remote workspace.
///
/// Timestamps are kept as UTC instants; wall-clock views are derived with
/// the configured time zone where needed. `start <= end` is expected from
/// the service; zero-length entries are degenerate but tolerated.
#[derive(Debug, Clone, Serialize)]
pub struct TimeEntry {
    pub id: String,
    pub project_id: Option<String>,
    pub task_id: Option<String>,
    pub billable: bool,
    pub description: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeEntry {
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// A synthetic entry planned to cover one gap. Built locally, never
/// retrieved; submitted through the entry sink on the fill path.
#[derive(Debug, Clone, Serialize)]
pub struct FillerEntry {
    pub project_id: Option<String>,
    pub task_id: Option<String>,
    pub billable: bool,
    pub description: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}
