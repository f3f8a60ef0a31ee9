//! Wire DTOs for the Clockify REST API (camelCase JSON).

use crate::errors::{AppError, AppResult};
use crate::models::TimeEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct UserDto {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserDto {
    /// Name when set, e-mail otherwise (the API always returns one of them).
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or(self.email.as_deref())
            .unwrap_or("(unknown)")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimeIntervalDto {
    pub start: Option<String>,
    pub end: Option<String>,
}

fn default_billable() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntryDto {
    pub id: String,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub task_id: Option<String>,
    #[serde(default = "default_billable")]
    pub billable: bool,
    #[serde(default)]
    pub description: String,
    pub time_interval: TimeIntervalDto,
}

impl TimeEntryDto {
    /// Convert into the domain model. Entries without an `end` (a timer
    /// still running) yield None and are skipped by the caller.
    pub fn into_entry(self) -> AppResult<Option<TimeEntry>> {
        let (Some(start), Some(end)) = (self.time_interval.start, self.time_interval.end) else {
            return Ok(None);
        };
        let start = parse_instant(&start)?;
        let end = parse_instant(&end)?;
        Ok(Some(TimeEntry {
            id: self.id,
            project_id: self.project_id,
            task_id: self.task_id,
            billable: self.billable,
            description: self.description,
            start,
            end,
        }))
    }
}

fn parse_instant(raw: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| AppError::Other(format!("unparsable timestamp from API: {raw}")))
}

/// POST body for a new time entry. Field order and the literal `type`
/// value match what the service expects.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEntryBody {
    pub start: String,
    pub end: String,
    pub billable: bool,
    pub project_id: Option<String>,
    pub task_id: Option<String>,
    pub description: String,
    #[serde(rename = "type")]
    pub entry_type: String,
}
