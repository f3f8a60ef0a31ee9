//! External collaborators: the remote time-tracking service.
//! Core logic only sees the two seam traits; the HTTP client lives behind
//! them so tests can swap in fakes.

pub mod clockify;
pub mod types;

use crate::errors::AppResult;
use crate::models::{FillerEntry, TimeEntry};
use chrono::{DateTime, Utc};

pub use clockify::ClockifyClient;

/// Read side: all time entries of the configured user in a UTC range.
pub trait EntrySource {
    fn fetch_entries(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<TimeEntry>>;
}

/// Result of one submission attempt. Failures carry the HTTP status when
/// one was received; transport-level failures have none.
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    Created,
    Failed {
        status: Option<u16>,
        message: String,
    },
}

/// Write side: accepts one filler entry. Never fails the run; the outcome
/// is reported to the caller for display.
pub trait EntrySink {
    fn submit(&self, entry: &FillerEntry) -> SubmitOutcome;
}
