//! Blocking HTTP client for the Clockify REST API.
//!
//! Wire contract kept byte-compatible with the service: `x-api-key` header
//! on every request, query-range timestamps with millisecond precision
//! (`%Y-%m-%dT%H:%M:%S.000Z`), POST body timestamps without
//! (`%Y-%m-%dT%H:%M:%SZ`). No retries; one failed fetch aborts the run.

use crate::api::types::{NewEntryBody, TimeEntryDto, UserDto};
use crate::api::{EntrySink, EntrySource, SubmitOutcome};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{FillerEntry, TimeEntry};
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use std::cell::OnceCell;

const QUERY_TS_FMT: &str = "%Y-%m-%dT%H:%M:%S.000Z";
const BODY_TS_FMT: &str = "%Y-%m-%dT%H:%M:%SZ";

pub struct ClockifyClient {
    http: Client,
    base_url: String,
    api_key: String,
    workspace_id: String,
    // user id resolved once per run from /user
    user_id: OnceCell<String>,
}

impl ClockifyClient {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            http: Client::new(),
            base_url: cfg.api_base_url.trim_end_matches('/').to_string(),
            api_key: cfg.api_key.clone(),
            workspace_id: cfg.workspace_id.clone(),
            user_id: OnceCell::new(),
        }
    }

    /// The user identified by the API key. Caches the user id for the
    /// time-entries endpoint.
    pub fn current_user(&self) -> AppResult<UserDto> {
        let url = format!("{}/user", self.base_url);
        let res = self.http.get(&url).header("x-api-key", &self.api_key).send()?;
        let user: UserDto = check_status(res)?.json()?;
        let _ = self.user_id.set(user.id.clone());
        Ok(user)
    }

    fn user_id(&self) -> AppResult<String> {
        if let Some(id) = self.user_id.get() {
            return Ok(id.clone());
        }
        Ok(self.current_user()?.id)
    }
}

impl EntrySource for ClockifyClient {
    fn fetch_entries(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<TimeEntry>> {
        let user_id = self.user_id()?;
        let url = format!(
            "{}/workspaces/{}/user/{}/time-entries?start={}&end={}",
            self.base_url,
            self.workspace_id,
            user_id,
            start.format(QUERY_TS_FMT),
            end.format(QUERY_TS_FMT),
        );

        let res = self.http.get(&url).header("x-api-key", &self.api_key).send()?;
        let dtos: Vec<TimeEntryDto> = check_status(res)?.json()?;

        let mut entries = Vec::with_capacity(dtos.len());
        for dto in dtos {
            // running timers (no end yet) are skipped
            if let Some(entry) = dto.into_entry()? {
                entries.push(entry);
            }
        }
        Ok(entries)
    }
}

impl EntrySink for ClockifyClient {
    fn submit(&self, entry: &FillerEntry) -> SubmitOutcome {
        let url = format!("{}/workspaces/{}/time-entries", self.base_url, self.workspace_id);
        let body = NewEntryBody {
            start: entry.start.format(BODY_TS_FMT).to_string(),
            end: entry.end.format(BODY_TS_FMT).to_string(),
            billable: entry.billable,
            project_id: entry.project_id.clone(),
            task_id: entry.task_id.clone(),
            description: entry.description.clone(),
            entry_type: "REGULAR".to_string(),
        };

        let sent = self
            .http
            .post(&url)
            .header("x-api-key", &self.api_key)
            .json(&body)
            .send();

        match sent {
            Ok(res) if res.status() == StatusCode::OK || res.status() == StatusCode::CREATED => {
                SubmitOutcome::Created
            }
            Ok(res) => {
                let status = res.status().as_u16();
                let message = res.text().unwrap_or_default();
                SubmitOutcome::Failed {
                    status: Some(status),
                    message,
                }
            }
            Err(e) => SubmitOutcome::Failed {
                status: None,
                message: e.to_string(),
            },
        }
    }
}

/// Map non-success responses to the error taxonomy: 401/403 → Auth,
/// anything else non-2xx → Api with the response body attached.
fn check_status(res: Response) -> AppResult<Response> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    let body = res.text().unwrap_or_default();
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        Err(AppError::Auth(format!(
            "the service rejected the API key (status {})",
            status.as_u16()
        )))
    } else {
        Err(AppError::Api {
            status: status.as_u16(),
            body,
        })
    }
}
