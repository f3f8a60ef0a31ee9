//! Fill path: turn the gaps of a previewed week into filler entries and
//! submit them. Planning is pure; submission is serial and best-effort.

use crate::api::{EntrySink, SubmitOutcome};
use crate::core::interval::DAY_END;
use crate::errors::{AppError, AppResult};
use crate::models::{FillerEntry, TimeEntry, WeekReport};
use crate::ui::messages;
use crate::utils::time::from_minute_of_day;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use std::collections::BTreeMap;

/// How fillers are labeled and what happens on days without a template
/// entry. Built from the loaded configuration.
#[derive(Debug, Clone)]
pub struct FillPolicy {
    pub description: String,
    pub default_project_id: Option<String>,
    pub default_task_id: Option<String>,
}

impl FillPolicy {
    /// Fallback metadata for template-less days, when configured.
    fn fallback(&self) -> Option<(String, String)> {
        match (&self.default_project_id, &self.default_task_id) {
            (Some(p), Some(t)) => Some((p.clone(), t.clone())),
            _ => None,
        }
    }
}

pub struct FillLogic;

impl FillLogic {
    /// One filler per gap. The metadata template is the day's first entry
    /// in retrieval order; days with gaps but no entries use the configured
    /// fallback project/task, or are skipped with a warning.
    pub fn plan(
        report: &WeekReport,
        grouped: &BTreeMap<NaiveDate, Vec<TimeEntry>>,
        tz: Tz,
        policy: &FillPolicy,
    ) -> AppResult<Vec<FillerEntry>> {
        let mut fillers = Vec::new();

        for day in &report.days {
            if day.gaps.is_empty() {
                continue;
            }

            let template = grouped.get(&day.date).and_then(|bucket| bucket.first());
            let (project_id, task_id, billable) = match template {
                Some(t) => (t.project_id.clone(), t.task_id.clone(), t.billable),
                None => match policy.fallback() {
                    Some((p, t)) => (Some(p), Some(t), true),
                    None => {
                        messages::warning(format!(
                            "{}: gaps found but no entry to copy project/task from; skipping day",
                            day.date
                        ));
                        continue;
                    }
                },
            };

            for gap in &day.gaps {
                fillers.push(FillerEntry {
                    project_id: project_id.clone(),
                    task_id: task_id.clone(),
                    billable,
                    description: policy.description.clone(),
                    start: local_minute_to_utc(day.date, gap.start(), tz)?,
                    end: local_minute_to_utc(day.date, gap.end(), tz)?,
                });
            }
        }

        Ok(fillers)
    }

    /// Submit every planned filler in order. A failed submission is warned
    /// and counted; it never stops the batch. Returns (created, failed).
    pub fn execute(sink: &dyn EntrySink, fillers: &[FillerEntry], tz: Tz) -> (usize, usize) {
        let mut created = 0;
        let mut failed = 0;

        for filler in fillers {
            let start = filler.start.with_timezone(&tz);
            let end = filler.end.with_timezone(&tz);
            println!(
                "→ Creating {} {}-{} ({})",
                filler.description,
                start.format("%H:%M"),
                end.format("%H:%M"),
                start.date_naive()
            );

            match sink.submit(filler) {
                SubmitOutcome::Created => created += 1,
                SubmitOutcome::Failed { status, message } => {
                    failed += 1;
                    let code = status
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "no response".to_string());
                    messages::warning(format!("POST failed ({}): {}", code, message));
                }
            }
        }

        (created, failed)
    }
}

/// Convert a gap bound on `date` back to a UTC instant. Bound 1440 means
/// midnight of the following day. Ambiguous local times (DST) resolve to
/// the earliest instant, matching the week resolver.
fn local_minute_to_utc(date: NaiveDate, minute: u16, tz: Tz) -> AppResult<DateTime<Utc>> {
    let (day, time) = if minute >= DAY_END {
        let next = date
            .succ_opt()
            .ok_or_else(|| AppError::InvalidDate(format!("no day after {date}")))?;
        (next, chrono::NaiveTime::MIN)
    } else {
        let time = from_minute_of_day(minute)
            .ok_or_else(|| AppError::InvalidInterval(format!("minute {minute} out of range")))?;
        (date, time)
    };

    tz.from_local_datetime(&day.and_time(time))
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| AppError::InvalidDate(format!("no valid local time {time} on {day}")))
}
