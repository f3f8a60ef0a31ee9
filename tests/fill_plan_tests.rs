use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use gapfill::api::{EntrySink, SubmitOutcome};
use gapfill::core::fill::{FillLogic, FillPolicy};
use gapfill::core::grouping::group_by_local_day;
use gapfill::core::interval::Interval;
use gapfill::core::week::week_containing;
use gapfill::models::{DayGaps, FillerEntry, TimeEntry, WeekReport};
use std::cell::RefCell;
use std::collections::BTreeMap;

fn iv(start: u16, end: u16) -> Interval {
    Interval::new(start, end).expect("valid interval")
}

fn day(s: &str) -> NaiveDate {
    s.parse().expect("date")
}

fn entry(id: &str, project: &str, start: &str, end: &str) -> TimeEntry {
    TimeEntry {
        id: id.to_string(),
        project_id: Some(project.to_string()),
        task_id: Some(format!("task-of-{project}")),
        billable: true,
        description: "meeting".to_string(),
        start: start.parse::<DateTime<Utc>>().expect("start"),
        end: end.parse::<DateTime<Utc>>().expect("end"),
    }
}

fn policy() -> FillPolicy {
    FillPolicy {
        description: "[Dev Work, Reviewing code]".to_string(),
        default_project_id: None,
        default_task_id: None,
    }
}

fn report_for(
    tz: Tz,
    days: Vec<DayGaps>,
) -> WeekReport {
    let range = week_containing(days[0].date, tz).expect("week");
    WeekReport { range, days }
}

/// Sink double: records every call, optionally failing some of them.
struct RecordingSink {
    calls: RefCell<Vec<FillerEntry>>,
    fail_indices: Vec<usize>,
}

impl RecordingSink {
    fn new(fail_indices: Vec<usize>) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail_indices,
        }
    }
}

impl EntrySink for RecordingSink {
    fn submit(&self, entry: &FillerEntry) -> SubmitOutcome {
        let idx = self.calls.borrow().len();
        self.calls.borrow_mut().push(entry.clone());
        if self.fail_indices.contains(&idx) {
            SubmitOutcome::Failed {
                status: Some(400),
                message: "bad request".to_string(),
            }
        } else {
            SubmitOutcome::Created
        }
    }
}

#[test]
fn test_one_filler_per_gap_with_the_days_template() {
    let tz = chrono_tz::UTC;
    let entries = [
        entry("m1", "proj-mon", "2025-08-04T09:00:00Z", "2025-08-04T10:00:00Z"),
        entry("m2", "proj-other", "2025-08-04T14:00:00Z", "2025-08-04T15:00:00Z"),
        entry("t1", "proj-tue", "2025-08-05T09:00:00Z", "2025-08-05T12:00:00Z"),
    ];
    let grouped = group_by_local_day(&entries, tz);

    let report = report_for(
        tz,
        vec![
            DayGaps {
                date: day("2025-08-04"),
                gaps: vec![iv(600, 720), iv(900, 1080)],
            },
            DayGaps {
                date: day("2025-08-05"),
                gaps: vec![iv(780, 1080)],
            },
        ],
    );

    let fillers = FillLogic::plan(&report, &grouped, tz, &policy()).unwrap();
    assert_eq!(fillers.len(), 3);

    // Monday fillers copy the *first retrieved* Monday entry, not m2
    assert_eq!(fillers[0].project_id.as_deref(), Some("proj-mon"));
    assert_eq!(fillers[0].task_id.as_deref(), Some("task-of-proj-mon"));
    assert_eq!(fillers[1].project_id.as_deref(), Some("proj-mon"));
    assert_eq!(fillers[2].project_id.as_deref(), Some("proj-tue"));
    assert!(fillers.iter().all(|f| f.billable));
    assert!(
        fillers
            .iter()
            .all(|f| f.description == "[Dev Work, Reviewing code]")
    );
}

#[test]
fn test_gap_bounds_convert_back_to_utc_instants() {
    // gap 09:00-12:00 Manila on Aug 4 = 01:00-04:00 UTC
    let manila: Tz = "Asia/Manila".parse().unwrap();
    let entries = [entry("m1", "p", "2025-08-04T05:00:00Z", "2025-08-04T08:00:00Z")];
    let grouped = group_by_local_day(&entries, manila);

    let report = report_for(
        manila,
        vec![DayGaps {
            date: day("2025-08-04"),
            gaps: vec![iv(540, 720)],
        }],
    );

    let fillers = FillLogic::plan(&report, &grouped, manila, &policy()).unwrap();
    assert_eq!(fillers.len(), 1);
    assert_eq!(
        fillers[0].start,
        "2025-08-04T01:00:00Z".parse::<DateTime<Utc>>().unwrap()
    );
    assert_eq!(
        fillers[0].end,
        "2025-08-04T04:00:00Z".parse::<DateTime<Utc>>().unwrap()
    );
}

#[test]
fn test_day_without_entries_is_skipped_without_fallback() {
    let tz = chrono_tz::UTC;
    let grouped: BTreeMap<NaiveDate, Vec<TimeEntry>> = BTreeMap::new();

    let report = report_for(
        tz,
        vec![DayGaps {
            date: day("2025-08-04"),
            gaps: vec![iv(540, 720)],
        }],
    );

    let fillers = FillLogic::plan(&report, &grouped, tz, &policy()).unwrap();
    assert!(fillers.is_empty());
}

#[test]
fn test_day_without_entries_uses_configured_fallback() {
    let tz = chrono_tz::UTC;
    let grouped: BTreeMap<NaiveDate, Vec<TimeEntry>> = BTreeMap::new();

    let report = report_for(
        tz,
        vec![DayGaps {
            date: day("2025-08-04"),
            gaps: vec![iv(540, 720), iv(780, 1080)],
        }],
    );

    let fallback = FillPolicy {
        description: "filler".to_string(),
        default_project_id: Some("proj-default".to_string()),
        default_task_id: Some("task-default".to_string()),
    };
    let fillers = FillLogic::plan(&report, &grouped, tz, &fallback).unwrap();
    assert_eq!(fillers.len(), 2);
    assert!(
        fillers
            .iter()
            .all(|f| f.project_id.as_deref() == Some("proj-default"))
    );
    assert!(fillers.iter().all(|f| f.billable));
}

#[test]
fn test_fallback_requires_both_identifiers() {
    let tz = chrono_tz::UTC;
    let grouped: BTreeMap<NaiveDate, Vec<TimeEntry>> = BTreeMap::new();

    let report = report_for(
        tz,
        vec![DayGaps {
            date: day("2025-08-04"),
            gaps: vec![iv(540, 720)],
        }],
    );

    let partial = FillPolicy {
        description: "filler".to_string(),
        default_project_id: Some("proj-default".to_string()),
        default_task_id: None,
    };
    let fillers = FillLogic::plan(&report, &grouped, tz, &partial).unwrap();
    assert!(fillers.is_empty());
}

#[test]
fn test_covered_days_produce_no_fillers() {
    let tz = chrono_tz::UTC;
    let entries = [entry("m1", "p", "2025-08-04T09:00:00Z", "2025-08-04T18:00:00Z")];
    let grouped = group_by_local_day(&entries, tz);

    let report = report_for(
        tz,
        vec![DayGaps {
            date: day("2025-08-04"),
            gaps: vec![],
        }],
    );

    let fillers = FillLogic::plan(&report, &grouped, tz, &policy()).unwrap();
    assert!(fillers.is_empty());
}

#[test]
fn test_execute_submits_every_filler_despite_failures() {
    let tz = chrono_tz::UTC;
    let entries = [entry("m1", "p", "2025-08-04T09:00:00Z", "2025-08-04T10:00:00Z")];
    let grouped = group_by_local_day(&entries, tz);

    let report = report_for(
        tz,
        vec![DayGaps {
            date: day("2025-08-04"),
            gaps: vec![iv(600, 720), iv(780, 900), iv(960, 1080)],
        }],
    );

    let fillers = FillLogic::plan(&report, &grouped, tz, &policy()).unwrap();
    assert_eq!(fillers.len(), 3);

    // first submission fails; the remaining two still go out
    let sink = RecordingSink::new(vec![0]);
    let (created, failed) = FillLogic::execute(&sink, &fillers, tz);

    assert_eq!(created, 2);
    assert_eq!(failed, 1);
    assert_eq!(sink.calls.borrow().len(), 3);
}
