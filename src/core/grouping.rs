//! Bucketing of retrieved entries by their local calendar day.

use crate::models::TimeEntry;
use chrono::NaiveDate;
use chrono_tz::Tz;
use std::collections::BTreeMap;

/// Group entries under the local date of their *start* instant in `tz`.
///
/// Retrieval order is preserved within each bucket; the fill planner relies
/// on it to pick the day's first entry as a metadata template. Entries that
/// end on a later local date stay in their start-day bucket with the full
/// interval; the gap engine clips at day boundaries.
pub fn group_by_local_day(entries: &[TimeEntry], tz: Tz) -> BTreeMap<NaiveDate, Vec<TimeEntry>> {
    let mut grouped: BTreeMap<NaiveDate, Vec<TimeEntry>> = BTreeMap::new();
    for entry in entries {
        let day = entry.start.with_timezone(&tz).date_naive();
        grouped.entry(day).or_default().push(entry.clone());
    }
    grouped
}

/// The busy inputs the gap engine should see for `date`: the day's own
/// bucket plus the previous day's (whose entries may spill past midnight).
pub fn entries_touching_day(
    grouped: &BTreeMap<NaiveDate, Vec<TimeEntry>>,
    date: NaiveDate,
) -> Vec<TimeEntry> {
    let mut out = Vec::new();
    if let Some(prev) = date.pred_opt()
        && let Some(spill) = grouped.get(&prev)
    {
        out.extend(spill.iter().cloned());
    }
    if let Some(own) = grouped.get(&date) {
        out.extend(own.iter().cloned());
    }
    out
}
