//! Gap engine: computes the free intervals of one local day as the
//! complement of its busy spans within the configured work window.

use crate::core::interval::{DAY_END, Interval, merge};
use crate::errors::AppResult;
use crate::models::TimeEntry;
use crate::utils::time::minute_of_day;
use chrono::NaiveDate;
use chrono_tz::Tz;

/// Windows the gap computation runs against. Built once from the loaded
/// configuration and passed in explicitly; defaults are work 09:00-18:00
/// with a single 12:00-13:00 blocked span (lunch).
///
/// `blocked` is a list so further recurring spans (breaks, holidays)
/// compose exactly like lunch does.
#[derive(Debug, Clone)]
pub struct GapConfig {
    pub work: Interval,
    pub blocked: Vec<Interval>,
}

/// Clip one entry to `date`'s wall clock in `tz`, as a minute-of-day span.
///
/// An entry that crosses local midnight contributes `[start, 24:00)` to its
/// start day; the remainder belongs to the following day and is picked up
/// there (the caller hands each day the previous day's entries too). An
/// entry that does not touch `date` at all yields None.
fn entry_span_for_day(
    entry: &TimeEntry,
    date: NaiveDate,
    tz: Tz,
) -> AppResult<Option<Interval>> {
    let start = entry.start.with_timezone(&tz);
    let end = entry.end.with_timezone(&tz);

    if start.date_naive() > date || end.date_naive() < date {
        return Ok(None);
    }

    let start_m = if start.date_naive() < date {
        0
    } else {
        minute_of_day(start.time())
    };
    let end_m = if end.date_naive() > date {
        DAY_END
    } else {
        minute_of_day(end.time())
    };

    let span = Interval::new(start_m, end_m)?;
    Ok(if span.is_empty() { None } else { Some(span) })
}

/// Free intervals of `date` within `cfg.work`, ascending, none empty.
///
/// Busy input is the day's tracked entries plus every configured blocked
/// span; blocked spans count as busy even on days with no entries at all.
pub fn find_gaps(
    date: NaiveDate,
    entries: &[TimeEntry],
    tz: Tz,
    cfg: &GapConfig,
) -> AppResult<Vec<Interval>> {
    let mut busy = Vec::with_capacity(entries.len() + cfg.blocked.len());
    for entry in entries {
        if let Some(span) = entry_span_for_day(entry, date, tz)? {
            busy.push(span);
        }
    }
    for blocked in &cfg.blocked {
        if let Some(span) = blocked.clip_to(cfg.work) {
            busy.push(span);
        }
    }

    let mut gaps = Vec::new();
    let mut cursor = cfg.work.start();
    for span in merge(busy) {
        if cursor >= cfg.work.end() {
            break;
        }
        if span.start() > cursor {
            let gap_end = span.start().min(cfg.work.end());
            gaps.push(Interval::new(cursor, gap_end)?);
        }
        cursor = cursor.max(span.end());
    }
    if cursor < cfg.work.end() {
        gaps.push(Interval::new(cursor, cfg.work.end())?);
    }

    Ok(gaps)
}
