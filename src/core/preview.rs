//! Preview path: fetch one week of entries, bucket them per local day and
//! derive the gap report. Read-only; never constructs an entry sink.

use crate::api::EntrySource;
use crate::core::gaps::{GapConfig, find_gaps};
use crate::core::grouping::{entries_touching_day, group_by_local_day};
use crate::core::week::{WeekRange, week_containing};
use crate::errors::AppResult;
use crate::models::{DayGaps, TimeEntry, WeekReport};
use crate::ui::messages;
use crate::utils::colors::{RESET, color_for_gap_count, colorize_optional};
use crate::utils::date::weekday_str;
use crate::utils::formatting::{bold, mins2readable, pad_right};
use crate::utils::table::{Column, Table};
use chrono::{Duration, NaiveDate};
use chrono_tz::Tz;
use std::collections::BTreeMap;

pub struct PreviewOutcome {
    pub report: WeekReport,
    pub grouped: BTreeMap<NaiveDate, Vec<TimeEntry>>,
    pub entry_count: usize,
}

pub struct PreviewLogic;

impl PreviewLogic {
    /// Resolve the week, fetch its entries and compute gaps for all seven
    /// days in chronological order. A failed fetch aborts with no report.
    pub fn build_report(
        source: &dyn EntrySource,
        tz: Tz,
        gap_cfg: &GapConfig,
        reference: NaiveDate,
    ) -> AppResult<PreviewOutcome> {
        let range: WeekRange = week_containing(reference, tz)?;
        messages::info(format!(
            "Previewing week of {} → {}",
            range.monday,
            range.sunday()
        ));

        let entries = source.fetch_entries(range.start_utc, range.end_utc)?;
        let tracked: i64 = entries.iter().map(TimeEntry::duration_minutes).sum();
        messages::info(format!(
            "Retrieved {} entries covering {} (local tz {}).",
            entries.len(),
            mins2readable(tracked, false, false),
            tz
        ));

        let grouped = group_by_local_day(&entries, tz);

        let mut days = Vec::with_capacity(7);
        for offset in 0..7 {
            let date = range.monday + Duration::days(offset);
            let touching = entries_touching_day(&grouped, date);
            let gaps = find_gaps(date, &touching, tz, gap_cfg)?;
            days.push(DayGaps { date, gaps });
        }

        Ok(PreviewOutcome {
            report: WeekReport { range, days },
            grouped,
            entry_count: entries.len(),
        })
    }

    /// Render the per-day gap table plus the weekly totals.
    pub fn print_report(outcome: &PreviewOutcome) {
        let report = &outcome.report;

        let mut table = Table::new(vec![
            Column {
                header: "Date".to_string(),
                width: 10,
            },
            Column {
                header: "Day".to_string(),
                width: 3,
            },
            Column {
                header: "Missing".to_string(),
                width: 7,
            },
            Column {
                header: "Gaps".to_string(),
                width: 4,
            },
        ]);

        for day in &report.days {
            let color = color_for_gap_count(day.gaps.len());
            let missing = mins2readable(day.total_gap_minutes(), false, true);
            table.add_row(vec![
                day.date.to_string(),
                weekday_str(day.date),
                // pad before colorizing: escape codes would break the
                // table's width-based padding
                colorize_optional(&pad_right(&missing, 7)),
                format!("{}{}{}", color, day.gaps_str(), RESET),
            ]);
        }

        println!();
        print!("{}", table.render());
        println!();

        if outcome.entry_count == 0 {
            messages::warning(
                "No entries found for this week. Check the date, workspace ID or API key.",
            );
        }

        if report.total_gap_minutes() == 0 {
            messages::success("Week fully covered, nothing to fill.");
        } else {
            messages::info(format!(
                "Total uncovered: {} across {} day(s).",
                bold(&mins2readable(report.total_gap_minutes(), false, false)),
                report.days_with_gaps()
            ));
        }
    }
}
