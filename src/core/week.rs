//! Week resolution: maps any calendar date to the UTC instant range of the
//! Monday-Sunday week containing it, in the configured local time zone.

use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_date;
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Half-open UTC range `[monday 00:00 local, next monday 00:00 local)`.
#[derive(Debug, Clone, Copy)]
pub struct WeekRange {
    pub monday: NaiveDate,
    pub start_utc: DateTime<Utc>,
    pub end_utc: DateTime<Utc>,
}

impl WeekRange {
    pub fn sunday(&self) -> NaiveDate {
        self.monday + Duration::days(6)
    }
}

/// Parse a user-supplied reference date (YYYY-MM-DD).
/// The caller recovers from `InvalidDate` by falling back to today.
pub fn parse_reference(input: &str) -> AppResult<NaiveDate> {
    parse_date(input).ok_or_else(|| AppError::InvalidDate(input.to_string()))
}

/// UTC instant of local midnight on `date`. When a DST transition makes
/// midnight ambiguous or nonexistent, the earliest valid instant wins.
fn local_midnight_utc(date: NaiveDate, tz: Tz) -> AppResult<DateTime<Utc>> {
    for hour_shift in 0..=3u32 {
        let naive = date.and_time(NaiveTime::MIN) + Duration::hours(i64::from(hour_shift));
        if let Some(dt) = tz.from_local_datetime(&naive).earliest() {
            return Ok(dt.with_timezone(&Utc));
        }
    }
    Err(AppError::InvalidDate(format!(
        "no valid local midnight for {} in {}",
        date, tz
    )))
}

/// The week containing `date`, weeks starting Monday in `tz`.
pub fn week_containing(date: NaiveDate, tz: Tz) -> AppResult<WeekRange> {
    let monday = date - Duration::days(i64::from(date.weekday().num_days_from_monday()));
    let start_utc = local_midnight_utc(monday, tz)?;
    let end_utc = local_midnight_utc(monday + Duration::days(7), tz)?;
    Ok(WeekRange {
        monday,
        start_utc,
        end_utc,
    })
}
