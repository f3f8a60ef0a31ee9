use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

/// Today's calendar date in the given time zone.
pub fn today_in(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Weekday label used in the report rows (Mon, Tue, ...).
pub fn weekday_str(d: NaiveDate) -> String {
    d.format("%a").to_string()
}
