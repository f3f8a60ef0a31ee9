//! Time utilities: parsing HH:MM, minute-of-day conversions, formatting.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Minute-of-day for a wall-clock time (00:00 → 0, 23:59 → 1439).
pub fn minute_of_day(t: NaiveTime) -> u16 {
    (t.hour() * 60 + t.minute()) as u16
}

/// Render a minute-of-day value as "HH:MM" (1440 renders as "24:00").
pub fn to_hhmm(m: u16) -> String {
    format!("{:02}:{:02}", m / 60, m % 60)
}

/// Parse "HH:MM" into a minute-of-day value.
pub fn parse_minute_of_day(s: &str) -> AppResult<u16> {
    let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
    Ok(minute_of_day(t))
}

/// Build a wall-clock time back from a minute-of-day value.
/// Returns None for 1440 (midnight of the next day); callers handle the
/// day rollover themselves.
pub fn from_minute_of_day(m: u16) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(u32::from(m) / 60, u32::from(m) % 60, 0)
}
