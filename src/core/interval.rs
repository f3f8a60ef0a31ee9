//! Minute-of-day interval model: validated construction and merging of
//! busy spans. All downstream gap math works on these.

use crate::errors::{AppError, AppResult};
use crate::utils::time::to_hhmm;
use std::fmt;

/// Minutes in one day; the largest legal interval end.
pub const DAY_END: u16 = 24 * 60;

/// A half-open `[start, end)` span in minute-of-day units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Interval {
    start: u16,
    end: u16,
}

impl Interval {
    /// Build a validated interval. `start` may equal `end` (empty span);
    /// both bounds must stay within `[0, 1440]` and be ordered.
    pub fn new(start: u16, end: u16) -> AppResult<Self> {
        if start > end {
            return Err(AppError::InvalidInterval(format!(
                "start {} after end {}",
                to_hhmm(start),
                to_hhmm(end)
            )));
        }
        if end > DAY_END {
            return Err(AppError::InvalidInterval(format!(
                "end {} beyond 24:00",
                end
            )));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> u16 {
        self.start
    }

    pub fn end(&self) -> u16 {
        self.end
    }

    pub fn len(&self) -> u16 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Intersection with another span, or None when they do not overlap.
    pub fn clip_to(&self, bounds: Interval) -> Option<Interval> {
        let start = self.start.max(bounds.start);
        let end = self.end.min(bounds.end);
        if start < end {
            Some(Self { start, end })
        } else {
            None
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", to_hhmm(self.start), to_hhmm(self.end))
    }
}

/// Merge an unordered set of busy spans into the minimal ascending list of
/// disjoint spans covering the same minutes.
///
/// Touching spans (one's end equals the other's start) are merged too, so
/// back-to-back entries never leave a zero-length gap between them.
pub fn merge(mut spans: Vec<Interval>) -> Vec<Interval> {
    spans.retain(|s| !s.is_empty());
    spans.sort();

    let mut merged: Vec<Interval> = Vec::with_capacity(spans.len());
    for span in spans {
        match merged.last_mut() {
            Some(last) if span.start <= last.end => {
                last.end = last.end.max(span.end);
            }
            _ => merged.push(span),
        }
    }
    merged
}
