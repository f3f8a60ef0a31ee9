use crate::core::interval::Interval;
use crate::core::week::WeekRange;
use chrono::NaiveDate;

/// Free intervals found for one local calendar day.
#[derive(Debug, Clone)]
pub struct DayGaps {
    pub date: NaiveDate,
    pub gaps: Vec<Interval>,
}

impl DayGaps {
    pub fn total_gap_minutes(&self) -> i64 {
        self.gaps.iter().map(|g| i64::from(g.len())).sum()
    }

    /// "09:00-12:00, 13:00-18:00", or "None" when the day is fully covered.
    pub fn gaps_str(&self) -> String {
        if self.gaps.is_empty() {
            "None".to_string()
        } else {
            self.gaps
                .iter()
                .map(|g| g.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        }
    }
}

/// Per-day gap report for one Monday-Sunday week, days in chronological order.
#[derive(Debug, Clone)]
pub struct WeekReport {
    pub range: WeekRange,
    pub days: Vec<DayGaps>,
}

impl WeekReport {
    pub fn total_gap_minutes(&self) -> i64 {
        self.days.iter().map(|d| d.total_gap_minutes()).sum()
    }

    pub fn days_with_gaps(&self) -> usize {
        self.days.iter().filter(|d| !d.gaps.is_empty()).count()
    }
}
