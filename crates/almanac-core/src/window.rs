//! Half-open time windows and the calendar views built from them.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::DAYS_PER_WEEK;
use crate::error::{CoreError, CoreResult};

/// A half-open interval `[start, end)`.
///
/// The bounds are kept exactly as given. An inverted window (`end < start`)
/// is legal and is not normalized: [`TimeWindow::overlaps`] applies the same
/// two comparisons to it, so an interval that starts before `end` and ends
/// after `start` still overlaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    #[must_use]
    pub const fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// ## Summary
    /// Tests whether the interval `[start, end)` intersects this window.
    ///
    /// Touching intervals do not overlap: an interval ending exactly at
    /// `self.start`, or starting exactly at `self.end`, is outside.
    #[must_use]
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        start < self.end && end > self.start
    }

    /// ## Summary
    /// Builds the window a calendar view shows for the given day.
    ///
    /// Weeks start on Sunday. Every boundary is midnight UTC.
    ///
    /// ## Errors
    /// Returns [`CoreError::InvalidInput`] if a boundary falls outside the
    /// representable date range.
    pub fn for_view(view: CalendarView, date: NaiveDate) -> CoreResult<Self> {
        let (first, last) = match view {
            CalendarView::Day => (Some(date), date.checked_add_days(Days::new(1))),
            CalendarView::Week => {
                let offset = u64::from(date.weekday().num_days_from_sunday());
                let sunday = date.checked_sub_days(Days::new(offset));
                let next = sunday.and_then(|d| d.checked_add_days(Days::new(DAYS_PER_WEEK)));
                (sunday, next)
            }
            CalendarView::Month => {
                let first = date.with_day(1);
                let next = first.and_then(|d| d.checked_add_months(Months::new(1)));
                (first, next)
            }
        };

        match (first, last) {
            (Some(first), Some(last)) => Ok(Self::new(midnight(first), midnight(last))),
            _ => Err(CoreError::InvalidInput(format!(
                "{view} view around {date} is out of range"
            ))),
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start.to_rfc3339(), self.end.to_rfc3339())
    }
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}

/// Range shown by a calendar view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarView {
    Day,
    Week,
    Month,
}

impl CalendarView {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }
}

impl fmt::Display for CalendarView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalendarView {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            other => Err(CoreError::InvalidInput(format!("unknown view: {other}"))),
        }
    }
}
