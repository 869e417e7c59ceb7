//! Calendar stepping for the supported recurrence modes.

use almanac_core::constants::DAYS_PER_WEEK;
use almanac_core::types::Repeat;
use chrono::{DateTime, Datelike, Days, NaiveDate, TimeDelta, Utc};

/// Distance between two consecutive occurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    Days(u64),
    Months(u32),
}

impl Step {
    /// Returns `None` for modes that never advance past the first candidate.
    pub(crate) const fn for_repeat(repeat: Repeat) -> Option<Self> {
        match repeat {
            Repeat::Daily => Some(Self::Days(1)),
            Repeat::Weekly => Some(Self::Days(DAYS_PER_WEEK)),
            Repeat::Monthly => Some(Self::Months(1)),
            Repeat::None | Repeat::Unrecognized => None,
        }
    }

    /// Moves `instant` forward by one step, or `None` past the representable range.
    pub(crate) fn advance(self, instant: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Self::Days(days) => instant.checked_add_days(Days::new(days)),
            Self::Months(months) => add_months_overflowing(instant, months),
        }
    }

    /// Exact length of the step when it is the same for every occurrence.
    pub(crate) fn fixed_length(self) -> Option<TimeDelta> {
        match self {
            Self::Days(days) => i64::try_from(days).ok().and_then(TimeDelta::try_days),
            Self::Months(_) => None,
        }
    }
}

/// ## Summary
/// Adds calendar months by incrementing the month field and letting an
/// out-of-range day carry into the following month.
///
/// Jan 31 2023 + 1 month is Mar 3 2023 (Feb 31 rolls over three days);
/// in a leap year it is Mar 2. Time of day is kept.
///
/// Returns `None` if the result falls outside the representable range.
#[must_use]
pub fn add_months_overflowing(instant: DateTime<Utc>, months: u32) -> Option<DateTime<Utc>> {
    let naive = instant.naive_utc();
    let month_index =
        i64::from(naive.year()) * 12 + i64::from(naive.month0()) + i64::from(months);

    let year = i32::try_from(month_index.div_euclid(12)).ok()?;
    let month = u32::try_from(month_index.rem_euclid(12)).ok()? + 1;

    let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)?;
    let date = first_of_month.checked_add_days(Days::new(u64::from(naive.day0())))?;
    Some(date.and_time(naive.time()).and_utc())
}
