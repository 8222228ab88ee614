//! Calendar conventions and calendar-aware date arithmetic.
//!
//! ## Usage
//!
//! Use to fix the week-start convention and resolve month boundaries for
//! grid generation. A [`Calendar`] is passed explicitly into every picker
//! computation instead of being read from a process-global, so tests can
//! pin the convention they expect.
use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};
use thiserror::Error;

/// Error returned when the month boundaries for a reference date cannot be
/// resolved (the date sits at the edge of the supported calendar range).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("could not resolve month metadata for {reference}")]
pub struct MetadataError {
    /// The reference date whose month could not be resolved.
    pub reference: NaiveDate,
}

/// Layout facts about one displayed month, computed per generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthMetadata {
    /// Day count of the displayed month (28-31).
    pub number_of_days: u32,
    /// Normalized date of day 1 of the displayed month.
    pub first_day: NaiveDate,
    /// 1-based weekday index of `first_day` under the calendar's week start.
    pub first_day_weekday: u32,
}

/// Calendar conventions used by every picker computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    first_weekday: Weekday,
}

impl Calendar {
    /// Creates a calendar with the given first day of the week.
    pub fn new(first_weekday: Weekday) -> Self {
        Self { first_weekday }
    }

    /// Returns the first day of the week.
    pub fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    /// Returns the 1-based position of `date` within its week (1..=7).
    pub fn weekday_index(&self, date: NaiveDate) -> u32 {
        date.weekday().days_since(self.first_weekday) + 1
    }

    /// Resolves the month boundaries for the month containing `reference`.
    pub fn month_metadata(&self, reference: NaiveDate) -> Result<MonthMetadata, MetadataError> {
        let first_day = reference.with_day(1).ok_or(MetadataError { reference })?;
        let first_of_next_month = first_day
            .checked_add_months(Months::new(1))
            .ok_or(MetadataError { reference })?;
        let number_of_days = first_of_next_month.signed_duration_since(first_day).num_days() as u32;

        Ok(MonthMetadata {
            number_of_days,
            first_day,
            first_day_weekday: self.weekday_index(first_day),
        })
    }

    /// Shifts `date` by whole calendar days.
    ///
    /// Falls back to the unshifted `date` when the result would leave the
    /// supported calendar range; the degradation is logged, not surfaced.
    pub fn add_days(&self, date: NaiveDate, days: i64) -> NaiveDate {
        let shifted = Duration::try_days(days).and_then(|delta| date.checked_add_signed(delta));
        match shifted {
            Some(shifted) => shifted,
            None => {
                tracing::warn!(%date, days, "day shift left the calendar range, keeping base date");
                date
            }
        }
    }

    /// Shifts `date` by whole calendar months, normalizing the day of month
    /// when the target month is shorter.
    ///
    /// Same fallback policy as [`Calendar::add_days`].
    pub fn add_months(&self, date: NaiveDate, months: i32) -> NaiveDate {
        let shifted = if months >= 0 {
            date.checked_add_months(Months::new(months as u32))
        } else {
            date.checked_sub_months(Months::new(months.unsigned_abs()))
        };
        match shifted {
            Some(shifted) => shifted,
            None => {
                tracing::warn!(%date, months, "month shift left the calendar range, keeping base date");
                date
            }
        }
    }

    /// Returns true when `a` and `b` fall on the same calendar day.
    pub fn is_same_day(&self, a: NaiveDate, b: NaiveDate) -> bool {
        a == b
    }
}

impl Default for Calendar {
    /// Sunday-first week, the Gregorian/US convention.
    fn default() -> Self {
        Self::new(Weekday::Sun)
    }
}
