//! Month-grid generation for the picker's 7-column day layout.
//!
//! ## Usage
//!
//! Use to compute the ordered day cells a calendar grid renders for one
//! month, including the leading and trailing filler days borrowed from the
//! adjacent months to complete each week row.
use chrono::{Datelike, NaiveDate};

use crate::calendar::{Calendar, MetadataError};

/// Number of columns in the day grid, one per weekday.
pub const DAYS_PER_WEEK: usize = 7;

/// One cell of the picker's day grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Day {
    /// The calendar date this cell represents.
    pub date: NaiveDate,
    /// Day-of-month as a decimal string with no leading zero.
    pub display_number: String,
    /// True when this cell falls on the session's selected date.
    pub is_selected: bool,
    /// False for leading/trailing filler borrowed from adjacent months.
    pub is_within_displayed_month: bool,
}

/// Generates the ordered day cells for the month containing `reference_date`.
///
/// The result always covers complete weeks: filler cells from the end of the
/// previous month ahead of day 1, every day of the displayed month, then
/// filler cells from the start of the next month until the final week row is
/// full. Cell dates increase by exactly one calendar day per step.
pub fn generate_days(
    calendar: &Calendar,
    reference_date: NaiveDate,
    selected_date: NaiveDate,
) -> Result<Vec<Day>, MetadataError> {
    let metadata = calendar.month_metadata(reference_date)?;
    let number_of_days = metadata.number_of_days;
    let offset_in_initial_row = metadata.first_day_weekday;
    let first_day = metadata.first_day;

    let mut days: Vec<Day> = (1..(number_of_days + offset_in_initial_row))
        .map(|day| {
            let is_within_displayed_month = day >= offset_in_initial_row;
            let day_offset = day as i64 - offset_in_initial_row as i64;

            generate_day(
                calendar,
                first_day,
                day_offset,
                selected_date,
                is_within_displayed_month,
            )
        })
        .collect();

    days.extend(generate_start_of_next_month(calendar, first_day, selected_date));

    Ok(days)
}

fn generate_day(
    calendar: &Calendar,
    base_date: NaiveDate,
    day_offset: i64,
    selected_date: NaiveDate,
    is_within_displayed_month: bool,
) -> Day {
    let date = calendar.add_days(base_date, day_offset);

    Day {
        date,
        display_number: date.day().to_string(),
        is_selected: calendar.is_same_day(date, selected_date),
        is_within_displayed_month,
    }
}

/// Filler cells from the start of the next month, empty when the last
/// in-month day already lands on the week's final column.
fn generate_start_of_next_month(
    calendar: &Calendar,
    first_day_of_displayed_month: NaiveDate,
    selected_date: NaiveDate,
) -> Vec<Day> {
    let last_day_in_month =
        calendar.add_days(calendar.add_months(first_day_of_displayed_month, 1), -1);

    let additional_days = DAYS_PER_WEEK as u32 - calendar.weekday_index(last_day_in_month);
    if additional_days == 0 {
        return Vec::new();
    }

    (1..=additional_days as i64)
        .map(|day_offset| generate_day(calendar, last_day_in_month, day_offset, selected_date, false))
        .collect()
}
