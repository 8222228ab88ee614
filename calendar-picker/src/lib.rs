//! Core state for a modal calendar date picker.
//!
//! The rendering layer owns the views; this crate owns the data they
//! consume: the ordered day-cell grid for the displayed month and the
//! session holding the reference and selected dates.
//!
//! # Usage
//!
//! Open a [`PickerState`] when the picker is presented, navigate month by
//! month, and finish the session by committing a date or cancelling.
//!
//! ```
//! use calendar_picker::{PickerArgs, PickerPhase, PickerState};
//! use chrono::NaiveDate;
//!
//! let selected = NaiveDate::from_ymd_opt(2023, 3, 14).unwrap();
//! let state = PickerState::open(PickerArgs::new(selected)).unwrap();
//!
//! // 7-column grid, complete weeks only.
//! assert_eq!(state.days().len() % 7, 0);
//! assert_eq!(state.month_year_label(), "March 2023");
//!
//! let next = state.navigate(1).unwrap();
//! assert_eq!(next.month_year_label(), "April 2023");
//!
//! let done = next.select_date(selected);
//! assert_eq!(done.phase(), PickerPhase::Committed);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod calendar;
pub mod grid;
pub mod picker;

pub use calendar::{Calendar, MetadataError, MonthMetadata};
pub use grid::{DAYS_PER_WEEK, Day, generate_days};
pub use picker::{PickerArgs, PickerPhase, PickerState, SelectedDateChanged};
