//! Picker session state and its month-navigation transitions.
//!
//! ## Usage
//!
//! Use to hold one modal picker session: open it on the month of the offered
//! date, navigate month by month, and finish it by committing a date or
//! cancelling. Transitions return new immutable snapshots instead of
//! mutating in place, so the rendering layer always reads a consistent
//! (reference date, day grid) pair.
use std::sync::Arc;

use chrono::NaiveDate;
use derive_setters::Setters;

use crate::{
    calendar::{Calendar, MetadataError},
    grid::{self, Day},
};

/// One-shot callback fired with the committed date when the session ends.
pub type SelectedDateChanged = Arc<dyn Fn(NaiveDate) + Send + Sync>;

/// Lifecycle phase of a picker session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerPhase {
    /// The session accepts navigation and selection.
    #[default]
    Open,
    /// The user committed a date; the session is finished.
    Committed,
    /// The session was dismissed without a choice; the session is finished.
    Cancelled,
}

/// Configuration for opening a picker session.
#[derive(Clone, Setters)]
pub struct PickerArgs {
    /// Calendar conventions used for every computation in the session.
    pub calendar: Calendar,
    /// The date the session opens with and offers as the current choice.
    pub selected_date: NaiveDate,
    /// Month displayed first; defaults to the selected date's month.
    #[setters(strip_option)]
    pub start_date: Option<NaiveDate>,
    /// Invoked once with the committed date when the user picks a cell.
    #[setters(skip)]
    pub selected_date_changed: Option<SelectedDateChanged>,
}

impl PickerArgs {
    /// Creates args for a session offering `selected_date`.
    pub fn new(selected_date: NaiveDate) -> Self {
        Self {
            calendar: Calendar::default(),
            selected_date,
            start_date: None,
            selected_date_changed: None,
        }
    }

    /// Sets the commit callback.
    pub fn selected_date_changed<F>(mut self, f: F) -> Self
    where
        F: Fn(NaiveDate) + Send + Sync + 'static,
    {
        self.selected_date_changed = Some(Arc::new(f));
        self
    }

    /// Sets the commit callback from a shared handle.
    pub fn selected_date_changed_shared(mut self, f: SelectedDateChanged) -> Self {
        self.selected_date_changed = Some(f);
        self
    }
}

/// A snapshot of one picker session.
///
/// Created when the picker opens and discarded when it closes; nothing is
/// persisted across sessions.
#[derive(Clone)]
pub struct PickerState {
    calendar: Calendar,
    reference_date: NaiveDate,
    selected_date: NaiveDate,
    days: Vec<Day>,
    phase: PickerPhase,
    committed_date: Option<NaiveDate>,
    selected_date_changed: Option<SelectedDateChanged>,
}

impl PickerState {
    /// Opens a session described by `args`.
    pub fn open(args: PickerArgs) -> Result<Self, MetadataError> {
        let reference_date = args.start_date.unwrap_or(args.selected_date);
        let days = grid::generate_days(&args.calendar, reference_date, args.selected_date)?;

        Ok(Self {
            calendar: args.calendar,
            reference_date,
            selected_date: args.selected_date,
            days,
            phase: PickerPhase::Open,
            committed_date: None,
            selected_date_changed: args.selected_date_changed,
        })
    }

    /// Returns the calendar conventions of this session.
    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    /// Returns a date within the month currently displayed.
    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Returns the date the session offers as the current choice.
    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    /// Returns the generated day cells for the displayed month, row-major
    /// with 7 cells per week row.
    pub fn days(&self) -> &[Day] {
        &self.days
    }

    /// Returns the lifecycle phase.
    pub fn phase(&self) -> PickerPhase {
        self.phase
    }

    /// Returns the committed date once the session reached
    /// [`PickerPhase::Committed`].
    pub fn committed_date(&self) -> Option<NaiveDate> {
        self.committed_date
    }

    /// Number of week rows in the current grid, for cell-height layout.
    pub fn number_of_weeks(&self) -> usize {
        self.days.len() / grid::DAYS_PER_WEEK
    }

    /// Header text for the displayed month, e.g. "March 2023".
    pub fn month_year_label(&self) -> String {
        self.reference_date.format("%B %Y").to_string()
    }

    /// Moves the displayed month by `delta_months` and regenerates the grid.
    ///
    /// When the month shift itself cannot be represented the reference date
    /// stays unchanged (the [`Calendar::add_months`] fallback). A
    /// [`MetadataError`] propagates to the caller, which keeps the prior
    /// snapshot. Finished sessions are returned unchanged.
    pub fn navigate(&self, delta_months: i32) -> Result<Self, MetadataError> {
        if self.phase != PickerPhase::Open {
            return Ok(self.clone());
        }

        let reference_date = self.calendar.add_months(self.reference_date, delta_months);
        let days = grid::generate_days(&self.calendar, reference_date, self.selected_date)?;

        let mut next = self.clone();
        next.reference_date = reference_date;
        next.days = days;
        Ok(next)
    }

    /// Commits `date` as the session's choice and finishes the session.
    ///
    /// Fires the `selected_date_changed` callback once; the grid and
    /// reference date are left as they were. Finished sessions are returned
    /// unchanged and the callback does not fire again.
    pub fn select_date(&self, date: NaiveDate) -> Self {
        if self.phase != PickerPhase::Open {
            return self.clone();
        }

        if let Some(selected_date_changed) = &self.selected_date_changed {
            selected_date_changed(date);
        }

        let mut next = self.clone();
        next.selected_date = date;
        next.committed_date = Some(date);
        next.phase = PickerPhase::Committed;
        next
    }

    /// Finishes the session without a choice. No internal state is touched
    /// beyond the phase; the data simply stops being read.
    pub fn cancel(&self) -> Self {
        if self.phase != PickerPhase::Open {
            return self.clone();
        }

        let mut next = self.clone();
        next.phase = PickerPhase::Cancelled;
        next
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chrono::Datelike;

    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    fn open(selected: NaiveDate) -> PickerState {
        PickerState::open(PickerArgs::new(selected)).expect("session for a valid date")
    }

    #[test]
    fn test_open_defaults_to_selected_month() {
        let state = open(date(2023, 3, 14));

        assert_eq!(state.phase(), PickerPhase::Open);
        assert_eq!(state.reference_date(), date(2023, 3, 14));
        assert_eq!(state.month_year_label(), "March 2023");
        assert_eq!(state.days().len(), 35);
        assert_eq!(state.number_of_weeks(), 5);
    }

    #[test]
    fn test_open_with_explicit_start_month() {
        let args = PickerArgs::new(date(2023, 3, 14)).start_date(date(2023, 6, 1));
        let state = PickerState::open(args).expect("session for a valid date");

        assert_eq!(state.month_year_label(), "June 2023");
        // The selected date is outside the displayed month.
        assert!(state.days().iter().all(|day| !day.is_selected));
    }

    #[test]
    fn test_navigate_regenerates_days() {
        let state = open(date(2023, 3, 14));
        let next = state.navigate(1).expect("navigation within range");

        assert_eq!(next.month_year_label(), "April 2023");
        assert!(
            next.days()
                .iter()
                .filter(|day| day.is_within_displayed_month)
                .all(|day| day.date.month() == 4)
        );
        // The original snapshot is untouched.
        assert_eq!(state.month_year_label(), "March 2023");
    }

    #[test]
    fn test_navigate_round_trip_restores_month() {
        let state = open(date(2023, 1, 31));
        let round_trip = state
            .navigate(1)
            .and_then(|next| next.navigate(-1))
            .expect("navigation within range");

        // Day-of-month may normalize (Jan 31 -> Feb 28 -> Jan 28); only the
        // displayed month must match.
        assert_eq!(round_trip.reference_date().year(), 2023);
        assert_eq!(round_trip.reference_date().month(), 1);
    }

    #[test]
    fn test_navigate_across_year_boundary() {
        let state = open(date(2023, 12, 15));
        let next = state.navigate(1).expect("navigation within range");
        assert_eq!(next.month_year_label(), "January 2024");

        let previous = state.navigate(-12).expect("navigation within range");
        assert_eq!(previous.month_year_label(), "December 2022");
    }

    #[test]
    fn test_select_date_commits_and_fires_callback_once() {
        let committed = Arc::new(Mutex::new(Vec::new()));
        let sink = committed.clone();
        let args = PickerArgs::new(date(2023, 3, 14)).selected_date_changed(move |date| {
            sink.lock().expect("uncontended lock").push(date);
        });

        let state = PickerState::open(args).expect("session for a valid date");
        let picked = date(2023, 3, 21);
        let done = state.select_date(picked);

        assert_eq!(done.phase(), PickerPhase::Committed);
        assert_eq!(done.committed_date(), Some(picked));
        assert_eq!(done.selected_date(), picked);
        // Grid and reference month are left as they were.
        assert_eq!(done.month_year_label(), "March 2023");
        assert_eq!(done.days(), state.days());

        // Terminal: a second selection neither transitions nor re-fires.
        let again = done.select_date(date(2023, 3, 22));
        assert_eq!(again.committed_date(), Some(picked));
        assert_eq!(*committed.lock().expect("uncontended lock"), vec![picked]);
    }

    #[test]
    fn test_cancel_is_terminal() {
        let state = open(date(2023, 3, 14));
        let cancelled = state.cancel();

        assert_eq!(cancelled.phase(), PickerPhase::Cancelled);
        assert_eq!(cancelled.committed_date(), None);

        let after = cancelled
            .navigate(1)
            .expect("terminal navigation is a no-op");
        assert_eq!(after.phase(), PickerPhase::Cancelled);
        assert_eq!(after.month_year_label(), "March 2023");

        let still_cancelled = cancelled.select_date(date(2023, 3, 21));
        assert_eq!(still_cancelled.phase(), PickerPhase::Cancelled);
        assert_eq!(still_cancelled.committed_date(), None);
    }

    #[test]
    fn test_open_fails_at_calendar_edge() {
        let result = PickerState::open(PickerArgs::new(NaiveDate::MAX));
        assert!(result.is_err());
    }
}
