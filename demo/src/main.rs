//! Terminal walkthrough of a picker session: open, navigate, commit.
use calendar_picker::{Calendar, MetadataError, PickerArgs, PickerState};
use chrono::{NaiveDate, Weekday};
use tracing::{Level, info};

fn main() -> Result<(), MetadataError> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let selected =
        NaiveDate::from_ymd_opt(2023, 3, 14).unwrap_or(NaiveDate::MIN);

    let state = PickerState::open(
        PickerArgs::new(selected)
            .calendar(Calendar::new(Weekday::Sun))
            .selected_date_changed(|date| info!(%date, "date committed")),
    )?;
    print_month(&state);

    let next = state.navigate(1)?;
    print_month(&next);

    let back = next.navigate(-1)?;
    let done = back.select_date(selected);
    info!(
        phase = ?done.phase(),
        committed = ?done.committed_date(),
        "session finished"
    );

    Ok(())
}

fn print_month(state: &PickerState) {
    println!("\n{:^35}", state.month_year_label());

    let mut weekday = state.calendar().first_weekday();
    for _ in 0..7 {
        print!("{:>4} ", &weekday.to_string()[..2]);
        weekday = weekday.succ();
    }
    println!();

    for week in state.days().chunks(7) {
        for day in week {
            let mark = if day.is_selected { "*" } else { " " };
            if day.is_within_displayed_month {
                print!("{:>3}{mark} ", day.display_number);
            } else {
                print!("({:>2}) ", day.display_number);
            }
        }
        println!();
    }
}
