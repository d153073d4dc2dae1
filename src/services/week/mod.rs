//! Week and month view helpers built on the day index.

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::Serialize;

use crate::models::event::Event;
use crate::services::day_index::DayIndex;

/// One day column of a week view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayCell<'a> {
    pub date: NaiveDate,
    pub events: Vec<&'a Event>,
    /// False for days that spill into the next month.
    pub in_month: bool,
}

/// Calculate the start of the week containing the given date.
///
/// # Arguments
/// * `date` - The date to find the week start for
/// * `first_day_of_week` - 0 = Sunday, 1 = Monday, etc.
pub fn week_start(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    let weekday = i64::from(date.weekday().num_days_from_sunday());
    let offset = (weekday - i64::from(first_day_of_week) + 7) % 7;
    date - Duration::days(offset)
}

/// 1-based week of the year, counting the (possibly partial) week holding
/// January 1st as week 1.
pub fn week_number(date: NaiveDate, first_day_of_week: u8) -> u32 {
    let first_week = NaiveDate::from_ymd_opt(date.year(), 1, 1)
        .map(|jan1| week_start(jan1, first_day_of_week))
        .unwrap_or(date);
    let days = (week_start(date, first_day_of_week) - first_week).num_days();
    (days / 7) as u32 + 1
}

/// First day of week `week` of `year`; inverse of [`week_number`].
pub fn week_start_date(year: i32, week: u32, first_day_of_week: u8) -> Option<NaiveDate> {
    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let weeks = i64::from(week.saturating_sub(1));
    week_start(jan1, first_day_of_week).checked_add_signed(Duration::weeks(weeks))
}

/// Cells in a month grid that fits in five weeks.
const MONTH_GRID_CELLS: usize = 35;

fn cells<'a>(start: NaiveDate, count: usize, month: u32, index: &DayIndex<'a>) -> Vec<DayCell<'a>> {
    start
        .iter_days()
        .take(count)
        .map(|date| DayCell {
            date,
            events: index.for_date(date).to_vec(),
            in_month: date.month() == month,
        })
        .collect()
}

/// Seven day cells starting at `start`, each holding that day's bucket.
pub fn build_week<'a>(start: NaiveDate, index: &DayIndex<'a>) -> Vec<DayCell<'a>> {
    cells(start, 7, start.month(), index)
}

/// Month grid for the month containing `view`.
///
/// Starts at the week start on or before the 1st and holds 35 cells, or 42
/// when the month spills into a sixth week. Days of the neighbouring months
/// have `in_month` unset.
pub fn build_month<'a>(view: NaiveDate, first_day_of_week: u8, index: &DayIndex<'a>) -> Vec<DayCell<'a>> {
    let first = view.with_day(1).unwrap_or(view);
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(first);
    let start = week_start(first, first_day_of_week);

    let needed = (last - start).num_days() as usize + 1;
    let count = if needed > MONTH_GRID_CELLS {
        MONTH_GRID_CELLS + 7
    } else {
        MONTH_GRID_CELLS
    };
    cells(start, count, first.month(), index)
}

/// The week containing `date`.
pub fn week_containing<'a>(date: NaiveDate, first_day_of_week: u8, index: &DayIndex<'a>) -> Vec<DayCell<'a>> {
    build_week(week_start(date, first_day_of_week), index)
}
