// This software is licensed under the terms of the MIT License.
// See the LICENSE file in the project root for the full license text.
use std::collections::HashMap;

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

use crate::Task;
use crate::recurrence::is_active_on;

/// 6 full weeks of 7 days, regardless of how many weeks the month
/// actually spans.
pub const GRID_CELLS: usize = 42;

/// One cell of a calendar-month grid. Cells outside the reference month
/// are flagged for dimmed rendering but remain valid, selectable dates.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub in_month: bool,
}

/// Builds the 42-cell grid for the month containing `reference`.
///
/// The first cell is always a Sunday: the grid starts with the trailing
/// days of the previous month needed to reach back to Sunday, then the
/// whole reference month, then leading days of the next month to fill
/// 6 weeks.
pub fn month_grid(reference: NaiveDate) -> Vec<CalendarDay> {
    // day0() is zero-based, so this lands on the 1st of the month.
    let first_of_month = reference - Days::new(u64::from(reference.day0()));
    let leading = first_of_month.weekday().num_days_from_sunday();
    let start = first_of_month - Days::new(u64::from(leading));

    (0..GRID_CELLS as u64)
        .map(|offset| {
            let date = start + Days::new(offset);
            CalendarDay {
                date,
                in_month: date.month() == reference.month() && date.year() == reference.year(),
            }
        })
        .collect()
}

/// Counts, for every cell of `grid`, how many of `tasks` are active on
/// that date. Counts are exact; capping the rendered markers (the client
/// shows at most 3 dots) is a display concern.
pub fn task_counts(tasks: &[Task], grid: &[CalendarDay]) -> HashMap<NaiveDate, usize> {
    grid.iter()
        .map(|cell| {
            let count = tasks.iter().filter(|t| is_active_on(t, cell.date)).count();
            (cell.date, count)
        })
        .collect()
}
