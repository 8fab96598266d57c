// This software is licensed under the terms of the MIT License.
// See the LICENSE file in the project root for the full license text.
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::Task;

/// Where an active task is shown on the planner for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Carries a clock-time string for display.
    Scheduled,
    /// No associated clock time.
    Anytime,
}

/// The tasks active on a single date, partitioned by [`Slot`].
/// Both lists preserve the insertion order of the task list they were
/// filtered from.
#[derive(Serialize, Debug, Default)]
pub struct DayTasks {
    pub scheduled: Vec<Task>,
    pub anytime: Vec<Task>,
}

/// Relative label for the planner's date header.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DateLabel {
    Yesterday,
    Today,
    Tomorrow,
}

// The store filters blank entries out before keeping a task, but tasks
// built directly (e.g. by library callers) get the same treatment here.
fn has_same_day_times(task: &Task) -> bool {
    task.same_day_times.iter().any(|t| !t.trim().is_empty())
}

/// Decides whether `task` occurs on `date`.
///
/// - A one-off task is active only on the calendar date it was created.
/// - A daily-repeating task (`repeat_same_day` with at least one time)
///   is active on every date.
/// - A weekly-repeating task is active when the weekday of `date` is in
///   `selected_days` (0 = Sunday).
///
/// A task with `is_repeat` set but neither repeat mode meaningfully
/// configured is never active. The original client lets a user reach
/// that state and silently shows nothing; the behavior is kept as-is
/// rather than treated as an error.
pub fn is_active_on(task: &Task, date: NaiveDate) -> bool {
    if !task.is_repeat {
        return task.created_at.date_naive() == date;
    }

    if task.repeat_same_day && has_same_day_times(task) {
        return true;
    }

    if task.repeat_week {
        let weekday = date.weekday().num_days_from_sunday() as u8;
        return task.selected_days.contains(&weekday);
    }

    false
}

/// Classifies a task already known to be active: [`Slot::Scheduled`] if
/// it carries any time component, [`Slot::Anytime`] otherwise.
///
/// The check is independent of *why* the task is active: a weekly task
/// that also lists same-day times counts as scheduled.
pub fn classify(task: &Task) -> Slot {
    let has_time = task.is_timed && task.time.as_deref().is_some_and(|t| !t.is_empty());

    if has_time || (task.repeat_same_day && has_same_day_times(task)) {
        Slot::Scheduled
    } else {
        Slot::Anytime
    }
}

/// Filters `tasks` down to those active on `date` and partitions them
/// into scheduled and anytime buckets. Stable: no re-sort, every active
/// task lands in exactly one bucket.
pub fn tasks_for_date(tasks: &[Task], date: NaiveDate) -> DayTasks {
    let mut day = DayTasks::default();

    for task in tasks.iter().filter(|t| is_active_on(t, date)) {
        match classify(task) {
            Slot::Scheduled => day.scheduled.push(task.clone()),
            Slot::Anytime => day.anytime.push(task.clone()),
        }
    }

    day
}

/// Returns the relative header label for `date`, or `None` when it is
/// further than one day away from `today`.
pub fn date_label(date: NaiveDate, today: NaiveDate) -> Option<DateLabel> {
    match (date - today).num_days() {
        -1 => Some(DateLabel::Yesterday),
        0 => Some(DateLabel::Today),
        1 => Some(DateLabel::Tomorrow),
        _ => None,
    }
}
