// This software is licensed under the terms of the MIT License.
// See the LICENSE file in the project root for the full license text.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod calendar;
pub mod recurrence;

pub use calendar::{CalendarDay, month_grid, task_counts};
pub use recurrence::{DateLabel, DayTasks, Slot, classify, date_label, is_active_on, tasks_for_date};

/// Represents a habit-planner task.
///
/// A task is created once and never updated; whether it is active on a
/// given date is always derived from these fields (see [`recurrence`]),
/// never stored.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Task {
    pub id: i64,

    pub name: String,

    /// Short emoji shown next to the task name.
    pub icon: String,

    /// When true, `time` carries the wall-clock time of the occurrence.
    pub is_timed: bool,

    /// Opaque display string (e.g. "09:00"). Never parsed or ordered by
    /// the recurrence logic; only its presence matters.
    pub time: Option<String>,

    /// Gate for all recurrence fields below. When false, the task is a
    /// one-off anchored to `created_at`.
    pub is_repeat: bool,

    /// Repeat every day, at each entry of `same_day_times`.
    pub repeat_same_day: bool,
    pub same_day_times: Vec<String>,

    /// Repeat weekly on the weekdays listed in `selected_days`.
    pub repeat_week: bool,

    /// Weekday indices, 0 = Sunday .. 6 = Saturday. Order is irrelevant
    /// and duplicates are tolerated.
    pub selected_days: Vec<u8>,

    /// Anchor date for one-off tasks.
    pub created_at: DateTime<Utc>,
}

/// Structure used to receive task creation data from the API.
/// It's a good practice to separate stored models (`Task`) from API
/// models (`CreateTaskPayload`), as they may have different fields:
/// here the id and creation timestamp are assigned by the store, and
/// every recurrence toggle may be omitted by the client.
#[derive(Serialize, Deserialize, Debug)]
pub struct CreateTaskPayload {
    pub name: String,

    pub icon: Option<String>,

    #[serde(default)]
    pub is_timed: bool,

    pub time: Option<String>,

    #[serde(default)]
    pub is_repeat: bool,

    #[serde(default)]
    pub repeat_same_day: bool,

    #[serde(default)]
    pub same_day_times: Vec<String>,

    #[serde(default)]
    pub repeat_week: bool,

    #[serde(default)]
    pub selected_days: Vec<u8>,
}
