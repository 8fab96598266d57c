// This software is licensed under the terms of the MIT License.
// See the LICENSE file in the project root for the full license text.
use std::sync::Arc;

use chrono::Utc;
use common::{CreateTaskPayload, Task};
use parking_lot::RwLock;
use tracing::debug;

const DEFAULT_ICON: &str = "📝";

/// In-memory, append-only task list. Tasks are never updated or deleted,
/// and nothing is persisted: the list resets on restart, matching the
/// original client's session-scoped planner.
#[derive(Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: i64,
}

/// Shared handle to the store, created once in `main` and injected into
/// the handlers through axum state. No global statics.
pub type SharedTaskStore = Arc<RwLock<TaskStore>>;

pub fn new_shared() -> SharedTaskStore {
    Arc::new(RwLock::new(TaskStore::default()))
}

impl TaskStore {
    /// Materializes a payload into a stored `Task`: assigns the next
    /// sequential id, stamps the creation time, fills the default icon
    /// and drops blank `same_day_times` entries.
    pub fn add(&mut self, payload: CreateTaskPayload) -> Task {
        self.next_id += 1;

        let task = Task {
            id: self.next_id,
            name: payload.name,
            icon: payload
                .icon
                .filter(|i| !i.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_ICON.to_string()),
            is_timed: payload.is_timed,
            time: payload.time,
            is_repeat: payload.is_repeat,
            repeat_same_day: payload.repeat_same_day,
            same_day_times: payload
                .same_day_times
                .into_iter()
                .filter(|t| !t.trim().is_empty())
                .collect(),
            repeat_week: payload.repeat_week,
            selected_days: payload.selected_days,
            created_at: Utc::now(),
        };

        debug!("Storing task id={} name={}", task.id, task.name);
        self.tasks.push(task.clone());
        task
    }

    /// Snapshot of all tasks, in insertion order.
    pub fn all(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
