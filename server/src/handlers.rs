// This software is licensed under the terms of the MIT License.
// See the LICENSE file in the project root for the full license text.
use crate::store::SharedTaskStore;
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use common::{CreateTaskPayload, DayTasks, Task};
use serde::Serialize;
use tracing::{debug, error, info};

/// Handler for the sign-up stub. Accepts any JSON body and always
/// reports success; real account creation is out of scope.
pub async fn sign_up(Json(_body): Json<serde_json::Value>) -> Json<serde_json::Value> {
    debug!("Received sign-up request.");
    Json(serde_json::json!({ "message": "User created" }))
}

/// Handler for the sign-in stub. Like sign-up, unconditionally succeeds;
/// no credentials are checked and no token is issued.
pub async fn sign_in(Json(_body): Json<serde_json::Value>) -> Json<serde_json::Value> {
    debug!("Received sign-in request.");
    Json(serde_json::json!({ "message": "Signed in successfully" }))
}

/// Handler for listing every task, in insertion order.
pub async fn list_tasks(State(store): State<SharedTaskStore>) -> Json<Vec<Task>> {
    let tasks = store.read().all();
    info!("Successfully retrieved {} tasks.", tasks.len());
    Json(tasks)
}

/// Handler for creating a new task.
pub async fn create_task(
    State(store): State<SharedTaskStore>,
    Json(payload): Json<CreateTaskPayload>, // Extracting the request body as JSON
) -> Result<(StatusCode, Json<Task>), AppError> {
    debug!("Received request to create task: {}", payload.name);

    if payload.name.trim().is_empty() {
        error!("Validation failed: task name is empty.");
        return Err(AppError::new(
            StatusCode::BAD_REQUEST,
            "Task name cannot be empty.",
        ));
    }

    // The specific-time field is the one place the original creation
    // form enforces a format; every other time string stays opaque.
    if payload.is_timed {
        let valid = payload.time.as_deref().is_some_and(is_clock_time);
        if !valid {
            error!("Validation failed: timed task without a valid HH:mm time.");
            return Err(AppError::new(
                StatusCode::BAD_REQUEST,
                "A timed task requires a time in HH:mm format.",
            ));
        }
    }

    let new_task = store.write().add(payload);

    info!("Task created successfully with ID: {}", new_task.id);

    // Return a 201 Created status with the new task as JSON.
    Ok((StatusCode::CREATED, Json(new_task)))
}

/// Handler for the planner's day view: the tasks active on `date`,
/// partitioned into scheduled and anytime buckets.
pub async fn day_tasks(
    State(store): State<SharedTaskStore>,
    Path(date): Path<NaiveDate>, // Extract the date from the URL path
) -> Json<DayTasks> {
    let day = common::tasks_for_date(&store.read().all(), date);
    info!(
        "Planner day {}: {} scheduled, {} anytime.",
        date,
        day.scheduled.len(),
        day.anytime.len()
    );
    Json(day)
}

/// One cell of the month-view response: the date, whether it belongs to
/// the requested month, and how many tasks are active on it.
#[derive(Serialize, Debug)]
pub struct MonthCell {
    pub date: NaiveDate,
    pub in_month: bool,
    pub task_count: usize,
}

/// Handler for the planner's month view: the fixed 42-cell grid around
/// the month containing `date`, with per-day task counts.
pub async fn month_overview(
    State(store): State<SharedTaskStore>,
    Path(date): Path<NaiveDate>,
) -> Json<Vec<MonthCell>> {
    let tasks = store.read().all();
    let grid = common::month_grid(date);
    let counts = common::task_counts(&tasks, &grid);

    let cells = grid
        .iter()
        .map(|cell| MonthCell {
            date: cell.date,
            in_month: cell.in_month,
            task_count: counts.get(&cell.date).copied().unwrap_or(0),
        })
        .collect();

    debug!("Built month grid for {}.", date);
    Json(cells)
}

/// Checks the `HH:mm` shape the original creation form enforces:
/// two zero-padded digit pairs, hours 00-23, minutes 00-59.
fn is_clock_time(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return false;
    }
    let digits = [bytes[0], bytes[1], bytes[3], bytes[4]];
    if !digits.iter().all(u8::is_ascii_digit) {
        return false;
    }
    &s[..2] <= "23" && &s[3..] <= "59"
}

// --- Custom Error Handling ---
// Transforms validation failures into appropriate HTTP responses.

/// Our custom error type for the application.
#[derive(Debug)]
pub struct AppError {
    code: StatusCode,
    message: String,
}

impl AppError {
    fn new(code: StatusCode, message: &str) -> Self {
        Self {
            code,
            message: message.to_string(),
        }
    }
}

/// Allows Axum to convert our `AppError` into an HTTP `Response`.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!(
            "Responding with error: status_code={}, message={}",
            self.code.as_u16(),
            self.message
        );
        (
            self.code,
            Json(serde_json::json!({ "error": self.message })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store;

    // Helper to create a payload for tests
    fn create_test_payload(name: &str, is_timed: bool, time: Option<&str>) -> Json<CreateTaskPayload> {
        Json(CreateTaskPayload {
            name: name.to_string(),
            icon: None,
            is_timed,
            time: time.map(String::from),
            is_repeat: false,
            repeat_same_day: false,
            same_day_times: vec![],
            repeat_week: false,
            selected_days: vec![],
        })
    }

    #[tokio::test]
    async fn test_create_task_validation_empty_name() {
        // Arrange
        let shared = store::new_shared();
        let payload = create_test_payload("   ", false, None);

        // Act
        let result = create_task(State(shared.clone()), payload).await;

        // Assert
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.code, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Task name cannot be empty.");
        assert!(shared.read().is_empty());
    }

    #[tokio::test]
    async fn test_create_task_validation_bad_time() {
        let shared = store::new_shared();

        for bad in [None, Some(""), Some("2:30 PM"), Some("25:00"), Some("12:60")] {
            let result =
                create_task(State(shared.clone()), create_test_payload("Gym", true, bad)).await;
            let err = result.unwrap_err();
            assert_eq!(err.code, StatusCode::BAD_REQUEST);
            assert_eq!(err.message, "A timed task requires a time in HH:mm format.");
        }
        assert!(shared.read().is_empty());
    }

    #[tokio::test]
    async fn test_create_task_accepts_valid_time() {
        let shared = store::new_shared();
        let payload = create_test_payload("Gym", true, Some("09:00"));

        let (status, Json(task)) = create_task(State(shared), payload).await.unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(task.time.as_deref(), Some("09:00"));
    }

    #[test]
    fn test_is_clock_time() {
        assert!(is_clock_time("00:00"));
        assert!(is_clock_time("09:00"));
        assert!(is_clock_time("23:59"));

        assert!(!is_clock_time("24:00"));
        assert!(!is_clock_time("12:60"));
        assert!(!is_clock_time("9:00")); // not zero-padded
        assert!(!is_clock_time("09:0"));
        assert!(!is_clock_time("2:30 PM"));
        assert!(!is_clock_time("+9:05"));
        assert!(!is_clock_time(""));
    }
}
