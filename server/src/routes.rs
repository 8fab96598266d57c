// This software is licensed under the terms of the MIT License.
// See the LICENSE file in the project root for the full license text.
use crate::handlers;
use crate::store::SharedTaskStore;
use axum::{
    Router,
    routing::{get, post},
};

/// Creates and configures the application router.
pub fn create_router(store: SharedTaskStore) -> Router {
    Router::new()
        // Placeholder auth surface: both endpoints always succeed
        .route("/auth/signup", post(handlers::sign_up))
        .route("/auth/signin", post(handlers::sign_in))
        // Associates the `GET /api/tasks` route with the `list_tasks` handler
        .route("/api/tasks", get(handlers::list_tasks))
        // Associates the `POST /api/tasks` route with the `create_task` handler
        .route("/api/tasks", post(handlers::create_task))
        // Planner views: per-day partition and the 42-cell month grid
        .route("/api/planner/day/{date}", get(handlers::day_tasks))
        .route("/api/planner/month/{date}", get(handlers::month_overview))
        // Adds the task store to the application state
        .with_state(store)
}
