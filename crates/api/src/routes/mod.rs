pub mod health;
pub mod schedule;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /schedule/generate               POST  run the solver, store the results
/// /schedule/view/{timetable_id}    GET   fetch one stored timetable
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/schedule", schedule::router())
}
