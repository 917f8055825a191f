//! Route definitions for the scheduling endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::schedule;
use crate::state::AppState;

/// Routes mounted at `/api/schedule`.
///
/// ```text
/// POST   /generate              -> generate_timetable
/// GET    /view/{timetable_id}   -> view_timetable
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generate", post(schedule::generate_timetable))
        .route("/view/{timetable_id}", get(schedule::view_timetable))
}
