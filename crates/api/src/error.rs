use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use timetable_core::solver::SolverError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`SolverError`] for gateway failures and adds HTTP-specific
/// variants. Implements [`IntoResponse`] to produce consistent
/// `{"error": ...}` JSON responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A failure at the solver boundary.
    #[error(transparent)]
    Solver(#[from] SolverError),

    /// The requested timetable identifier is unknown.
    ///
    /// Not a fault: this is the normal outcome for an unknown ID and is
    /// surfaced as 404.
    #[error("Timetable not found.")]
    TimetableNotFound,

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // Solver failures map to 500 with the full diagnostic. The
            // message carries the solver's stderr where available -- that
            // is the primary debugging signal and is never discarded.
            AppError::Solver(err) => {
                tracing::error!(error = %err, "Solver invocation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }

            AppError::TimetableNotFound => {
                (StatusCode::NOT_FOUND, "Timetable not found.".to_string())
            }

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),

            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({ "error": message });

        (status, axum::Json(body)).into_response()
    }
}
