//! Handlers for timetable generation and retrieval.
//!
//! Generation is synchronous: the request is held open for the full
//! solver run, and the minted identifiers are returned once every
//! produced timetable has been stored.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use timetable_core::solver::SolverGateway;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Response body for a successful generation call.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    /// Human-readable success indicator.
    pub success: &'static str,
    /// Identifiers of the stored timetables, in solver output order.
    pub timetable_ids: Vec<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/schedule/generate
///
/// Run one solver invocation for the posted problem description, store
/// each generated timetable under a fresh identifier, and return the
/// identifiers in solver output order. A solver run that legitimately
/// yields no timetable returns an empty identifier list, not an error.
///
/// The request body is opaque to this layer; domain validation is the
/// solver's responsibility.
pub async fn generate_timetable(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<GenerateResponse>> {
    let Json(request) =
        payload.map_err(|rejection| AppError::BadRequest(format!("Invalid JSON input: {rejection}")))?;

    if request.is_null() {
        return Err(AppError::BadRequest(
            "Invalid JSON input. Please provide a request body.".to_string(),
        ));
    }

    let timetables = state.solver.invoke(request).await?;

    let mut timetable_ids = Vec::with_capacity(timetables.len());
    for timetable in timetables {
        timetable_ids.push(state.store.put(timetable).await);
    }

    tracing::info!(count = timetable_ids.len(), "Timetables generated and stored");

    Ok(Json(GenerateResponse {
        success: "Timetables generated successfully.",
        timetable_ids,
    }))
}

/// GET /api/schedule/view/{timetable_id}
///
/// Return the stored timetable verbatim, or 404 if the identifier is
/// unknown.
pub async fn view_timetable(
    State(state): State<AppState>,
    Path(timetable_id): Path<String>,
) -> AppResult<Json<Value>> {
    let timetable = state
        .store
        .get(&timetable_id)
        .await
        .ok_or(AppError::TimetableNotFound)?;

    Ok(Json(timetable))
}
