use std::sync::Arc;

use timetable_core::solver::BinarySolver;
use timetable_core::store::TimetableStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). The store and
/// solver are owned here and injected into handlers, with their lifecycle
/// tied to the server process.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// In-memory timetable result store.
    pub store: Arc<TimetableStore>,
    /// Gateway to the external solver binary.
    pub solver: Arc<BinarySolver>,
}
