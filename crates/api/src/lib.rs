//! HTTP layer for the timetable generation backend.
//!
//! Exposes the generation and retrieval endpoints over axum, wires the
//! solver gateway and the in-memory store into shared application state,
//! and converts gateway failures into JSON error responses.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
