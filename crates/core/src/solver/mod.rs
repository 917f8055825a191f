//! Solver gateway: bridges generation requests to the external solver.
//!
//! The solver is a black-box native binary that reads one JSON problem
//! description from stdin and writes a JSON array of timetable documents
//! to stdout. [`gateway`] defines the invocation contract and its error
//! taxonomy; the subprocess plumbing (spawn, pipe, timeout) is shared in
//! a private submodule.

pub mod gateway;
mod subprocess;

pub use gateway::{BinarySolver, SolverError, SolverGateway};
