//! Request handlers, grouped by API area.

pub mod schedule;
