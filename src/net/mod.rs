//! Data types and the stubbed session boundary.

pub mod api;
pub mod types;
