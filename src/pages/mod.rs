//! Top-level route components.

pub mod auth;
pub mod dashboard;
