//! Small shared helpers for routing guards, clocks, and the map bridge.

pub mod guard;
#[cfg(feature = "hydrate")]
pub mod map_bridge;
pub mod time;
