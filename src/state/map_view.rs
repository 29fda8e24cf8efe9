//! Shared map viewport state.
//!
//! ARCHITECTURE
//! ============
//! The map widget owns the authoritative camera; it reports viewport changes
//! into this struct through the store, and the store seeds the widget once
//! at mount. `approx_eq` is the loop breaker: store-originated pushes are
//! skipped when the widget already shows the same viewport.

#[cfg(test)]
#[path = "map_view_test.rs"]
mod map_view_test;

/// Tolerance below which two viewports count as the same view.
const EPSILON: f64 = 1e-6;

/// The map camera: center, zoom, and rotation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapViewState {
    /// (longitude, latitude) in degrees.
    pub center: (f64, f64),
    pub zoom: f64,
    /// Rotation in radians.
    pub rotation: f64,
}

impl Default for MapViewState {
    fn default() -> Self {
        Self {
            // Center of India.
            center: (78.9629, 20.5937),
            zoom: 5.0,
            rotation: 0.0,
        }
    }
}

impl MapViewState {
    /// Whether two viewports are indistinguishable on screen.
    pub fn approx_eq(&self, other: &Self) -> bool {
        (self.center.0 - other.center.0).abs() < EPSILON
            && (self.center.1 - other.center.1).abs() < EPSILON
            && (self.zoom - other.zoom).abs() < EPSILON
            && (self.rotation - other.rotation).abs() < EPSILON
    }
}
