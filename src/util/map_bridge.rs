//! Extern surface for the host page's map-rendering widget.
//!
//! The widget itself (tile fetching, pan/zoom interaction, rendering) is an
//! external collaborator installed by the embedding page. This module only
//! declares the boundary: attach to a container, seed/push a viewport, and
//! subscribe to viewport-change events.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Imperative handle for an attached map widget instance.
    pub type MapWidget;

    /// Attach a widget to the container element. Fails when the host page
    /// has not installed the widget; the caller decides what to do then.
    #[wasm_bindgen(catch, js_name = "attachMapWidget")]
    pub fn attach_map_widget(target: &web_sys::HtmlDivElement) -> Result<MapWidget, JsValue>;

    /// Push a viewport into the widget: lon/lat center, zoom, rotation
    /// (radians).
    #[wasm_bindgen(method, js_name = "setView")]
    pub fn set_view(this: &MapWidget, lon: f64, lat: f64, zoom: f64, rotation: f64);

    /// Subscribe to widget-driven viewport changes. The callback receives
    /// `(lon, lat, zoom, rotation)` on every pan/zoom/rotate tick.
    #[wasm_bindgen(method, js_name = "onViewChange")]
    pub fn on_view_change(this: &MapWidget, callback: &js_sys::Function);

    /// Detach the widget from its container and drop its listeners.
    #[wasm_bindgen(method)]
    pub fn detach(this: &MapWidget);
}
