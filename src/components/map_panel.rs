//! Bridge component between the Leptos UI and the external map widget.
//!
//! ARCHITECTURE
//! ============
//! Synchronization is deliberately one-directional in each leg: the shared
//! `MapViewState` seeds the widget once at mount, widget-driven viewport
//! events flow back through `AppState::set_map_view`, and store-originated
//! changes are pushed down only when they differ from what the widget last
//! reported. That difference check is what prevents a feedback loop.

use leptos::prelude::*;

use crate::state::app::AppState;

/// Map panel hosting the external widget. If the widget fails to attach,
/// the container renders empty; retries are the collaborator's concern.
#[component]
pub fn MapPanel() -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();
    let container = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        use crate::state::map_view::MapViewState;
        use crate::util::map_bridge::{MapWidget, attach_map_widget};

        let widget: Rc<RefCell<Option<MapWidget>>> = Rc::new(RefCell::new(None));
        // Last viewport the widget itself reported (or was seeded with).
        let widget_view: Rc<RefCell<Option<MapViewState>>> = Rc::new(RefCell::new(None));

        let widget_mount = widget.clone();
        let widget_view_mount = widget_view.clone();
        Effect::new(move || {
            let Some(el) = container.get() else {
                return;
            };
            if widget_mount.borrow().is_some() {
                return;
            }

            let handle = match attach_map_widget(&el) {
                Ok(handle) => handle,
                Err(_) => {
                    log::warn!("map widget failed to attach; panel stays empty");
                    return;
                }
            };

            // Seed the widget from the shared store, once.
            let seed = app.get_untracked().map_view;
            handle.set_view(seed.center.0, seed.center.1, seed.zoom, seed.rotation);
            *widget_view_mount.borrow_mut() = Some(seed);

            // Widget -> store. Every pan/zoom/rotate tick lands here.
            let widget_view_cb = widget_view_mount.clone();
            let on_change = Closure::wrap(Box::new(move |lon: f64, lat: f64, zoom: f64, rotation: f64| {
                let next = MapViewState {
                    center: (lon, lat),
                    zoom,
                    rotation,
                };
                *widget_view_cb.borrow_mut() = Some(next);
                app.update(|a| a.set_map_view(next));
            }) as Box<dyn FnMut(f64, f64, f64, f64)>);
            handle.on_view_change(on_change.as_ref().unchecked_ref());
            // The widget holds the callback for its lifetime.
            on_change.forget();

            *widget_mount.borrow_mut() = Some(handle);
        });

        // Store -> widget, skipped when the widget already shows this view.
        let widget_push = widget.clone();
        let widget_view_push = widget_view;
        Effect::new(move || {
            let view = app.get().map_view;
            let widget = widget_push.borrow();
            let Some(handle) = widget.as_ref() else {
                return;
            };
            let shown = *widget_view_push.borrow();
            let already_shown = shown.map_or(false, |shown| shown.approx_eq(&view));
            if !already_shown {
                handle.set_view(view.center.0, view.center.1, view.zoom, view.rotation);
                *widget_view_push.borrow_mut() = Some(view);
            }
        });

        on_cleanup(move || {
            if let Some(handle) = widget.borrow_mut().take() {
                handle.detach();
            }
        });
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = app;

    view! { <div class="map-panel" node_ref=container></div> }
}
