//! Application-wide store: layout flags, seed services, video projects,
//! and the shared map viewport.
//!
//! DESIGN
//! ======
//! Held as a single `RwSignal<AppState>` context. All mutation goes through
//! the named setters below; components never poke fields directly, so every
//! write site is grep-able.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use crate::net::types::{BoundingBox, Provider, SatelliteDataset, VideoProject, WmsService};
use crate::state::map_view::MapViewState;

/// Shared UI + domain state for the dashboard.
#[derive(Clone, Debug)]
pub struct AppState {
    pub sidebar_open: bool,
    pub chat_open: bool,
    /// Seed WMS services; read-only after construction.
    pub wms_services: Vec<WmsService>,
    /// Dataset currently picked in the sidebar, if any.
    pub selected_dataset: Option<SatelliteDataset>,
    /// Ordered project collection; append-only in this scope.
    pub video_projects: Vec<VideoProject>,
    pub map_view: MapViewState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            sidebar_open: true,
            chat_open: false,
            wms_services: seed_services(),
            selected_dataset: None,
            video_projects: Vec::new(),
            map_view: MapViewState::default(),
        }
    }
}

impl AppState {
    pub fn set_sidebar_open(&mut self, open: bool) {
        self.sidebar_open = open;
    }

    pub fn set_chat_open(&mut self, open: bool) {
        self.chat_open = open;
    }

    pub fn set_selected_dataset(&mut self, dataset: Option<SatelliteDataset>) {
        self.selected_dataset = dataset;
    }

    pub fn set_map_view(&mut self, view: MapViewState) {
        self.map_view = view;
    }

    /// Append a project to the end of the collection.
    ///
    /// Duplicate ids are accepted as-is; callers that care can probe with
    /// [`AppState::has_project`] first.
    pub fn add_video_project(&mut self, project: VideoProject) {
        self.video_projects.push(project);
    }

    /// Whether a project with this id already exists.
    pub fn has_project(&self, id: &str) -> bool {
        self.video_projects.iter().any(|p| p.id == id)
    }
}

/// Extent covering the Indian subcontinent, shared by all seed services.
fn india_bounds() -> BoundingBox {
    BoundingBox {
        min_lon: 68.7,
        min_lat: 8.4,
        max_lon: 97.25,
        max_lat: 37.6,
    }
}

/// Hard-coded WMS service catalog. No runtime creation in scope.
pub fn seed_services() -> Vec<WmsService> {
    vec![
        WmsService {
            id: "bhuvan-1".to_owned(),
            name: "BHUVAN Satellite Imagery".to_owned(),
            url: "https://bhuvan-vec1.nrsc.gov.in/bhuvan/gwc/service/wms".to_owned(),
            layers: vec!["bhuvan:composite_india".to_owned()],
            description: "High-resolution satellite imagery from ISRO BHUVAN".to_owned(),
            bounds: india_bounds(),
            provider: Provider::Bhuvan,
        },
        WmsService {
            id: "vedas-1".to_owned(),
            name: "VEDAS Agricultural Data".to_owned(),
            url: "https://vedas.sac.gov.in/wms".to_owned(),
            layers: vec!["vedas:ndvi".to_owned(), "vedas:crop_mask".to_owned()],
            description: "Agricultural monitoring and crop assessment data".to_owned(),
            bounds: india_bounds(),
            provider: Provider::Vedas,
        },
        WmsService {
            id: "mosdac-1".to_owned(),
            name: "MOSDAC Ocean Data".to_owned(),
            url: "https://mosdac.gov.in/wms".to_owned(),
            layers: vec!["mosdac:sst".to_owned(), "mosdac:chlorophyll".to_owned()],
            description: "Ocean color and sea surface temperature data".to_owned(),
            bounds: india_bounds(),
            provider: Provider::Mosdac,
        },
    ]
}
