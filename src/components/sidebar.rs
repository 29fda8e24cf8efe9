//! Collapsible side panel with Datasets, Projects, Map Tools, and Settings
//! tabs.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;

use crate::net::types::{InterpolationModel, ProjectStatus, Provider, SatelliteDataset, WmsService};
use crate::state::app::AppState;
use crate::util::time::now_ms;

/// Milliseconds in the 30-day window sample datasets cover.
const DATASET_WINDOW_MS: f64 = 30.0 * 24.0 * 3600.0 * 1000.0;

/// Tabs available in the sidebar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SidebarTab {
    #[default]
    Datasets,
    Projects,
    MapTools,
    Settings,
}

impl SidebarTab {
    pub const ALL: [Self; 4] = [Self::Datasets, Self::Projects, Self::MapTools, Self::Settings];

    pub fn label(self) -> &'static str {
        match self {
            Self::Datasets => "Datasets",
            Self::Projects => "Video Projects",
            Self::MapTools => "Map Tools",
            Self::Settings => "Settings",
        }
    }
}

/// Badge text for a provider tag.
pub fn provider_label(provider: Provider) -> &'static str {
    match provider {
        Provider::Bhuvan => "BHUVAN",
        Provider::Vedas => "VEDAS",
        Provider::Mosdac => "MOSDAC",
        Provider::Custom => "CUSTOM",
    }
}

/// Badge modifier class for a provider tag.
pub fn provider_class(provider: Provider) -> &'static str {
    match provider {
        Provider::Bhuvan => "badge--green",
        Provider::Vedas => "badge--yellow",
        Provider::Mosdac | Provider::Custom => "badge--blue",
    }
}

/// Badge modifier class for a project status.
pub fn status_class(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Completed => "badge--green",
        ProjectStatus::Processing => "badge--yellow",
        ProjectStatus::Error => "badge--red",
        ProjectStatus::Pending => "badge--slate",
    }
}

/// Display label for an interpolation model.
pub fn model_label(model: InterpolationModel) -> &'static str {
    match model {
        InterpolationModel::Rife => "RIFE",
        InterpolationModel::Dain => "DAIN",
        InterpolationModel::Custom => "CUSTOM",
    }
}

/// Derive a browsable sample dataset from a seed service, covering the last
/// 30 days of its first layer.
pub fn dataset_from_service(service: &WmsService, now: f64) -> SatelliteDataset {
    SatelliteDataset {
        id: format!("{}-dataset", service.id),
        name: format!("{} time series", service.name),
        service_id: service.id.clone(),
        time_start: now - DATASET_WINDOW_MS,
        time_end: now,
        resolution: 30.0,
        bounds: service.bounds,
        frame_count: 24,
    }
}

/// Collapsible sidebar. Visibility is driven by the shared `sidebar_open`
/// flag; the active tab is local state.
#[component]
pub fn Sidebar() -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();
    let active_tab = RwSignal::new(SidebarTab::Datasets);

    view! {
        <Show when=move || app.get().sidebar_open>
            <aside class="sidebar">
                <div class="sidebar__tabs">
                    {SidebarTab::ALL
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <button
                                    class="sidebar__tab"
                                    class:sidebar__tab--active=move || active_tab.get() == tab
                                    on:click=move |_| active_tab.set(tab)
                                >
                                    {tab.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="sidebar__content">
                    {move || match active_tab.get() {
                        SidebarTab::Datasets => view! { <DatasetsTab/> }.into_any(),
                        SidebarTab::Projects => view! { <ProjectsTab/> }.into_any(),
                        SidebarTab::MapTools => view! { <MapToolsTab/> }.into_any(),
                        SidebarTab::Settings => view! { <SettingsTab/> }.into_any(),
                    }}
                </div>
            </aside>
        </Show>
    }
}

/// Seed service catalog. Clicking a card selects a sample dataset for
/// project creation.
#[component]
fn DatasetsTab() -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();

    view! {
        <div class="sidebar__section">
            <h3>"Available Datasets"</h3>
            {move || {
                let selected_service = app.get().selected_dataset.map(|d| d.service_id);
                app.get()
                    .wms_services
                    .into_iter()
                    .map(|service| {
                        let is_selected =
                            selected_service.as_deref() == Some(service.id.as_str());
                        let service_for_click = service.clone();
                        view! {
                            <div
                                class="service-card"
                                class:service-card--selected=is_selected
                                on:click=move |_| {
                                    let dataset =
                                        dataset_from_service(&service_for_click, now_ms());
                                    app.update(|a| a.set_selected_dataset(Some(dataset)));
                                }
                            >
                                <div class="service-card__top">
                                    <h4 class="service-card__name">{service.name.clone()}</h4>
                                    <span class=format!("badge {}", provider_class(service.provider))>
                                        {provider_label(service.provider)}
                                    </span>
                                </div>
                                <p class="service-card__description">
                                    {service.description.clone()}
                                </p>
                                <span class="service-card__layers">
                                    {format!("{} layers available", service.layers.len())}
                                </span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

/// Ordered video project list with an empty state.
#[component]
fn ProjectsTab() -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();

    view! {
        <div class="sidebar__section">
            <h3>"Video Projects"</h3>
            {move || {
                let projects = app.get().video_projects;
                if projects.is_empty() {
                    return view! {
                        <div class="sidebar__empty">
                            <p>"No video projects yet"</p>
                            <p class="sidebar__hint">"Create your first AI-generated video"</p>
                        </div>
                    }
                    .into_any();
                }

                projects
                    .into_iter()
                    .map(|project| {
                        view! {
                            <div class="project-card">
                                <div class="project-card__top">
                                    <h4 class="project-card__name">{project.name.clone()}</h4>
                                    <span class=format!("badge {}", status_class(project.status))>
                                        {project.status.label()}
                                    </span>
                                </div>
                                <p class="project-card__settings">
                                    {format!(
                                        "{} \u{2022} {}fps",
                                        model_label(project.interpolation.model),
                                        project.interpolation.frame_rate
                                    )}
                                </p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </div>
    }
}

/// Static map tool shortcuts (the tools themselves live in the widget).
#[component]
fn MapToolsTab() -> impl IntoView {
    let tools = ["Draw Box", "Measure", "Zoom In", "Reset View"];
    view! {
        <div class="sidebar__section">
            <h3>"Map Tools"</h3>
            <div class="sidebar__tool-grid">
                {tools
                    .into_iter()
                    .map(|name| view! { <button class="sidebar__tool">{name}</button> })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

/// Static settings chrome.
#[component]
fn SettingsTab() -> impl IntoView {
    let settings = [
        ("GPU Acceleration", true),
        ("Auto-save Projects", true),
        ("High Quality Preview", false),
        ("Notifications", true),
    ];
    view! {
        <div class="sidebar__section">
            <h3>"Settings"</h3>
            {settings
                .into_iter()
                .map(|(label, enabled)| {
                    view! {
                        <div class="sidebar__setting">
                            <span>{label}</span>
                            <span
                                class="sidebar__switch"
                                class:sidebar__switch--on=enabled
                            ></span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
