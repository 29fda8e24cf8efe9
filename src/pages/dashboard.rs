//! Dashboard page composing the authenticated shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route: header, collapsible sidebar,
//! map and video panels, stat tiles, and the assistant overlay. Visiting
//! while signed out redirects to `/auth`.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::chat_bot::ChatBot;
use crate::components::header::Header;
use crate::components::map_panel::MapPanel;
use crate::components::sidebar::Sidebar;
use crate::components::video_player::VideoPlayer;
use crate::net::types::{
    InterpolationModel, InterpolationSettings, ProjectStatus, Quality, SatelliteDataset,
    VideoProject,
};
use crate::state::app::AppState;
use crate::state::session::SessionState;
use crate::util::guard::install_unauth_redirect;
use crate::util::time::now_ms;

/// Static stat tiles shown under the main grid.
const STATS: [(&str, &str); 4] = [
    ("Active Projects", "12"),
    ("Generated Videos", "47"),
    ("Processing Queue", "3"),
    ("GPU Utilization", "78%"),
];

/// Settings applied to projects created from the dashboard.
fn default_interpolation() -> InterpolationSettings {
    InterpolationSettings {
        model: InterpolationModel::Rife,
        frame_rate: 30,
        quality: Quality::High,
    }
}

/// Build a pending project over the given dataset.
fn new_project(dataset: SatelliteDataset, now: f64) -> VideoProject {
    VideoProject {
        id: uuid::Uuid::new_v4().to_string(),
        name: format!("{} animation", dataset.name),
        dataset,
        interpolation: default_interpolation(),
        status: ProjectStatus::Pending,
        video_url: None,
        created_at: now,
        updated_at: now,
    }
}

/// Dashboard page. Redirects to `/auth` if the user is not signed in.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let app = expect_context::<RwSignal<AppState>>();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate);

    let can_create = move || app.get().selected_dataset.is_some();

    let on_create_project = move |_| {
        let Some(dataset) = app.get().selected_dataset else {
            return;
        };
        let project = new_project(dataset, now_ms());
        app.update(|a| a.add_video_project(project));
    };

    view! {
        <Show
            when=move || !session.get().loading && session.get().is_authenticated()
            fallback=move || {
                view! {
                    <div class="dashboard">
                        <p class="dashboard__notice">
                            {move || {
                                if session.get().loading {
                                    "Loading WebGIS AI Platform..."
                                } else {
                                    "Redirecting to sign in..."
                                }
                            }}
                        </p>
                    </div>
                }
            }
        >
            <div class="dashboard">
                <Header/>

                <div class="dashboard__body">
                    <Sidebar/>

                    <main
                        class="dashboard__main"
                        class:dashboard__main--with-sidebar=move || app.get().sidebar_open
                        class:dashboard__main--with-chat=move || app.get().chat_open
                    >
                        <section class="welcome-banner">
                            <h2>"Welcome to WebGIS AI Platform"</h2>
                            <p>
                                "Transform satellite imagery into smooth, AI-enhanced videos \
                                 using advanced frame interpolation"
                            </p>
                            <div class="welcome-banner__actions">
                                <button
                                    class="btn btn--primary"
                                    on:click=on_create_project
                                    disabled=move || !can_create()
                                >
                                    "Create New Project"
                                </button>
                                <button
                                    class="btn"
                                    on:click=move |_| app.update(|a| a.set_sidebar_open(true))
                                >
                                    "Browse Datasets"
                                </button>
                            </div>
                        </section>

                        <div class="dashboard__grid">
                            <section class="panel">
                                <h3>"Interactive Map"</h3>
                                <MapPanel/>
                                <p class="panel__note">
                                    "Select regions, view WMS layers, and define areas for \
                                     video generation"
                                </p>
                            </section>

                            <section class="panel">
                                <h3>"Video Preview"</h3>
                                <VideoPlayer/>
                            </section>
                        </div>

                        <div class="dashboard__stats">
                            {STATS
                                .into_iter()
                                .map(|(title, value)| {
                                    view! {
                                        <div class="stat-card">
                                            <p class="stat-card__title">{title}</p>
                                            <p class="stat-card__value">{value}</p>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </main>

                    <Show when=move || app.get().chat_open>
                        <ChatBot/>
                    </Show>
                </div>
            </div>
        </Show>
    }
}
