//! Top header bar: sidebar/chat toggles, branding, identity, logout.

use leptos::prelude::*;

use crate::state::app::AppState;
use crate::state::session::SessionState;

/// Dashboard header. Logout clears the session; the dashboard's route
/// guard then forwards to `/auth`.
#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let app = expect_context::<RwSignal<AppState>>();

    let user_name = move || session.get().user.map(|u| u.name).unwrap_or_default();
    let sidebar_open = move || app.get().sidebar_open;
    let chat_open = move || app.get().chat_open;

    let on_toggle_sidebar = move |_| {
        app.update(|a| {
            let next = !a.sidebar_open;
            a.set_sidebar_open(next);
        });
    };

    let on_toggle_chat = move |_| {
        app.update(|a| {
            let next = !a.chat_open;
            a.set_chat_open(next);
        });
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async {
            crate::net::api::logout().await;
        });
        session.update(SessionState::logout);
    };

    view! {
        <header class="header">
            <div class="header__left">
                <button
                    class="btn header__sidebar-toggle"
                    on:click=on_toggle_sidebar
                    title="Toggle sidebar"
                >
                    {move || if sidebar_open() { "✕" } else { "☰" }}
                </button>
                <div class="header__brand">
                    <h1>"WebGIS AI"</h1>
                    <p class="header__tagline">"Satellite Intelligence Platform"</p>
                </div>
            </div>

            <div class="header__right">
                <button
                    class="btn header__chat-toggle"
                    class:header__chat-toggle--active=chat_open
                    on:click=on_toggle_chat
                    title="Toggle assistant"
                >
                    "Assistant"
                </button>

                <span class="header__user">{user_name}</span>

                <button class="btn header__logout" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </div>
        </header>
    }
}
