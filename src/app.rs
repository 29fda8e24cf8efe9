//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::pages::{auth::AuthPage, dashboard::DashboardPage};
use crate::state::{app::AppState, chat::ChatState, session::SessionState};
use crate::util::guard::redirect_target;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
/// Routes: `/auth` (login/signup), `/dashboard` (authenticated shell),
/// and `/` which redirects based on session state.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let session = RwSignal::new(SessionState::default());
    let app = RwSignal::new(AppState::default());
    let chat = RwSignal::new(ChatState::default());

    provide_context(session);
    provide_context(app);
    provide_context(chat);

    view! {
        <Stylesheet id="leptos" href="/pkg/webgis-client.css"/>
        <Title text="WebGIS AI"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("auth") view=AuthPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("") view=RootRedirect/>
            </Routes>
        </Router>
    }
}

/// Root route. Forwards to `/dashboard` or `/auth` based on the session.
#[component]
fn RootRedirect() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = session.get();
        if state.loading {
            return;
        }
        if let Some(target) = redirect_target(state.is_authenticated(), "/") {
            navigate(target, NavigateOptions::default());
        }
    });

    view! { <p class="route-redirect">"Redirecting..."</p> }
}
