//! Shared session routing rules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical redirect behavior: the auth surface
//! bounces signed-in users to the dashboard, the dashboard bounces signed-out
//! users to auth, and the root path forwards based on session state.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// Where a request to `path` should land given the session state.
/// `None` means the path is served as-is.
pub fn redirect_target(authenticated: bool, path: &str) -> Option<&'static str> {
    match (authenticated, path) {
        (true, "/" | "/auth") => Some("/dashboard"),
        (false, "/" | "/dashboard") => Some("/auth"),
        _ => None,
    }
}

/// Redirect to `/auth` whenever the session has settled with no user.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = session.get();
        if state.loading {
            return;
        }
        if let Some(target) = redirect_target(state.is_authenticated(), "/dashboard") {
            navigate(target, NavigateOptions::default());
        }
    });
}

/// Redirect to `/dashboard` whenever a user is signed in.
pub fn install_auth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = session.get();
        if state.loading {
            return;
        }
        if let Some(target) = redirect_target(state.is_authenticated(), "/auth") {
            navigate(target, NavigateOptions::default());
        }
    });
}
