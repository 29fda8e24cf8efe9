//! Auth page with a login/signup form and a mode toggle.
//!
//! Failures surface as a transient inline notice; the toast system is an
//! external collaborator and not wired here. Success stores the user in the
//! session; the route guard then forwards to `/dashboard`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::state::session::SessionState;
use crate::util::guard::install_auth_redirect;

/// Which form the auth surface currently shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Signup,
            Self::Signup => Self::Login,
        }
    }
}

fn heading(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::Login => "Welcome Back",
        AuthMode::Signup => "Create Account",
    }
}

fn subtitle(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::Login => "Sign in to access your WebGIS dashboard",
        AuthMode::Signup => "Join the future of satellite imagery analysis",
    }
}

fn submit_label(mode: AuthMode, busy: bool) -> &'static str {
    if busy {
        return "Processing...";
    }
    match mode {
        AuthMode::Login => "Sign In",
        AuthMode::Signup => "Create Account",
    }
}

fn toggle_prompt(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::Login => "Don't have an account?",
        AuthMode::Signup => "Already have an account?",
    }
}

fn toggle_action(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::Login => "Sign up",
        AuthMode::Signup => "Sign in",
    }
}

fn success_note(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::Login => "Welcome back!",
        AuthMode::Signup => "Account created successfully!",
    }
}

/// Auth page. Redirects to `/dashboard` once a user is signed in.
#[component]
pub fn AuthPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_auth_redirect(session, navigate);

    let mode = RwSignal::new(AuthMode::Login);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if session.get().loading {
            return;
        }

        let submitted = mode.get();
        let checked = match submitted {
            AuthMode::Login => api::validate_login_input(&email.get(), &password.get())
                .map(|(email, password)| (email, password, String::new())),
            AuthMode::Signup => {
                api::validate_signup_input(&email.get(), &password.get(), &name.get())
            }
        };
        let (email_value, password_value, name_value) = match checked {
            Ok(values) => values,
            Err(error) => {
                notice.set(error.to_string());
                return;
            }
        };

        notice.set(String::new());
        session.update(|s| s.loading = true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match submitted {
                AuthMode::Login => api::login(&email_value, &password_value).await,
                AuthMode::Signup => {
                    api::signup(&email_value, &password_value, &name_value).await
                }
            };
            match result {
                Ok(user) => {
                    notice.set(success_note(submitted).to_owned());
                    session.update(|s| s.set_user(user));
                }
                Err(error) => {
                    notice.set(error.to_string());
                    session.update(|s| s.loading = false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, name_value);
            session.update(|s| s.loading = false);
        }
    };

    let on_toggle_mode = move |_| {
        mode.update(|m| *m = m.toggled());
        notice.set(String::new());
    };

    let busy = move || session.get().loading;

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>{move || heading(mode.get())}</h1>
                <p class="auth-card__subtitle">{move || subtitle(mode.get())}</p>

                <form class="auth-form" on:submit=on_submit>
                    <Show when=move || mode.get() == AuthMode::Signup>
                        <label class="auth-form__label">
                            "Full Name"
                            <input
                                class="auth-form__input"
                                type="text"
                                placeholder="Enter your full name"
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        </label>
                    </Show>

                    <label class="auth-form__label">
                        "Email Address"
                        <input
                            class="auth-form__input"
                            type="email"
                            placeholder="Enter your email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>

                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=busy>
                        {move || submit_label(mode.get(), busy())}
                    </button>
                </form>

                <Show when=move || !notice.get().is_empty()>
                    <p class="auth-card__notice">{move || notice.get()}</p>
                </Show>

                <p class="auth-card__toggle">
                    {move || toggle_prompt(mode.get())}
                    <button class="auth-card__toggle-action" on:click=on_toggle_mode>
                        {move || toggle_action(mode.get())}
                    </button>
                </p>
            </div>
        </div>
    }
}
