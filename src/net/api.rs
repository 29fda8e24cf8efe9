//! Stubbed session boundary: login, signup, logout.
//!
//! No wire format exists in scope. Credentials are validated locally and a
//! `User` is minted on success. Input validation lives in pure helpers so
//! it stays unit-testable; the async shells only add simulated latency.
//!
//! ERROR HANDLING
//! ==============
//! Failures surface as `SessionError` values, shown to the user as a
//! transient notification. Nothing here is fatal.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::types::{Role, User};
use crate::util::time::now_ms;

/// Minimum accepted password length at signup.
const MIN_PASSWORD_LEN: usize = 6;

/// Session boundary failure taxonomy.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// Bad credentials on login.
    #[error("login failed: {0}")]
    Auth(String),
    /// Malformed signup input.
    #[error("signup failed: {0}")]
    Validation(String),
}

/// Open a session. Accepts any well-formed credentials in this scope.
///
/// # Errors
///
/// Returns `SessionError::Auth` when the email or password is malformed.
pub async fn login(email: &str, password: &str) -> Result<User, SessionError> {
    let (email, _password) = validate_login_input(email, password)?;
    simulate_latency().await;
    Ok(mint_user(&email, &display_name(&email)))
}

/// Create an account and open a session.
///
/// # Errors
///
/// Returns `SessionError::Validation` when any field is malformed.
pub async fn signup(email: &str, password: &str, name: &str) -> Result<User, SessionError> {
    let (email, _password, name) = validate_signup_input(email, password, name)?;
    simulate_latency().await;
    Ok(mint_user(&email, &name))
}

/// Close the session on the remote side. A no-op for the local stub; the
/// caller clears `SessionState` itself.
pub async fn logout() {}

/// Check login credentials for shape, returning trimmed values.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), SessionError> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(SessionError::Auth("enter a valid email address".to_owned()));
    }
    if password.is_empty() {
        return Err(SessionError::Auth("enter your password".to_owned()));
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Check signup fields for shape, returning trimmed values.
pub fn validate_signup_input(
    email: &str,
    password: &str,
    name: &str,
) -> Result<(String, String, String), SessionError> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(SessionError::Validation("enter a valid email address".to_owned()));
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(SessionError::Validation(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    let name = name.trim();
    if name.is_empty() {
        return Err(SessionError::Validation("enter your full name".to_owned()));
    }
    Ok((email.to_owned(), password.to_owned(), name.to_owned()))
}

/// Derive a display name from the email local part for the login stub.
pub fn display_name(email: &str) -> String {
    match email.split('@').next() {
        Some(local) if !local.is_empty() => local.to_owned(),
        _ => email.to_owned(),
    }
}

fn mint_user(email: &str, name: &str) -> User {
    User {
        id: uuid::Uuid::new_v4().to_string(),
        email: email.to_owned(),
        name: name.to_owned(),
        role: Role::User,
        created_at: now_ms(),
    }
}

/// Approximate a network round trip so the loading state is visible.
async fn simulate_latency() {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::sleep(std::time::Duration::from_millis(800)).await;
    }
}
