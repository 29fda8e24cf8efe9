//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate auth
//! redirects and identity-dependent rendering. Nothing is persisted; a
//! process restart always starts unauthenticated.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// Session state tracking the current user and loading status.
///
/// `loading` is raised around each in-flight login/signup call so forms can
/// disable their submit controls.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
}

impl SessionState {
    /// Whether a user is currently signed in.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Store the signed-in user and drop the loading flag.
    pub fn set_user(&mut self, user: User) {
        self.user = Some(user);
        self.loading = false;
    }

    /// Clear the session unconditionally.
    pub fn logout(&mut self) {
        self.user = None;
        self.loading = false;
    }
}
