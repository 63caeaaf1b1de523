//! Session mirror for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written only by the session observer; read by navigation, route guards
//! and the hero call-to-action. `NavState` is always re-derived from the
//! whole session so applying the same state twice renders the same view.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// Cached, read-only mirror of the backend session.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    /// True until the backend reports the initial auth state.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl SessionState {
    /// State after an auth-state notification.
    pub fn resolved(user: Option<User>) -> Self {
        Self { user, loading: false }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Protected views should send the visitor away: the session is known
    /// and nobody is signed in.
    pub fn should_redirect_unauth(&self) -> bool {
        !self.loading && self.user.is_none()
    }

    pub fn nav(&self) -> NavState {
        NavState::derive(self.user.as_ref())
    }
}

/// Visibility of the auth-dependent navigation entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavState {
    pub login_visible: bool,
    pub user_visible: bool,
    pub create_visible: bool,
    /// Label for the signed-in entry; `None` when signed out.
    pub display_name: Option<String>,
}

impl NavState {
    pub fn derive(user: Option<&User>) -> Self {
        match user {
            Some(user) => Self {
                login_visible: false,
                user_visible: true,
                create_visible: true,
                display_name: Some(user.display_label()),
            },
            None => Self {
                login_visible: true,
                user_visible: false,
                create_visible: false,
                display_name: None,
            },
        }
    }
}
