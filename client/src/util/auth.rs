//! Route guard for pages that need a signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected route components share one unauthenticated redirect: once the
//! session is resolved with nobody signed in, go to the landing page.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// Where an unauthenticated visitor is sent.
pub const UNAUTH_DESTINATION: &str = "/";

/// Destination for a visitor in `state`, or `None` to stay.
pub fn unauth_destination(state: &SessionState) -> Option<&'static str> {
    state.should_redirect_unauth().then_some(UNAUTH_DESTINATION)
}

/// Redirect whenever the session resolves to signed out.
pub fn require_auth<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        if let Some(path) = session.with(unauth_destination) {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
