//! Session observer: the single writer of the session mirror.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app attaches one observer at startup. Every auth-state notification
//! is turned into a fresh `SessionState` and handed to the sink, which in
//! the browser is the `RwSignal<SessionState>` provided through context.
//! Navigation visibility is derived from that state, never patched.

#[cfg(test)]
#[path = "observer_test.rs"]
mod observer_test;

use crate::net::auth_channel::Subscription;
use crate::net::backend::AuthBackend;
use crate::state::session::SessionState;

/// Owns the auth-state subscription; dropping it stops updates.
#[derive(Debug)]
pub struct SessionObserver {
    subscription: Subscription,
}

impl SessionObserver {
    pub fn attach<B, F>(backend: &B, sink: F) -> Self
    where
        B: AuthBackend,
        F: Fn(SessionState) + Send + Sync + 'static,
    {
        let subscription = backend.on_auth_state_changed(move |user| {
            match user {
                Some(user) => log::info!("session: signed in as {}", user.uid),
                None => log::info!("session: signed out"),
            }
            sink(SessionState::resolved(user.cloned()));
        });
        Self { subscription }
    }

    pub fn detach(self) {
        self.subscription.unsubscribe();
    }
}
