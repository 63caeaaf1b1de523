//! Auth-state change channel with cancellable subscriptions.
//!
//! DESIGN
//! ======
//! Backends publish every session transition here; observers register a
//! listener and get a `Subscription` back. Dropping the handle unregisters
//! the listener, so a view that goes away takes its callback with it.
//!
//! A listener registered after the first publish is called immediately with
//! the current state, matching how the backend SDK replays the session to
//! late subscribers.

#[cfg(test)]
#[path = "auth_channel_test.rs"]
mod auth_channel_test;

use std::sync::{Arc, Mutex, PoisonError, Weak};

use super::types::User;

type Listener = Arc<dyn Fn(Option<&User>) + Send + Sync>;

#[derive(Default)]
struct ChannelInner {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
    /// `None` until the first publish; then the last published session.
    current: Option<Option<User>>,
}

/// Broadcast channel for session transitions.
#[derive(Clone, Default)]
pub struct AuthStateChannel {
    inner: Arc<Mutex<ChannelInner>>,
}

impl AuthStateChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. It fires right away if a session state has
    /// already been published, then on every later publish.
    #[must_use = "dropping the subscription unregisters the listener"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(Option<&User>) + Send + Sync + 'static,
    {
        let listener: Listener = Arc::new(listener);
        let (id, replay) = {
            let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, listener.clone()));
            (id, inner.current.clone())
        };
        if let Some(current) = replay {
            listener(current.as_ref());
        }
        Subscription { channel: Arc::downgrade(&self.inner), id: Some(id) }
    }

    /// Record a new session state and notify every listener.
    pub fn publish(&self, user: Option<User>) {
        let listeners: Vec<Listener> = {
            let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
            inner.current = Some(user.clone());
            inner.listeners.iter().map(|(_, l)| l.clone()).collect()
        };
        // Called outside the lock so listeners may subscribe or unsubscribe.
        for listener in listeners {
            listener(user.as_ref());
        }
    }
}

/// Handle for a registered listener; unregisters on drop.
pub struct Subscription {
    channel: Weak<Mutex<ChannelInner>>,
    id: Option<u64>,
}

impl Subscription {
    /// Unregister now. Equivalent to dropping the handle.
    pub fn unsubscribe(mut self) {
        self.detach();
    }

    fn detach(&mut self) {
        let Some(id) = self.id.take() else {
            return;
        };
        if let Some(inner) = self.channel.upgrade() {
            let mut inner = inner.lock().unwrap_or_else(PoisonError::into_inner);
            inner.listeners.retain(|(lid, _)| *lid != id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
