//! Post-login redirect intention.
//!
//! SYSTEM CONTEXT
//! ==============
//! The hero call-to-action records "go to the create page after login" in
//! tab-scoped `sessionStorage`; the auth controller consumes it once a
//! sign-in or sign-up succeeds on the landing page.
//!
//! TRADE-OFFS
//! ==========
//! The token is only cleared when it is consumed on a landing path. A token
//! recorded on the landing page survives a sign-in that happens elsewhere
//! and fires on a later landing-page sign-in.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

use std::sync::{Arc, Mutex, PoisonError};

/// `sessionStorage` key holding the pending intention.
pub const REDIRECT_STORAGE_KEY: &str = "redirectAfterAuth";

/// Delay before navigating so the success notification is seen first.
pub const REDIRECT_DELAY_MS: u32 = 1_000;

/// Where a user should land after authenticating.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedirectIntent {
    Create,
}

impl RedirectIntent {
    pub fn as_token(self) -> &'static str {
        match self {
            Self::Create => "create",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "create" => Some(Self::Create),
            _ => None,
        }
    }

    pub fn target_path(self) -> &'static str {
        match self {
            Self::Create => "/create",
        }
    }
}

/// A navigation the caller should perform after `delay_ms`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingRedirect {
    pub path: &'static str,
    pub delay_ms: u32,
}

/// Whether `path` is the landing page.
pub fn is_home_path(path: &str) -> bool {
    path == "/" || path.contains("index.html")
}

/// Single-slot storage for the intention token.
pub trait IntentStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn remove(&self);
}

/// In-memory slot, used off-browser and in tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryIntentStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl IntentStore for MemoryIntentStore {
    fn get(&self) -> Option<String> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn set(&self, token: &str) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn remove(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// Browser `sessionStorage` slot. Outside the browser every read is empty.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionIntentStore;

#[cfg(feature = "csr")]
fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok()?
}

impl IntentStore for SessionIntentStore {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            session_storage()?.get_item(REDIRECT_STORAGE_KEY).ok()?
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn set(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = session_storage() {
                let _ = storage.set_item(REDIRECT_STORAGE_KEY, token);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    }

    fn remove(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = session_storage() {
                let _ = storage.remove_item(REDIRECT_STORAGE_KEY);
            }
        }
    }
}

/// Records and consumes the post-login intention.
#[derive(Clone, Debug, Default)]
pub struct RedirectCoordinator<S> {
    store: S,
}

impl<S: IntentStore> RedirectCoordinator<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Record an intention, replacing any previous one.
    pub fn set(&self, intent: RedirectIntent) {
        self.store.set(intent.as_token());
    }

    /// The stored intention, if any, without consuming it.
    pub fn pending(&self) -> Option<RedirectIntent> {
        self.store.get().as_deref().and_then(RedirectIntent::from_token)
    }

    /// On a landing path, take a `create` intention and return the delayed
    /// navigation to perform. Off the landing path the token is left alone.
    pub fn consume_if_home(&self, current_path: &str) -> Option<PendingRedirect> {
        if !is_home_path(current_path) {
            return None;
        }
        let intent = self.pending()?;
        if intent != RedirectIntent::Create {
            return None;
        }
        self.store.remove();
        Some(PendingRedirect { path: intent.target_path(), delay_ms: REDIRECT_DELAY_MS })
    }
}
