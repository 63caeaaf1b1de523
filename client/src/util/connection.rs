//! Online/offline monitoring.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app installs one watcher at startup; each browser `online`/`offline`
//! event is logged and turned into a notification. A page that loads
//! offline gets the warning straight away.

#[cfg(test)]
#[path = "connection_test.rs"]
mod connection_test;

use crate::state::notifications::Severity;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectionStatus {
    Online,
    Offline,
}

impl ConnectionStatus {
    pub fn from_online(online: bool) -> Self {
        if online { Self::Online } else { Self::Offline }
    }

    /// Notification raised when the browser switches to this status.
    pub fn notice(self) -> (&'static str, Severity) {
        match self {
            Self::Online => ("Connection restored!", Severity::Success),
            Self::Offline => ("Connection lost. Some features may be limited.", Severity::Warning),
        }
    }
}

/// Notification for the status seen at page load; only offline is reported.
pub fn startup_notice(status: ConnectionStatus) -> Option<(&'static str, Severity)> {
    match status {
        ConnectionStatus::Online => None,
        ConnectionStatus::Offline => Some(status.notice()),
    }
}

/// Current browser connectivity; assumed online off-browser.
pub fn current_status() -> ConnectionStatus {
    #[cfg(feature = "csr")]
    {
        ConnectionStatus::from_online(web_sys::window().is_none_or(|w| w.navigator().on_line()))
    }
    #[cfg(not(feature = "csr"))]
    {
        ConnectionStatus::Online
    }
}

/// Call `on_change` on every `online`/`offline` window event for the life
/// of the page.
pub fn watch_connection<F>(on_change: F)
where
    F: Fn(ConnectionStatus) + Clone + 'static,
{
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(window) = web_sys::window() else {
            return;
        };
        for (event, status) in [("online", ConnectionStatus::Online), ("offline", ConnectionStatus::Offline)] {
            let on_change = on_change.clone();
            let handler = Closure::<dyn Fn()>::new(move || {
                log::info!("connection {event}");
                on_change(status);
            });
            if window.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref()).is_ok() {
                handler.forget();
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = on_change;
    }
}
