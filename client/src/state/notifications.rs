//! Transient notification stack.
//!
//! DESIGN
//! ======
//! Notifications are addressed by id so the auto-expiry timer and the close
//! button can race freely: whichever removes the entry first wins and the
//! other becomes a no-op.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

/// How long a notification stays up without being dismissed.
pub const AUTO_DISMISS_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// Alert style suffix; errors use the `danger` palette.
    pub fn alert_class(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "danger",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

/// Currently visible notifications, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationState {
    pub items: Vec<Notification>,
    next_id: u64,
}

impl NotificationState {
    /// Add a notification and return its id.
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notification { id, message: message.into(), severity });
        id
    }

    /// Close button. Returns whether anything was removed.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    /// Timer expiry; a no-op if the notification was already dismissed.
    pub fn expire(&mut self, id: u64) -> bool {
        self.dismiss(id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
