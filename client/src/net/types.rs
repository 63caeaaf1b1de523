//! Shared account DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! `User` is the client-side mirror of the backend's authenticated principal.
//! It is read-only outside the session observer; every other module receives
//! it by reference or as a clone taken from the session signal.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The currently authenticated principal as reported by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend-assigned account identifier.
    pub uid: String,
    /// Sign-in email address.
    pub email: String,
    /// Optional profile display name.
    #[serde(default)]
    pub display_name: Option<String>,
}

impl User {
    /// Name shown in navigation: the display name when set and non-blank,
    /// otherwise the local part of the email address.
    pub fn display_label(&self) -> String {
        match self.display_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_owned(),
            _ => email_local_part(&self.email).to_owned(),
        }
    }
}

/// Everything before the first `@`, or the whole string when there is none.
pub fn email_local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}
