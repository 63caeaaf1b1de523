//! Backend authentication errors and their user-facing messages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend reports failures as `auth/*` codes. Eight of them have fixed
//! copy; everything else shows the backend's own message text, or a generic
//! default when that is empty.

#[cfg(test)]
#[path = "auth_error_test.rs"]
mod auth_error_test;

const GENERIC_AUTH_MESSAGE: &str = "An error occurred during authentication.";

/// Authentication error codes with dedicated user-facing copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthErrorCode {
    UserNotFound,
    WrongPassword,
    EmailAlreadyInUse,
    WeakPassword,
    InvalidEmail,
    UserDisabled,
    TooManyRequests,
    NetworkRequestFailed,
    /// Any other `auth/*` code, kept verbatim.
    Other(String),
}

impl AuthErrorCode {
    /// Parse an `auth/*` code string.
    pub fn from_code(code: &str) -> Self {
        match code {
            "auth/user-not-found" => Self::UserNotFound,
            "auth/wrong-password" => Self::WrongPassword,
            "auth/email-already-in-use" => Self::EmailAlreadyInUse,
            "auth/weak-password" => Self::WeakPassword,
            "auth/invalid-email" => Self::InvalidEmail,
            "auth/user-disabled" => Self::UserDisabled,
            "auth/too-many-requests" => Self::TooManyRequests,
            "auth/network-request-failed" => Self::NetworkRequestFailed,
            other => Self::Other(other.to_owned()),
        }
    }

    /// The `auth/*` code string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::UserNotFound => "auth/user-not-found",
            Self::WrongPassword => "auth/wrong-password",
            Self::EmailAlreadyInUse => "auth/email-already-in-use",
            Self::WeakPassword => "auth/weak-password",
            Self::InvalidEmail => "auth/invalid-email",
            Self::UserDisabled => "auth/user-disabled",
            Self::TooManyRequests => "auth/too-many-requests",
            Self::NetworkRequestFailed => "auth/network-request-failed",
            Self::Other(code) => code,
        }
    }

    /// Fixed copy for the mapped codes; `None` for `Other`.
    pub fn fixed_message(&self) -> Option<&'static str> {
        match self {
            Self::UserNotFound => Some("No account found with this email address."),
            Self::WrongPassword => Some("Incorrect password. Please try again."),
            Self::EmailAlreadyInUse => Some("An account with this email already exists."),
            Self::WeakPassword => Some("Password is too weak. Please choose a stronger password."),
            Self::InvalidEmail => Some("Invalid email address format."),
            Self::UserDisabled => Some("This account has been disabled. Please contact support."),
            Self::TooManyRequests => Some("Too many failed attempts. Please try again later."),
            Self::NetworkRequestFailed => Some("Network error. Please check your connection and try again."),
            Self::Other(_) => None,
        }
    }
}

/// A failed backend authentication operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{} ({message})", .code.as_str())]
pub struct AuthError {
    pub code: AuthErrorCode,
    /// Backend-provided message text; may be empty.
    pub message: String,
}

impl AuthError {
    pub fn new(code: AuthErrorCode, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    /// Transport-level failure (request never got a backend answer).
    pub fn network(detail: impl Into<String>) -> Self {
        Self::new(AuthErrorCode::NetworkRequestFailed, detail)
    }

    /// Message to show in the auth error banner.
    pub fn user_message(&self) -> String {
        if let Some(fixed) = self.code.fixed_message() {
            return fixed.to_owned();
        }
        if self.message.trim().is_empty() {
            GENERIC_AUTH_MESSAGE.to_owned()
        } else {
            self.message.clone()
        }
    }
}
