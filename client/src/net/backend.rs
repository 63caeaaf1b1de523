//! Backend authentication seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth controller and session observer only talk to this trait. The
//! browser build plugs in `FirebaseAuth`; tests plug in in-memory fakes.

use super::auth_channel::Subscription;
use super::auth_error::AuthError;
use super::types::User;

/// Operations consumed from the hosted authentication service.
///
/// Futures are not `Send`: the client runs on the browser's single-threaded
/// event loop.
#[allow(async_fn_in_trait)]
pub trait AuthBackend {
    /// Sign in with email + password.
    async fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError>;

    /// Create an account and sign it in.
    async fn create_account(&self, email: &str, password: &str) -> Result<User, AuthError>;

    /// Set the display name of the signed-in account.
    async fn update_profile(&self, display_name: &str) -> Result<User, AuthError>;

    /// End the current session.
    async fn sign_out(&self) -> Result<(), AuthError>;

    /// Subscribe to session transitions.
    fn on_auth_state_changed<F>(&self, listener: F) -> Subscription
    where
        F: Fn(Option<&User>) + Send + Sync + 'static;
}
