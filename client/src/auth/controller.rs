//! Sign-in, sign-up, and sign-out flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth modal hands raw form snapshots to `AuthController`. The
//! controller validates, drives the backend, and reports back through the
//! `AuthView` trait; it never reads the session mirror, which only the
//! session observer writes.
//!
//! ERROR HANDLING
//! ==============
//! Validation errors go to the banner and are not logged. Backend errors go
//! to the banner through the `auth/*` message table and are logged for
//! operators. A missing consent control is logged at error level and
//! aborts the action without touching the backend.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use super::validate::{FormError, SignInForm, SignUpForm, validate_sign_in, validate_sign_up};
use crate::net::auth_error::AuthError;
use crate::net::backend::AuthBackend;
use crate::net::types::User;
use crate::state::notifications::Severity;
use crate::state::redirect::{IntentStore, RedirectCoordinator, RedirectIntent};
use crate::state::session::SessionState;

pub const SIGNING_IN_LABEL: &str = "Signing in...";
pub const CREATING_ACCOUNT_LABEL: &str = "Creating account...";
pub const WELCOME_BACK: &str = "Welcome back!";
pub const ACCOUNT_CREATED: &str = "Account created successfully! Welcome to MINDORA.ART!";
pub const SIGNED_OUT: &str = "Signed out successfully!";

/// Pages that require a signed-in user; signing out there goes home.
const PROTECTED_PATH_MARKERS: [&str; 2] = ["create", "profile"];

/// UI side effects the controller needs from the auth modal and page.
pub trait AuthView {
    fn show_error(&self, message: &str);
    fn begin_loading(&self, message: &str);
    /// Re-enable submit controls and restore their original labels.
    fn end_loading(&self);
    fn close_modal(&self);
    fn notify(&self, message: &str, severity: Severity);
    fn navigate(&self, path: &str, delay_ms: u32);
}

/// Result of one submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Rejected locally; the backend was not called.
    Rejected(FormError),
    /// The backend reported a failure.
    Failed(AuthError),
    Authenticated(User),
}

/// Restores the submit controls when dropped, whatever path the flow took.
struct LoadingGuard<'a, V: AuthView> {
    view: &'a V,
}

impl<'a, V: AuthView> LoadingGuard<'a, V> {
    fn begin(view: &'a V, message: &str) -> Self {
        view.begin_loading(message);
        Self { view }
    }
}

impl<V: AuthView> Drop for LoadingGuard<'_, V> {
    fn drop(&mut self) {
        self.view.end_loading();
    }
}

/// Where a visitor goes after signing out from `current_path`.
pub fn sign_out_destination(current_path: &str) -> Option<&'static str> {
    PROTECTED_PATH_MARKERS
        .iter()
        .any(|marker| current_path.contains(marker))
        .then_some("/")
}

pub struct AuthController<B, S> {
    backend: B,
    redirect: RedirectCoordinator<S>,
}

impl<B, S> AuthController<B, S>
where
    B: AuthBackend,
    S: IntentStore,
{
    pub fn new(backend: B, redirect: RedirectCoordinator<S>) -> Self {
        Self { backend, redirect }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub async fn sign_in<V: AuthView>(&self, view: &V, form: SignInForm, current_path: &str) -> AuthOutcome {
        let creds = match validate_sign_in(&form) {
            Ok(creds) => creds,
            Err(e) => return reject(view, e),
        };

        let _loading = LoadingGuard::begin(view, SIGNING_IN_LABEL);
        match self.backend.sign_in(&creds.email, &creds.password).await {
            Ok(user) => {
                self.finish(view, WELCOME_BACK, current_path);
                AuthOutcome::Authenticated(user)
            }
            Err(e) => {
                log::error!("sign in failed: {e}");
                view.show_error(&e.user_message());
                AuthOutcome::Failed(e)
            }
        }
    }

    /// Create the account, then set its display name. The two steps are not
    /// atomic: if naming fails the account exists unnamed and the whole
    /// submit is reported as failed.
    pub async fn sign_up<V: AuthView>(&self, view: &V, form: SignUpForm, current_path: &str) -> AuthOutcome {
        let account = match validate_sign_up(&form) {
            Ok(account) => account,
            Err(e) => return reject(view, e),
        };

        let _loading = LoadingGuard::begin(view, CREATING_ACCOUNT_LABEL);
        let creds = &account.credentials;
        let created = match self.backend.create_account(&creds.email, &creds.password).await {
            Ok(user) => user,
            Err(e) => {
                log::error!("sign up failed: {e}");
                view.show_error(&e.user_message());
                return AuthOutcome::Failed(e);
            }
        };

        match self.backend.update_profile(&account.display_name).await {
            Ok(user) => {
                self.finish(view, ACCOUNT_CREATED, current_path);
                AuthOutcome::Authenticated(user)
            }
            Err(e) => {
                log::warn!("account {} created but display name update failed: {e}", created.uid);
                view.show_error(&e.user_message());
                AuthOutcome::Failed(e)
            }
        }
    }

    pub async fn sign_out<V: AuthView>(&self, view: &V, current_path: &str) -> Result<(), AuthError> {
        match self.backend.sign_out().await {
            Ok(()) => {
                if let Some(path) = sign_out_destination(current_path) {
                    view.navigate(path, 0);
                }
                view.notify(SIGNED_OUT, Severity::Success);
                Ok(())
            }
            Err(e) => {
                log::error!("sign out failed: {e}");
                view.notify(&format!("Error signing out: {}", e.message), Severity::Error);
                Err(e)
            }
        }
    }

    /// Hero call-to-action. Signed-in users, as the session mirror shows
    /// them, go straight to the create page; everyone else gets the
    /// intention recorded. Returns whether the login modal should open.
    pub fn get_started<V: AuthView>(&self, session: &SessionState, view: &V) -> bool {
        if session.is_authenticated() {
            view.navigate(RedirectIntent::Create.target_path(), 0);
            return false;
        }
        self.redirect.set(RedirectIntent::Create);
        true
    }

    fn finish<V: AuthView>(&self, view: &V, message: &str, current_path: &str) {
        view.close_modal();
        view.notify(message, Severity::Success);
        if let Some(redirect) = self.redirect.consume_if_home(current_path) {
            view.navigate(redirect.path, redirect.delay_ms);
        }
    }
}

fn reject<V: AuthView>(view: &V, error: FormError) -> AuthOutcome {
    if error.is_integrity() {
        log::error!("auth form integrity error: {error:?}");
    }
    view.show_error(&error.to_string());
    AuthOutcome::Rejected(error)
}
