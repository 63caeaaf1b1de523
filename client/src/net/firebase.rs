//! Firebase Authentication over the Identity Toolkit REST API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, session persisted in
//! `localStorage` so a reload keeps the user signed in.
//! Elsewhere: requests fail with `auth/network-request-failed` and
//! persistence is a no-op, so native builds and tests never touch a network.
//!
//! ERROR HANDLING
//! ==============
//! REST errors arrive as `{"error":{"code":400,"message":"EMAIL_EXISTS"}}`.
//! They are translated into the SDK's `auth/*` codes so the rest of the
//! client sees one vocabulary.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "firebase_test.rs"]
mod firebase_test;

use std::sync::{Arc, Mutex, PoisonError};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::auth_channel::{AuthStateChannel, Subscription};
use super::auth_error::{AuthError, AuthErrorCode};
use super::backend::AuthBackend;
use super::types::User;
use crate::config::FirebaseConfig;
use crate::util::browser::now_ms;

#[cfg(feature = "csr")]
const SESSION_STORAGE_KEY: &str = "mindora.auth.session";

/// Refresh this long before the recorded expiry.
const EXPIRY_SKEW_MS: f64 = 30_000.0;

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateProfileRequest<'a> {
    id_token: &'a str,
    display_name: &'a str,
    return_secure_token: bool,
}

/// Response of `accounts:signInWithPassword` and `accounts:signUp`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenResponse {
    local_id: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    display_name: Option<String>,
    id_token: String,
    refresh_token: String,
    expires_in: String,
}

/// Response of `accounts:update`; tokens are present when a new one was minted.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateProfileResponse {
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    id_token: Option<String>,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_in: Option<String>,
}

/// Response of the secure-token refresh endpoint (snake_case on the wire).
#[derive(Debug, Deserialize)]
struct RefreshResponse {
    id_token: String,
    refresh_token: String,
    expires_in: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// Credentials persisted between page loads.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    pub user: User,
    pub id_token: String,
    pub refresh_token: String,
    /// Milliseconds since the Unix epoch.
    pub expires_at_ms: f64,
}

impl StoredSession {
    fn from_token_response(resp: TokenResponse, now_ms: f64) -> Self {
        Self {
            user: User {
                uid: resp.local_id,
                email: resp.email,
                display_name: resp.display_name.filter(|n| !n.is_empty()),
            },
            id_token: resp.id_token,
            refresh_token: resp.refresh_token,
            expires_at_ms: expiry_from(&resp.expires_in, now_ms),
        }
    }

    pub fn is_expired(&self, now_ms: f64) -> bool {
        now_ms + EXPIRY_SKEW_MS >= self.expires_at_ms
    }
}

fn expiry_from(expires_in: &str, now_ms: f64) -> f64 {
    let secs = expires_in.trim().parse::<f64>().unwrap_or(0.0);
    now_ms + secs * 1000.0
}

// =============================================================================
// ERROR TRANSLATION
// =============================================================================

/// Translate an Identity Toolkit error message into an `auth/*` error.
///
/// Messages look like `EMAIL_EXISTS` or `WEAK_PASSWORD : Password should be
/// at least 6 characters`.
pub fn translate_rest_error(message: &str) -> AuthError {
    let (head, detail) = match message.split_once(" : ") {
        Some((head, detail)) => (head.trim(), Some(detail.trim())),
        None => (message.trim(), None),
    };
    let code = match head {
        "EMAIL_NOT_FOUND" => "auth/user-not-found".to_owned(),
        "INVALID_PASSWORD" => "auth/wrong-password".to_owned(),
        "EMAIL_EXISTS" => "auth/email-already-in-use".to_owned(),
        "WEAK_PASSWORD" => "auth/weak-password".to_owned(),
        "INVALID_EMAIL" | "MISSING_EMAIL" => "auth/invalid-email".to_owned(),
        "USER_DISABLED" => "auth/user-disabled".to_owned(),
        "TOO_MANY_ATTEMPTS_TRY_LATER" => "auth/too-many-requests".to_owned(),
        "INVALID_LOGIN_CREDENTIALS" => "auth/invalid-credential".to_owned(),
        "TOKEN_EXPIRED" | "INVALID_ID_TOKEN" | "INVALID_REFRESH_TOKEN" | "USER_NOT_FOUND" => {
            "auth/user-token-expired".to_owned()
        }
        "" => "auth/internal-error".to_owned(),
        other => format!("auth/{}", other.to_ascii_lowercase().replace('_', "-")),
    };
    let message = match detail {
        Some(detail) if !detail.is_empty() => detail.to_owned(),
        _ => format!("Firebase: Error ({code})."),
    };
    AuthError::new(AuthErrorCode::from_code(&code), message)
}

/// Decode a REST response body, mapping non-2xx bodies through
/// `translate_rest_error`.
fn decode_response<T: DeserializeOwned>(ok: bool, body: &str) -> Result<T, AuthError> {
    if ok {
        return serde_json::from_str(body)
            .map_err(|e| AuthError::new(AuthErrorCode::Other("auth/internal-error".to_owned()), e.to_string()));
    }
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => Err(translate_rest_error(&envelope.error.message)),
        Err(_) => Err(translate_rest_error("")),
    }
}

fn no_current_user() -> AuthError {
    AuthError::new(
        AuthErrorCode::Other("auth/no-current-user".to_owned()),
        "No user is currently signed in.",
    )
}

/// `application/x-www-form-urlencoded` value encoding.
fn form_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

// =============================================================================
// TRANSPORT
// =============================================================================

async fn post_json<B, T>(url: &str, body: &B) -> Result<T, AuthError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    #[cfg(feature = "csr")]
    {
        let request = gloo_net::http::Request::post(url)
            .json(body)
            .map_err(|e| AuthError::network(e.to_string()))?;
        let resp = request.send().await.map_err(|e| AuthError::network(e.to_string()))?;
        let ok = resp.ok();
        let text = resp.text().await.map_err(|e| AuthError::network(e.to_string()))?;
        decode_response(ok, &text)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (url, serde_json::to_value(body).ok());
        Err(AuthError::network("not available outside the browser"))
    }
}

async fn post_form<T: DeserializeOwned>(url: &str, form: &str) -> Result<T, AuthError> {
    #[cfg(feature = "csr")]
    {
        let request = gloo_net::http::Request::post(url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(form.to_owned())
            .map_err(|e| AuthError::network(e.to_string()))?;
        let resp = request.send().await.map_err(|e| AuthError::network(e.to_string()))?;
        let ok = resp.ok();
        let text = resp.text().await.map_err(|e| AuthError::network(e.to_string()))?;
        decode_response(ok, &text)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (url, form);
        Err(AuthError::network("not available outside the browser"))
    }
}

// =============================================================================
// PERSISTENCE
// =============================================================================

fn load_stored_session() -> Option<StoredSession> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        let raw = storage.get_item(SESSION_STORAGE_KEY).ok()??;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                log::warn!("discarding unreadable stored session: {e}");
                let _ = storage.remove_item(SESSION_STORAGE_KEY);
                None
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

fn persist_session(session: Option<&StoredSession>) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let result = match session.map(serde_json::to_string) {
            Some(Ok(raw)) => storage.set_item(SESSION_STORAGE_KEY, &raw),
            Some(Err(e)) => {
                log::warn!("failed to serialize session: {e}");
                return;
            }
            None => storage.remove_item(SESSION_STORAGE_KEY),
        };
        if result.is_err() {
            log::warn!("session persistence failed");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = session;
    }
}

// =============================================================================
// CLIENT
// =============================================================================

/// Firebase Authentication client backed by the REST API.
#[derive(Clone)]
pub struct FirebaseAuth {
    config: FirebaseConfig,
    channel: AuthStateChannel,
    session: Arc<Mutex<Option<StoredSession>>>,
}

impl FirebaseAuth {
    pub fn new(config: FirebaseConfig) -> Self {
        if !config.has_api_key() {
            log::warn!("MINDORA_FIREBASE_API_KEY was not set at build time; auth requests will be rejected");
        }
        Self {
            config,
            channel: AuthStateChannel::new(),
            session: Arc::new(Mutex::new(None)),
        }
    }

    pub fn config(&self) -> &FirebaseConfig {
        &self.config
    }

    /// Restore a persisted session (refreshing it when expired) and publish
    /// the initial auth state. Always publishes exactly once.
    pub async fn restore(&self) {
        let Some(stored) = load_stored_session() else {
            self.channel.publish(None);
            return;
        };
        if !stored.is_expired(now_ms()) {
            self.install(Some(stored));
            return;
        }
        match self.refresh(&stored).await {
            Ok(fresh) => self.install(Some(fresh)),
            Err(e) => {
                log::info!("stored session could not be refreshed: {e}");
                self.install(None);
            }
        }
    }

    async fn refresh(&self, stored: &StoredSession) -> Result<StoredSession, AuthError> {
        let form = format!("grant_type=refresh_token&refresh_token={}", form_encode(&stored.refresh_token));
        let resp: RefreshResponse = post_form(&self.config.secure_token_url(), &form).await?;
        Ok(StoredSession {
            user: stored.user.clone(),
            expires_at_ms: expiry_from(&resp.expires_in, now_ms()),
            id_token: resp.id_token,
            refresh_token: resp.refresh_token,
        })
    }

    async fn password_call(&self, method: &str, email: &str, password: &str) -> Result<User, AuthError> {
        let body = PasswordRequest { email, password, return_secure_token: true };
        let resp: TokenResponse = post_json(&self.config.identity_url(method), &body).await?;
        let session = StoredSession::from_token_response(resp, now_ms());
        let user = session.user.clone();
        self.install(Some(session));
        Ok(user)
    }

    /// Replace the cached session, persist it, and notify observers.
    fn install(&self, session: Option<StoredSession>) {
        persist_session(session.as_ref());
        let user = session.as_ref().map(|s| s.user.clone());
        *self.session.lock().unwrap_or_else(PoisonError::into_inner) = session;
        self.channel.publish(user);
    }

    fn snapshot(&self) -> Option<StoredSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl AuthBackend for FirebaseAuth {
    async fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError> {
        self.password_call("accounts:signInWithPassword", email, password).await
    }

    async fn create_account(&self, email: &str, password: &str) -> Result<User, AuthError> {
        self.password_call("accounts:signUp", email, password).await
    }

    async fn update_profile(&self, display_name: &str) -> Result<User, AuthError> {
        let mut session = self.snapshot().ok_or_else(no_current_user)?;
        let body = UpdateProfileRequest {
            id_token: &session.id_token,
            display_name,
            return_secure_token: true,
        };
        let resp: UpdateProfileResponse = post_json(&self.config.identity_url("accounts:update"), &body).await?;

        session.user.display_name = resp.display_name.or_else(|| Some(display_name.to_owned()));
        if let (Some(id_token), Some(refresh_token)) = (resp.id_token, resp.refresh_token) {
            session.id_token = id_token;
            session.refresh_token = refresh_token;
            if let Some(expires_in) = resp.expires_in {
                session.expires_at_ms = expiry_from(&expires_in, now_ms());
            }
        }
        let user = session.user.clone();
        self.install(Some(session));
        Ok(user)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.install(None);
        Ok(())
    }

    fn on_auth_state_changed<F>(&self, listener: F) -> Subscription
    where
        F: Fn(Option<&User>) + Send + Sync + 'static,
    {
        self.channel.subscribe(listener)
    }
}
