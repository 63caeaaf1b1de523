//! Firebase project configuration baked in at compile time.
//!
//! Each field can be overridden through the matching `MINDORA_FIREBASE_*`
//! environment variable when the WASM bundle is built; the defaults point at
//! the production project.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_PROJECT_ID: &str = "mindorart-8747d";
const DEFAULT_AUTH_DOMAIN: &str = "mindorart-8747d.firebaseapp.com";
const DEFAULT_STORAGE_BUCKET: &str = "mindorart-8747d.firebasestorage.app";

pub const IDENTITY_TOOLKIT_BASE_URL: &str = "https://identitytoolkit.googleapis.com/v1";
pub const SECURE_TOKEN_BASE_URL: &str = "https://securetoken.googleapis.com/v1";
pub const FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com/v1";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FirebaseConfig {
    pub api_key: String,
    pub project_id: String,
    pub auth_domain: String,
    pub storage_bucket: String,
}

impl FirebaseConfig {
    /// Configuration captured from the build environment.
    pub fn from_build_env() -> Self {
        Self::from_parts(
            option_env!("MINDORA_FIREBASE_API_KEY"),
            option_env!("MINDORA_FIREBASE_PROJECT_ID"),
            option_env!("MINDORA_FIREBASE_AUTH_DOMAIN"),
            option_env!("MINDORA_FIREBASE_STORAGE_BUCKET"),
        )
    }

    fn from_parts(
        api_key: Option<&str>,
        project_id: Option<&str>,
        auth_domain: Option<&str>,
        storage_bucket: Option<&str>,
    ) -> Self {
        let pick = |value: Option<&str>, default: &str| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
                .to_owned()
        };
        Self {
            api_key: pick(api_key, ""),
            project_id: pick(project_id, DEFAULT_PROJECT_ID),
            auth_domain: pick(auth_domain, DEFAULT_AUTH_DOMAIN),
            storage_bucket: pick(storage_bucket, DEFAULT_STORAGE_BUCKET),
        }
    }

    /// Whether an API key is available; requests without one are rejected
    /// by the backend.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Identity Toolkit endpoint, e.g. `accounts:signInWithPassword`.
    pub fn identity_url(&self, method: &str) -> String {
        format!("{IDENTITY_TOOLKIT_BASE_URL}/{method}?key={}", self.api_key)
    }

    /// Token refresh endpoint.
    pub fn secure_token_url(&self) -> String {
        format!("{SECURE_TOKEN_BASE_URL}/token?key={}", self.api_key)
    }

    /// Root of the project's default Firestore database documents.
    pub fn firestore_documents_url(&self) -> String {
        format!(
            "{FIRESTORE_BASE_URL}/projects/{}/databases/(default)/documents",
            self.project_id
        )
    }
}

impl Default for FirebaseConfig {
    fn default() -> Self {
        Self::from_parts(None, None, None, None)
    }
}
