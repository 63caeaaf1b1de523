use super::*;

#[test]
fn defaults_point_at_production_project() {
    let cfg = FirebaseConfig::default();
    assert_eq!(cfg.project_id, "mindorart-8747d");
    assert_eq!(cfg.auth_domain, "mindorart-8747d.firebaseapp.com");
    assert!(!cfg.has_api_key());
}

#[test]
fn blank_overrides_fall_back_to_defaults() {
    let cfg = FirebaseConfig::from_parts(Some("  "), Some(""), None, None);
    assert_eq!(cfg.api_key, "");
    assert_eq!(cfg.project_id, "mindorart-8747d");
}

#[test]
fn overrides_are_trimmed() {
    let cfg = FirebaseConfig::from_parts(Some(" key-1 "), Some("demo"), None, Some("bucket"));
    assert_eq!(cfg.api_key, "key-1");
    assert_eq!(cfg.project_id, "demo");
    assert_eq!(cfg.storage_bucket, "bucket");
}

#[test]
fn identity_url_includes_method_and_key() {
    let cfg = FirebaseConfig::from_parts(Some("abc"), None, None, None);
    assert_eq!(
        cfg.identity_url("accounts:signUp"),
        "https://identitytoolkit.googleapis.com/v1/accounts:signUp?key=abc"
    );
    assert_eq!(cfg.secure_token_url(), "https://securetoken.googleapis.com/v1/token?key=abc");
}

#[test]
fn firestore_documents_url_uses_project() {
    let cfg = FirebaseConfig::from_parts(None, Some("demo"), None, None);
    assert_eq!(
        cfg.firestore_documents_url(),
        "https://firestore.googleapis.com/v1/projects/demo/databases/(default)/documents"
    );
}
