use super::*;
use futures::executor::block_on;

#[test]
fn translate_maps_known_rest_codes() {
    let cases = [
        ("EMAIL_NOT_FOUND", AuthErrorCode::UserNotFound),
        ("INVALID_PASSWORD", AuthErrorCode::WrongPassword),
        ("EMAIL_EXISTS", AuthErrorCode::EmailAlreadyInUse),
        ("INVALID_EMAIL", AuthErrorCode::InvalidEmail),
        ("USER_DISABLED", AuthErrorCode::UserDisabled),
        ("TOO_MANY_ATTEMPTS_TRY_LATER", AuthErrorCode::TooManyRequests),
    ];
    for (raw, expected) in cases {
        assert_eq!(translate_rest_error(raw).code, expected, "{raw}");
    }
}

#[test]
fn translate_keeps_detail_after_separator() {
    let err = translate_rest_error("WEAK_PASSWORD : Password should be at least 6 characters");
    assert_eq!(err.code, AuthErrorCode::WeakPassword);
    assert_eq!(err.message, "Password should be at least 6 characters");
    assert_eq!(err.user_message(), "Password is too weak. Please choose a stronger password.");
}

#[test]
fn translate_invalid_login_credentials_uses_sdk_message() {
    let err = translate_rest_error("INVALID_LOGIN_CREDENTIALS");
    assert_eq!(err.code.as_str(), "auth/invalid-credential");
    assert_eq!(err.user_message(), "Firebase: Error (auth/invalid-credential).");
}

#[test]
fn translate_unknown_code_is_kebab_cased() {
    let err = translate_rest_error("OPERATION_NOT_ALLOWED");
    assert_eq!(err.code.as_str(), "auth/operation-not-allowed");
}

#[test]
fn decode_error_body_translates_message() {
    let body = r#"{"error":{"code":400,"message":"EMAIL_EXISTS","errors":[]}}"#;
    let err = decode_response::<TokenResponse>(false, body).unwrap_err();
    assert_eq!(err.code, AuthErrorCode::EmailAlreadyInUse);
}

#[test]
fn decode_garbage_error_body_is_internal_error() {
    let err = decode_response::<TokenResponse>(false, "<html>bad gateway</html>").unwrap_err();
    assert_eq!(err.code.as_str(), "auth/internal-error");
}

#[test]
fn token_response_builds_session_with_expiry() {
    let body = r#"{
        "localId": "uid-1",
        "email": "jane@example.com",
        "displayName": "",
        "idToken": "id-tok",
        "refreshToken": "ref-tok",
        "expiresIn": "3600"
    }"#;
    let resp: TokenResponse = decode_response(true, body).unwrap();
    let session = StoredSession::from_token_response(resp, 1_000.0);
    assert_eq!(session.user.uid, "uid-1");
    assert_eq!(session.user.display_name, None);
    assert!((session.expires_at_ms - 3_601_000.0).abs() < f64::EPSILON);
    assert!(!session.is_expired(1_000.0));
    assert!(session.is_expired(3_600_000.0));
}

#[test]
fn form_encode_escapes_reserved_bytes() {
    assert_eq!(form_encode("a+b/c=d-e_f"), "a%2Bb%2Fc%3Dd-e_f");
}

#[test]
fn update_profile_without_session_fails() {
    let auth = FirebaseAuth::new(FirebaseConfig::default());
    let err = block_on(auth.update_profile("Jane")).unwrap_err();
    assert_eq!(err.code.as_str(), "auth/no-current-user");
}

#[test]
fn sign_in_outside_browser_reports_network_failure() {
    let auth = FirebaseAuth::new(FirebaseConfig::default());
    let err = block_on(auth.sign_in("jane@example.com", "secret1")).unwrap_err();
    assert_eq!(err.code, AuthErrorCode::NetworkRequestFailed);
    assert!(auth.snapshot().is_none());
}

#[test]
fn restore_without_stored_session_publishes_signed_out() {
    let auth = FirebaseAuth::new(FirebaseConfig::default());
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let _sub = auth.on_auth_state_changed(move |user| sink.lock().unwrap().push(user.is_some()));

    block_on(auth.restore());

    assert_eq!(*seen.lock().unwrap(), vec![false]);
}

#[test]
fn sign_out_publishes_signed_out_state() {
    let auth = FirebaseAuth::new(FirebaseConfig::default());
    auth.install(Some(StoredSession {
        user: User { uid: "u".into(), email: "u@x.io".into(), display_name: None },
        id_token: "i".into(),
        refresh_token: "r".into(),
        expires_at_ms: f64::MAX,
    }));
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let _sub = auth.on_auth_state_changed(move |user| sink.lock().unwrap().push(user.map(|u| u.uid.clone())));

    block_on(auth.sign_out()).unwrap();

    assert_eq!(*seen.lock().unwrap(), vec![Some("u".to_owned()), None]);
    assert!(auth.snapshot().is_none());
}
