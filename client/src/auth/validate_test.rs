use super::*;

fn sign_in(email: &str, password: &str) -> SignInForm {
    SignInForm { email: email.to_owned(), password: password.to_owned() }
}

fn sign_up(name: &str, email: &str, password: &str, consent: Option<bool>) -> SignUpForm {
    SignUpForm {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        consent,
    }
}

// =============================================================
// is_valid_email
// =============================================================

#[test]
fn valid_emails() {
    for email in ["jane@example.com", "a@b.co", "first.last+tag@sub.domain.org"] {
        assert!(is_valid_email(email), "{email}");
    }
}

#[test]
fn malformed_emails() {
    for email in [
        "",
        "plainaddress",
        "jane@example",
        "@example.com",
        "jane@.com",
        "jane@example.",
        "jane@@example.com",
        "jane@exa@mple.com",
        "jane doe@example.com",
    ] {
        assert!(!is_valid_email(email), "{email:?} should be rejected");
    }
}

// =============================================================
// Sign in
// =============================================================

#[test]
fn sign_in_trims_email_only() {
    let creds = validate_sign_in(&sign_in("  jane@example.com ", " pw ")).unwrap();
    assert_eq!(creds.email, "jane@example.com");
    assert_eq!(creds.password, " pw ");
}

#[test]
fn sign_in_first_failure_wins() {
    assert_eq!(validate_sign_in(&sign_in("   ", "")), Err(FormError::EmailRequired));
    assert_eq!(validate_sign_in(&sign_in("jane", "")), Err(FormError::EmailInvalid));
    assert_eq!(validate_sign_in(&sign_in("jane@example.com", "")), Err(FormError::PasswordRequired));
}

#[test]
fn sign_in_has_no_password_minimum() {
    assert!(validate_sign_in(&sign_in("jane@example.com", "x")).is_ok());
}

#[test]
fn sign_in_messages() {
    assert_eq!(FormError::EmailRequired.to_string(), "Please enter your email address.");
    assert_eq!(FormError::EmailInvalid.to_string(), "Please enter a valid email address.");
    assert_eq!(FormError::PasswordRequired.to_string(), "Please enter your password.");
}

// =============================================================
// Sign up
// =============================================================

#[test]
fn sign_up_missing_consent_control_is_integrity_error() {
    let err = validate_sign_up(&sign_up("Jane", "jane@example.com", "secret1", None)).unwrap_err();
    assert_eq!(err, FormError::ConsentControlMissing);
    assert!(err.is_integrity());
    assert_eq!(err.to_string(), "System configuration error. Please contact support.");
}

#[test]
fn sign_up_unchecked_consent_rejects_otherwise_valid_form() {
    let err = validate_sign_up(&sign_up("Jane", "jane@example.com", "secret1", Some(false))).unwrap_err();
    assert_eq!(err, FormError::ConsentRequired);
    assert!(!err.is_integrity());
}

#[test]
fn sign_up_consent_checked_before_fields() {
    let err = validate_sign_up(&sign_up("", "", "", Some(false))).unwrap_err();
    assert_eq!(err, FormError::ConsentRequired);
}

#[test]
fn sign_up_name_rules() {
    assert_eq!(
        validate_sign_up(&sign_up("   ", "jane@example.com", "secret1", Some(true))),
        Err(FormError::NameRequired)
    );
    assert_eq!(
        validate_sign_up(&sign_up(" J ", "jane@example.com", "secret1", Some(true))),
        Err(FormError::NameTooShort)
    );
}

#[test]
fn sign_up_email_rules() {
    assert_eq!(validate_sign_up(&sign_up("Jane", "", "secret1", Some(true))), Err(FormError::EmailRequired));
    assert_eq!(
        validate_sign_up(&sign_up("Jane", "jane@example", "secret1", Some(true))),
        Err(FormError::EmailInvalid)
    );
}

#[test]
fn sign_up_password_rules() {
    assert_eq!(
        validate_sign_up(&sign_up("Jane", "jane@example.com", "", Some(true))),
        Err(FormError::NewPasswordRequired)
    );
    for short in ["a", "abcde", "12345"] {
        assert_eq!(
            validate_sign_up(&sign_up("Jane", "jane@example.com", short, Some(true))),
            Err(FormError::PasswordTooShort)
        );
    }
}

#[test]
fn sign_up_accepts_valid_form_and_trims() {
    let account = validate_sign_up(&sign_up("  Jo ", " jo@example.com ", "secret", Some(true))).unwrap();
    assert_eq!(account.display_name, "Jo");
    assert_eq!(account.credentials.email, "jo@example.com");
    assert_eq!(account.credentials.password, "secret");
}
