//! Local validation of the sign-in and sign-up forms.
//!
//! Checks run in a fixed order and the first failure wins. Nothing here
//! touches the backend: a rejected form never produces a request.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

pub const MIN_DISPLAY_NAME_CHARS: usize = 2;
pub const MIN_PASSWORD_CHARS: usize = 6;

/// Raw sign-in field values captured at submit time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

/// Raw sign-up field values captured at submit time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Privacy-policy consent; `None` when the checkbox is not mounted.
    pub consent: Option<bool>,
}

/// Validated sign-in credentials.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Validated sign-up request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewAccount {
    pub display_name: String,
    pub credentials: Credentials,
}

/// Reasons a form is rejected before reaching the backend. `Display` is the
/// banner text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// The page is missing the consent control.
    #[error("System configuration error. Please contact support.")]
    ConsentControlMissing,
    #[error("You must agree to the Privacy Policy to register")]
    ConsentRequired,
    #[error("Please enter your display name.")]
    NameRequired,
    #[error("Display name must be at least 2 characters long.")]
    NameTooShort,
    #[error("Please enter your email address.")]
    EmailRequired,
    #[error("Please enter a valid email address.")]
    EmailInvalid,
    #[error("Please enter your password.")]
    PasswordRequired,
    #[error("Please enter a password.")]
    NewPasswordRequired,
    #[error("Password must be at least 6 characters long.")]
    PasswordTooShort,
}

impl FormError {
    /// Page-integrity defects, as opposed to bad user input.
    pub fn is_integrity(self) -> bool {
        matches!(self, Self::ConsentControlMissing)
    }
}

/// `local@domain.tld`: no whitespace, exactly one `@`, and a `.` inside the
/// domain with at least one character on each side.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let chars: Vec<char> = domain.chars().collect();
    chars.len() >= 3 && chars[1..chars.len() - 1].contains(&'.')
}

fn check_email(email: &str) -> Result<(), FormError> {
    if email.is_empty() {
        return Err(FormError::EmailRequired);
    }
    if !is_valid_email(email) {
        return Err(FormError::EmailInvalid);
    }
    Ok(())
}

/// Validate the sign-in form. The email is trimmed; the password is taken
/// as typed and has no minimum length.
pub fn validate_sign_in(form: &SignInForm) -> Result<Credentials, FormError> {
    let email = form.email.trim();
    check_email(email)?;
    if form.password.is_empty() {
        return Err(FormError::PasswordRequired);
    }
    Ok(Credentials { email: email.to_owned(), password: form.password.clone() })
}

/// Validate the sign-up form, consent first.
pub fn validate_sign_up(form: &SignUpForm) -> Result<NewAccount, FormError> {
    match form.consent {
        None => return Err(FormError::ConsentControlMissing),
        Some(false) => return Err(FormError::ConsentRequired),
        Some(true) => {}
    }

    let name = form.name.trim();
    if name.is_empty() {
        return Err(FormError::NameRequired);
    }
    if name.chars().count() < MIN_DISPLAY_NAME_CHARS {
        return Err(FormError::NameTooShort);
    }

    let email = form.email.trim();
    check_email(email)?;

    if form.password.is_empty() {
        return Err(FormError::NewPasswordRequired);
    }
    if form.password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(FormError::PasswordTooShort);
    }

    Ok(NewAccount {
        display_name: name.to_owned(),
        credentials: Credentials { email: email.to_owned(), password: form.password.clone() },
    })
}
