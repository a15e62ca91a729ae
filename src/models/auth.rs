use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::utils::constants::{RESET_HOLD_MS, VERIFY_HOLD_MS};

/// Step of the authentication modal currently displayed.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum AuthMode {
    SignIn,
    SignUp,
    Forgot,
    Verify,
}

impl AuthMode {
    pub fn title(self) -> &'static str {
        match self {
            AuthMode::SignIn => "Welcome Back",
            AuthMode::SignUp => "Create Account",
            AuthMode::Forgot => "Reset Password",
            AuthMode::Verify => "Verify Email",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign in to your CyberShield account",
            AuthMode::SignUp => "Join CyberShield to protect yourself from cyber threats",
            AuthMode::Forgot => "Enter your email to receive a password reset link",
            AuthMode::Verify => "Enter the verification code sent to your email",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign In",
            AuthMode::SignUp => "Create Account",
            AuthMode::Forgot => "Send Reset Link",
            AuthMode::Verify => "Verify Email",
        }
    }

    /// What a successful mock submit does in this mode. Sign-in and verify
    /// terminate the modal; sign-up and forgot show an email-sent splash and
    /// then move to the next step.
    pub fn submit_outcome(self) -> SubmitOutcome {
        match self {
            AuthMode::SignIn | AuthMode::Verify => SubmitOutcome::Authenticated,
            AuthMode::SignUp => SubmitOutcome::EmailSent {
                next: AuthMode::Verify,
                hold_ms: VERIFY_HOLD_MS,
            },
            AuthMode::Forgot => SubmitOutcome::EmailSent {
                next: AuthMode::SignIn,
                hold_ms: RESET_HOLD_MS,
            },
        }
    }
}

/// Result of a mock submit once the simulated delay elapses.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum SubmitOutcome {
    Authenticated,
    EmailSent { next: AuthMode, hold_ms: u32 },
}

/// All modal inputs, one struct for the four modes (unused fields stay empty).
#[derive(Clone, PartialEq, Default, Debug)]
pub struct AuthForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub verification_code: String,
}

impl AuthForm {
    pub fn set_field(&mut self, field: &str, value: String) {
        match field {
            "name" => self.name = value,
            "email" => self.email = value,
            "phone" => self.phone = value,
            "password" => self.password = value,
            "confirm_password" => self.confirm_password = value,
            "verification_code" => self.verification_code = value,
            _ => log::warn!("Unknown auth field: {field}"),
        }
    }
}

/// Field name to inline message. Submission is blocked while non-empty.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct ValidationErrors {
    map: HashMap<String, String>,
}

impl ValidationErrors {
    pub fn set(&mut self, field: &str, message: &str) {
        self.map.insert(field.to_string(), message.to_string());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.map.get(field).map(String::as_str)
    }

    /// Typing in a field clears its message.
    pub fn clear(&mut self, field: &str) {
        self.map.remove(field);
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Synchronous, local validation of the current mode's fields.
pub fn validate(mode: AuthMode, form: &AuthForm) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if mode == AuthMode::SignUp && form.name.trim().is_empty() {
        errors.set("name", "Name is required");
    }

    if mode != AuthMode::Verify {
        if form.email.trim().is_empty() {
            errors.set("email", "Email is required");
        } else if !looks_like_email(&form.email) {
            errors.set("email", "Email is invalid");
        }
    }

    if mode == AuthMode::SignUp && form.phone.trim().is_empty() {
        errors.set("phone", "Phone number is required");
    }

    if matches!(mode, AuthMode::SignIn | AuthMode::SignUp) {
        if form.password.is_empty() {
            errors.set("password", "Password is required");
        } else if form.password.chars().count() < 8 {
            errors.set("password", "Password must be at least 8 characters");
        }
    }

    if mode == AuthMode::SignUp && form.password != form.confirm_password {
        errors.set("confirm_password", "Passwords do not match");
    }

    if mode == AuthMode::Verify && form.verification_code.trim().is_empty() {
        errors.set("verification_code", "Verification code is required");
    }

    errors
}

/// Shape check only: something before the `@`, a dot somewhere after it,
/// no whitespace anywhere.
fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_signup_form() -> AuthForm {
        AuthForm {
            name: "Alice".into(),
            email: "alice@x.com".into(),
            phone: "555-1111".into(),
            password: "password1".into(),
            confirm_password: "password1".into(),
            verification_code: String::new(),
        }
    }

    #[test]
    fn valid_signup_has_no_errors() {
        let errors = validate(AuthMode::SignUp, &valid_signup_form());
        assert!(errors.is_empty());
    }

    #[test]
    fn short_password_blocks_signup() {
        let mut form = valid_signup_form();
        form.password = "short".into();
        form.confirm_password = "short".into();
        let errors = validate(AuthMode::SignUp, &form);
        assert_eq!(
            errors.get("password"),
            Some("Password must be at least 8 characters")
        );
    }

    #[test]
    fn mismatched_confirmation_is_flagged() {
        let mut form = valid_signup_form();
        form.confirm_password = "password2".into();
        let errors = validate(AuthMode::SignUp, &form);
        assert_eq!(errors.get("confirm_password"), Some("Passwords do not match"));
    }

    #[test]
    fn signin_ignores_signup_only_fields() {
        let form = AuthForm {
            email: "alice@x.com".into(),
            password: "password1".into(),
            ..Default::default()
        };
        assert!(validate(AuthMode::SignIn, &form).is_empty());
    }

    #[test]
    fn forgot_only_needs_an_email() {
        let form = AuthForm {
            email: "alice@x.com".into(),
            ..Default::default()
        };
        assert!(validate(AuthMode::Forgot, &form).is_empty());
        assert!(!validate(AuthMode::Forgot, &AuthForm::default()).is_empty());
    }

    #[test]
    fn verify_requires_a_code() {
        let errors = validate(AuthMode::Verify, &AuthForm::default());
        assert_eq!(
            errors.get("verification_code"),
            Some("Verification code is required")
        );
        let form = AuthForm {
            verification_code: "123456".into(),
            ..Default::default()
        };
        assert!(validate(AuthMode::Verify, &form).is_empty());
    }

    #[test]
    fn email_shape_check() {
        assert!(looks_like_email("alice@x.com"));
        assert!(looks_like_email("a.b@mail.example.org"));
        assert!(!looks_like_email("alice"));
        assert!(!looks_like_email("alice@nodot"));
        assert!(!looks_like_email("@x.com"));
        assert!(!looks_like_email("a lice@x.com"));
        assert!(!looks_like_email("alice@x.com."));
    }

    #[test]
    fn invalid_email_message() {
        let form = AuthForm {
            email: "not-an-email".into(),
            password: "password1".into(),
            ..Default::default()
        };
        let errors = validate(AuthMode::SignIn, &form);
        assert_eq!(errors.get("email"), Some("Email is invalid"));
    }

    #[test]
    fn mode_machine_transitions() {
        assert_eq!(AuthMode::SignIn.submit_outcome(), SubmitOutcome::Authenticated);
        assert_eq!(AuthMode::Verify.submit_outcome(), SubmitOutcome::Authenticated);
        assert_eq!(
            AuthMode::SignUp.submit_outcome(),
            SubmitOutcome::EmailSent {
                next: AuthMode::Verify,
                hold_ms: VERIFY_HOLD_MS
            }
        );
        assert_eq!(
            AuthMode::Forgot.submit_outcome(),
            SubmitOutcome::EmailSent {
                next: AuthMode::SignIn,
                hold_ms: RESET_HOLD_MS
            }
        );
    }

    #[test]
    fn clearing_a_field_error() {
        let mut errors = validate(AuthMode::SignUp, &AuthForm::default());
        assert!(errors.get("name").is_some());
        errors.clear("name");
        assert!(errors.get("name").is_none());
    }
}
