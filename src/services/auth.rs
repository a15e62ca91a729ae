use chrono::Utc;
use gloo_timers::future::TimeoutFuture;

use crate::models::{AuthForm, AuthMode, SubmitOutcome, UserRecord};
use crate::utils::constants::AUTH_SUBMIT_DELAY_MS;

/// Simulated auth backend. Always succeeds after a fixed delay; the only
/// failure path for authentication is local validation, which the hook
/// checks before ever calling this.
pub async fn submit(mode: AuthMode, form: &AuthForm) -> SubmitOutcome {
    log::info!("🔐 Submitting {:?} for {}", mode, form.email);
    TimeoutFuture::new(AUTH_SUBMIT_DELAY_MS).await;
    mode.submit_outcome()
}

/// Synthesize the account record handed to the session once a sign-in or
/// verification completes. Id is the creation timestamp in milliseconds.
pub fn build_user(form: &AuthForm) -> UserRecord {
    let now = Utc::now();
    let name = if form.name.trim().is_empty() {
        "User".to_string()
    } else {
        form.name.clone()
    };
    let user = UserRecord::new(now.timestamp_millis(), name, form.email.clone(), form.phone.clone(), now);
    if let Ok(payload) = serde_json::to_string(&user) {
        log::debug!("Session user payload: {payload}");
    }
    user
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_user_defaults_missing_name() {
        let form = AuthForm {
            email: "alice@x.com".into(),
            ..Default::default()
        };
        let user = build_user(&form);
        assert_eq!(user.name, "User");
        assert_eq!(user.email, "alice@x.com");
        assert!(user.is_verified);
    }

    #[test]
    fn built_user_keeps_signup_fields() {
        let form = AuthForm {
            name: "Alice".into(),
            email: "alice@x.com".into(),
            phone: "555-1111".into(),
            ..Default::default()
        };
        let user = build_user(&form);
        assert_eq!(user.name, "Alice");
        assert_eq!(user.phone, "555-1111");
        assert_eq!(user.id, user.join_date.timestamp_millis());
    }
}
