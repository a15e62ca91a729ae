use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::{validate, AuthForm, AuthMode, SubmitOutcome, UserRecord, ValidationErrors};
use crate::services::auth;

/// Whole-session auth state: the authentication flag, the active user record
/// and the modal's current step. Held once at the app root and threaded down.
#[derive(Clone, PartialEq)]
pub struct AuthSession {
    pub is_authenticated: bool,
    pub user: Option<UserRecord>,
    pub auth_mode: AuthMode,
    pub show_modal: bool,
    pub form: AuthForm,
    pub errors: ValidationErrors,
    pub is_loading: bool,
    pub email_sent: bool,
}

impl Default for AuthSession {
    fn default() -> Self {
        Self {
            is_authenticated: false,
            user: None,
            auth_mode: AuthMode::SignIn,
            show_modal: false,
            form: AuthForm::default(),
            errors: ValidationErrors::default(),
            is_loading: false,
            email_sent: false,
        }
    }
}

/// State transitions. Async completions dispatch these against the live
/// state, so writes landing after a delay cannot restore stale fields.
pub enum AuthAction {
    OpenModal,
    CloseModal,
    SetMode(AuthMode),
    EditField { field: String, value: String },
    ValidationFailed(ValidationErrors),
    SubmitStarted,
    Authenticated(UserRecord),
    EmailSent,
    HoldElapsed { next_mode: AuthMode },
    Logout,
    SetUser(UserRecord),
}

impl Reducible for AuthSession {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: AuthAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            // Open always lands on sign-in with a blank form
            AuthAction::OpenModal => {
                next.show_modal = true;
                next.auth_mode = AuthMode::SignIn;
                next.form = AuthForm::default();
                next.errors = ValidationErrors::default();
                next.email_sent = false;
            }
            // Close discards any half-filled form and any pending hold
            AuthAction::CloseModal => {
                next.show_modal = false;
                next.form = AuthForm::default();
                next.errors = ValidationErrors::default();
                next.email_sent = false;
            }
            AuthAction::SetMode(mode) => {
                next.auth_mode = mode;
                next.errors = ValidationErrors::default();
            }
            AuthAction::EditField { field, value } => {
                next.form.set_field(&field, value);
                next.errors.clear(&field);
            }
            AuthAction::ValidationFailed(errors) => next.errors = errors,
            AuthAction::SubmitStarted => {
                next.is_loading = true;
                next.errors = ValidationErrors::default();
            }
            AuthAction::Authenticated(user) => {
                next.user = Some(user);
                next.is_authenticated = true;
                next.show_modal = false;
                next.is_loading = false;
                next.form = AuthForm::default();
                next.email_sent = false;
            }
            AuthAction::EmailSent => {
                next.email_sent = true;
                next.is_loading = false;
            }
            // A hold that elapses after the modal was closed is a no-op;
            // the dismissed modal must not come back.
            AuthAction::HoldElapsed { next_mode } => {
                if next.show_modal {
                    next.email_sent = false;
                    next.auth_mode = next_mode;
                }
            }
            AuthAction::Logout => {
                next.user = None;
                next.is_authenticated = false;
            }
            AuthAction::SetUser(user) => next.user = Some(user),
        }
        Rc::new(next)
    }
}

pub struct UseAuthHandle {
    pub state: UseReducerHandle<AuthSession>,
    pub open_modal: Callback<()>,
    pub close_modal: Callback<()>,
    pub set_mode: Callback<AuthMode>,
    pub edit_field: Callback<(String, String)>,
    pub submit: Callback<()>,
    pub logout: Callback<()>,
    pub set_user: Callback<UserRecord>,
}

#[hook]
pub fn use_auth() -> UseAuthHandle {
    let state = use_reducer(AuthSession::default);

    let open_modal = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(AuthAction::OpenModal))
    };

    let close_modal = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(AuthAction::CloseModal))
    };

    let set_mode = {
        let state = state.clone();
        Callback::from(move |mode: AuthMode| state.dispatch(AuthAction::SetMode(mode)))
    };

    let edit_field = {
        let state = state.clone();
        Callback::from(move |(field, value): (String, String)| {
            state.dispatch(AuthAction::EditField { field, value });
        })
    };

    // Submit: validate locally, then run the mock backend. At most one
    // submit is in flight; the button is disabled and re-entry ignored
    // while is_loading is set.
    let submit = {
        let state = state.clone();
        Callback::from(move |_| {
            let current = (*state).clone();
            if current.is_loading {
                return;
            }

            let errors = validate(current.auth_mode, &current.form);
            if !errors.is_empty() {
                state.dispatch(AuthAction::ValidationFailed(errors));
                return;
            }

            state.dispatch(AuthAction::SubmitStarted);

            let state = state.clone();
            spawn_local(async move {
                match auth::submit(current.auth_mode, &current.form).await {
                    SubmitOutcome::Authenticated => {
                        let user = auth::build_user(&current.form);
                        log::info!("✅ Authenticated: {}", user.email);
                        state.dispatch(AuthAction::Authenticated(user));
                    }
                    SubmitOutcome::EmailSent { next, hold_ms } => {
                        log::info!("📧 Email sent (simulated), advancing to {next:?}");
                        state.dispatch(AuthAction::EmailSent);

                        TimeoutFuture::new(hold_ms).await;
                        state.dispatch(AuthAction::HoldElapsed { next_mode: next });
                    }
                }
            });
        })
    };

    let logout = {
        let state = state.clone();
        Callback::from(move |_| {
            log::info!("👋 Logged out");
            state.dispatch(AuthAction::Logout);
        })
    };

    // Profile save pushes the updated record back into the session
    let set_user = {
        let state = state.clone();
        Callback::from(move |user: UserRecord| state.dispatch(AuthAction::SetUser(user)))
    };

    UseAuthHandle {
        state,
        open_modal,
        close_modal,
        set_mode,
        edit_field,
        submit,
        logout,
        set_user,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn dispatch(state: AuthSession, action: AuthAction) -> AuthSession {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn signup_hold_state() -> AuthSession {
        let state = dispatch(AuthSession::default(), AuthAction::OpenModal);
        let state = dispatch(state, AuthAction::SetMode(AuthMode::SignUp));
        dispatch(state, AuthAction::EmailSent)
    }

    #[test]
    fn hold_advances_the_open_modal() {
        let state = signup_hold_state();
        assert!(state.email_sent);
        let state = dispatch(
            state,
            AuthAction::HoldElapsed {
                next_mode: AuthMode::Verify,
            },
        );
        assert!(state.show_modal);
        assert!(!state.email_sent);
        assert_eq!(state.auth_mode, AuthMode::Verify);
    }

    #[test]
    fn closing_the_modal_discards_a_pending_hold() {
        let state = signup_hold_state();
        let state = dispatch(state, AuthAction::CloseModal);
        assert!(!state.email_sent);
        let state = dispatch(
            state,
            AuthAction::HoldElapsed {
                next_mode: AuthMode::Verify,
            },
        );
        assert!(!state.show_modal);
        assert!(!state.email_sent);
        assert_eq!(state.auth_mode, AuthMode::SignUp);
    }

    #[test]
    fn authentication_closes_the_modal_and_stores_the_user() {
        let state = dispatch(AuthSession::default(), AuthAction::OpenModal);
        let user = UserRecord::new(
            1,
            "Alice".into(),
            "alice@x.com".into(),
            "555-1111".into(),
            Utc::now(),
        );
        let state = dispatch(state, AuthAction::Authenticated(user));
        assert!(state.is_authenticated);
        assert!(!state.show_modal);
        assert_eq!(state.user.unwrap().email, "alice@x.com");
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let mut state = AuthSession::default();
        state.errors.set("email", "Email is required");
        let state = dispatch(
            state,
            AuthAction::EditField {
                field: "email".into(),
                value: "alice@x.com".into(),
            },
        );
        assert!(state.errors.get("email").is_none());
        assert_eq!(state.form.email, "alice@x.com");
    }

    #[test]
    fn logout_clears_the_session() {
        let user = UserRecord::new(
            1,
            "Alice".into(),
            "alice@x.com".into(),
            "555-1111".into(),
            Utc::now(),
        );
        let state = dispatch(AuthSession::default(), AuthAction::Authenticated(user));
        let state = dispatch(state, AuthAction::Logout);
        assert!(!state.is_authenticated);
        assert!(state.user.is_none());
    }
}
