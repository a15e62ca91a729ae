use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::AuthSession;
use crate::models::{AuthMode, ValidationErrors};

#[derive(Properties, PartialEq)]
pub struct AuthModalProps {
    pub session: AuthSession,
    pub on_close: Callback<()>,
    pub on_set_mode: Callback<AuthMode>,
    pub on_edit: Callback<(String, String)>,
    pub on_submit: Callback<()>,
}

fn field_input(
    on_edit: &Callback<(String, String)>,
    field: &'static str,
) -> Callback<InputEvent> {
    let on_edit = on_edit.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_edit.emit((field.to_string(), input.value()));
    })
}

fn field_error(errors: &ValidationErrors, field: &str) -> Html {
    match errors.get(field) {
        Some(message) => html! { <p class="field-error">{message}</p> },
        None => html! {},
    }
}

#[function_component(AuthModal)]
pub fn auth_modal(props: &AuthModalProps) -> Html {
    let show_password = use_state(|| false);
    let mode = props.session.auth_mode;
    let form = &props.session.form;
    let errors = &props.session.errors;

    // Email-sent splash replaces the whole modal while it holds
    if props.session.email_sent {
        let (headline, detail) = match mode {
            AuthMode::Forgot => (
                "Reset Link Sent!",
                "Check your email for password reset instructions.",
            ),
            _ => (
                "Verification Email Sent!",
                "Please check your email and click the verification link to continue.",
            ),
        };
        return html! {
            <div class="modal-backdrop">
                <div class="auth-modal">
                    <div class="email-sent-splash">
                        <div class="splash-icon">{"✅"}</div>
                        <h2>{headline}</h2>
                        <p>{detail}</p>
                        <div class="spinner"></div>
                    </div>
                </div>
            </div>
        };
    }

    let on_submit = {
        let cb = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit(());
        })
    };

    let toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |_: MouseEvent| show_password.set(!*show_password))
    };

    let password_type = if *show_password { "text" } else { "password" };

    html! {
        <div class="modal-backdrop">
            <div class="auth-modal">
                <div class="modal-header">
                    <div class="modal-brand">
                        <span class="brand-icon">{"🛡️"}</span>
                        <h2>{mode.title()}</h2>
                    </div>
                    <button
                        type="button"
                        class="btn-close"
                        onclick={props.on_close.reform(|_| ())}
                    >{"✕"}</button>
                </div>

                <p class="modal-subtitle">{mode.subtitle()}</p>

                <form class="auth-form" onsubmit={on_submit}>
                    if mode == AuthMode::SignUp {
                        <div class="form-group">
                            <label for="name">{"Full Name *"}</label>
                            <input
                                type="text"
                                id="name"
                                placeholder="Enter your full name"
                                value={form.name.clone()}
                                oninput={field_input(&props.on_edit, "name")}
                            />
                            {field_error(errors, "name")}
                        </div>
                    }

                    if mode != AuthMode::Verify {
                        <div class="form-group">
                            <label for="email">{"Email Address *"}</label>
                            <input
                                type="email"
                                id="email"
                                placeholder="Enter your email"
                                value={form.email.clone()}
                                oninput={field_input(&props.on_edit, "email")}
                            />
                            {field_error(errors, "email")}
                        </div>
                    }

                    if mode == AuthMode::SignUp {
                        <div class="form-group">
                            <label for="phone">{"Phone Number *"}</label>
                            <input
                                type="tel"
                                id="phone"
                                placeholder="Enter your phone number"
                                value={form.phone.clone()}
                                oninput={field_input(&props.on_edit, "phone")}
                            />
                            {field_error(errors, "phone")}
                        </div>
                    }

                    if mode == AuthMode::Verify {
                        <div class="form-group">
                            <label for="verification-code">{"Verification Code *"}</label>
                            <input
                                type="text"
                                id="verification-code"
                                placeholder="Enter 6-digit code"
                                maxlength="6"
                                value={form.verification_code.clone()}
                                oninput={field_input(&props.on_edit, "verification_code")}
                            />
                            {field_error(errors, "verification_code")}
                        </div>
                    }

                    if matches!(mode, AuthMode::SignIn | AuthMode::SignUp) {
                        <div class="form-group">
                            <label for="password">{"Password *"}</label>
                            <div class="password-wrap">
                                <input
                                    type={password_type}
                                    id="password"
                                    placeholder="Enter your password"
                                    value={form.password.clone()}
                                    oninput={field_input(&props.on_edit, "password")}
                                />
                                <button
                                    type="button"
                                    class="btn-toggle-password"
                                    onclick={toggle_password}
                                >
                                    {if *show_password { "🙈" } else { "👁️" }}
                                </button>
                            </div>
                            {field_error(errors, "password")}
                        </div>
                    }

                    if mode == AuthMode::SignUp {
                        <div class="form-group">
                            <label for="confirm-password">{"Confirm Password *"}</label>
                            <input
                                type={password_type}
                                id="confirm-password"
                                placeholder="Confirm your password"
                                value={form.confirm_password.clone()}
                                oninput={field_input(&props.on_edit, "confirm_password")}
                            />
                            {field_error(errors, "confirm_password")}
                        </div>
                    }

                    <button
                        type="submit"
                        class="btn-submit"
                        disabled={props.session.is_loading}
                    >
                        if props.session.is_loading {
                            <span class="spinner small"></span>
                        } else {
                            {mode.submit_label()}
                        }
                    </button>
                </form>

                <div class="modal-footer">
                    {mode_switch_links(mode, &props.on_set_mode)}
                </div>

                if mode == AuthMode::SignUp {
                    <div class="signup-notice">
                        <p>
                            {"By creating an account, you agree to our Terms of Service and \
                              Privacy Policy. Email verification is required to activate your \
                              account."}
                        </p>
                    </div>
                }
            </div>
        </div>
    }
}

fn mode_switch_links(mode: AuthMode, on_set_mode: &Callback<AuthMode>) -> Html {
    let to = |target: AuthMode| on_set_mode.reform(move |_: MouseEvent| target);
    match mode {
        AuthMode::SignIn => html! {
            <>
                <button class="link" onclick={to(AuthMode::Forgot)}>
                    {"Forgot your password?"}
                </button>
                <p>
                    {"Don't have an account? "}
                    <button class="link" onclick={to(AuthMode::SignUp)}>{"Sign up"}</button>
                </p>
            </>
        },
        AuthMode::SignUp => html! {
            <p>
                {"Already have an account? "}
                <button class="link" onclick={to(AuthMode::SignIn)}>{"Sign in"}</button>
            </p>
        },
        AuthMode::Forgot => html! {
            <p>
                {"Remember your password? "}
                <button class="link" onclick={to(AuthMode::SignIn)}>{"Sign in"}</button>
            </p>
        },
        AuthMode::Verify => html! {
            <button class="link" onclick={to(AuthMode::SignUp)}>
                {"← Back to signup"}
            </button>
        },
    }
}
