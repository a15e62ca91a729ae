use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::hooks::use_profile;
use crate::models::UserRecord;

#[derive(Properties, PartialEq)]
pub struct UserProfileProps {
    pub user: UserRecord,
    pub on_save: Callback<UserRecord>,
}

/// Profile page: read-only view with an edit mode whose save is a mock
/// round-trip back into the session.
#[function_component(UserProfile)]
pub fn user_profile(props: &UserProfileProps) -> Html {
    let profile = use_profile(props.user.clone(), props.on_save.clone());
    let state = (*profile.state).clone();
    let user = &props.user;

    let text_input = |field: &'static str| {
        let edit = profile.edit_field.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            edit.emit((field.to_string(), input.value()));
        })
    };

    let on_bio_input = {
        let edit = profile.edit_field.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            edit.emit(("bio".to_string(), area.value()));
        })
    };

    let on_start_edit = profile.start_edit.reform(|_: MouseEvent| ());
    let on_cancel = profile.cancel.reform(|_: MouseEvent| ());
    let on_save = profile.save.reform(|_: MouseEvent| ());

    html! {
        <section class="user-profile">
            if state.save_success {
                <div class="save-banner">
                    {"✅ Profile updated successfully!"}
                </div>
            }

            <div class="profile-card">
                <div class="profile-header">
                    <div class="avatar">{"👤"}</div>
                    <div class="profile-identity">
                        <h1>{user.name.clone()}</h1>
                        <p>{user.email.clone()}</p>
                        <p class="member-since">
                            {format!("Member since {}", user.join_date.format("%-m/%-d/%Y"))}
                        </p>
                        if user.is_verified {
                            <span class="verified-badge">{"✅ Verified Account"}</span>
                        }
                    </div>
                </div>

                if state.is_editing {
                    <div class="profile-edit">
                        <div class="form-group">
                            <label for="profile-name">{"Full Name"}</label>
                            <input
                                type="text"
                                id="profile-name"
                                value={state.form.name.clone()}
                                oninput={text_input("name")}
                            />
                        </div>
                        <div class="form-group">
                            <label for="profile-email">{"Email Address"}</label>
                            <input
                                type="email"
                                id="profile-email"
                                value={state.form.email.clone()}
                                oninput={text_input("email")}
                            />
                        </div>
                        <div class="form-group">
                            <label for="profile-phone">{"Phone Number"}</label>
                            <input
                                type="tel"
                                id="profile-phone"
                                value={state.form.phone.clone()}
                                oninput={text_input("phone")}
                            />
                        </div>
                        <div class="form-group">
                            <label for="profile-bio">{"Bio"}</label>
                            <textarea
                                id="profile-bio"
                                rows="3"
                                placeholder="Tell us a little about yourself"
                                value={state.form.bio.clone()}
                                oninput={on_bio_input}
                            />
                        </div>
                        <div class="button-row">
                            <button
                                class="btn-submit"
                                disabled={state.is_saving}
                                onclick={on_save}
                            >
                                if state.is_saving { {"Saving..."} } else { {"💾 Save"} }
                            </button>
                            <button
                                class="btn-secondary"
                                disabled={state.is_saving}
                                onclick={on_cancel}
                            >
                                {"Cancel"}
                            </button>
                        </div>
                    </div>
                } else {
                    <div class="profile-view">
                        <div class="profile-row">
                            <span class="row-label">{"📞 Phone"}</span>
                            <span>{user.phone.clone()}</span>
                        </div>
                        <div class="profile-row">
                            <span class="row-label">{"📝 Bio"}</span>
                            <span>{user.bio.clone().unwrap_or_else(|| "Not provided".to_string())}</span>
                        </div>
                        <button class="btn-submit" onclick={on_start_edit}>
                            {"✏️ Edit Profile"}
                        </button>
                    </div>
                }
            </div>
        </section>
    }
}
