use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::{ProfileForm, UserRecord};
use crate::services::profile::save_profile;
use crate::utils::constants::SAVE_BANNER_MS;

#[derive(Clone, PartialEq, Default)]
pub struct ProfileState {
    pub form: ProfileForm,
    pub is_editing: bool,
    pub is_saving: bool,
    pub save_success: bool,
}

/// State transitions. Async completions dispatch these against the live
/// state instead of rebuilding it from the snapshot captured at click time.
pub enum ProfileAction {
    StartEdit { form: ProfileForm },
    EditField { field: String, value: String },
    SaveStarted,
    SaveFinished,
    BannerElapsed,
    Cancel { form: ProfileForm },
}

impl Reducible for ProfileState {
    type Action = ProfileAction;

    fn reduce(self: Rc<Self>, action: ProfileAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ProfileAction::StartEdit { form } => {
                next.form = form;
                next.is_editing = true;
            }
            ProfileAction::EditField { field, value } => next.form.set_field(&field, value),
            ProfileAction::SaveStarted => next.is_saving = true,
            ProfileAction::SaveFinished => {
                next.is_editing = false;
                next.is_saving = false;
                next.save_success = true;
            }
            // Owns only the banner flag; editing state stays as it is.
            ProfileAction::BannerElapsed => next.save_success = false,
            ProfileAction::Cancel { form } => {
                next.form = form;
                next.is_editing = false;
            }
        }
        Rc::new(next)
    }
}

pub struct UseProfileHandle {
    pub state: UseReducerHandle<ProfileState>,
    pub start_edit: Callback<()>,
    pub edit_field: Callback<(String, String)>,
    pub save: Callback<()>,
    pub cancel: Callback<()>,
}

/// Profile page state. `on_save` pushes the merged record back to the
/// session; the success banner clears itself after a fixed delay.
#[hook]
pub fn use_profile(user: UserRecord, on_save: Callback<UserRecord>) -> UseProfileHandle {
    let state = use_reducer(|| ProfileState {
        form: ProfileForm::from_user(&user),
        ..Default::default()
    });

    let start_edit = {
        let state = state.clone();
        let user = user.clone();
        Callback::from(move |_| {
            state.dispatch(ProfileAction::StartEdit {
                form: ProfileForm::from_user(&user),
            });
        })
    };

    let edit_field = {
        let state = state.clone();
        Callback::from(move |(field, value): (String, String)| {
            state.dispatch(ProfileAction::EditField { field, value });
        })
    };

    let save = {
        let state = state.clone();
        let user = user.clone();
        let on_save = on_save.clone();
        Callback::from(move |_| {
            let current = (*state).clone();
            if current.is_saving {
                return;
            }
            state.dispatch(ProfileAction::SaveStarted);

            let state = state.clone();
            let user = user.clone();
            let on_save = on_save.clone();
            spawn_local(async move {
                let updated = save_profile(&user, &current.form).await;
                on_save.emit(updated);
                state.dispatch(ProfileAction::SaveFinished);

                TimeoutFuture::new(SAVE_BANNER_MS).await;
                state.dispatch(ProfileAction::BannerElapsed);
            });
        })
    };

    // Discard edits, restore the record's values
    let cancel = {
        let state = state.clone();
        Callback::from(move |_| {
            state.dispatch(ProfileAction::Cancel {
                form: ProfileForm::from_user(&user),
            });
        })
    };

    UseProfileHandle {
        state,
        start_edit,
        edit_field,
        save,
        cancel,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatch(state: ProfileState, action: ProfileAction) -> ProfileState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn save_flow_leaves_edit_mode_and_raises_banner() {
        let state = ProfileState {
            is_editing: true,
            ..Default::default()
        };
        let state = dispatch(state, ProfileAction::SaveStarted);
        assert!(state.is_saving);
        let state = dispatch(state, ProfileAction::SaveFinished);
        assert!(!state.is_editing);
        assert!(!state.is_saving);
        assert!(state.save_success);
    }

    #[test]
    fn banner_clear_does_not_reenter_edit_mode() {
        let state = ProfileState {
            is_editing: true,
            ..Default::default()
        };
        let state = dispatch(state, ProfileAction::SaveFinished);
        let state = dispatch(state, ProfileAction::BannerElapsed);
        assert!(!state.save_success);
        assert!(!state.is_editing);
    }

    #[test]
    fn cancel_restores_the_given_form() {
        let mut state = ProfileState {
            is_editing: true,
            ..Default::default()
        };
        state.form.set_field("name", "Typo".into());
        let restored = ProfileForm {
            name: "Alice".into(),
            ..Default::default()
        };
        let state = dispatch(state, ProfileAction::Cancel { form: restored });
        assert!(!state.is_editing);
        assert_eq!(state.form.name, "Alice");
    }
}
