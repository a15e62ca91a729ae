use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::{ComplaintDraft, ComplaintReceipt};
use crate::services::{ComplaintGateway, MockComplaintGateway};

#[derive(Clone, PartialEq, Default, Debug)]
pub struct ComplaintState {
    pub draft: ComplaintDraft,
    pub is_submitting: bool,
    pub receipt: Option<ComplaintReceipt>,
}

impl ComplaintState {
    /// Required fields filled and no submission in flight. Gates both the
    /// button and the callback.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting && self.draft.is_submittable()
    }
}

/// State transitions. The completion owns only the receipt and the
/// in-flight flag.
pub enum ComplaintAction {
    EditField { field: String, value: String },
    AddAttachments(Vec<String>),
    RemoveAttachment(usize),
    SubmitStarted,
    SubmitFinished(ComplaintReceipt),
    SubmitFailed,
    Reset,
}

impl Reducible for ComplaintState {
    type Action = ComplaintAction;

    fn reduce(self: Rc<Self>, action: ComplaintAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ComplaintAction::EditField { field, value } => next.draft.set_field(&field, value),
            ComplaintAction::AddAttachments(names) => next.draft.attachments.extend(names),
            ComplaintAction::RemoveAttachment(index) => {
                if index < next.draft.attachments.len() {
                    next.draft.attachments.remove(index);
                }
            }
            ComplaintAction::SubmitStarted => next.is_submitting = true,
            ComplaintAction::SubmitFinished(receipt) => {
                next.receipt = Some(receipt);
                next.is_submitting = false;
            }
            ComplaintAction::SubmitFailed => next.is_submitting = false,
            ComplaintAction::Reset => next = ComplaintState::default(),
        }
        Rc::new(next)
    }
}

pub struct UseComplaintHandle {
    pub state: UseReducerHandle<ComplaintState>,
    pub edit_field: Callback<(String, String)>,
    pub add_attachments: Callback<Vec<String>>,
    pub remove_attachment: Callback<usize>,
    pub submit: Callback<()>,
    /// Back from the confirmation view to a fresh form.
    pub reset: Callback<()>,
}

/// Complaint form instance. `notify_email` is where the simulated
/// confirmation goes (the signed-in user's address).
#[hook]
pub fn use_complaint(notify_email: String) -> UseComplaintHandle {
    let state = use_reducer(ComplaintState::default);

    let edit_field = {
        let state = state.clone();
        Callback::from(move |(field, value): (String, String)| {
            state.dispatch(ComplaintAction::EditField { field, value });
        })
    };

    let add_attachments = {
        let state = state.clone();
        Callback::from(move |names: Vec<String>| {
            state.dispatch(ComplaintAction::AddAttachments(names));
        })
    };

    let remove_attachment = {
        let state = state.clone();
        Callback::from(move |index: usize| {
            state.dispatch(ComplaintAction::RemoveAttachment(index));
        })
    };

    let submit = {
        let state = state.clone();
        Callback::from(move |_| {
            let current = (*state).clone();
            if !current.can_submit() {
                return;
            }

            state.dispatch(ComplaintAction::SubmitStarted);

            let state = state.clone();
            let notify_email = notify_email.clone();
            spawn_local(async move {
                match MockComplaintGateway::default()
                    .submit(&current.draft, &notify_email)
                    .await
                {
                    Ok(receipt) => state.dispatch(ComplaintAction::SubmitFinished(receipt)),
                    Err(e) => {
                        // The mock never fails, but the gateway contract can.
                        log::error!("❌ Complaint submission failed: {e}");
                        state.dispatch(ComplaintAction::SubmitFailed);
                    }
                }
            });
        })
    };

    let reset = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(ComplaintAction::Reset))
    };

    UseComplaintHandle {
        state,
        edit_field,
        add_attachments,
        remove_attachment,
        submit,
        reset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn dispatch(state: ComplaintState, action: ComplaintAction) -> ComplaintState {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn filled_draft_state() -> ComplaintState {
        let state = dispatch(
            ComplaintState::default(),
            ComplaintAction::EditField {
                field: "category".into(),
                value: "phishing".into(),
            },
        );
        let state = dispatch(
            state,
            ComplaintAction::EditField {
                field: "subject".into(),
                value: "Suspicious bank email".into(),
            },
        );
        dispatch(
            state,
            ComplaintAction::EditField {
                field: "description".into(),
                value: "Asked for my card PIN".into(),
            },
        )
    }

    #[test]
    fn submission_in_flight_blocks_a_second() {
        let state = filled_draft_state();
        assert!(state.can_submit());
        let state = dispatch(state, ComplaintAction::SubmitStarted);
        assert!(!state.can_submit());
    }

    #[test]
    fn empty_draft_cannot_be_submitted() {
        assert!(!ComplaintState::default().can_submit());
    }

    #[test]
    fn finished_submission_stores_the_receipt() {
        let state = dispatch(filled_draft_state(), ComplaintAction::SubmitStarted);
        let receipt = ComplaintReceipt {
            tracking_id: "CMP-2026-042".into(),
            submitted_at: Utc::now(),
        };
        let state = dispatch(state, ComplaintAction::SubmitFinished(receipt));
        assert!(!state.is_submitting);
        assert_eq!(state.receipt.unwrap().tracking_id, "CMP-2026-042");
    }

    #[test]
    fn reset_returns_to_a_fresh_form() {
        let state = dispatch(filled_draft_state(), ComplaintAction::SubmitStarted);
        let state = dispatch(state, ComplaintAction::Reset);
        assert_eq!(state, ComplaintState::default());
    }

    #[test]
    fn attachments_add_and_remove_by_index() {
        let state = dispatch(
            ComplaintState::default(),
            ComplaintAction::AddAttachments(vec!["shot.png".into(), "mail.eml".into()]),
        );
        let state = dispatch(state, ComplaintAction::RemoveAttachment(0));
        assert_eq!(state.draft.attachments, vec!["mail.eml".to_string()]);
        // Out-of-range removal is ignored
        let state = dispatch(state, ComplaintAction::RemoveAttachment(5));
        assert_eq!(state.draft.attachments.len(), 1);
    }
}
