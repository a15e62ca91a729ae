use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::hooks::use_complaint;
use crate::models::complaint::CATEGORIES;
use crate::models::{ContactMethod, Priority, UserRecord};

#[derive(Properties, PartialEq)]
pub struct ComplaintFormProps {
    pub user: UserRecord,
}

/// Complaint filing form with a confirmation view once the mock submission
/// hands back a tracking id.
#[function_component(ComplaintForm)]
pub fn complaint_form(props: &ComplaintFormProps) -> Html {
    let complaint = use_complaint(props.user.email.clone());
    let state = (*complaint.state).clone();

    // Confirmation view
    if let Some(receipt) = &state.receipt {
        let on_reset = complaint.reset.reform(|_: MouseEvent| ());
        return html! {
            <section class="complaint-form">
                <div class="complaint-confirmation">
                    <div class="splash-icon">{"✅"}</div>
                    <h2>{"Complaint Submitted Successfully!"}</h2>
                    <p>{"Your complaint has been received and assigned tracking ID:"}</p>
                    <div class="tracking-id">{receipt.tracking_id.clone()}</div>
                    <div class="next-steps">
                        <h3>{"What happens next?"}</h3>
                        <p>{format!("📧 Confirmation email sent to {}", props.user.email)}</p>
                        <p>{"⏱️ Initial review within 24 hours"}</p>
                        <p>{"🛡️ Our security team will investigate your report"}</p>
                    </div>
                    <button class="btn-submit" onclick={on_reset}>
                        {"File Another Complaint"}
                    </button>
                </div>
            </section>
        };
    }

    let on_select_change = {
        let edit = complaint.edit_field.clone();
        move |field: &'static str| {
            let edit = edit.clone();
            Callback::from(move |e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                edit.emit((field.to_string(), select.value()));
            })
        }
    };

    let on_contact_change = {
        let edit = complaint.edit_field.clone();
        Callback::from(move |e: Event| {
            let radio: HtmlInputElement = e.target_unchecked_into();
            edit.emit(("contact_method".to_string(), radio.value()));
        })
    };

    let on_subject_input = {
        let edit = complaint.edit_field.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            edit.emit(("subject".to_string(), input.value()));
        })
    };

    let on_description_input = {
        let edit = complaint.edit_field.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            edit.emit(("description".to_string(), area.value()));
        })
    };

    let on_attach = {
        let add = complaint.add_attachments.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(files) = input.files() else { return };
            let names: Vec<String> = (0..files.length())
                .filter_map(|i| files.get(i))
                .map(|file| file.name())
                .collect();
            if !names.is_empty() {
                add.emit(names);
            }
        })
    };

    let on_submit = {
        let submit = complaint.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    let attachments = state.draft.attachments.iter().enumerate().map(|(index, name)| {
        let on_remove = {
            let remove = complaint.remove_attachment.clone();
            Callback::from(move |_: MouseEvent| remove.emit(index))
        };
        html! {
            <li class="attachment-row" key={format!("{index}-{name}")}>
                <span>{format!("📎 {name}")}</span>
                <button type="button" class="btn-remove" onclick={on_remove}>{"✕"}</button>
            </li>
        }
    });

    html! {
        <section class="complaint-form">
            <div class="section-header">
                <h1>{"📋 File a Complaint"}</h1>
                <p>{"Report a cyber incident and our security team will follow up"}</p>
            </div>

            <form onsubmit={on_submit}>
                <div class="form-group">
                    <label for="category">{"Category *"}</label>
                    <select
                        id="category"
                        onchange={on_select_change("category")}
                    >
                        <option value="" selected={state.draft.category.is_empty()}>
                            {"Select a category"}
                        </option>
                        { for CATEGORIES.iter().map(|category| html! {
                            <option
                                value={category.value}
                                selected={state.draft.category == category.value}
                            >
                                {format!("{} {}", category.icon, category.label)}
                            </option>
                        }) }
                    </select>
                </div>

                <div class="form-group">
                    <label for="subject">{"Subject *"}</label>
                    <input
                        type="text"
                        id="subject"
                        placeholder="Brief summary of the incident"
                        value={state.draft.subject.clone()}
                        oninput={on_subject_input}
                    />
                </div>

                <div class="form-group">
                    <label for="description">{"Description *"}</label>
                    <textarea
                        id="description"
                        rows="5"
                        placeholder="Describe what happened, when, and any details that may help"
                        value={state.draft.description.clone()}
                        oninput={on_description_input}
                    />
                </div>

                <div class="form-group">
                    <label for="priority">{"Priority"}</label>
                    <select id="priority" onchange={on_select_change("priority")}>
                        { for Priority::ALL.iter().map(|priority| html! {
                            <option
                                value={priority.as_str()}
                                selected={state.draft.priority == *priority}
                            >
                                {format!("{} - {}", priority.label(), priority.description())}
                            </option>
                        }) }
                    </select>
                </div>

                <div class="form-group">
                    <label>{"Preferred Contact Method"}</label>
                    <div class="radio-row">
                        <label>
                            <input
                                type="radio"
                                name="contact_method"
                                value="email"
                                checked={state.draft.contact_method == ContactMethod::Email}
                                onchange={on_contact_change.clone()}
                            />
                            {format!(" Email ({})", props.user.email)}
                        </label>
                        <label>
                            <input
                                type="radio"
                                name="contact_method"
                                value="phone"
                                checked={state.draft.contact_method == ContactMethod::Phone}
                                onchange={on_contact_change}
                            />
                            {format!(" Phone ({})", props.user.phone)}
                        </label>
                    </div>
                </div>

                <div class="form-group">
                    <label for="complaint-attachments">{"Attachments"}</label>
                    <input
                        type="file"
                        id="complaint-attachments"
                        multiple=true
                        onchange={on_attach}
                    />
                    if !state.draft.attachments.is_empty() {
                        <ul class="attachment-list">
                            { for attachments }
                        </ul>
                    }
                </div>

                <button
                    type="submit"
                    class="btn-submit"
                    disabled={!state.can_submit()}
                >
                    if state.is_submitting {
                        {"Submitting..."}
                    } else {
                        {"Submit Complaint"}
                    }
                </button>
            </form>
        </section>
    }
}
