use yew::prelude::*;

use super::{AuthModal, ComplaintForm, DetectionTool, EvidenceAnalysis, Header, UserProfile};
use crate::hooks::use_auth;

/// Pages the header can switch between. Evidence, complaint and profile
/// render nothing unless a session is authenticated.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Page {
    Detection,
    Evidence,
    Complaint,
    Profile,
}

#[function_component(App)]
pub fn app() -> Html {
    let auth = use_auth();
    let session = (*auth.state).clone();
    let page = use_state(|| Page::Detection);

    let on_nav = {
        let page = page.clone();
        Callback::from(move |target: Page| page.set(target))
    };

    // Leaving an authenticated page on logout falls back to detection
    let on_logout = {
        let logout = auth.logout.clone();
        let page = page.clone();
        Callback::from(move |_| {
            page.set(Page::Detection);
            logout.emit(());
        })
    };

    let content = match (*page, session.is_authenticated, session.user.clone()) {
        (Page::Detection, _, _) => html! { <DetectionTool /> },
        (Page::Evidence, true, Some(_)) => html! { <EvidenceAnalysis /> },
        (Page::Complaint, true, Some(user)) => html! { <ComplaintForm {user} /> },
        (Page::Profile, true, Some(user)) => {
            let on_save = auth.set_user.clone();
            html! { <UserProfile {user} {on_save} /> }
        }
        // Route guard: authenticated pages render nothing without a session.
        _ => html! {},
    };

    html! {
        <div class="app">
            <Header
                is_authenticated={session.is_authenticated}
                user={session.user.clone()}
                active_page={*page}
                on_nav={on_nav}
                on_sign_in={auth.open_modal.clone()}
                on_logout={on_logout}
            />

            <main class="app-main">
                {content}
            </main>

            if session.show_modal {
                <AuthModal
                    session={session.clone()}
                    on_close={auth.close_modal.clone()}
                    on_set_mode={auth.set_mode.clone()}
                    on_edit={auth.edit_field.clone()}
                    on_submit={auth.submit.clone()}
                />
            }
        </div>
    }
}
