use yew::prelude::*;

use crate::components::app::Page;
use crate::models::UserRecord;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub is_authenticated: bool,
    pub user: Option<UserRecord>,
    pub active_page: Page,
    pub on_nav: Callback<Page>,
    pub on_sign_in: Callback<()>,
    pub on_logout: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let nav_button = |page: Page, label: &str| {
        let on_nav = props.on_nav.clone();
        let active = props.active_page == page;
        html! {
            <button
                class={classes!("nav-link", active.then_some("active"))}
                onclick={Callback::from(move |_: MouseEvent| on_nav.emit(page))}
            >
                {label.to_string()}
            </button>
        }
    };

    html! {
        <header class="app-header">
            <div class="brand">
                <span class="brand-icon">{"🛡️"}</span>
                <span class="brand-name">{"CyberShield"}</span>
            </div>

            <nav class="main-nav">
                {nav_button(Page::Detection, "Detection")}
                if props.is_authenticated {
                    {nav_button(Page::Evidence, "Evidence")}
                    {nav_button(Page::Complaint, "Complaint")}
                    {nav_button(Page::Profile, "Profile")}
                }
            </nav>

            <div class="header-actions">
                if props.is_authenticated {
                    if let Some(user) = &props.user {
                        <span class="user-chip">{format!("👤 {}", user.name)}</span>
                    }
                    <button
                        class="btn-secondary"
                        onclick={props.on_logout.reform(|_: MouseEvent| ())}
                    >
                        {"Log Out"}
                    </button>
                } else {
                    <button
                        class="btn-submit"
                        onclick={props.on_sign_in.reform(|_: MouseEvent| ())}
                    >
                        {"Sign In"}
                    </button>
                }
            </div>
        </header>
    }
}
