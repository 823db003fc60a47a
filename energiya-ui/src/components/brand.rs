//! Brand Components
//!
//! Studio logo and the Instagram link button.

use leptos::*;
use leptos_router::*;

/// Oval studio logo linking home
#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <div class="logo-wrapper">
            <A href="/">
                <img src="/images/logo_new.jpg" alt="Logo" class="logo-oval" />
            </A>
        </div>
    }
}

/// External Instagram profile button, opens in a new tab
#[component]
pub fn InstaButton(
    #[prop(into)]
    url: String,
    #[prop(into)]
    text: String,
) -> impl IntoView {
    view! {
        <a href=url target="_blank" rel="noopener noreferrer" class="insta-btn">
            <span class="insta-icon">"📸"</span>
            " "
            {text}
        </a>
    }
}
