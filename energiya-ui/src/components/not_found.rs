//! Not Found Component
//!
//! Shown when a route parameter does not resolve to a trainer or lesson.

use leptos::*;
use leptos_router::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="container">
            <h2>"Не знайдено"</h2>
            <A href="/" class="back-btn">"На головну"</A>
        </div>
    }
}
