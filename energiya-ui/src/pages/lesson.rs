//! Lesson Page
//!
//! Schedule and prices of one lesson, with a short trainer brief.

use energiya::pages::{lesson_view, LessonView, PageState};
use leptos::*;
use leptos_router::*;

use crate::components::{InstaButton, Logo, NotFound};
use crate::state::use_site;

/// Lesson details page
#[component]
pub fn LessonPage() -> impl IntoView {
    let site = use_site();
    let params = use_params_map();

    let page = create_memo(move |_| {
        params.with(|p| {
            let trainer_id = p.get("trainerId").map(String::as_str).unwrap_or_default();
            let title = p.get("lessonTitle").map(String::as_str).unwrap_or_default();
            lesson_view(&site, trainer_id, title)
        })
    });

    move || match page.get() {
        PageState::Found(lesson) => view! { <LessonDetails lesson=lesson /> }.into_view(),
        PageState::NotFound => view! { <NotFound /> }.into_view(),
    }
}

#[component]
fn LessonDetails(lesson: LessonView) -> impl IntoView {
    view! {
        <div class="container animate-in">
            <Logo />
            <div class="trainer-brief">
                <img src=lesson.trainer_photo alt=lesson.trainer_name.clone() class="photo-large photo-glow-pulse" />
                <p class="trainer-name-label">"Викладач: "{lesson.trainer_name}</p>
                {lesson.instagram.map(|url| view! { <InstaButton url=url text="Instagram" /> })}
            </div>

            <h2 class="glow-text">{lesson.title}</h2>

            <div class="schedule-box">
                <h3 class="section-title">"🗓️ Розклад занять:"</h3>
                {lesson.details.into_iter().map(|line| view! {
                    <div class="schedule-item">{line}</div>
                }).collect_view()}
            </div>

            {lesson.prices.map(|prices| view! {
                <div class="price-section">
                    <h3 class="section-title">"💰 Вартість:"</h3>
                    {prices.into_iter().map(|line| view! {
                        <div class="price-row">{line}</div>
                    }).collect_view()}
                </div>
            })}

            <A href=lesson.back_href class="back-btn">"← Назад"</A>
        </div>
    }
}
