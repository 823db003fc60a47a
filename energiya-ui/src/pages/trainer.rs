//! Trainer Page
//!
//! Profile, certificates (with their own lightbox), videos and the list of
//! lessons the trainer teaches.

use energiya::lightbox::Lightbox;
use energiya::pages::{trainer_view, PageState, TrainerView};
use leptos::*;
use leptos_router::*;

use crate::components::{InstaButton, LightboxView, Logo, NotFound, ThumbGrid};
use crate::state::use_site;

/// Trainer profile page
#[component]
pub fn TrainerPage() -> impl IntoView {
    let site = use_site();
    let params = use_params_map();

    let page = create_memo(move |_| {
        params.with(|p| {
            let id = p.get("id").map(String::as_str).unwrap_or_default();
            trainer_view(&site, id)
        })
    });

    // Certificates of one trainer are never shown on another's page
    let viewer = create_rw_signal(Lightbox::<String>::new());
    create_effect(move |_| {
        page.track();
        viewer.update(Lightbox::close);
    });

    move || match page.get() {
        PageState::Found(trainer) => view! { <TrainerProfile trainer=trainer viewer=viewer /> }.into_view(),
        PageState::NotFound => view! { <NotFound /> }.into_view(),
    }
}

#[component]
fn TrainerProfile(trainer: TrainerView, viewer: RwSignal<Lightbox<String>>) -> impl IntoView {
    let has_certs = trainer.has_certs();
    let has_videos = trainer.has_videos();

    view! {
        <div class="container animate-in">
            <Logo />
            <div class="profile-header">
                <img src=trainer.photo alt=trainer.name.clone() class="photo-large photo-glow-pulse" />
                <h1 class="glow-text">{trainer.name}</h1>
                <p class="role-text">{trainer.role}</p>
                {trainer.instagram.map(|url| view! { <InstaButton url=url text="Instagram" /> })}
            </div>

            {has_certs.then(|| view! {
                <div class="cert-section">
                    <h3 class="section-title">"📜 Сертифікати:"</h3>
                    <ThumbGrid
                        items=trainer.certs
                        viewer=viewer
                        grid_class="cert-grid"
                        thumb_class="cert-thumb"
                        alt="Cert"
                    />
                </div>
            })}

            {has_videos.then(|| view! {
                <div class="video-section">
                    <h3 class="section-title">"🎬 Відео:"</h3>
                    <div class="video-grid">
                        {trainer.videos.into_iter().map(|src| view! {
                            <video src=src controls=true preload="metadata" class="video-item"></video>
                        }).collect_view()}
                    </div>
                </div>
            })}

            <div class="lesson-list">
                <h3 class="section-title">"👉 Оберіть напрямок:"</h3>
                {trainer.lessons.into_iter().map(|lesson| view! {
                    <A href=lesson.href class="lesson-link-card">
                        <span class="link-title">{lesson.title}</span>
                        <span class="arrow-icon">"›"</span>
                    </A>
                }).collect_view()}
            </div>

            <A href="/" class="back-btn">"← На головну"</A>
            <LightboxView viewer=viewer />
        </div>
    }
}
