//! Home Page
//!
//! Studio overview: trainers, achievements, a shuffled gallery and contacts.

use energiya::lightbox::Lightbox;
use energiya::pages::{home_view, shuffle, TrainerCard};
use leptos::*;
use leptos_router::*;

use crate::components::{InstaButton, LightboxView, Logo, ThumbGrid};
use crate::state::use_site;

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    let site = use_site();
    let home = home_view(&site);

    // One viewer for both lists; opening either replaces its contents
    let viewer = create_rw_signal(Lightbox::<String>::new());

    // Shuffled once per visit; the lightbox cycles in the order shown
    let mut gallery = home.gallery;
    shuffle(&mut gallery, random_below);

    view! {
        <div class="container animate-in">
            <Logo />
            <h1 class="glow-text studio-title">{home.title}</h1>

            <div class="home-insta-row">
                {home.socials.into_iter().map(|social| view! {
                    <InstaButton url=social.url text=social.label />
                }).collect_view()}
            </div>

            <p class="studio-description">{home.description}</p>

            <div class="grid">
                {home.trainers.into_iter().map(|card| view! { <TrainerTile card=card /> }).collect_view()}
            </div>

            {(!home.achievements.is_empty()).then(|| view! {
                <section class="home-section">
                    <h2 class="section-title">"🏆 Наші досягнення"</h2>
                    <ThumbGrid
                        items=home.achievements
                        viewer=viewer
                        grid_class="achievements-container"
                        thumb_class="cup-img"
                        alt="Cup"
                    />
                </section>
            })}

            {(!gallery.is_empty()).then(|| view! {
                <section class="home-section">
                    <h2 class="section-title">"📸 Життя студії"</h2>
                    <ThumbGrid
                        items=gallery
                        viewer=viewer
                        grid_class="gallery-grid"
                        thumb_class="gallery-thumb"
                        alt="Studio"
                    />
                </section>
            })}

            {home.location.map(|location| view! {
                <footer class="footer">
                    <p>"📍 "{location.address_text}</p>
                    {(!location.map_link.is_empty()).then(|| view! {
                        <a href=location.map_link target="_blank" rel="noopener noreferrer" class="map-btn">
                            "🗺️ Карта"
                        </a>
                    })}
                </footer>
            })}

            <LightboxView viewer=viewer />
        </div>
    }
}

/// Trainer card linking to the profile
#[component]
fn TrainerTile(card: TrainerCard) -> impl IntoView {
    view! {
        <A href=card.href class="trainer-card">
            <img src=card.photo alt=card.name.clone() class="photo-thumb photo-glow-static" />
            <h3>{card.name}</h3>
            <p class="trainer-role-small">{card.role}</p>
            <p class="more-link">"Детальніше →"</p>
        </A>
    }
}

fn random_below(n: usize) -> usize {
    (js_sys::Math::random() * n as f64) as usize
}
