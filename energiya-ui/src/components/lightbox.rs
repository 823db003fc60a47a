//! Lightbox Component
//!
//! Full-screen viewer over a list of image or video URLs. The owning page
//! keeps the state in a signal; this component only renders it.

use energiya::assets::is_video;
use energiya::lightbox::Lightbox;
use leptos::*;

/// Overlay for the viewer state; renders nothing while closed.
///
/// Clicking the dark background closes it, clicks on the media and the
/// arrows do not reach the background. Escape and the arrow keys work too.
#[component]
pub fn LightboxView(viewer: RwSignal<Lightbox<String>>) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |ev| {
        if !viewer.with_untracked(Lightbox::is_open) {
            return;
        }
        match ev.key().as_str() {
            "Escape" => viewer.update(Lightbox::close),
            "ArrowRight" => viewer.update(Lightbox::next),
            "ArrowLeft" => viewer.update(Lightbox::prev),
            _ => {}
        }
    });
    on_cleanup(move || handle.remove());

    let close = move |_: ev::MouseEvent| viewer.update(Lightbox::close);
    let next = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        viewer.update(Lightbox::next);
    };
    let prev = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        viewer.update(Lightbox::prev);
    };

    move || {
        viewer.with(|v| {
            let src = v.current_item()?.clone();
            let counter = v.counter().unwrap_or_default();
            let media = if is_video(&src) {
                view! { <video src=src controls=true autoplay=true class="lightbox-img"></video> }
                    .into_view()
            } else {
                view! { <img src=src alt="View" class="lightbox-img" /> }.into_view()
            };

            Some(view! {
                <div class="lightbox-overlay" on:click=close>
                    <button class="close-btn" on:click=close>"×"</button>
                    <div class="lightbox-container" on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                        <button class="nav-btn left" on:click=prev>"‹"</button>
                        {media}
                        <button class="nav-btn right" on:click=next>"›"</button>
                    </div>
                    <div class="lightbox-counter">{counter}</div>
                </div>
            })
        })
    }
}
