//! Thumbnail Grid
//!
//! A row of thumbnails that opens the page's lightbox over the same list.

use energiya::lightbox::Lightbox;
use leptos::*;
use std::rc::Rc;

#[component]
pub fn ThumbGrid(
    /// Normalized URLs, in display order
    items: Vec<String>,
    /// Lightbox owned by the page
    viewer: RwSignal<Lightbox<String>>,
    /// Grid container class
    grid_class: &'static str,
    /// Class of each thumbnail
    thumb_class: &'static str,
    #[prop(default = "Image")]
    alt: &'static str,
) -> impl IntoView {
    let list = Rc::new(items);

    let thumbs = list
        .iter()
        .enumerate()
        .map(|(index, src)| {
            let list = Rc::clone(&list);
            view! {
                <img
                    src=src.clone()
                    class=thumb_class
                    alt=alt
                    on:click=move |_| viewer.update(|v| v.open(list.to_vec(), index))
                />
            }
        })
        .collect_view();

    view! { <div class=grid_class>{thumbs}</div> }
}
