//! App Root Component
//!
//! Route table, site document provider and the decorative background.

use energiya::routes::is_admin_path;
use leptos::*;
use leptos_router::*;

use crate::components::NotFound;
use crate::pages::{Home, LessonPage, TrainerPage};
use crate::state::{init_identity_redirect, provide_site};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // The content editor owns everything under /admin
    let pathname = window().location().pathname().unwrap_or_default();
    if is_admin_path(&pathname) {
        return ().into_view();
    }

    provide_site();
    init_identity_redirect();

    view! {
        <Router>
            <ScrollToTop />
            <div class="bg-photo" style="background-image: url(/images/background.jpg)"></div>
            <div class="energy-orb orb-1"></div>
            <div class="energy-orb orb-2"></div>
            <div class="energy-orb orb-3"></div>

            <Routes>
                <Route path="/" view=Home />
                <Route path="/trainer/:id" view=TrainerPage />
                <Route path="/trainer/:trainerId/lesson/:lessonTitle" view=LessonPage />
                <Route path="/*any" view=NotFound />
            </Routes>
        </Router>
    }
    .into_view()
}

/// Jump to the top of the page on every navigation
#[component]
fn ScrollToTop() -> impl IntoView {
    let location = use_location();

    create_effect(move |_| {
        location.pathname.track();
        window().scroll_to_with_x_and_y(0.0, 0.0);
    });
}
