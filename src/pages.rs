//! Page view models
//!
//! Each page is a pure function of the route parameters and the site
//! document. The UI renders these; the CLI prints them.

use serde::Serialize;

use crate::routes::Route;
use crate::site::{
    find_trainer, find_trainer_lesson, lesson_path, trainer_path, Location, SiteDocument,
    SocialLink, Trainer,
};

/// Outcome of resolving a page's route parameters
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "view", rename_all = "snake_case")]
pub enum PageState<T> {
    Found(T),
    NotFound,
}

impl<T> PageState<T> {
    pub fn found(self) -> Option<T> {
        match self {
            PageState::Found(view) => Some(view),
            PageState::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, PageState::Found(_))
    }
}

impl<T> From<Option<T>> for PageState<T> {
    fn from(value: Option<T>) -> Self {
        value.map(PageState::Found).unwrap_or(PageState::NotFound)
    }
}

/// Trainer tile on the home page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainerCard {
    pub id: String,
    pub name: String,
    pub role: String,
    pub photo: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeView {
    pub title: String,
    pub description: String,
    pub socials: Vec<SocialLink>,
    pub trainers: Vec<TrainerCard>,
    pub achievements: Vec<String>,
    pub gallery: Vec<String>,
    pub location: Option<Location>,
}

/// Link to one lesson from a trainer profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LessonLink {
    pub title: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainerView {
    pub id: String,
    pub name: String,
    pub role: String,
    pub photo: String,
    pub instagram: Option<String>,
    /// Empty when the trainer has no certificates; the section is hidden
    pub certs: Vec<String>,
    pub videos: Vec<String>,
    pub lessons: Vec<LessonLink>,
}

impl TrainerView {
    pub fn has_certs(&self) -> bool {
        !self.certs.is_empty()
    }

    pub fn has_videos(&self) -> bool {
        !self.videos.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LessonView {
    pub trainer_id: String,
    pub trainer_name: String,
    pub trainer_photo: String,
    pub instagram: Option<String>,
    pub title: String,
    pub details: Vec<String>,
    pub prices: Option<Vec<String>>,
    /// Back link to the trainer profile
    pub back_href: String,
}

/// Any renderable page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum Page {
    Home(HomeView),
    Trainer(PageState<TrainerView>),
    Lesson(PageState<LessonView>),
    /// Content editor area; the app renders nothing
    Admin,
    NotFound,
}

pub fn home_view(doc: &SiteDocument) -> HomeView {
    HomeView {
        title: doc.title().to_string(),
        description: doc.description.clone(),
        socials: doc.socials.clone(),
        trainers: doc.trainers.iter().map(trainer_card).collect(),
        achievements: doc.achievement_urls(),
        gallery: doc.gallery_urls(),
        location: doc.location.clone(),
    }
}

fn trainer_card(trainer: &Trainer) -> TrainerCard {
    TrainerCard {
        id: trainer.id.clone(),
        name: trainer.name.clone(),
        role: trainer.role.clone(),
        photo: trainer.photo_url(),
        href: trainer_path(&trainer.id),
    }
}

pub fn trainer_view(doc: &SiteDocument, id: &str) -> PageState<TrainerView> {
    find_trainer(doc, id)
        .map(|trainer| TrainerView {
            id: trainer.id.clone(),
            name: trainer.name.clone(),
            role: trainer.role.clone(),
            photo: trainer.photo_url(),
            instagram: trainer.instagram().map(str::to_string),
            certs: trainer.cert_urls(),
            videos: trainer.video_urls(),
            lessons: trainer
                .schedule
                .iter()
                .map(|lesson| LessonLink {
                    title: lesson.title.clone(),
                    href: lesson_path(&trainer.id, &lesson.title),
                })
                .collect(),
        })
        .into()
}

/// `raw_title` is the route parameter as it appears in the URL
pub fn lesson_view(doc: &SiteDocument, trainer_id: &str, raw_title: &str) -> PageState<LessonView> {
    find_trainer_lesson(doc, trainer_id, raw_title)
        .map(|(trainer, lesson)| LessonView {
            trainer_id: trainer.id.clone(),
            trainer_name: trainer.name.clone(),
            trainer_photo: trainer.photo_url(),
            instagram: trainer.instagram().map(str::to_string),
            title: lesson.title.clone(),
            details: lesson.details.clone(),
            prices: lesson.prices().map(<[String]>::to_vec),
            back_href: trainer_path(&trainer.id),
        })
        .into()
}

/// Resolve a route to the page it renders
pub fn render_route(doc: &SiteDocument, route: &Route) -> Page {
    match route {
        Route::Home => Page::Home(home_view(doc)),
        Route::Trainer { id } => Page::Trainer(trainer_view(doc, id)),
        Route::Lesson { trainer_id, title } => Page::Lesson(lesson_view(doc, trainer_id, title)),
        Route::Admin => Page::Admin,
        Route::Unknown => Page::NotFound,
    }
}

/// Fisher-Yates shuffle.
///
/// `random_below(n)` must return a value in `0..n`; out-of-range values are
/// clamped.
pub fn shuffle<T>(items: &mut [T], mut random_below: impl FnMut(usize) -> usize) {
    for i in (1..items.len()).rev() {
        let j = random_below(i + 1).min(i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_doc() -> SiteDocument {
        SiteDocument::from_json(
            r#"{
                "description": "Studio in Romny",
                "location": { "mapLink": "https://maps.test/x", "addressText": "Shevchenka blvd, 6" },
                "socials": [ { "label": "Studio Instagram", "url": "https://www.instagram.com/studio" } ],
                "trainers": [
                    { "id": "anna", "name": "Anna", "role": "Yoga", "photo": "/uploads/anna.jpg",
                      "instagram": "https://www.instagram.com/anna",
                      "certs": [ { "cert_item": "/uploads/c1.jpg" }, "c2.jpg" ],
                      "videos": [ { "video_item": "/uploads/intro.mp4" } ],
                      "schedule": [
                        { "title": "Yoga", "details": ["Mon 18:00"], "priceInfo": ["Single: 150"] },
                        { "title": "Hot Yoga", "details": ["Fri 19:00"] }
                      ] },
                    { "id": "oleh", "name": "Oleh", "role": "Boxing", "photo": "oleh.jpg",
                      "schedule": [ { "title": "Boxing", "details": ["Tue 17:00"] } ] }
                ],
                "achievements": [ "cup1.jpg", { "cup_item": "cup2.jpg" }, "cup3.jpg" ],
                "gallery": [ "g1.jpg", "g2.jpg" ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_home_view() {
        let doc = sample_doc();
        let home = home_view(&doc);
        assert_eq!(home.title, "Studio Energiya");
        assert_eq!(home.trainers.len(), 2);
        assert_eq!(home.trainers[0].href, "/trainer/anna");
        assert_eq!(home.trainers[0].photo, "/images/anna.jpg");
        assert_eq!(
            home.achievements,
            vec!["/images/cup1.jpg", "/images/cup2.jpg", "/images/cup3.jpg"]
        );
        assert_eq!(home.location.unwrap().address_text, "Shevchenka blvd, 6");
    }

    #[test]
    fn test_trainer_view_found() {
        let doc = sample_doc();
        let view = trainer_view(&doc, "anna").found().unwrap();
        assert!(view.has_certs());
        assert_eq!(view.certs, vec!["/images/c1.jpg", "/images/c2.jpg"]);
        assert_eq!(view.videos, vec!["/images/intro.mp4"]);
        assert_eq!(view.lessons[1].href, "/trainer/anna/lesson/Hot%20Yoga");
    }

    #[test]
    fn test_trainer_without_optional_sections() {
        let doc = sample_doc();
        let view = trainer_view(&doc, "oleh").found().unwrap();
        assert!(!view.has_certs());
        assert!(!view.has_videos());
        assert!(view.instagram.is_none());
    }

    #[test]
    fn test_trainer_view_not_found() {
        let doc = sample_doc();
        assert_eq!(trainer_view(&doc, "ivan"), PageState::NotFound);
    }

    #[test]
    fn test_lesson_scenario() {
        let doc = sample_doc();

        match render_route(&doc, &Route::parse("/trainer/anna/lesson/Yoga")) {
            Page::Lesson(PageState::Found(view)) => {
                assert_eq!(view.title, "Yoga");
                assert_eq!(view.details, vec!["Mon 18:00"]);
                assert_eq!(view.prices, Some(vec!["Single: 150".to_string()]));
                assert_eq!(view.back_href, "/trainer/anna");
            }
            other => panic!("unexpected page: {other:?}"),
        }

        assert_eq!(
            render_route(&doc, &Route::parse("/trainer/anna/lesson/Pilates")),
            Page::Lesson(PageState::NotFound)
        );
    }

    #[test]
    fn test_lesson_links_resolve() {
        let doc = sample_doc();
        for trainer in &doc.trainers {
            let view = trainer_view(&doc, &trainer.id).found().unwrap();
            for link in view.lessons {
                let page = render_route(&doc, &Route::parse(&link.href));
                assert!(
                    matches!(page, Page::Lesson(PageState::Found(ref l)) if l.title == link.title),
                    "link {} did not resolve",
                    link.href
                );
            }
        }
    }

    #[test]
    fn test_lesson_of_unknown_trainer() {
        let doc = sample_doc();
        assert!(!lesson_view(&doc, "ivan", "Yoga").is_found());
        assert!(!lesson_view(&doc, "oleh", "Yoga").is_found());
    }

    #[test]
    fn test_render_admin_and_unknown() {
        let doc = sample_doc();
        assert_eq!(render_route(&doc, &Route::parse("/admin/")), Page::Admin);
        assert_eq!(render_route(&doc, &Route::parse("/prices")), Page::NotFound);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut items: Vec<u32> = (0..10).collect();
        let mut seed = 7usize;
        shuffle(&mut items, |n| {
            seed = seed.wrapping_mul(31).wrapping_add(11);
            seed % n
        });
        let mut sorted = items.clone();
        sorted.sort();
        assert_eq!(sorted, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_with_fixed_source() {
        // Always picking 0 rotates the first element to the back
        let mut items = vec!['a', 'b', 'c'];
        shuffle(&mut items, |_| 0);
        assert_eq!(items, vec!['b', 'c', 'a']);

        // Out-of-range picks are clamped to a no-op swap
        let mut items = vec![1, 2, 3];
        shuffle(&mut items, |n| n + 5);
        assert_eq!(items, vec![1, 2, 3]);

        let mut empty: Vec<u8> = Vec::new();
        shuffle(&mut empty, |_| 0);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_page_serializes_with_tags() {
        let doc = sample_doc();
        let page = render_route(&doc, &Route::parse("/trainer/nobody"));
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["page"], "trainer");
        assert_eq!(json["state"], "not_found");
    }
}
