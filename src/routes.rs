//! Route Table
//!
//! Client-side routes of the site:
//!
//! - `/` - home
//! - `/trainer/{id}` - trainer profile
//! - `/trainer/{trainerId}/lesson/{title}` - lesson details (title percent-encoded)
//!
//! Paths under `/admin` belong to the content editor and are not rendered
//! by the app.

use crate::site::{encode_segment, lesson_path, trainer_path};

/// Sub-path of the content editor
pub const ADMIN_PATH: &str = "/admin/";

/// A classified URL path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Trainer {
        id: String,
    },
    /// `title` is kept exactly as it appeared in the URL (still encoded)
    Lesson {
        trainer_id: String,
        title: String,
    },
    Admin,
    /// Anything else; has no path of its own
    Unknown,
}

impl Route {
    /// Classify a URL path. Query strings and fragments are ignored.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        if is_admin_path(path) {
            return Route::Admin;
        }

        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["trainer", id] => Route::Trainer { id: id.to_string() },
            ["trainer", trainer_id, "lesson", title] => Route::Lesson {
                trainer_id: trainer_id.to_string(),
                title: title.to_string(),
            },
            _ => Route::Unknown,
        }
    }

    /// Route for a lesson given its plain (decoded) title
    pub fn lesson(trainer_id: &str, title: &str) -> Self {
        Route::Lesson {
            trainer_id: trainer_id.to_string(),
            title: encode_segment(title),
        }
    }

    /// Path that resolves back to this route.
    ///
    /// `Unknown` has no path and links home instead, so it is the one
    /// route that does not parse back to itself.
    pub fn path(&self) -> String {
        match self {
            Route::Home | Route::Unknown => "/".to_string(),
            Route::Trainer { id } => trainer_path(id),
            Route::Lesson { trainer_id, title } => {
                format!("{}/lesson/{}", trainer_path(trainer_id), title)
            }
            Route::Admin => ADMIN_PATH.to_string(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Trainer { .. } => "trainer",
            Route::Lesson { .. } => "lesson",
            Route::Admin => "admin",
            Route::Unknown => "unknown",
        }
    }
}

/// Whether a path belongs to the content editor
pub fn is_admin_path(path: &str) -> bool {
    path == "/admin" || path.starts_with(ADMIN_PATH)
}

/// Every page path a document produces, home first
pub fn site_paths(doc: &crate::site::SiteDocument) -> Vec<String> {
    let mut paths = vec![Route::Home.path()];
    for trainer in &doc.trainers {
        paths.push(trainer_path(&trainer.id));
        for lesson in &trainer.schedule {
            paths.push(lesson_path(&trainer.id, &lesson.title));
        }
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::SiteDocument;

    #[test]
    fn test_parse_three_routes() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(
            Route::parse("/trainer/anna"),
            Route::Trainer { id: "anna".into() }
        );
        assert_eq!(
            Route::parse("/trainer/anna/lesson/Yoga"),
            Route::Lesson {
                trainer_id: "anna".into(),
                title: "Yoga".into()
            }
        );
    }

    #[test]
    fn test_parse_tolerates_trailing_slash_and_query() {
        assert_eq!(
            Route::parse("/trainer/anna/?ref=insta"),
            Route::Trainer { id: "anna".into() }
        );
        assert_eq!(Route::parse("/#top"), Route::Home);
    }

    #[test]
    fn test_parse_admin_and_unknown() {
        assert_eq!(Route::parse("/admin"), Route::Admin);
        assert_eq!(Route::parse("/admin/#/collections"), Route::Admin);
        assert_eq!(Route::parse("/administrator"), Route::Unknown);
        assert_eq!(Route::parse("/trainer"), Route::Unknown);
        assert_eq!(Route::parse("/trainer/anna/lessons/Yoga"), Route::Unknown);
    }

    #[test]
    fn test_path_round_trip() {
        let routes = [
            Route::Home,
            Route::Trainer { id: "anna".into() },
            Route::lesson("anna", "Stretch / Flex 100%"),
            Route::Admin,
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn test_unknown_links_home() {
        assert_eq!(Route::Unknown.path(), "/");
        assert_eq!(Route::parse(&Route::Unknown.path()), Route::Home);
    }

    #[test]
    fn test_site_paths() {
        let doc = SiteDocument::from_json(
            r#"{ "trainers": [ { "id": "anna", "schedule": [ { "title": "Yoga" }, { "title": "Hot Yoga" } ] } ] }"#,
        )
        .unwrap();
        assert_eq!(
            site_paths(&doc),
            vec![
                "/",
                "/trainer/anna",
                "/trainer/anna/lesson/Yoga",
                "/trainer/anna/lesson/Hot%20Yoga"
            ]
        );
    }
}
