//! Site Document Context
//!
//! The document is parsed once when the app mounts and shared read-only with
//! every page through Leptos context.

use energiya::site::SiteDocument;
use leptos::*;
use std::ops::Deref;
use std::rc::Rc;

/// Site document embedded at build time
pub const SITE_JSON: &str = include_str!("../../../data/site.json");

/// Shared handle to the site document
#[derive(Clone)]
pub struct SiteContext(Rc<SiteDocument>);

impl Deref for SiteContext {
    type Target = SiteDocument;

    fn deref(&self) -> &SiteDocument {
        &self.0
    }
}

/// Parse the embedded document; an unreadable document renders as an empty site
pub fn load_embedded() -> SiteDocument {
    match SiteDocument::from_json(SITE_JSON) {
        Ok(doc) => doc,
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to load site data: {}", e).into());
            SiteDocument::default()
        }
    }
}

/// Provide the site document to the component tree
pub fn provide_site() {
    provide_context(SiteContext(Rc::new(load_embedded())));
}

pub fn use_site() -> SiteContext {
    use_context::<SiteContext>().expect("SiteContext not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use energiya::pages::{render_route, Page};
    use energiya::routes::{site_paths, Route};

    #[test]
    fn test_embedded_document_parses() {
        let doc = SiteDocument::from_json(SITE_JSON).unwrap();
        assert!(!doc.trainers.is_empty());
        assert!(!doc.achievements.is_empty());
    }

    #[test]
    fn test_every_embedded_link_resolves() {
        let doc = SiteDocument::from_json(SITE_JSON).unwrap();
        for path in site_paths(&doc) {
            let page = render_route(&doc, &Route::parse(&path));
            let found = match page {
                Page::Home(_) => true,
                Page::Trainer(state) => state.is_found(),
                Page::Lesson(state) => state.is_found(),
                Page::Admin | Page::NotFound => false,
            };
            assert!(found, "{path} does not resolve");
        }
    }
}
