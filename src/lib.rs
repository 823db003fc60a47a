//! # Studio Energiya
//!
//! Core of the Studio Energiya website: a home page listing trainers,
//! trainer profiles and lesson pages, all rendered from one static JSON
//! document, plus a lightbox for certificates, achievements and gallery.
//!
//! ## Modules
//!
//! - [`site`]: Site document types and entity lookup
//! - [`assets`]: Asset reference normalization
//! - [`lightbox`]: Full-screen viewer state
//! - [`routes`]: Client-side route table
//! - [`pages`]: Page view models
//! - `server` (feature `server`): Static host for the compiled UI
//!
//! ## Quick Start
//!
//! ```rust
//! use energiya::pages::{render_route, Page, PageState};
//! use energiya::routes::Route;
//! use energiya::site::SiteDocument;
//!
//! let doc = SiteDocument::from_json(r#"{
//!     "trainers": [ { "id": "anna", "name": "Anna",
//!                     "schedule": [ { "title": "Yoga", "details": ["Mon 18:00"] } ] } ]
//! }"#).unwrap();
//!
//! let page = render_route(&doc, &Route::parse("/trainer/anna/lesson/Yoga"));
//! assert!(matches!(page, Page::Lesson(PageState::Found(_))));
//!
//! let page = render_route(&doc, &Route::parse("/trainer/anna/lesson/Pilates"));
//! assert_eq!(page, Page::Lesson(PageState::NotFound));
//! ```

pub mod assets;
pub mod lightbox;
pub mod pages;
pub mod routes;
pub mod site;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod logging;
#[cfg(feature = "server")]
pub mod server;

// Re-export top-level types for convenience
pub use assets::{normalize, normalize_path, AssetKind, AssetRef};
pub use lightbox::Lightbox;
pub use pages::{render_route, Page, PageState};
pub use routes::Route;
pub use site::{Lesson, SiteDocument, SiteError, SiteResult, Trainer};

#[cfg(feature = "server")]
pub use config::{Config, ConfigError};
#[cfg(feature = "server")]
pub use server::{build_router, serve, AppState, ServerError};
