//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod brand;
pub mod lightbox;
pub mod not_found;
pub mod thumbs;

pub use brand::{InstaButton, Logo};
pub use lightbox::LightboxView;
pub use not_found::NotFound;
pub use thumbs::ThumbGrid;
