//! Site Document
//!
//! The single read-only data source for the whole site: trainers with their
//! lessons, achievements, gallery and studio contacts.

pub mod error;
pub mod lookup;
pub mod types;

pub use error::{SiteError, SiteResult};
pub use lookup::{
    decode_segment, encode_segment, find_lesson, find_trainer, find_trainer_lesson, lesson_path,
    trainer_path,
};
pub use types::{Lesson, Location, SiteDocument, SocialLink, Trainer, DEFAULT_TITLE};
