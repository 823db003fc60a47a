//! Pages
//!
//! Top-level page components for each route.

pub mod home;
pub mod lesson;
pub mod trainer;

pub use home::Home;
pub use lesson::LessonPage;
pub use trainer::TrainerPage;
