//! State Management
//!
//! The read-only site document and the hosted identity widget hook.

pub mod identity;
pub mod site;

pub use identity::init_identity_redirect;
pub use site::{provide_site, use_site, SiteContext};
