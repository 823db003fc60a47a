//! Site document error types
//!
//! Only loading the document can fail. Lookups that miss are not errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the site document
#[derive(Error, Debug)]
pub enum SiteError {
    /// Document file could not be read
    #[error("Failed to read site document {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    /// Document is not valid JSON or has the wrong shape
    #[error("Failed to parse site document{}: {error}", describe_path(.path))]
    Parse {
        path: Option<PathBuf>,
        error: String,
    },
}

impl From<serde_json::Error> for SiteError {
    fn from(err: serde_json::Error) -> Self {
        SiteError::Parse {
            path: None,
            error: err.to_string(),
        }
    }
}

fn describe_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {:?}", p))
        .unwrap_or_default()
}

/// Result type alias for site document operations
pub type SiteResult<T> = Result<T, SiteError>;
