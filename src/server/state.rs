//! Application State
//!
//! Shared, read-only state of the static host.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use crate::site::SiteDocument;

/// Shared state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Site document, loaded once at startup
    pub document: Arc<SiteDocument>,
    /// Output directory of the UI build
    pub dist_dir: PathBuf,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(document: SiteDocument, dist_dir: impl Into<PathBuf>) -> Self {
        Self {
            document: Arc::new(document),
            dist_dir: dist_dir.into(),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Entry page of the UI bundle
    pub fn index_file(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }

    /// Whether the UI bundle has been built
    pub fn has_bundle(&self) -> bool {
        self.index_file().is_file()
    }
}
