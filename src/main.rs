//! Studio Energiya static host
//!
//! Run with: cargo run --bin energiya
//!
//! # Configuration
//!
//! Read from `config.toml` (see `energiya-cli config`) with environment
//! overrides:
//! - `ENERGIYA_DATA_FILE`: Site document (default: data/site.json)
//! - `ENERGIYA_DIST_DIR`: UI bundle directory (default: energiya-ui/dist)
//! - `ENERGIYA_HOST` / `ENERGIYA_PORT`: Bind address (default: 0.0.0.0:8080)
//! - `RUST_LOG`: Log filter (default: energiya=info,tower_http=debug)

use energiya::config::Config;
use energiya::server::{serve, AppState};
use energiya::site::SiteDocument;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A broken config file aborts startup before anything is bound
    let config = Config::load_default()?;
    energiya::logging::init(&config.logging);

    tracing::info!("Starting Studio Energiya host v{}", env!("CARGO_PKG_VERSION"));
    match &config.source {
        Some(path) => tracing::info!("Loaded config from {:?}", path),
        None => tracing::info!("Using default config with environment overrides"),
    }
    tracing::info!("Site document: {:?}", config.site.data_file);
    tracing::info!("UI bundle: {:?}", config.site.dist_dir);

    let document = SiteDocument::load(&config.site.data_file)?;
    tracing::info!(
        "Loaded {} trainers, {} achievements, {} gallery items",
        document.trainers.len(),
        document.achievements.len(),
        document.gallery.len()
    );

    let state = AppState::new(document, config.site.dist_dir.clone());
    serve(state, &config.server).await?;

    tracing::info!("Studio Energiya host stopped");
    Ok(())
}
