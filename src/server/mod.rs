//! Static Host
//!
//! Serves the compiled UI bundle, built with Axum.
//!
//! # Endpoints
//!
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//! - `GET /data.json` - The site document the host was started with
//! - `GET /admin/*` - Content editor files, served as-is
//! - `GET /*` - Bundle files; unknown paths get `index.html` so the
//!   client-side router can take over
//!
//! # Example
//!
//! ```rust,ignore
//! use energiya::server::{serve, AppState};
//! use energiya::site::SiteDocument;
//! use energiya::config::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let document = SiteDocument::load("data/site.json".as_ref())?;
//!     let state = AppState::new(document, "energiya-ui/dist");
//!     serve(state, &ServerConfig::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod routes;
pub mod state;

pub use error::{ServerError, ServerResult};
pub use state::AppState;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::routes::ADMIN_PATH;

/// Build the host router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let health_routes = Router::new()
        .route("/live", get(routes::liveness))
        .route("/ready", get(routes::readiness))
        .route("/", get(routes::full_health));

    let admin_dir = state.dist_dir.join(ADMIN_PATH.trim_matches('/'));
    let admin = ServeDir::new(admin_dir).append_index_html_on_directories(true);

    let bundle = ServeDir::new(&state.dist_dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(state.index_file()));

    let shared_state = Arc::new(state);

    Router::new()
        .route("/data.json", get(routes::site_document))
        .nest("/health", health_routes)
        .nest_service("/admin", admin)
        .fallback_service(bundle)
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state)
}

/// Start the static host
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), ServerError> {
    if !state.has_bundle() {
        tracing::warn!(
            "No index.html in {:?}; build the UI first (trunk build --release in energiya-ui)",
            state.dist_dir
        );
    }

    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Studio Energiya listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Studio Energiya shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
