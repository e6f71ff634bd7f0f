//! # Jobscout API Server
//!
//! HTTP surface for the jobscout job search cache.
//!
//! ## Endpoints
//!
//! - `GET /jobs/` - Fingerprint-cached job search (get-or-compute)
//! - `GET /health` - Liveness probe
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use jobscout_api::{ApiConfig, ApiServer, UpstreamScraper};
//! use jobscout_cache::RedisStore;
//!
//! let config = ApiConfig::from_env();
//! let store = RedisStore::connect(&config.redis_url).await?;
//! let scraper = UpstreamScraper::new(config.scraper_url.clone());
//! let server = ApiServer::new(config, Arc::new(store), Arc::new(scraper));
//! server.run(([0, 0, 0, 0], 3001)).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod error;
mod handlers;
mod routes;
mod scraper;
mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use scraper::UpstreamScraper;
pub use state::{ApiConfig, AppState};

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use jobscout_core::traits::{CacheStore, JobScraper};

/// API server for jobscout.
pub struct ApiServer {
    state: Arc<AppState>,
}

impl ApiServer {
    /// Creates a new API server with the given configuration and injected
    /// store/scraper handles.
    pub fn new(
        config: ApiConfig,
        store: Arc<dyn CacheStore>,
        scraper: Arc<dyn JobScraper>,
    ) -> Self {
        Self {
            state: Arc::new(AppState::new(config, store, scraper)),
        }
    }

    /// Creates the router with all routes configured.
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        create_router(self.state.clone())
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Runs the server on the given address.
    pub async fn run(self, addr: impl Into<SocketAddr>) -> std::io::Result<()> {
        let addr = addr.into();
        let listener = tokio::net::TcpListener::bind(addr).await?;

        info!("jobscout API server listening on {}", addr);

        axum::serve(listener, self.router()).await
    }
}
