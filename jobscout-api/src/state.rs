//! App state: configuration plus the injected store and scraper handles.

use std::sync::Arc;

use jobscout_core::traits::{CacheStore, JobScraper};

const DEFAULT_REDIS_URL: &str = "redis://localhost:6379";
const DEFAULT_SCRAPER_URL: &str = "http://localhost:8000";
const DEFAULT_PORT: u16 = 3001;

/// Server configuration, read once at startup.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Connection URL for the cache store.
    pub redis_url: String,
    /// Base URL of the upstream scrape orchestrator.
    pub scraper_url: String,
    /// Port the server binds.
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            redis_url: DEFAULT_REDIS_URL.into(),
            scraper_url: DEFAULT_SCRAPER_URL.into(),
            port: DEFAULT_PORT,
        }
    }
}

impl ApiConfig {
    /// Reads configuration from the environment (and a `.env` file when present).
    ///
    /// The cache store target comes in two deployment variants: `REDIS_URL`
    /// wins when set; otherwise, when any of `REDIS_HOST`, `REDIS_PORT`,
    /// `REDIS_PASSWORD` is set, a URL is composed from those (defaults
    /// `localhost`/`6379`/`password`). With neither variant present the
    /// default URL applies.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        let redis_url = std::env::var("REDIS_URL").unwrap_or_else(|_| {
            let discrete = ["REDIS_HOST", "REDIS_PORT", "REDIS_PASSWORD"]
                .iter()
                .any(|var| std::env::var(var).is_ok());
            if discrete {
                let host =
                    std::env::var("REDIS_HOST").unwrap_or_else(|_| "localhost".into());
                let port = std::env::var("REDIS_PORT").unwrap_or_else(|_| "6379".into());
                let password =
                    std::env::var("REDIS_PASSWORD").unwrap_or_else(|_| "password".into());
                format!("redis://:{}@{}:{}", password, host, port)
            } else {
                DEFAULT_REDIS_URL.into()
            }
        });

        Self {
            redis_url,
            scraper_url: std::env::var("SCRAPER_URL")
                .unwrap_or_else(|_| DEFAULT_SCRAPER_URL.into()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }
}

/// Shared application state.
///
/// The store and scraper are trait-object handles injected at construction,
/// never process-wide globals, so tests run the real router against fakes.
pub struct AppState {
    /// Server configuration.
    pub config: ApiConfig,
    /// Expiring key-value store client.
    pub store: Arc<dyn CacheStore>,
    /// Scrape orchestrator adapter.
    pub scraper: Arc<dyn JobScraper>,
}

impl AppState {
    /// Creates the state from its parts.
    pub fn new(
        config: ApiConfig,
        store: Arc<dyn CacheStore>,
        scraper: Arc<dyn JobScraper>,
    ) -> Self {
        Self {
            config,
            store,
            scraper,
        }
    }
}
