//! jobscout server binary.
//!
//! Wires the Redis store and the upstream scraper into the API server.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jobscout_api::{ApiConfig, ApiServer, UpstreamScraper};
use jobscout_cache::RedisStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env();
    tracing::info!(redis_url = %config.redis_url, scraper_url = %config.scraper_url, "starting jobscout");

    let store = RedisStore::connect(&config.redis_url)
        .await
        .context("connecting to the cache store")?;
    let scraper = UpstreamScraper::new(config.scraper_url.clone());

    let port = config.port;
    let server = ApiServer::new(config, Arc::new(store), Arc::new(scraper));
    server.run(([0, 0, 0, 0], port)).await?;

    Ok(())
}
