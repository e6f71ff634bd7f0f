//! Redis-backed cache store.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use tracing::debug;

use jobscout_core::error::{Result, ScoutError};
use jobscout_core::traits::CacheStore;

/// Cache store backed by a Redis server.
///
/// Holds a multiplexed connection that is cheap to clone and safe to share
/// across concurrently running request handlers; Redis serializes
/// concurrent writes to the same key, so callers need no external locking.
/// Expiry is delegated to the server via `SET ... EX`.
#[derive(Clone)]
pub struct RedisStore {
    conn: ConnectionManager,
}

impl RedisStore {
    /// Connects to the Redis server at `url` (e.g. `redis://localhost:6379`).
    ///
    /// Fails when the server is unreachable, so a misconfigured deployment
    /// is caught at startup instead of on the first request.
    pub async fn connect(url: &str) -> Result<Self> {
        let client = redis::Client::open(url).map_err(|e| ScoutError::Cache(e.to_string()))?;
        let conn = ConnectionManager::new(client)
            .await
            .map_err(|e| ScoutError::Cache(e.to_string()))?;
        Ok(Self { conn })
    }
}

#[async_trait]
impl CacheStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| ScoutError::Cache(e.to_string()))?;
        debug!(key, hit = value.is_some(), "redis get");
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<()> {
        let mut conn = self.conn.clone();
        let _: () = conn
            .set_ex(key, value, ttl.as_secs())
            .await
            .map_err(|e| ScoutError::Cache(e.to_string()))?;
        debug!(key, ttl_seconds = ttl.as_secs(), "redis set");
        Ok(())
    }
}
