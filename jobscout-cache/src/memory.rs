//! In-memory cache store with per-entry TTL.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use parking_lot::RwLock;

use jobscout_core::error::Result;
use jobscout_core::traits::CacheStore;

struct Entry {
    value: String,
    inserted_at: Instant,
    ttl: Duration,
}

impl Entry {
    fn is_expired(&self) -> bool {
        self.inserted_at.elapsed() > self.ttl
    }
}

/// In-memory expiring key-value store.
///
/// Drop-in stand-in for [`RedisStore`](crate::RedisStore) in tests and in
/// single-process deployments without a Redis server. Thread-safe; expired
/// entries read as absent and are dropped lazily on the next write.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Entry>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live (unexpired) entries.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .values()
            .filter(|e| !e.is_expired())
            .count()
    }

    /// Returns true when no live entries remain.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.read();
        Ok(entries
            .get(key)
            .and_then(|e| (!e.is_expired()).then(|| e.value.clone())))
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<()> {
        let mut entries = self.entries.write();
        entries.retain(|_, e| !e.is_expired());
        entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                inserted_at: Instant::now(),
                ttl,
            },
        );
        Ok(())
    }
}
