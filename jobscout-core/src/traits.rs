//! Common traits for jobscout.
//!
//! These traits define the seams between the request handler and its two
//! collaborators. Implementations live in sibling crates and are injected
//! as handles, so tests can substitute fakes without touching the handler.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{JobQuery, JobRecord};

/// Interface to an expiring key-value store.
///
/// Implementations might use:
/// - Redis (production)
/// - An in-memory map (testing, single-process deployments)
///
/// A store handle is a process-wide shared resource: it must be safe for
/// use by many in-flight requests without external locking. The store
/// itself serializes concurrent writes to the same key; two concurrent
/// misses on one key may both write, and the last write wins.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Returns the payload stored under `key`, or `None` when the key is
    /// absent or its entry has expired.
    ///
    /// Never yields partial data. Store connectivity failures propagate as
    /// [`ScoutError::Cache`](crate::ScoutError::Cache) rather than
    /// masquerading as a miss.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes `value` under `key`, overwriting any prior value.
    ///
    /// The store expires the entry automatically once `ttl` elapses.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<()>;
}

/// Interface to the scrape orchestrator performing the actual multi-site
/// job search.
///
/// The orchestrator receives the full, original-typed parameter set — not
/// the canonical form used for hashing. The records it returns are opaque
/// to the caller: serialized and passed through, never inspected.
#[async_trait]
pub trait JobScraper: Send + Sync {
    /// Runs a search and returns the scraped records.
    ///
    /// Failures carry a descriptive message that is surfaced to the client
    /// verbatim.
    async fn scrape(&self, query: &JobQuery) -> Result<Vec<JobRecord>>;
}
