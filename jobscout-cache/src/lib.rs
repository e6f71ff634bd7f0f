//! Cache store clients for jobscout.
//!
//! Two implementations of the
//! [`CacheStore`](jobscout_core::traits::CacheStore) trait:
//!
//! - [`RedisStore`]: production backend against a Redis server
//! - [`MemoryStore`]: in-process map with per-entry TTL, the substitutable
//!   fake for tests and cache-less development

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

mod memory;
mod redis_store;

pub use memory::MemoryStore;
pub use redis_store::RedisStore;
