//! # Jobscout Core
//!
//! Core types, errors, and traits for the jobscout job search cache service.
//!
//! This crate provides the foundational building blocks used by the cache and
//! API crates:
//!
//! - **Types**: The full job search parameter set and its helper unions
//! - **Canonical form**: Order-independent rendering of a query for hashing
//! - **Fingerprint**: Cache key derivation (`jobs:<sha256-hex>`)
//! - **Errors**: Error types with context
//! - **Traits**: Interfaces to the cache store and the scrape orchestrator
//!
//! ## Example
//!
//! ```rust
//! use jobscout_core::fingerprint::cache_key;
//! use jobscout_core::types::JobQuery;
//!
//! let query = JobQuery {
//!     search_term: Some("engineer".into()),
//!     ..JobQuery::default()
//! };
//!
//! let key = cache_key(&query);
//! assert!(key.starts_with("jobs:"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod canonical;
pub mod constants;
pub mod error;
pub mod fingerprint;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use constants::*;
pub use error::{Result, ScoutError};
pub use traits::*;
pub use types::*;
