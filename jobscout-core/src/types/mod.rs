//! Domain types for jobscout.
//!
//! - [`JobQuery`]: the full 19-field job search parameter set
//! - [`Site`]: enumerated job-board tokens
//! - [`OneOrMany`]: scalar-or-list union used by several query fields
//! - [`JobRecord`]: an opaque scraped job posting

mod query;
mod site;

pub use query::*;
pub use site::*;

/// A single scraped job posting.
///
/// Opaque to this crate: records come back from the scrape orchestrator,
/// get serialized into the response body, and are never inspected.
pub type JobRecord = serde_json::Value;
