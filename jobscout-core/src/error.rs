//! Error types for jobscout.
//!
//! This module provides the error hierarchy using `thiserror`. Errors carry
//! the message that ends up in the HTTP error body, so scrape failures keep
//! the orchestrator's wording verbatim.

use thiserror::Error;

/// Result type alias using `ScoutError`.
pub type Result<T> = std::result::Result<T, ScoutError>;

/// Main error type for all jobscout operations.
#[derive(Debug, Error)]
pub enum ScoutError {
    /// Cache store connectivity or protocol failure.
    ///
    /// Never swallowed: the request handler decides what to do with it.
    #[error("cache store error: {0}")]
    Cache(String),

    /// The scrape orchestrator reported a failure.
    ///
    /// The message is surfaced to the client verbatim.
    #[error("{0}")]
    Scrape(String),

    /// Serializing scraped records to JSON failed.
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Invalid or missing configuration.
    #[error("configuration error: {0}")]
    Config(String),
}
