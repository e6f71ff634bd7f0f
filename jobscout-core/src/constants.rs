//! Service constants.

/// Prefix for every cache key the service writes.
pub const CACHE_KEY_PREFIX: &str = "jobs:";

/// Cache entry lifetime in seconds.
///
/// Entries expire automatically in the store; nothing ever deletes them
/// explicitly.
pub const CACHE_TTL_SECONDS: u64 = 3600;

/// Default search radius in miles.
pub const DEFAULT_DISTANCE_MILES: u32 = 50;

/// Default number of results requested per search.
pub const DEFAULT_RESULTS_WANTED: u32 = 15;

/// Default country used for Indeed searches.
pub const DEFAULT_COUNTRY_INDEED: &str = "usa";

/// Default format for job description text.
pub const DEFAULT_DESCRIPTION_FORMAT: &str = "markdown";
