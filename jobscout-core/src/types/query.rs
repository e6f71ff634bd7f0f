//! The job search query: the full optional/defaulted parameter set.

use serde::{Deserialize, Serialize};

use super::site::{OneOrMany, Site};
use crate::constants::{
    DEFAULT_COUNTRY_INDEED, DEFAULT_DESCRIPTION_FORMAT, DEFAULT_DISTANCE_MILES,
    DEFAULT_RESULTS_WANTED,
};

/// The full parameter set for a job search request.
///
/// Every field the endpoint recognizes lives here; absent fields take the
/// documented defaults at deserialization time, so two requests that spell
/// the same search differently deserialize to equal values.
///
/// The field set is fixed: canonicalization renders all of them, unset
/// optionals included, so the fingerprint covers the entire query.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JobQuery {
    /// Job boards to search. Absent means the orchestrator's default set.
    #[serde(default)]
    pub site_name: Option<OneOrMany<Site>>,
    /// Free-text search term.
    #[serde(default)]
    pub search_term: Option<String>,
    /// Search term used for Google Jobs specifically.
    #[serde(default)]
    pub google_search_term: Option<String>,
    /// Location to search around.
    #[serde(default)]
    pub location: Option<String>,
    /// Search radius in miles.
    #[serde(default = "default_distance")]
    pub distance: u32,
    /// Restrict to remote positions.
    #[serde(default)]
    pub is_remote: bool,
    /// Employment type filter (e.g. "fulltime").
    #[serde(default)]
    pub job_type: Option<String>,
    /// Restrict to easy-apply listings.
    #[serde(default)]
    pub easy_apply: Option<bool>,
    /// Number of results to fetch.
    #[serde(default = "default_results_wanted")]
    pub results_wanted: u32,
    /// Country for Indeed searches.
    #[serde(default = "default_country_indeed")]
    pub country_indeed: String,
    /// Proxy or proxies routed through while scraping.
    #[serde(default)]
    pub proxies: Option<OneOrMany<String>>,
    /// CA certificate bundle path for proxied connections.
    #[serde(default)]
    pub ca_cert: Option<String>,
    /// Format for job description text ("markdown" or "html").
    #[serde(default = "default_description_format")]
    pub description_format: String,
    /// Fetch full descriptions on LinkedIn (slower).
    #[serde(default)]
    pub linkedin_fetch_description: bool,
    /// Restrict LinkedIn results to these company ids.
    #[serde(default)]
    pub linkedin_company_ids: Option<Vec<u64>>,
    /// Result offset for pagination.
    #[serde(default)]
    pub offset: u32,
    /// Only include postings newer than this many hours.
    #[serde(default)]
    pub hours_old: Option<u32>,
    /// Normalize hourly wages to annual salary figures.
    #[serde(default)]
    pub enforce_annual_salary: bool,
    /// Orchestrator log verbosity (0-2).
    #[serde(default)]
    pub verbose: u8,
}

fn default_distance() -> u32 {
    DEFAULT_DISTANCE_MILES
}

fn default_results_wanted() -> u32 {
    DEFAULT_RESULTS_WANTED
}

fn default_country_indeed() -> String {
    DEFAULT_COUNTRY_INDEED.to_string()
}

fn default_description_format() -> String {
    DEFAULT_DESCRIPTION_FORMAT.to_string()
}

impl Default for JobQuery {
    fn default() -> Self {
        Self {
            site_name: None,
            search_term: None,
            google_search_term: None,
            location: None,
            distance: default_distance(),
            is_remote: false,
            job_type: None,
            easy_apply: None,
            results_wanted: default_results_wanted(),
            country_indeed: default_country_indeed(),
            proxies: None,
            ca_cert: None,
            description_format: default_description_format(),
            linkedin_fetch_description: false,
            linkedin_company_ids: None,
            offset: 0,
            hours_old: None,
            enforce_annual_salary: false,
            verbose: 0,
        }
    }
}
