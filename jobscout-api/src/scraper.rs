//! Adapter for the upstream scrape orchestrator.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use jobscout_core::error::{Result, ScoutError};
use jobscout_core::traits::JobScraper;
use jobscout_core::types::{JobQuery, JobRecord};

/// Scrape orchestrator adapter forwarding searches to an external scraping
/// service over HTTP.
///
/// The full, original-typed parameter set goes out as query parameters
/// (list-valued fields as repeated keys); the reply must be a JSON array of
/// job records, which are passed through untouched. Any upstream failure
/// surfaces as a [`ScoutError::Scrape`] with the upstream's description.
pub struct UpstreamScraper {
    client: Client,
    base_url: String,
}

impl UpstreamScraper {
    /// Creates an adapter targeting the service at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Renders the outbound query string pairs.
    ///
    /// Defaulted scalars are always sent; unset optionals are omitted
    /// (the upstream applies the same defaults).
    fn query_pairs(query: &JobQuery) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(sites) = &query.site_name {
            for site in sites.to_vec() {
                pairs.push(("site_name", site.as_str().to_string()));
            }
        }
        if let Some(term) = &query.search_term {
            pairs.push(("search_term", term.clone()));
        }
        if let Some(term) = &query.google_search_term {
            pairs.push(("google_search_term", term.clone()));
        }
        if let Some(location) = &query.location {
            pairs.push(("location", location.clone()));
        }
        pairs.push(("distance", query.distance.to_string()));
        pairs.push(("is_remote", query.is_remote.to_string()));
        if let Some(job_type) = &query.job_type {
            pairs.push(("job_type", job_type.clone()));
        }
        if let Some(easy_apply) = query.easy_apply {
            pairs.push(("easy_apply", easy_apply.to_string()));
        }
        pairs.push(("results_wanted", query.results_wanted.to_string()));
        pairs.push(("country_indeed", query.country_indeed.clone()));
        if let Some(proxies) = &query.proxies {
            for proxy in proxies.to_vec() {
                pairs.push(("proxies", proxy));
            }
        }
        if let Some(ca_cert) = &query.ca_cert {
            pairs.push(("ca_cert", ca_cert.clone()));
        }
        pairs.push(("description_format", query.description_format.clone()));
        pairs.push((
            "linkedin_fetch_description",
            query.linkedin_fetch_description.to_string(),
        ));
        if let Some(ids) = &query.linkedin_company_ids {
            for id in ids {
                pairs.push(("linkedin_company_ids", id.to_string()));
            }
        }
        pairs.push(("offset", query.offset.to_string()));
        if let Some(hours) = query.hours_old {
            pairs.push(("hours_old", hours.to_string()));
        }
        pairs.push((
            "enforce_annual_salary",
            query.enforce_annual_salary.to_string(),
        ));
        pairs.push(("verbose", query.verbose.to_string()));

        pairs
    }
}

#[async_trait]
impl JobScraper for UpstreamScraper {
    async fn scrape(&self, query: &JobQuery) -> Result<Vec<JobRecord>> {
        let url = format!("{}/scrape", self.base_url.trim_end_matches('/'));
        debug!(%url, "forwarding search to upstream scraper");

        let response = self
            .client
            .get(&url)
            .query(&Self::query_pairs(query))
            .send()
            .await
            .map_err(|e| ScoutError::Scrape(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(ScoutError::Scrape(format!(
                "upstream returned {status}: {detail}"
            )));
        }

        response
            .json::<Vec<JobRecord>>()
            .await
            .map_err(|e| ScoutError::Scrape(e.to_string()))
    }
}
