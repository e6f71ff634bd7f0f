//! Canonical parameter rendering for fingerprinting.
//!
//! The canonical form of a [`JobQuery`] is a JSON object with a fixed,
//! sorted key order in which every recognized parameter appears — unset
//! optionals render as JSON null rather than disappearing — and
//! scalar-or-list values are widened to lists. Two queries that are
//! field-wise equal render to identical bytes no matter how they were
//! constructed.

use serde_json::{json, Value};

use crate::types::{JobQuery, Site};

/// Renders the canonical JSON form of a query.
///
/// Key order is sorted (serde_json object keys are ordered), no field is
/// ever dropped, and there are no error paths: defaulting happened at the
/// boundary and every value here is serializable by construction.
pub fn canonical_json(query: &JobQuery) -> String {
    let sites: Option<Vec<&'static str>> = query
        .site_name
        .as_ref()
        .map(|s| s.to_vec().iter().map(Site::as_str).collect());
    let proxies: Option<Vec<String>> = query.proxies.as_ref().map(|p| p.to_vec());

    let canonical: Value = json!({
        "ca_cert": query.ca_cert,
        "country_indeed": query.country_indeed,
        "description_format": query.description_format,
        "distance": query.distance,
        "easy_apply": query.easy_apply,
        "enforce_annual_salary": query.enforce_annual_salary,
        "google_search_term": query.google_search_term,
        "hours_old": query.hours_old,
        "is_remote": query.is_remote,
        "job_type": query.job_type,
        "linkedin_company_ids": query.linkedin_company_ids,
        "linkedin_fetch_description": query.linkedin_fetch_description,
        "location": query.location,
        "offset": query.offset,
        "proxies": proxies,
        "results_wanted": query.results_wanted,
        "search_term": query.search_term,
        "site_name": sites,
        "verbose": query.verbose,
    });

    canonical.to_string()
}
