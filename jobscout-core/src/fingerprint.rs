//! Cache key derivation from the canonical query form.

use sha2::{Digest, Sha256};

use crate::canonical::canonical_json;
use crate::constants::CACHE_KEY_PREFIX;
use crate::types::JobQuery;

/// Computes the cache key for a query.
///
/// The key is `jobs:` followed by the lowercase hex SHA-256 digest of the
/// canonical JSON bytes. Deterministic and side-effect free: field-wise
/// equal queries always map to the same key, and any field difference
/// changes the digest.
pub fn cache_key(query: &JobQuery) -> String {
    let canonical = canonical_json(query);
    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    format!("{}{}", CACHE_KEY_PREFIX, hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OneOrMany, Site};
    use proptest::prelude::*;
    use test_case::test_case;

    #[test]
    fn test_key_format() {
        let key = cache_key(&JobQuery::default());
        let digest = key.strip_prefix("jobs:").unwrap();
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_key_stability() {
        let query = JobQuery {
            search_term: Some("engineer".into()),
            ..JobQuery::default()
        };
        assert_eq!(cache_key(&query), cache_key(&query.clone()));
    }

    #[test]
    fn test_scalar_and_single_element_list_share_key() {
        let one = JobQuery {
            site_name: Some(OneOrMany::One(Site::Glassdoor)),
            ..JobQuery::default()
        };
        let many = JobQuery {
            site_name: Some(OneOrMany::Many(vec![Site::Glassdoor])),
            ..JobQuery::default()
        };
        assert_eq!(cache_key(&one), cache_key(&many));
    }

    #[test_case(|q| q.search_term = Some("rust".into()) ; "search_term")]
    #[test_case(|q| q.google_search_term = Some("rust jobs".into()) ; "google_search_term")]
    #[test_case(|q| q.location = Some("Austin".into()) ; "location")]
    #[test_case(|q| q.distance = 25 ; "distance")]
    #[test_case(|q| q.is_remote = true ; "is_remote")]
    #[test_case(|q| q.job_type = Some("fulltime".into()) ; "job_type")]
    #[test_case(|q| q.easy_apply = Some(true) ; "easy_apply")]
    #[test_case(|q| q.results_wanted = 100 ; "results_wanted")]
    #[test_case(|q| q.country_indeed = "uk".into() ; "country_indeed")]
    #[test_case(|q| q.proxies = Some(OneOrMany::One("socks5://p".into())) ; "proxies")]
    #[test_case(|q| q.ca_cert = Some("/etc/ssl/ca.pem".into()) ; "ca_cert")]
    #[test_case(|q| q.description_format = "html".into() ; "description_format")]
    #[test_case(|q| q.linkedin_fetch_description = true ; "linkedin_fetch_description")]
    #[test_case(|q| q.linkedin_company_ids = Some(vec![1337]) ; "linkedin_company_ids")]
    #[test_case(|q| q.offset = 30 ; "offset")]
    #[test_case(|q| q.hours_old = Some(24) ; "hours_old")]
    #[test_case(|q| q.enforce_annual_salary = true ; "enforce_annual_salary")]
    #[test_case(|q| q.verbose = 2 ; "verbose")]
    #[test_case(|q| q.site_name = Some(OneOrMany::One(Site::Bayt)) ; "site_name")]
    fn test_any_field_change_changes_key(mutate: fn(&mut JobQuery)) {
        let base = JobQuery::default();
        let mut changed = base.clone();
        mutate(&mut changed);
        assert_ne!(cache_key(&base), cache_key(&changed));
    }

    proptest! {
        #[test]
        fn prop_equal_queries_share_key(
            term in proptest::option::of("[a-z ]{1,16}"),
            location in proptest::option::of("[A-Za-z]{1,12}"),
            distance in 0u32..500,
            results in 1u32..200,
            remote in any::<bool>(),
        ) {
            let query = JobQuery {
                search_term: term,
                location,
                distance,
                results_wanted: results,
                is_remote: remote,
                ..JobQuery::default()
            };
            prop_assert_eq!(cache_key(&query), cache_key(&query.clone()));
        }

        #[test]
        fn prop_distinct_terms_get_distinct_keys(a in "[a-z]{1,16}", b in "[a-z]{1,16}") {
            prop_assume!(a != b);
            let qa = JobQuery { search_term: Some(a), ..JobQuery::default() };
            let qb = JobQuery { search_term: Some(b), ..JobQuery::default() };
            prop_assert_ne!(cache_key(&qa), cache_key(&qb));
        }
    }
}
