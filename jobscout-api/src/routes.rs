//! API route configuration.

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers;
use crate::state::AppState;

/// Creates the API router with all routes configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Fingerprint-cached job search
        .route("/jobs/", get(handlers::get_jobs))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use jobscout_cache::MemoryStore;
    use jobscout_core::error::{Result as CoreResult, ScoutError};
    use jobscout_core::traits::{CacheStore, JobScraper};
    use jobscout_core::types::{JobQuery, JobRecord};

    use crate::state::ApiConfig;

    /// Scraper fake: counts invocations, returns fixed records or fails.
    struct StubScraper {
        calls: AtomicUsize,
        records: usize,
        fail_with: Option<String>,
    }

    impl StubScraper {
        fn returning(records: usize) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                records,
                fail_with: None,
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                records: 0,
                fail_with: Some(message.to_string()),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl JobScraper for StubScraper {
        async fn scrape(&self, _query: &JobQuery) -> CoreResult<Vec<JobRecord>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(message) = &self.fail_with {
                return Err(ScoutError::Scrape(message.clone()));
            }
            Ok((0..self.records)
                .map(|i| json!({"title": format!("job {i}"), "site": "indeed"}))
                .collect())
        }
    }

    /// Store fake: in-memory semantics plus a record of every set call.
    struct RecordingStore {
        inner: MemoryStore,
        sets: Mutex<Vec<(String, u64)>>,
    }

    impl RecordingStore {
        fn new() -> Self {
            Self {
                inner: MemoryStore::new(),
                sets: Mutex::new(Vec::new()),
            }
        }

        fn sets(&self) -> Vec<(String, u64)> {
            self.sets.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CacheStore for RecordingStore {
        async fn get(&self, key: &str) -> CoreResult<Option<String>> {
            self.inner.get(key).await
        }

        async fn set(&self, key: &str, value: &str, ttl: Duration) -> CoreResult<()> {
            self.sets
                .lock()
                .unwrap()
                .push((key.to_string(), ttl.as_secs()));
            self.inner.set(key, value, ttl).await
        }
    }

    fn test_app(scraper: StubScraper) -> (Router, Arc<StubScraper>, Arc<RecordingStore>) {
        let scraper = Arc::new(scraper);
        let store = Arc::new(RecordingStore::new());
        let state = Arc::new(AppState::new(
            ApiConfig::default(),
            store.clone(),
            scraper.clone(),
        ));
        (create_router(state), scraper, store)
    }

    async fn send(app: &Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health_check() {
        let (app, _, _) = test_app(StubScraper::returning(0));
        let (status, body) = send(&app, "/health").await;
        assert_eq!(status, StatusCode::OK);
        let parsed: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed["status"], "ok");
    }

    #[tokio::test]
    async fn test_miss_scrapes_and_caches_for_an_hour() {
        let (app, scraper, store) = test_app(StubScraper::returning(10));

        let (status, body) =
            send(&app, "/jobs/?search_term=engineer&location=Austin&results_wanted=10").await;

        assert_eq!(status, StatusCode::OK);
        let records: Vec<Value> = serde_json::from_str(&body).unwrap();
        assert_eq!(records.len(), 10);
        assert_eq!(scraper.calls(), 1);

        let sets = store.sets();
        assert_eq!(sets.len(), 1);
        assert!(sets[0].0.starts_with("jobs:"));
        assert_eq!(sets[0].1, 3600);
    }

    #[tokio::test]
    async fn test_hit_short_circuits_scraper() {
        let (app, scraper, _) = test_app(StubScraper::returning(10));
        let uri = "/jobs/?search_term=engineer&location=Austin&results_wanted=10";

        let (_, first) = send(&app, uri).await;
        let (status, second) = send(&app, uri).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(first, second);
        assert_eq!(scraper.calls(), 1);
    }

    #[tokio::test]
    async fn test_response_is_json() {
        let (app, _, _) = test_app(StubScraper::returning(1));
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/jobs/?search_term=rust")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
    }

    #[tokio::test]
    async fn test_distinct_queries_scrape_separately() {
        let (app, scraper, store) = test_app(StubScraper::returning(3));

        send(&app, "/jobs/?search_term=engineer&location=Austin").await;
        send(&app, "/jobs/?search_term=engineer&location=Boston").await;

        assert_eq!(scraper.calls(), 2);
        let sets = store.sets();
        assert_eq!(sets.len(), 2);
        assert_ne!(sets[0].0, sets[1].0);
    }

    #[tokio::test]
    async fn test_scrape_failure_returns_structured_error() {
        let (app, _, store) = test_app(StubScraper::failing("site unreachable"));

        let (status, body) = send(&app, "/jobs/?search_term=engineer").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let parsed: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed, json!({"error": "site unreachable"}));
        assert!(store.sets().is_empty());
    }

    #[tokio::test]
    async fn test_failure_is_not_cached() {
        let (app, scraper, _) = test_app(StubScraper::failing("site unreachable"));
        let uri = "/jobs/?search_term=engineer";

        send(&app, uri).await;
        send(&app, uri).await;

        // No entry was written, so the second request scrapes again.
        assert_eq!(scraper.calls(), 2);
    }

    #[tokio::test]
    async fn test_empty_result_is_still_cached() {
        let (app, scraper, store) = test_app(StubScraper::returning(0));
        let uri = "/jobs/?search_term=cobol&location=Atlantis";

        let (status, body) = send(&app, uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "[]");
        assert_eq!(store.sets().len(), 1);

        send(&app, uri).await;
        assert_eq!(scraper.calls(), 1);
    }

    #[tokio::test]
    async fn test_repeated_site_name_keys_accepted() {
        let (app, scraper, _) = test_app(StubScraper::returning(1));

        let (status, _) =
            send(&app, "/jobs/?site_name=indeed&site_name=linkedin&search_term=rust").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(scraper.calls(), 1);
    }

    #[tokio::test]
    async fn test_malformed_parameter_rejected_before_handler() {
        let (app, scraper, _) = test_app(StubScraper::returning(1));

        let (status, _) = send(&app, "/jobs/?results_wanted=lots").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(scraper.calls(), 0);
    }
}
