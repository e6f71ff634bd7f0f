//! API route handlers.

use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, http::header, response::IntoResponse, Json};
use axum_extra::extract::Query;
use tracing::{debug, info};

use jobscout_core::constants::CACHE_TTL_SECONDS;
use jobscout_core::error::ScoutError;
use jobscout_core::fingerprint::cache_key;
use jobscout_core::types::JobQuery;

use crate::error::ApiError;
use crate::state::AppState;

type Result<T> = std::result::Result<T, ApiError>;

/// GET /health
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /jobs/
///
/// Get-or-compute: fingerprint the full parameter set, return the cached
/// payload verbatim on a hit, otherwise scrape, cache the serialized result
/// for an hour (empty result sets included), and return it.
///
/// Malformed parameters never reach this point — the extractor rejects
/// them. Every failure past key computation becomes a structured 500 via
/// [`ApiError`]; nothing is cached on the error path.
pub async fn get_jobs(
    State(state): State<Arc<AppState>>,
    Query(query): Query<JobQuery>,
) -> Result<impl IntoResponse> {
    let key = cache_key(&query);

    if let Some(cached) = state.store.get(&key).await? {
        debug!(%key, "cache hit");
        return Ok(json_body(cached));
    }

    debug!(%key, "cache miss");
    let records = state.scraper.scrape(&query).await?;
    let body = serde_json::to_string(&records).map_err(ScoutError::Serialize)?;

    state
        .store
        .set(&key, &body, Duration::from_secs(CACHE_TTL_SECONDS))
        .await?;

    info!(%key, records = records.len(), "scraped and cached");
    Ok(json_body(body))
}

/// Pass-through JSON response: the payload is already serialized and is
/// not re-validated.
fn json_body(body: String) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], body)
}
