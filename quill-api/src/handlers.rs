//! API route handlers.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use tracing::{debug, info};

use quill_analytics::{analyze, search_by_title};
use quill_core::types::{BlogCollection, BlogStats};

use crate::dto::*;
use crate::error::{ApiError, QUERY_REQUIRED, SEARCH_ERROR, STATS_ERROR};
use crate::state::AppState;

type Result<T> = std::result::Result<T, ApiError>;

/// GET /api/blog-stats
pub async fn blog_stats(State(state): State<Arc<AppState>>) -> Result<Json<BlogStats>> {
    let blogs = state
        .source
        .fetch_blogs()
        .await
        .map_err(|e| ApiError::with_message(e, STATS_ERROR))?;

    let stats = analyze(&blogs);
    debug!(total = stats.total_blogs, privacy = stats.privacy_blogs_count, "Computed blog stats");

    Ok(Json(stats))
}

/// GET /api/blog-search?query=...
///
/// The query is checked before anything is fetched. A query string that
/// does not decode (e.g. `query` given twice) counts as missing.
pub async fn blog_search(
    State(state): State<Arc<AppState>>,
    params: std::result::Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<BlogCollection>> {
    let query = params
        .map_err(|rejection| {
            debug!(error = %rejection, "Rejected search query string");
            ApiError::bad_request(QUERY_REQUIRED)
        })?
        .0
        .query
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::bad_request(QUERY_REQUIRED))?;

    let blogs = state
        .source
        .fetch_blogs()
        .await
        .map_err(|e| ApiError::with_message(e, SEARCH_ERROR))?;

    let matching = search_by_title(&blogs, &query)
        .map_err(|e| ApiError::with_message(e, SEARCH_ERROR))?;

    info!(query = %query, scanned = blogs.len(), matched = matching.len(), "Blog search");
    Ok(Json(matching))
}

/// GET /api/blog-stats-memoized
pub async fn blog_stats_memoized(State(state): State<Arc<AppState>>) -> Result<Json<BlogStats>> {
    let blogs = state
        .cache
        .get()
        .await
        .map_err(|e| ApiError::with_message(e, STATS_ERROR))?;

    Ok(Json(analyze(&blogs)))
}

/// GET /health
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        cache: state.cache.stats(),
    })
}

/// Fallback for unknown routes.
pub async fn not_found() -> ApiError {
    ApiError::not_found("Not Found")
}
