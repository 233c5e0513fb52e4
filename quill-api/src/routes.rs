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

        // Blog analytics
        .route("/api/blog-stats", get(handlers::blog_stats))
        .route("/api/blog-search", get(handlers::blog_search))
        .route("/api/blog-stats-memoized", get(handlers::blog_stats_memoized))

        .fallback(handlers::not_found)
        .with_state(state)
}
