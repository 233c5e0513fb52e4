//! DTOs for API requests and responses.

use serde::{Deserialize, Serialize};

use quill_cache::CacheStats;

/// Query string of `GET /api/blog-search`.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Substring to look for in titles
    pub query: Option<String>,
}

/// Response for the health check.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    /// Memoized-endpoint cache counters
    pub cache: CacheStats,
}
