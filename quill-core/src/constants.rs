//! Service-wide constants and defaults.

use std::time::Duration;

// ═══════════════════════════════════════════════════════════════════════════════
// UPSTREAM
// ═══════════════════════════════════════════════════════════════════════════════

/// Default upstream endpoint serving the blog collection.
pub const DEFAULT_BLOG_API_URL: &str = "https://intent-kit-16.hasura.app/api/rest/blogs";

/// Header carrying the upstream secret.
pub const DEFAULT_SECRET_HEADER: &str = "x-hasura-admin-secret";

// ═══════════════════════════════════════════════════════════════════════════════
// ANALYSIS
// ═══════════════════════════════════════════════════════════════════════════════

/// Lowercase marker counted by the privacy statistic.
pub const PRIVACY_MARKER: &str = "privacy";

// ═══════════════════════════════════════════════════════════════════════════════
// SERVICE
// ═══════════════════════════════════════════════════════════════════════════════

/// Lifetime of a cached upstream collection.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60);

/// Port the API server listens on when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;
