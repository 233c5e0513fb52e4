//! App state: config, upstream source, and the blog cache.

use std::str::FromStr;
use std::sync::Arc;
use std::time::Instant;

use quill_cache::{BlogCache, CacheConfig};
use quill_core::constants::DEFAULT_PORT;
use quill_core::error::{QuillError, Result};
use quill_core::traits::BlogSource;
use quill_upstream::{UpstreamClient, UpstreamConfig};

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Port to listen on
    pub port: u16,
    /// Upstream endpoint and credentials
    pub upstream: UpstreamConfig,
    /// Memoized-endpoint cache settings
    pub cache: CacheConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            upstream: UpstreamConfig::default(),
            cache: CacheConfig::default(),
        }
    }
}

impl ApiConfig {
    /// Loads `.env` if present, then reads the process environment.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `PORT` | 3000 |
    /// | `BLOG_API_URL` | the Hasura blogs endpoint |
    /// | `BLOG_API_SECRET_HEADER` | `x-hasura-admin-secret` |
    /// | `BLOG_API_SECRET` | none; the server refuses to start without it |
    /// | `CACHE_TTL_SECONDS` | 60 |
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let upstream = UpstreamConfig {
            url: lookup("BLOG_API_URL").unwrap_or(defaults.upstream.url),
            secret_header: lookup("BLOG_API_SECRET_HEADER").unwrap_or(defaults.upstream.secret_header),
            secret: lookup("BLOG_API_SECRET"),
        };

        Ok(Self {
            port: parse_var(&lookup, "PORT")?.unwrap_or(defaults.port),
            upstream,
            cache: CacheConfig {
                ttl_seconds: parse_var(&lookup, "CACHE_TTL_SECONDS")?
                    .unwrap_or(defaults.cache.ttl_seconds),
            },
        })
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|e| QuillError::Config(format!("{} = {:?}: {}", key, raw, e)))
        })
        .transpose()
}

/// Shared state behind every handler.
pub struct AppState {
    /// Configuration the state was built from
    pub config: ApiConfig,
    /// Uncached upstream access
    pub source: Arc<dyn BlogSource>,
    /// Memoized upstream access
    pub cache: BlogCache,
    /// Used for the health check's uptime
    pub started_at: Instant,
}

impl AppState {
    /// Builds the state around a real upstream client.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = UpstreamClient::with_config(config.upstream.clone())?;
        Ok(Self::with_source(config, Arc::new(client)))
    }

    /// Builds the state around any blog source.
    pub fn with_source(config: ApiConfig, source: Arc<dyn BlogSource>) -> Self {
        let cache = BlogCache::with_config(source.clone(), config.cache.clone());

        Self {
            config,
            source,
            cache,
            started_at: Instant::now(),
        }
    }
}
