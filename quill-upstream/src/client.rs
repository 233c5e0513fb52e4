//! Authenticated client for the blog REST endpoint.

use std::fmt;

use async_trait::async_trait;
use reqwest::header::{HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use quill_core::constants::{DEFAULT_BLOG_API_URL, DEFAULT_SECRET_HEADER};
use quill_core::error::{QuillError, Result};
use quill_core::traits::BlogSource;
use quill_core::types::{BlogCollection, BlogPayload};

/// Upstream client configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Endpoint returning the blog collection
    pub url: String,
    /// Header name the secret is sent under
    pub secret_header: String,
    /// Shared secret (required to build a client)
    pub secret: Option<String>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_BLOG_API_URL.into(),
            secret_header: DEFAULT_SECRET_HEADER.into(),
            secret: None,
        }
    }
}

impl UpstreamConfig {
    /// Creates a config for the default endpoint with the given secret.
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            secret: Some(secret.into()),
            ..Default::default()
        }
    }

    /// Points the config at a different endpoint.
    pub fn at(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

impl fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("url", &self.url)
            .field("secret_header", &self.secret_header)
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Client for the upstream blog API.
pub struct UpstreamClient {
    url: url::Url,
    secret_header: HeaderName,
    secret: HeaderValue,
    http_client: reqwest::Client,
}

impl UpstreamClient {
    /// Creates a client, validating the URL, header name, and secret.
    pub fn with_config(config: UpstreamConfig) -> Result<Self> {
        let url = url::Url::parse(&config.url)
            .map_err(|e| QuillError::Config(format!("Invalid upstream URL '{}': {}", config.url, e)))?;

        let secret_header = HeaderName::from_bytes(config.secret_header.as_bytes())
            .map_err(|e| QuillError::Config(format!("Invalid secret header name: {}", e)))?;

        let secret = config
            .secret
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| QuillError::Config("Upstream secret not configured".into()))?;
        let mut secret = HeaderValue::from_str(secret)
            .map_err(|e| QuillError::Config(format!("Invalid upstream secret: {}", e)))?;
        secret.set_sensitive(true);

        let http_client = reqwest::Client::builder()
            .build()
            .map_err(|e| QuillError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            url,
            secret_header,
            secret,
            http_client,
        })
    }

    /// The endpoint this client fetches from.
    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    /// Fetches the blog collection.
    ///
    /// Accepts either a bare array of records or one wrapped under `blogs`.
    #[instrument(skip(self), fields(url = %self.url))]
    pub async fn fetch_blogs(&self) -> Result<BlogCollection> {
        let response = self
            .http_client
            .get(self.url.clone())
            .header(self.secret_header.clone(), self.secret.clone())
            .send()
            .await
            .map_err(|e| QuillError::Upstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            warn!(%status, "Upstream returned an error status");
            return Err(QuillError::Upstream(format!(
                "HTTP {}: {}",
                status, text
            )));
        }

        let payload: BlogPayload = response
            .json()
            .await
            .map_err(|e| QuillError::Upstream(format!("Malformed blog payload: {}", e)))?;

        let blogs = payload.into_collection();
        debug!(count = blogs.len(), "Fetched blogs from upstream");
        Ok(blogs)
    }
}

#[async_trait]
impl BlogSource for UpstreamClient {
    async fn fetch_blogs(&self) -> Result<BlogCollection> {
        UpstreamClient::fetch_blogs(self).await
    }
}
