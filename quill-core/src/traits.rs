//! Common traits for Quill.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::BlogCollection;

/// Anything that can produce the current blog collection.
///
/// The HTTP client implements this against the real upstream; tests plug in
/// in-memory or failing sources.
#[async_trait]
pub trait BlogSource: Send + Sync {
    /// Fetches the full collection, preserving source order.
    async fn fetch_blogs(&self) -> Result<BlogCollection>;
}
