//! Single-slot TTL cache in front of a [`BlogSource`].

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, instrument, warn};

use quill_core::constants::DEFAULT_CACHE_TTL;
use quill_core::error::Result;
use quill_core::traits::BlogSource;
use quill_core::types::BlogCollection;

/// Cached collection with its fetch time.
#[derive(Clone)]
struct CacheEntry {
    blogs: Arc<BlogCollection>,
    inserted_at: Instant,
}

impl CacheEntry {
    fn is_expired(&self, ttl: Duration) -> bool {
        self.inserted_at.elapsed() >= ttl
    }
}

/// Cache configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CacheConfig {
    /// TTL in seconds
    pub ttl_seconds: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: DEFAULT_CACHE_TTL.as_secs(),
        }
    }
}

/// Memoized access to the upstream blog collection.
///
/// The constant key makes this a single slot rather than a table. Entries
/// are replaced whole; a failed refresh leaves the previous entry in place
/// and is not cached.
pub struct BlogCache {
    source: Arc<dyn BlogSource>,
    slot: RwLock<Option<CacheEntry>>,
    refresh: Mutex<()>,
    ttl: Duration,
    hits: AtomicU64,
    misses: AtomicU64,
    refreshes: AtomicU64,
}

impl BlogCache {
    /// Creates a cache with the default 60 second TTL.
    pub fn new(source: Arc<dyn BlogSource>) -> Self {
        Self::with_ttl(source, DEFAULT_CACHE_TTL)
    }

    /// Creates a cache from configuration.
    pub fn with_config(source: Arc<dyn BlogSource>, config: CacheConfig) -> Self {
        Self::with_ttl(source, Duration::from_secs(config.ttl_seconds))
    }

    /// Creates a cache with a custom TTL.
    pub fn with_ttl(source: Arc<dyn BlogSource>, ttl: Duration) -> Self {
        Self {
            source,
            slot: RwLock::new(None),
            refresh: Mutex::new(()),
            ttl,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            refreshes: AtomicU64::new(0),
        }
    }

    /// Returns the cached collection, fetching it if absent or expired.
    #[instrument(skip(self))]
    pub async fn get(&self) -> Result<Arc<BlogCollection>> {
        if let Some(blogs) = self.fresh() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!("Cache hit");
            return Ok(blogs);
        }

        let _guard = self.refresh.lock().await;

        // Another caller may have refreshed while we waited.
        if let Some(blogs) = self.fresh() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!("Cache hit after waiting on refresh");
            return Ok(blogs);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let blogs = match self.source.fetch_blogs().await {
            Ok(blogs) => Arc::new(blogs),
            Err(e) => {
                warn!(error = %e, "Cache refresh failed");
                return Err(e);
            }
        };

        *self.slot.write() = Some(CacheEntry {
            blogs: blogs.clone(),
            inserted_at: Instant::now(),
        });
        self.refreshes.fetch_add(1, Ordering::Relaxed);
        debug!(count = blogs.len(), ttl_secs = self.ttl.as_secs(), "Cache refreshed");

        Ok(blogs)
    }

    /// The unexpired cached collection, if any.
    fn fresh(&self) -> Option<Arc<BlogCollection>> {
        self.slot
            .read()
            .as_ref()
            .filter(|e| !e.is_expired(self.ttl))
            .map(|e| e.blogs.clone())
    }

    /// Returns true if a call to [`get`](Self::get) would not hit the upstream.
    pub fn is_fresh(&self) -> bool {
        self.fresh().is_some()
    }

    /// Drops the cached entry.
    pub fn clear(&self) {
        *self.slot.write() = None;
    }

    /// Time-to-live of a cached entry.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            fresh: self.is_fresh(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            refreshes: self.refreshes.load(Ordering::Relaxed),
        }
    }
}

/// Cache statistics.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Whether the slot holds an unexpired entry
    pub fresh: bool,
    /// Calls served from the slot
    pub hits: u64,
    /// Calls that went to the upstream
    pub misses: u64,
    /// Upstream calls that succeeded and replaced the slot
    pub refreshes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    use async_trait::async_trait;
    use quill_core::error::QuillError;
    use quill_core::types::BlogRecord;

    /// Counts fetches; fails the first `fail_first` of them.
    #[derive(Default)]
    struct CountingSource {
        calls: AtomicUsize,
        fail_first: usize,
        delay: Option<Duration>,
    }

    #[async_trait]
    impl BlogSource for CountingSource {
        async fn fetch_blogs(&self) -> Result<BlogCollection> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            if n < self.fail_first {
                return Err(QuillError::Upstream("boom".into()));
            }
            Ok(vec![BlogRecord::new(format!("fetch {}", n))])
        }
    }

    impl CountingSource {
        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[tokio::test]
    async fn test_cache_hit_within_ttl() {
        let source = Arc::new(CountingSource::default());
        let cache = BlogCache::new(source.clone());

        let first = cache.get().await.unwrap();
        let second = cache.get().await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(source.calls(), 1);
        assert_eq!(cache.stats(), CacheStats { fresh: true, hits: 1, misses: 1, refreshes: 1 });
    }

    #[tokio::test(start_paused = true)]
    async fn test_cache_ttl_expiration() {
        let source = Arc::new(CountingSource::default());
        let cache = BlogCache::new(source.clone());

        let first = cache.get().await.unwrap();

        tokio::time::advance(Duration::from_secs(59)).await;
        assert!(Arc::ptr_eq(&first, &cache.get().await.unwrap()));
        assert_eq!(source.calls(), 1);

        tokio::time::advance(Duration::from_secs(1)).await;
        assert!(!cache.is_fresh());

        let second = cache.get().await.unwrap();

        assert_eq!(source.calls(), 2);
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(second[0].title, "fetch 1");
    }

    #[tokio::test]
    async fn test_cache_errors_not_cached() {
        let source = Arc::new(CountingSource {
            fail_first: 1,
            ..Default::default()
        });
        let cache = BlogCache::new(source.clone());

        assert!(matches!(cache.get().await, Err(QuillError::Upstream(_))));
        assert!(!cache.is_fresh());

        let blogs = cache.get().await.unwrap();
        assert_eq!(blogs[0].title, "fetch 1");
        assert_eq!(source.calls(), 2);

        let stats = cache.stats();
        assert_eq!(stats.misses, 2);
        assert_eq!(stats.refreshes, 1);
    }

    #[tokio::test]
    async fn test_concurrent_cold_calls_single_flight() {
        let source = Arc::new(CountingSource {
            delay: Some(Duration::from_millis(30)),
            ..Default::default()
        });
        let cache = Arc::new(BlogCache::new(source.clone()));

        let calls = (0..8).map(|_| {
            let cache = cache.clone();
            async move { cache.get().await }
        });
        let results = futures::future::join_all(calls).await;

        assert_eq!(source.calls(), 1);
        let first = results[0].as_ref().unwrap();
        for result in &results {
            assert!(Arc::ptr_eq(first, result.as_ref().unwrap()));
        }
    }

    #[tokio::test]
    async fn test_cache_clear() {
        let source = Arc::new(CountingSource::default());
        let cache = BlogCache::new(source.clone());

        cache.get().await.unwrap();
        cache.clear();
        assert!(!cache.is_fresh());

        cache.get().await.unwrap();
        assert_eq!(source.calls(), 2);
    }

    #[test]
    fn test_config_default_ttl() {
        let cache = BlogCache::with_config(Arc::new(CountingSource::default()), CacheConfig::default());
        assert_eq!(cache.ttl(), Duration::from_secs(60));
        assert!(!cache.is_fresh());
    }
}
