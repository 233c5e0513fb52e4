//! TTL cache for the Quill blog collection.
//!
//! A single slot holding the last upstream fetch. Refreshes are
//! single-flight: concurrent callers that find the slot stale wait for one
//! fetch and share its result.

mod cache;

pub use cache::{BlogCache, CacheConfig, CacheStats};
