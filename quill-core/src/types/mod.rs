//! Domain types for Quill.
//!
//! - [`BlogRecord`]: one upstream blog post, title plus passthrough fields
//! - [`BlogCollection`]: ordered records as returned by the upstream
//! - [`BlogPayload`]: the accepted shapes of an upstream response body
//! - [`BlogStats`]: derived statistics served by the stats endpoints

mod blog;
mod stats;

pub use blog::*;
pub use stats::*;
