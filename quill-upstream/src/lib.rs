//! Upstream blog API client for Quill.
//!
//! One authenticated GET per call, no retries, transport-default timeouts.
//!
//! ```rust,ignore
//! use quill_upstream::{UpstreamClient, UpstreamConfig};
//!
//! let client = UpstreamClient::with_config(UpstreamConfig::with_secret("s3cret"))?;
//! let blogs = client.fetch_blogs().await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod client;

pub use client::{UpstreamClient, UpstreamConfig};
