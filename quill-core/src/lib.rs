//! # Quill Core
//!
//! Core types, errors, and traits shared by every Quill crate.
//!
//! - **Types**: [`BlogRecord`], [`BlogCollection`], [`BlogStats`]
//! - **Errors**: [`QuillError`] and the crate-wide [`Result`] alias
//! - **Constants**: defaults for the upstream endpoint, cache TTL, and port
//! - **Traits**: [`BlogSource`], the seam between handlers and the upstream
//!
//! ## Example
//!
//! ```rust
//! use quill_core::BlogRecord;
//!
//! let record: BlogRecord = serde_json::from_str(r#"{"id":"1","title":"Hello"}"#).unwrap();
//! assert_eq!(record.title, "Hello");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;

pub use constants::*;
pub use error::{QuillError, Result};
pub use traits::*;
pub use types::*;
