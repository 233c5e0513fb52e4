//! # Quill Analytics
//!
//! Pure functions over a [`BlogCollection`](quill_core::BlogCollection):
//!
//! - [`analyze`]: total count, longest title, privacy count, unique titles
//! - [`search_by_title`]: case-insensitive substring filter on titles
//!
//! Nothing here performs I/O; callers fetch the collection first.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod analyzer;
pub mod search;

pub use analyzer::{
    analyze, longest_title, privacy_blogs_count, require_non_empty, total_blogs, unique_titles,
};
pub use search::search_by_title;
