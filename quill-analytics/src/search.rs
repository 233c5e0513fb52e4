//! Title search.

use quill_core::error::{QuillError, Result};
use quill_core::types::{BlogCollection, BlogRecord};

/// Returns the records whose title contains `query`, ignoring case.
///
/// Matching records are cloned in input order. An empty query is rejected
/// with [`QuillError::InvalidQuery`]; any other query is matched as given,
/// whitespace included.
pub fn search_by_title(blogs: &[BlogRecord], query: &str) -> Result<BlogCollection> {
    if query.is_empty() {
        return Err(QuillError::InvalidQuery(
            "query must not be empty".into(),
        ));
    }

    let needle = query.to_lowercase();

    Ok(blogs
        .iter()
        .filter(|blog| blog.title.to_lowercase().contains(&needle))
        .cloned()
        .collect())
}
