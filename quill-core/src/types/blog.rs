//! Blog records and upstream payload normalization.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single blog post from the upstream source.
///
/// Only `title` is interpreted. Every other field is kept as-is so that
/// search results echo the upstream record unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlogRecord {
    /// Post title.
    pub title: String,
    /// Remaining upstream fields, untouched.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl BlogRecord {
    /// Creates a record carrying only a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fields: Map::new(),
        }
    }

    /// Adds a passthrough field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}

/// Ordered blog records, in upstream order.
pub type BlogCollection = Vec<BlogRecord>;

/// Response bodies the upstream is known to produce.
///
/// Hasura REST endpoints wrap the rows in an object keyed by the query
/// name; a plain array is accepted as well.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum BlogPayload {
    /// `[{"title": ...}, ...]`
    Bare(BlogCollection),
    /// `{"blogs": [{"title": ...}, ...]}`
    Wrapped {
        /// The wrapped records.
        blogs: BlogCollection,
    },
}

impl BlogPayload {
    /// Unwraps the payload into its records.
    pub fn into_collection(self) -> BlogCollection {
        match self {
            BlogPayload::Bare(blogs) | BlogPayload::Wrapped { blogs } => blogs,
        }
    }
}
