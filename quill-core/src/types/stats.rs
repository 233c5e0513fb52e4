//! Derived statistics over a blog collection.

use serde::{Deserialize, Serialize};

/// Statistics computed fresh for every stats request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogStats {
    /// Number of records.
    pub total_blogs: u64,
    /// Longest title, first one on ties. `None` for an empty collection.
    pub longest_title: Option<String>,
    /// Number of titles containing "privacy" in any case.
    pub privacy_blogs_count: u64,
    /// Titles with duplicates removed, in first-occurrence order.
    pub unique_titles: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_is_camel_case() {
        let stats = BlogStats {
            total_blogs: 2,
            longest_title: Some("Data Privacy 101".into()),
            privacy_blogs_count: 1,
            unique_titles: vec!["Data Privacy 101".into(), "Go".into()],
        };

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["totalBlogs"], 2);
        assert_eq!(json["longestTitle"], "Data Privacy 101");
        assert_eq!(json["privacyBlogsCount"], 1);
        assert_eq!(json["uniqueTitles"][1], "Go");
    }

    #[test]
    fn test_empty_longest_title_is_null() {
        let json = serde_json::to_value(BlogStats::default()).unwrap();
        assert!(json["longestTitle"].is_null());
        assert_eq!(json["uniqueTitles"], serde_json::json!([]));
    }
}
