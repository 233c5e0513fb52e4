//! Statistics over a blog collection.
//!
//! Every function is a single linear pass. Ties and duplicates resolve in
//! favor of the earliest record, so results are stable for a given input
//! order.
//!
//! Title length is measured in Unicode scalar values (`chars()`), not bytes.

use std::collections::HashSet;

use quill_core::constants::PRIVACY_MARKER;
use quill_core::error::{QuillError, Result};
use quill_core::types::{BlogRecord, BlogStats};

/// Computes all statistics for the collection.
///
/// An empty collection yields zero counts, no unique titles, and
/// `longest_title == None`.
pub fn analyze(blogs: &[BlogRecord]) -> BlogStats {
    BlogStats {
        total_blogs: total_blogs(blogs),
        longest_title: longest_title(blogs).map(str::to_owned),
        privacy_blogs_count: privacy_blogs_count(blogs),
        unique_titles: unique_titles(blogs),
    }
}

/// Number of records in the collection.
pub fn total_blogs(blogs: &[BlogRecord]) -> u64 {
    blogs.len() as u64
}

/// Title of the record with the longest title.
///
/// Returns the first such title on ties, `None` when `blogs` is empty.
pub fn longest_title(blogs: &[BlogRecord]) -> Option<&str> {
    let mut best: Option<(&str, usize)> = None;

    for blog in blogs {
        let len = blog.title.chars().count();
        if best.map_or(true, |(_, best_len)| len > best_len) {
            best = Some((blog.title.as_str(), len));
        }
    }

    best.map(|(title, _)| title)
}

/// Number of records whose title mentions privacy, in any letter case.
pub fn privacy_blogs_count(blogs: &[BlogRecord]) -> u64 {
    blogs
        .iter()
        .filter(|blog| blog.title.to_lowercase().contains(PRIVACY_MARKER))
        .count() as u64
}

/// Titles with exact duplicates removed, keeping first occurrences in order.
pub fn unique_titles(blogs: &[BlogRecord]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(blogs.len());
    let mut titles = Vec::new();

    for blog in blogs {
        if seen.insert(blog.title.as_str()) {
            titles.push(blog.title.clone());
        }
    }

    titles
}

/// Rejects an empty collection with [`QuillError::EmptyInput`].
///
/// For callers that treat "no blogs" as a failure rather than reporting an
/// absent longest title.
pub fn require_non_empty(blogs: &[BlogRecord]) -> Result<&[BlogRecord]> {
    if blogs.is_empty() {
        Err(QuillError::EmptyInput)
    } else {
        Ok(blogs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_case::test_case;

    fn blogs(titles: &[&str]) -> Vec<BlogRecord> {
        titles.iter().map(|t| BlogRecord::new(*t)).collect()
    }

    #[test]
    fn test_analyze_mixed_collection() {
        let input = blogs(&[
            "PRIVACY Policy",
            "Data Privacy 101",
            "Going Further",
            "PRIVACY Policy",
            "Java Basics",
        ]);

        let stats = analyze(&input);

        assert_eq!(stats.total_blogs, 5);
        assert_eq!(stats.longest_title.as_deref(), Some("Data Privacy 101"));
        assert_eq!(stats.privacy_blogs_count, 3);
        assert_eq!(
            stats.unique_titles,
            vec!["PRIVACY Policy", "Data Privacy 101", "Going Further", "Java Basics"]
        );
    }

    #[test]
    fn test_analyze_empty_collection() {
        let stats = analyze(&[]);

        assert_eq!(stats, BlogStats::default());
        assert!(stats.longest_title.is_none());
    }

    #[test]
    fn test_longest_title_tie_keeps_first() {
        let input = blogs(&["abc", "xyz", "ab", "def"]);
        assert_eq!(longest_title(&input), Some("abc"));
    }

    #[test]
    fn test_longest_title_counts_chars_not_bytes() {
        // "ééé" is 6 bytes but 3 chars.
        let input = blogs(&["ééé", "abcd"]);
        assert_eq!(longest_title(&input), Some("abcd"));
    }

    #[test_case("privacy matters", 1 ; "lowercase")]
    #[test_case("PRIVACY Policy", 1 ; "uppercase")]
    #[test_case("Data PrIvAcY 101", 1 ; "mixed case")]
    #[test_case("private thoughts", 0 ; "near miss")]
    #[test_case("", 0 ; "empty title")]
    fn test_privacy_count_single(title: &str, expected: u64) {
        assert_eq!(privacy_blogs_count(&blogs(&[title])), expected);
    }

    #[test]
    fn test_unique_titles_is_case_sensitive() {
        let input = blogs(&["Rust", "rust", "Rust"]);
        assert_eq!(unique_titles(&input), vec!["Rust", "rust"]);
    }

    #[test]
    fn test_require_non_empty() {
        assert!(matches!(require_non_empty(&[]), Err(QuillError::EmptyInput)));
        assert_eq!(require_non_empty(&blogs(&["a"])).unwrap().len(), 1);
    }

    fn titles_strategy() -> impl Strategy<Value = Vec<String>> {
        // Small alphabet so duplicates and length ties actually occur.
        prop::collection::vec("[a-cP ]{0,6}(privacy|PRIVACY)?", 0..24)
    }

    proptest! {
        #[test]
        fn prop_total_matches_len(titles in titles_strategy()) {
            let input: Vec<_> = titles.iter().map(BlogRecord::new).collect();
            prop_assert_eq!(analyze(&input).total_blogs, titles.len() as u64);
        }

        #[test]
        fn prop_longest_is_max_and_first(titles in titles_strategy()) {
            let input: Vec<_> = titles.iter().map(BlogRecord::new).collect();
            match longest_title(&input) {
                None => prop_assert!(titles.is_empty()),
                Some(longest) => {
                    let len = longest.chars().count();
                    prop_assert!(titles.iter().all(|t| t.chars().count() <= len));
                    let first = titles.iter().find(|t| t.chars().count() == len).unwrap();
                    prop_assert_eq!(first.as_str(), longest);
                }
            }
        }

        #[test]
        fn prop_privacy_count_matches_filter(titles in titles_strategy()) {
            let input: Vec<_> = titles.iter().map(BlogRecord::new).collect();
            let expected = titles
                .iter()
                .filter(|t| t.to_lowercase().contains("privacy"))
                .count() as u64;
            prop_assert_eq!(privacy_blogs_count(&input), expected);
        }

        #[test]
        fn prop_unique_titles_dedup_in_order(titles in titles_strategy()) {
            let input: Vec<_> = titles.iter().map(BlogRecord::new).collect();
            let unique = unique_titles(&input);

            prop_assert!(unique.len() <= titles.len());
            let set: HashSet<_> = unique.iter().collect();
            prop_assert_eq!(set.len(), unique.len());

            // Each unique title appears in the order of its first occurrence.
            let firsts: Vec<usize> = unique
                .iter()
                .map(|u| titles.iter().position(|t| t == u).unwrap())
                .collect();
            prop_assert!(firsts.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
