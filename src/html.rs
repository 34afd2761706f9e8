//! Minimal HTML handling shared by scoring and summary generation.

use regex::Regex;
use std::sync::OnceLock;

// Regex pattern for tag removal (cached for performance)
static TAG_REGEX: OnceLock<Regex> = OnceLock::new();

fn tag_regex() -> &'static Regex {
    TAG_REGEX.get_or_init(|| Regex::new(r"<[^>]*>").expect("Tag regex should compile"))
}

/// Strip markup tags from a body, collapsing runs of whitespace left behind.
///
/// This is a plain-text approximation for length counting and summary
/// extraction, not a sanitizer.
pub fn strip_tags(input: &str) -> String {
    let without_tags = tag_regex().replace_all(input, " ");
    without_tags.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_tags_removes_simple_tags() {
        assert_eq!(strip_tags("<p>Hello</p>"), "Hello");
    }

    #[test]
    fn test_strip_tags_removes_attributes() {
        assert_eq!(
            strip_tags(r#"<a href="https://example.com" target="_blank">link</a>"#),
            "link"
        );
    }

    #[test]
    fn test_strip_tags_collapses_whitespace() {
        assert_eq!(
            strip_tags("<p>First</p>\n\n<p>Second</p>"),
            "First Second"
        );
    }

    #[test]
    fn test_strip_tags_plain_text_unchanged() {
        assert_eq!(strip_tags("Just plain text."), "Just plain text.");
    }

    #[test]
    fn test_strip_tags_empty_input() {
        assert_eq!(strip_tags(""), "");
    }

    #[test]
    fn test_strip_tags_nested_markup() {
        assert_eq!(
            strip_tags("<div><strong>Bold</strong> and <em>italic</em></div>"),
            "Bold and italic"
        );
    }
}
