//! Plain-text AI summary extraction.

use crate::html::strip_tags;
use crate::i18n::ResolvedView;

const SUMMARY_MAX_CHARS: usize = 500;

/// Generate a plain-text summary for a resolved view.
///
/// Takes the body (falling back to the summary field), strips markup,
/// truncates to the first 500 characters, and appends a trailing line naming
/// the record's topics and technologies where present.
pub fn generate_ai_summary(view: &ResolvedView) -> String {
    let source = view
        .body
        .as_deref()
        .or(view.summary.as_deref())
        .unwrap_or("");

    let text = strip_tags(source);
    let truncated: String = text.chars().take(SUMMARY_MAX_CHARS).collect();

    match suffix_line(view) {
        Some(suffix) if !truncated.is_empty() => format!("{truncated}\n{suffix}"),
        Some(suffix) => suffix,
        None => truncated,
    }
}

/// "Topics: a, b. Technologies: x, y." with absent parts omitted.
fn suffix_line(view: &ResolvedView) -> Option<String> {
    let mut sentences = Vec::new();

    if !view.tags.is_empty() {
        sentences.push(format!("Topics: {}", view.tags.join(", ")));
    }
    if !view.technologies.is_empty() {
        sentences.push(format!("Technologies: {}", view.technologies.join(", ")));
    }

    if sentences.is_empty() {
        None
    } else {
        Some(format!("{}.", sentences.join(". ")))
    }
}
