//! Language normalization for raw request input.
//!
//! The HTTP layer passes the `lang` query parameter or the leading
//! `Accept-Language` fragment through untouched; this module reduces that raw
//! string to the two-letter code used for translation lookup.

/// The canonical fallback language.
///
/// All content is authored in English first; translations are per-language
/// overrides layered on top.
pub const DEFAULT_LANGUAGE: &str = "en";

/// A normalized request language.
///
/// Construction never fails: any raw input collapses to a lowercase
/// two-letter code, and missing or empty input collapses to
/// [`DEFAULT_LANGUAGE`]. Lookup against translations is exact-match only —
/// no script or region fuzzy matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestedLanguage {
    code: String,
}

impl RequestedLanguage {
    /// Normalize a raw language preference.
    ///
    /// Lowercases the input and keeps its first two characters, so
    /// `"fr-FR"`, `"FR"`, and `"fr_CA"` all normalize to `"fr"`.
    /// `None` and empty strings normalize to [`DEFAULT_LANGUAGE`].
    pub fn from_raw(raw: Option<&str>) -> RequestedLanguage {
        let code = match raw {
            Some(value) if !value.trim().is_empty() => value
                .trim()
                .to_lowercase()
                .chars()
                .take(2)
                .collect::<String>(),
            _ => DEFAULT_LANGUAGE.to_string(),
        };

        RequestedLanguage { code }
    }

    /// The normalized two-letter code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Whether this is already the canonical language.
    pub fn is_default(&self) -> bool {
        self.code == DEFAULT_LANGUAGE
    }
}

impl Default for RequestedLanguage {
    fn default() -> Self {
        RequestedLanguage::from_raw(None)
    }
}
