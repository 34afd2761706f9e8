//! Content data model: base records and their per-language translations.
//!
//! The persistence layer loads a `ContentRecord` together with its
//! `Translation` rows and hands both to the resolver. Nothing in this module
//! queries a database; records arrive fully materialized.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The kind of content a record represents.
///
/// Passed explicitly to URL, Open Graph, and schema derivation instead of
/// being inferred from the record itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Post,
    Project,
    Category,
    Other,
}

impl ContentKind {
    /// Parse a kind from its lowercase name. Unknown names map to `Other`.
    pub fn from_name(name: &str) -> ContentKind {
        match name {
            "post" => ContentKind::Post,
            "project" => ContentKind::Project,
            "category" => ContentKind::Category,
            _ => ContentKind::Other,
        }
    }
}

/// A per-language override bundle attached to a `ContentRecord`.
///
/// Every field is optional; `None` means "inherit the parent record's value".
/// A record carries at most one translation per language code.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Translation {
    /// ISO 639-1 language code (e.g., "en", "fr")
    pub language: String,

    pub title: Option<String>,
    pub summary: Option<String>,
    pub body: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub canonical_url: Option<String>,
    pub ai_summary: Option<String>,
}

/// A base localizable entity (post or project) before translation.
///
/// `summary` is the record's description/excerpt slot; posts call it an
/// excerpt and projects a description, but the resolver and the SEO builders
/// treat it as a single semantic field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentRecord {
    pub id: i64,

    /// URL-safe slug, unique within its content kind
    pub slug: String,

    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub body: Option<String>,

    // Media paths, relative to the storage base URL
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub featured_image: Option<String>,

    /// Topic tags, in admin-defined order (posts)
    #[serde(default)]
    pub tags: Vec<String>,
    /// Technology names, in admin-defined order (projects)
    #[serde(default)]
    pub technologies: Vec<String>,

    // SEO columns
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub og_title: Option<String>,
    #[serde(default)]
    pub og_description: Option<String>,
    #[serde(default)]
    pub og_image: Option<String>,
    #[serde(default)]
    pub canonical_url: Option<String>,
    #[serde(default)]
    pub ai_summary: Option<String>,
    /// JSON-LD stored as raw text by the admin panel; may be invalid JSON
    #[serde(default)]
    pub schema_markup: Option<String>,
    #[serde(default = "default_index_follow")]
    pub index_follow: bool,
    /// Last persisted SEO score, refreshed on every save
    #[serde(default)]
    pub seo_score: u8,

    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub featured: bool,

    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    /// Translations in query order, one per language
    #[serde(default)]
    pub translations: Vec<Translation>,
}

fn default_index_follow() -> bool {
    true
}

impl ContentRecord {
    /// Find the translation for an exact language code, if loaded.
    pub fn translation(&self, language: &str) -> Option<&Translation> {
        self.translations.iter().find(|t| t.language == language)
    }

    /// Language codes of all loaded translations, in query order.
    pub fn translation_languages(&self) -> Vec<String> {
        self.translations.iter().map(|t| t.language.clone()).collect()
    }
}
