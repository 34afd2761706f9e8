//! Translation selection and field merging.
//!
//! `resolve` is a pure function over an already-loaded record: it never
//! queries, never fails, and degrades through a deterministic fallback chain
//! (requested language → English → parent fields only).

use crate::content::{ContentRecord, Translation};
use crate::i18n::{RequestedLanguage, DEFAULT_LANGUAGE};
use chrono::{DateTime, Utc};
use tracing::debug;

/// The merged, language-effective view of a content record.
///
/// Ephemeral: recomputed per request and never persisted. Every localized
/// field holds the selected translation's value where present, else the
/// parent record's.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedView {
    pub id: i64,
    pub slug: String,

    pub title: String,
    pub summary: Option<String>,
    pub body: Option<String>,

    pub image: Option<String>,
    pub featured_image: Option<String>,
    pub tags: Vec<String>,
    pub technologies: Vec<String>,

    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_image: Option<String>,
    pub canonical_url: Option<String>,
    pub ai_summary: Option<String>,
    pub schema_markup: Option<String>,
    pub index_follow: bool,

    pub published: bool,
    pub featured: bool,

    pub published_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    /// Language codes of all loaded translations, in query order
    pub available_translations: Vec<String>,

    /// The normalized code the client asked for.
    ///
    /// Note: this reports the *requested* language even when resolution fell
    /// back to English, which is what existing frontend consumers expect.
    pub current_language: String,
}

/// Resolve a record against a requested language.
///
/// Selection order:
/// 1. translation whose language equals the normalized request (exact match)
/// 2. the English translation
/// 3. no translation — every field comes from the parent record
pub fn resolve(record: &ContentRecord, requested: RequestedLanguage) -> ResolvedView {
    let translation = record.translation(requested.code()).or_else(|| {
        let fallback = record.translation(DEFAULT_LANGUAGE);
        if fallback.is_some() && !requested.is_default() {
            debug!(
                requested = requested.code(),
                slug = %record.slug,
                "requested translation missing, falling back to English"
            );
        }
        fallback
    });

    merge(record, translation, requested)
}

/// Merge the parent record with the selected translation, if any.
fn merge(
    record: &ContentRecord,
    translation: Option<&Translation>,
    requested: RequestedLanguage,
) -> ResolvedView {
    let pick = |field: fn(&Translation) -> &Option<String>, parent: &Option<String>| {
        translation
            .and_then(|t| field(t).clone())
            .or_else(|| parent.clone())
    };

    ResolvedView {
        id: record.id,
        slug: record.slug.clone(),

        title: translation
            .and_then(|t| t.title.clone())
            .unwrap_or_else(|| record.title.clone()),
        summary: pick(|t| &t.summary, &record.summary),
        body: pick(|t| &t.body, &record.body),

        image: record.image.clone(),
        featured_image: record.featured_image.clone(),
        tags: record.tags.clone(),
        technologies: record.technologies.clone(),

        meta_title: pick(|t| &t.meta_title, &record.meta_title),
        meta_description: pick(|t| &t.meta_description, &record.meta_description),
        og_title: pick(|t| &t.og_title, &record.og_title),
        og_description: pick(|t| &t.og_description, &record.og_description),
        og_image: record.og_image.clone(),
        canonical_url: pick(|t| &t.canonical_url, &record.canonical_url),
        ai_summary: pick(|t| &t.ai_summary, &record.ai_summary),
        schema_markup: record.schema_markup.clone(),
        index_follow: record.index_follow,

        published: record.published,
        featured: record.featured,

        published_at: record.published_at,
        completed_at: record.completed_at,
        created_at: record.created_at,
        updated_at: record.updated_at,

        available_translations: record.translation_languages(),
        current_language: requested.code().to_string(),
    }
}
