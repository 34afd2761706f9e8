//! Response payload assembly.
//!
//! The HTTP layer hands a loaded record plus the raw request language to
//! `build_payload` and serializes the result as-is. Media paths become
//! absolute URLs here; timestamps serialize as ISO-8601 through chrono.

use crate::config::SiteConfig;
use crate::content::{ContentKind, ContentRecord};
use crate::i18n::{resolve, RequestedLanguage};
use crate::seo::SeoMetadata;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// The JSON shape a single content record takes on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct ContentPayload {
    pub id: i64,
    pub slug: String,

    pub title: String,
    pub summary: Option<String>,
    pub body: Option<String>,

    /// Absolute media URLs
    pub image: Option<String>,
    pub featured_image: Option<String>,

    pub tags: Vec<String>,
    pub technologies: Vec<String>,

    pub published: bool,
    pub featured: bool,

    pub published_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    pub seo: SeoMetadata,

    pub available_translations: Vec<String>,
    pub current_language: String,
}

/// Resolve a record for the requested language and assemble its payload.
pub fn build_payload(
    record: &ContentRecord,
    kind: ContentKind,
    requested_language: Option<&str>,
    config: &SiteConfig,
) -> ContentPayload {
    let view = resolve(record, RequestedLanguage::from_raw(requested_language));
    let seo = SeoMetadata::build(&view, kind, config);

    ContentPayload {
        id: view.id,
        slug: view.slug,

        title: view.title,
        summary: view.summary,
        body: view.body,

        image: view.image.as_deref().map(|path| config.media_url(path)),
        featured_image: view
            .featured_image
            .as_deref()
            .map(|path| config.media_url(path)),

        tags: view.tags,
        technologies: view.technologies,

        published: view.published,
        featured: view.featured,

        published_at: view.published_at,
        completed_at: view.completed_at,
        created_at: view.created_at,
        updated_at: view.updated_at,

        seo,

        available_translations: view.available_translations,
        current_language: view.current_language,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Translation;
    use crate::test_support::post_record;

    #[test]
    fn test_payload_media_urls_are_absolute() {
        let mut record = post_record();
        record.image = Some("posts/cover.jpg".to_string());

        let payload = build_payload(&record, ContentKind::Post, None, &SiteConfig::default());
        assert_eq!(
            payload.image.as_deref(),
            Some("http://localhost/storage/posts/cover.jpg")
        );
    }

    #[test]
    fn test_payload_carries_language_fields() {
        let mut record = post_record();
        record.translations = vec![
            Translation {
                language: "en".to_string(),
                ..Translation::default()
            },
            Translation {
                language: "fr".to_string(),
                title: Some("Titre".to_string()),
                ..Translation::default()
            },
        ];

        let payload = build_payload(
            &record,
            ContentKind::Post,
            Some("fr-CA"),
            &SiteConfig::default(),
        );
        assert_eq!(payload.title, "Titre");
        assert_eq!(payload.current_language, "fr");
        assert_eq!(payload.available_translations, vec!["en", "fr"]);
    }

    #[test]
    fn test_payload_serializes_timestamps_iso8601() {
        let record = post_record();
        let payload = build_payload(&record, ContentKind::Post, None, &SiteConfig::default());

        let json = serde_json::to_value(&payload).expect("Should serialize");
        let created = json["created_at"].as_str().expect("Should be a string");
        assert!(created.contains('T'), "ISO-8601 timestamp: {created}");
    }

    #[test]
    fn test_payload_nests_seo_object() {
        let record = post_record();
        let payload = build_payload(&record, ContentKind::Post, None, &SiteConfig::default());

        let json = serde_json::to_value(&payload).expect("Should serialize");
        assert!(json["seo"]["meta"]["canonical"]
            .as_str()
            .unwrap()
            .contains("/blog/"));
        assert_eq!(json["seo"]["og"]["type"], "article");
    }
}
