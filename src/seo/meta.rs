//! Page meta tags and Open Graph fields.
//!
//! Every field here follows a fixed fallback chain over the resolved view:
//! the dedicated SEO override first, then the general content field, then a
//! configured default where one exists.

use crate::config::SiteConfig;
use crate::content::ContentKind;
use crate::i18n::ResolvedView;
use serde::Serialize;

/// `<head>` meta tags for a resolved view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub canonical: String,
    pub robots: String,
}

/// Open Graph properties for a resolved view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenGraph {
    pub title: String,
    pub description: Option<String>,
    pub image: String,
    #[serde(rename = "type")]
    pub og_type: String,
    pub url: String,
}

/// Canonical URL for a view: the stored override if set, else a path built
/// from the content kind and slug.
pub fn canonical_url(view: &ResolvedView, kind: ContentKind, config: &SiteConfig) -> String {
    if let Some(stored) = non_empty(&view.canonical_url) {
        return stored.to_string();
    }

    let path = match kind {
        ContentKind::Post => format!("/blog/{}", view.slug),
        ContentKind::Project => format!("/projects/{}", view.slug),
        ContentKind::Category => format!("/category/{}", view.slug),
        ContentKind::Other => format!("/{}", view.slug),
    };
    config.site_url(&path)
}

/// Build the meta-tag block.
pub fn build_meta(view: &ResolvedView, kind: ContentKind, config: &SiteConfig) -> PageMeta {
    let title = non_empty(&view.meta_title)
        .unwrap_or(&view.title)
        .to_string();

    let description = non_empty(&view.meta_description)
        .or_else(|| non_empty(&view.summary))
        .map(String::from);

    PageMeta {
        title,
        description,
        keywords: keywords(view, kind),
        canonical: canonical_url(view, kind, config),
        robots: robots(view),
    }
}

/// Build the Open Graph block.
pub fn build_og(view: &ResolvedView, kind: ContentKind, config: &SiteConfig) -> OpenGraph {
    let title = non_empty(&view.og_title)
        .or_else(|| non_empty(&view.meta_title))
        .unwrap_or(&view.title)
        .to_string();

    let description = non_empty(&view.og_description)
        .or_else(|| non_empty(&view.meta_description))
        .or_else(|| non_empty(&view.summary))
        .map(String::from);

    let og_type = match kind {
        ContentKind::Post => "article",
        _ => "website",
    };

    OpenGraph {
        title,
        description,
        image: og_image(view, config),
        og_type: og_type.to_string(),
        url: canonical_url(view, kind, config),
    }
}

/// The primary content image as an absolute URL, if the record has one.
pub(crate) fn primary_image(view: &ResolvedView, config: &SiteConfig) -> Option<String> {
    non_empty(&view.featured_image)
        .or_else(|| non_empty(&view.image))
        .map(|path| config.media_url(path))
}

fn og_image(view: &ResolvedView, config: &SiteConfig) -> String {
    non_empty(&view.og_image)
        .map(|path| config.media_url(path))
        .or_else(|| primary_image(view, config))
        .unwrap_or_else(|| config.site_url(&config.default_og_image))
}

fn keywords(view: &ResolvedView, kind: ContentKind) -> Option<String> {
    let source = match kind {
        ContentKind::Post => &view.tags,
        ContentKind::Project => &view.technologies,
        _ => return None,
    };

    if source.is_empty() {
        None
    } else {
        Some(source.join(", "))
    }
}

fn robots(view: &ResolvedView) -> String {
    if view.index_follow {
        "index,follow".to_string()
    } else {
        "noindex,nofollow".to_string()
    }
}

pub(crate) fn non_empty(value: &Option<String>) -> Option<&String> {
    value.as_ref().filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{resolve, RequestedLanguage};
    use crate::test_support::{post_record, project_record};

    fn view_of(record: &crate::content::ContentRecord) -> ResolvedView {
        resolve(record, RequestedLanguage::default())
    }

    // ==================== Meta Title / Description Tests ====================

    #[test]
    fn test_meta_title_prefers_override() {
        let mut record = post_record();
        record.meta_title = Some("Override Title".to_string());

        let meta = build_meta(&view_of(&record), ContentKind::Post, &SiteConfig::default());
        assert_eq!(meta.title, "Override Title");
    }

    #[test]
    fn test_meta_title_falls_back_to_content_title() {
        let mut record = post_record();
        record.meta_title = None;

        let meta = build_meta(&view_of(&record), ContentKind::Post, &SiteConfig::default());
        assert_eq!(meta.title, record.title);
    }

    #[test]
    fn test_meta_title_ignores_blank_override() {
        let mut record = post_record();
        record.meta_title = Some("   ".to_string());

        let meta = build_meta(&view_of(&record), ContentKind::Post, &SiteConfig::default());
        assert_eq!(meta.title, record.title);
    }

    #[test]
    fn test_meta_description_falls_back_to_summary() {
        let mut record = post_record();
        record.meta_description = None;
        record.summary = Some("The excerpt.".to_string());

        let meta = build_meta(&view_of(&record), ContentKind::Post, &SiteConfig::default());
        assert_eq!(meta.description.as_deref(), Some("The excerpt."));
    }

    #[test]
    fn test_meta_description_none_when_nothing_set() {
        let mut record = post_record();
        record.meta_description = None;
        record.summary = None;

        let meta = build_meta(&view_of(&record), ContentKind::Post, &SiteConfig::default());
        assert!(meta.description.is_none());
    }

    // ==================== Keywords Tests ====================

    #[test]
    fn test_keywords_from_tags_for_posts() {
        let mut record = post_record();
        record.tags = vec!["vue".to_string(), "laravel".to_string()];

        let meta = build_meta(&view_of(&record), ContentKind::Post, &SiteConfig::default());
        assert_eq!(meta.keywords.as_deref(), Some("vue, laravel"));
    }

    #[test]
    fn test_keywords_from_technologies_for_projects() {
        let mut record = project_record();
        record.technologies = vec!["rust".to_string(), "axum".to_string()];

        let meta = build_meta(&view_of(&record), ContentKind::Project, &SiteConfig::default());
        assert_eq!(meta.keywords.as_deref(), Some("rust, axum"));
    }

    #[test]
    fn test_keywords_none_for_other_kinds() {
        let mut record = post_record();
        record.tags = vec!["vue".to_string()];

        let meta = build_meta(&view_of(&record), ContentKind::Category, &SiteConfig::default());
        assert!(meta.keywords.is_none());
    }

    #[test]
    fn test_keywords_none_when_empty() {
        let mut record = post_record();
        record.tags = vec![];

        let meta = build_meta(&view_of(&record), ContentKind::Post, &SiteConfig::default());
        assert!(meta.keywords.is_none());
    }

    // ==================== Canonical URL Tests ====================

    #[test]
    fn test_canonical_url_stored_override_wins() {
        let mut record = post_record();
        record.canonical_url = Some("https://elsewhere.example/canonical".to_string());

        let url = canonical_url(&view_of(&record), ContentKind::Post, &SiteConfig::default());
        assert_eq!(url, "https://elsewhere.example/canonical");
    }

    #[test]
    fn test_canonical_url_shape_per_kind() {
        let record = post_record();
        let view = view_of(&record);
        let config = SiteConfig::default();
        let slug = &record.slug;

        assert_eq!(
            canonical_url(&view, ContentKind::Post, &config),
            format!("http://localhost/blog/{slug}")
        );
        assert_eq!(
            canonical_url(&view, ContentKind::Project, &config),
            format!("http://localhost/projects/{slug}")
        );
        assert_eq!(
            canonical_url(&view, ContentKind::Category, &config),
            format!("http://localhost/category/{slug}")
        );
        assert_eq!(
            canonical_url(&view, ContentKind::Other, &config),
            format!("http://localhost/{slug}")
        );
    }

    // ==================== Robots Tests ====================

    #[test]
    fn test_robots_follows_index_flag() {
        let mut record = post_record();
        record.index_follow = true;
        let meta = build_meta(&view_of(&record), ContentKind::Post, &SiteConfig::default());
        assert_eq!(meta.robots, "index,follow");

        record.index_follow = false;
        let meta = build_meta(&view_of(&record), ContentKind::Post, &SiteConfig::default());
        assert_eq!(meta.robots, "noindex,nofollow");
    }

    // ==================== Open Graph Tests ====================

    #[test]
    fn test_og_title_three_level_fallback() {
        let mut record = post_record();
        record.og_title = Some("OG Title".to_string());
        record.meta_title = Some("Meta Title".to_string());

        let og = build_og(&view_of(&record), ContentKind::Post, &SiteConfig::default());
        assert_eq!(og.title, "OG Title");

        record.og_title = None;
        let og = build_og(&view_of(&record), ContentKind::Post, &SiteConfig::default());
        assert_eq!(og.title, "Meta Title");

        record.meta_title = None;
        let og = build_og(&view_of(&record), ContentKind::Post, &SiteConfig::default());
        assert_eq!(og.title, record.title);
    }

    #[test]
    fn test_og_type_article_for_posts_website_otherwise() {
        let record = post_record();
        let view = view_of(&record);
        let config = SiteConfig::default();

        assert_eq!(build_og(&view, ContentKind::Post, &config).og_type, "article");
        assert_eq!(
            build_og(&view, ContentKind::Project, &config).og_type,
            "website"
        );
        assert_eq!(
            build_og(&view, ContentKind::Other, &config).og_type,
            "website"
        );
    }

    #[test]
    fn test_og_image_fallback_chain() {
        let config = SiteConfig::default();
        let mut record = post_record();
        record.og_image = Some("og/custom.jpg".to_string());
        record.featured_image = Some("posts/featured.jpg".to_string());
        record.image = Some("posts/plain.jpg".to_string());

        let og = build_og(&view_of(&record), ContentKind::Post, &config);
        assert_eq!(og.image, "http://localhost/storage/og/custom.jpg");

        record.og_image = None;
        let og = build_og(&view_of(&record), ContentKind::Post, &config);
        assert_eq!(og.image, "http://localhost/storage/posts/featured.jpg");

        record.featured_image = None;
        let og = build_og(&view_of(&record), ContentKind::Post, &config);
        assert_eq!(og.image, "http://localhost/storage/posts/plain.jpg");

        record.image = None;
        let og = build_og(&view_of(&record), ContentKind::Post, &config);
        assert_eq!(og.image, "http://localhost/images/og-default.jpg");
    }

    #[test]
    fn test_og_url_matches_canonical() {
        let record = post_record();
        let view = view_of(&record);
        let config = SiteConfig::default();

        let og = build_og(&view, ContentKind::Post, &config);
        assert_eq!(og.url, canonical_url(&view, ContentKind::Post, &config));
    }

    #[test]
    fn test_og_serializes_type_key() {
        let record = post_record();
        let og = build_og(&view_of(&record), ContentKind::Post, &SiteConfig::default());
        let json = serde_json::to_value(&og).expect("Should serialize");
        assert_eq!(json["type"], "article");
    }
}
