//! JSON-LD structured data.
//!
//! Posts get a `BlogPosting` object and projects a `CreativeWork`; other
//! content kinds carry no structured data. Admins can also paste raw JSON-LD
//! into `schema_markup`, which is parsed here and discarded with a warning
//! when it is not valid JSON.

use crate::config::SiteConfig;
use crate::content::ContentKind;
use crate::i18n::ResolvedView;
use crate::seo::meta::{non_empty, primary_image};
use serde_json::{json, Value};
use tracing::warn;

/// Parse admin-stored `schema_markup` text.
///
/// Returns `None` when nothing is stored or when the stored text is not
/// valid JSON; malformed markup is never passed through raw.
pub fn parse_stored_schema(view: &ResolvedView) -> Option<Value> {
    let raw = non_empty(&view.schema_markup)?;

    match serde_json::from_str::<Value>(raw) {
        Ok(value) => Some(value),
        Err(error) => {
            warn!(
                slug = %view.slug,
                %error,
                "stored schema markup is not valid JSON, ignoring"
            );
            None
        }
    }
}

/// Generate JSON-LD for a resolved view.
///
/// Returns `None` for content kinds without a schema mapping.
pub fn build_schema(view: &ResolvedView, kind: ContentKind, config: &SiteConfig) -> Option<Value> {
    match kind {
        ContentKind::Post => Some(blog_posting(view, config)),
        ContentKind::Project => Some(creative_work(view, config)),
        ContentKind::Category | ContentKind::Other => None,
    }
}

fn blog_posting(view: &ResolvedView, config: &SiteConfig) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "BlogPosting",
        "headline": view.title,
        "description": description(view),
        "image": primary_image(view, config),
        "datePublished": view.published_at.map(|at| at.to_rfc3339()),
        "dateModified": view.updated_at.to_rfc3339(),
        "author": {
            "@type": "Person",
            "name": config.default_author,
        },
        "publisher": {
            "@type": "Organization",
            "name": config.app_name,
        },
    })
}

fn creative_work(view: &ResolvedView, config: &SiteConfig) -> Value {
    // Projects date from their completion, falling back to record creation
    let date_created = view.completed_at.unwrap_or(view.created_at);

    json!({
        "@context": "https://schema.org",
        "@type": "CreativeWork",
        "name": view.title,
        "description": description(view),
        "image": primary_image(view, config),
        "dateCreated": date_created.to_rfc3339(),
        "author": {
            "@type": "Person",
            "name": config.default_author,
        },
    })
}

fn description(view: &ResolvedView) -> Option<String> {
    non_empty(&view.summary)
        .or_else(|| non_empty(&view.meta_description))
        .map(String::from)
}
