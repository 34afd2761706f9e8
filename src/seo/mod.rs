//! SEO metadata generation over a resolved content view.
//!
//! # Architecture
//!
//! - `meta`: page meta tags and Open Graph fields with their fallback chains
//! - `schema`: JSON-LD structured data (generated or parsed from storage)
//! - `score`: the 0–100 completeness score and its write-time refresh hook
//! - `summary`: plain-text AI summary extraction

mod meta;
mod schema;
mod score;
mod summary;

pub use meta::{build_meta, build_og, canonical_url, OpenGraph, PageMeta};
pub use schema::{build_schema, parse_stored_schema};
pub use score::{refresh_score, score};
pub use summary::generate_ai_summary;

use crate::config::SiteConfig;
use crate::content::ContentKind;
use crate::i18n::ResolvedView;
use serde::Serialize;

/// The complete SEO payload nested under the `seo` key of an API response.
#[derive(Debug, Clone, Serialize)]
pub struct SeoMetadata {
    pub meta: PageMeta,
    pub og: OpenGraph,
    pub schema: Option<serde_json::Value>,
    pub score: u8,
}

impl SeoMetadata {
    /// Build the full metadata bundle for a resolved view.
    ///
    /// Admin-supplied `schema_markup` wins over the generated JSON-LD when it
    /// parses; invalid stored markup is discarded, not passed through.
    pub fn build(view: &ResolvedView, kind: ContentKind, config: &SiteConfig) -> SeoMetadata {
        let schema = parse_stored_schema(view).or_else(|| build_schema(view, kind, config));

        SeoMetadata {
            meta: build_meta(view, kind, config),
            og: build_og(view, kind, config),
            schema,
            score: score(view),
        }
    }
}
