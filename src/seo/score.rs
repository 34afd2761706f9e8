//! SEO completeness scoring.
//!
//! The score is a deterministic, point-additive function over a resolved
//! view: each signal contributes independently and the total is capped at
//! 100. Lengths are counted in characters, not bytes.
//!
//! # Persistence contract
//!
//! Scores are computed at write time, never lazily on read. The persistence
//! layer must call [`refresh_score`] synchronously before committing a record
//! save, inside whatever transactional guarantee it provides.

use crate::content::ContentRecord;
use crate::html::strip_tags;
use crate::i18n::{resolve, RequestedLanguage, ResolvedView};
use crate::seo::meta::non_empty;

const MAX_SCORE: u32 = 100;

/// Compute the 0–100 SEO score for a resolved view.
///
/// | Signal | Condition | Points |
/// |---|---|---|
/// | meta title | length 30–60 / any non-empty | 20 / 10 |
/// | meta description | length 120–160 / any non-empty | 20 / 10 |
/// | tags or technologies | non-empty | 10 |
/// | featured image or image | present | 10 |
/// | slug | present, shorter than 50 chars | 10 |
/// | body text (tags stripped) | >1000 / >500 / >200 chars | 15 / 10 / 5 |
/// | schema markup | stored | 10 |
/// | AI summary | present | 5 |
pub fn score(view: &ResolvedView) -> u8 {
    let mut points: u32 = 0;

    points += ranged_field_points(&view.meta_title, 30, 60);
    points += ranged_field_points(&view.meta_description, 120, 160);

    if !view.tags.is_empty() || !view.technologies.is_empty() {
        points += 10;
    }

    if non_empty(&view.featured_image).is_some() || non_empty(&view.image).is_some() {
        points += 10;
    }

    let slug_len = view.slug.chars().count();
    if slug_len > 0 && slug_len < 50 {
        points += 10;
    }

    points += body_points(&view.body);

    if non_empty(&view.schema_markup).is_some() {
        points += 10;
    }

    if non_empty(&view.ai_summary).is_some() {
        points += 5;
    }

    points.min(MAX_SCORE) as u8
}

/// Recompute and store the score on a record.
///
/// Scoring always runs over the canonical (English-effective) view, so the
/// persisted score does not depend on whichever language was last requested.
pub fn refresh_score(record: &mut ContentRecord) -> u8 {
    let view = resolve(record, RequestedLanguage::default());
    let refreshed = score(&view);
    record.seo_score = refreshed;
    refreshed
}

/// 20 points inside the ideal length range, 10 for any non-empty value.
fn ranged_field_points(field: &Option<String>, min: usize, max: usize) -> u32 {
    match non_empty(field) {
        Some(value) => {
            let length = value.chars().count();
            if (min..=max).contains(&length) {
                20
            } else {
                10
            }
        }
        None => 0,
    }
}

fn body_points(body: &Option<String>) -> u32 {
    let length = body
        .as_deref()
        .map(|content| strip_tags(content).chars().count())
        .unwrap_or(0);

    if length > 1000 {
        15
    } else if length > 500 {
        10
    } else if length > 200 {
        5
    } else {
        0
    }
}
