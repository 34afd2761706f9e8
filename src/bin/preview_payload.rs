//! Preview payload binary - resolves a record fixture and prints the API payload
//!
//! Usage:
//!   cargo run --bin preview-payload -- record.json post        # English payload
//!   cargo run --bin preview-payload -- record.json post fr-FR  # French payload
//!
//! The fixture file holds one ContentRecord as JSON, in the same shape the
//! persistence layer loads.
//!
//! Optional environment variables:
//! - APP_NAME (defaults to Portfolio)
//! - APP_URL (defaults to http://localhost)
//! - STORAGE_BASE_URL (defaults to http://localhost/storage)
//! - DEFAULT_AUTHOR, DEFAULT_OG_IMAGE

use anyhow::{bail, Context, Result};
use portfolio_content_core::config::SiteConfig;
use portfolio_content_core::content::{ContentKind, ContentRecord};
use portfolio_content_core::payload::build_payload;
use std::fs;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("portfolio_content_core=debug".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (fixture_path, kind_name, language) = match args.as_slice() {
        [path, kind] => (path, kind, None),
        [path, kind, language] => (path, kind, Some(language.as_str())),
        _ => bail!("usage: preview-payload <record.json> <post|project|category|other> [language]"),
    };

    let config = SiteConfig::from_env()?;
    let kind = ContentKind::from_name(kind_name);

    let raw = fs::read_to_string(fixture_path)
        .with_context(|| format!("Failed to read fixture {fixture_path}"))?;
    let record: ContentRecord =
        serde_json::from_str(&raw).context("Fixture is not a valid content record")?;

    info!(
        slug = %record.slug,
        translations = record.translations.len(),
        "resolving record"
    );

    let payload = build_payload(&record, kind, language, &config);
    println!("{}", serde_json::to_string_pretty(&payload)?);

    Ok(())
}
