//! Portfolio content resolution core.
//!
//! The pure-computation layer beneath a portfolio CMS REST API: given a
//! content record with its loaded translations and a raw request language,
//! it resolves the language-effective view of the content, derives SEO /
//! Open Graph / JSON-LD metadata with a completeness score, and assembles
//! the JSON payload the frontend consumes.
//!
//! Persistence and HTTP are collaborators: records arrive already loaded,
//! and nothing here performs I/O.

pub mod config;
pub mod content;
pub mod html;
pub mod i18n;
pub mod payload;
pub mod seo;
