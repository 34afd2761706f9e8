//! Internationalization (i18n) module: language handling and content resolution.
//!
//! This module owns everything language-related: normalizing the raw language
//! preference that arrives with a request, and merging a content record with
//! the matching translation into a language-effective view.
//!
//! # Architecture
//!
//! - `language`: normalization of raw request languages into two-letter codes
//! - `resolver`: translation selection with deterministic fallback
//!
//! # Example
//!
//! ```rust,ignore
//! use portfolio_content_core::i18n::{resolve, RequestedLanguage};
//!
//! let requested = RequestedLanguage::from_raw(Some("fr-FR"));
//! let view = resolve(&record, requested);
//! assert_eq!(view.current_language, "fr");
//! ```

mod language;
mod resolver;

pub use language::{RequestedLanguage, DEFAULT_LANGUAGE};
pub use resolver::{resolve, ResolvedView};
