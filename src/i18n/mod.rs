//! Internationalization (i18n) module for multi-language support.
//!
//! Builder batch documents are written in locale-specific vocabulary: the
//! key that holds an area's name is `name` in an English batch file and
//! `nom` in a French one. This module centralizes everything
//! language-related so the rest of the crate never hardcodes a field name.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: Type-safe Language type validated against the registry
//! - `strings`: Per-language field-name tables and default labels

mod language;
mod registry;
mod strings;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::{LanguageStrings, ENGLISH_STRINGS, FRENCH_STRINGS};
