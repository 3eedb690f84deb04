//! Language type: Flexible, validated language representation.
//!
//! A `Language` can only be constructed for a code the registry knows and
//! has enabled, so an unsupported locale is rejected up front instead of
//! surfacing later as a missing field-name lookup.

use crate::i18n::{LanguageConfig, LanguageRegistry, LanguageStrings, ENGLISH_STRINGS, FRENCH_STRINGS};
use anyhow::{bail, Result};

/// A validated language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "fr")
    code: &'static str,
}

impl Language {
    /// English (the canonical language).
    pub const ENGLISH: Language = Language { code: "en" };

    /// French.
    pub const FRENCH: Language = Language { code: "fr" };

    /// Create a Language from a language code string.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code (e.g., "en", "fr")
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is valid and the language is enabled
    /// * `Err` if the code is not found or the language is disabled
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language {
                code: config.code, // Use the static str from the registry
            }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Get the canonical (source) language.
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the language code is not found in the registry. This should
    /// never happen if the Language was constructed properly (via `from_code`
    /// or constants).
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// Get the English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the localized field-name table for this language.
    ///
    /// These are the key strings builder batch documents use for this
    /// language, plus the default label rendered when no info document
    /// provides a value.
    pub fn strings(&self) -> &'static LanguageStrings {
        match self.code {
            "fr" => &FRENCH_STRINGS,
            _ => &ENGLISH_STRINGS,
        }
    }

    /// Check if this is the canonical language.
    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }
}
