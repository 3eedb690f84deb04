//! Info metadata extraction.
//!
//! A batch carries at most one meaningful "info" document describing the
//! area as a whole (name, author, identifier, note). Extraction is a single
//! pure pass over the document list; rendering lives in [`crate::render`]
//! so this logic is testable without any page.

use crate::documents::Document;
use crate::i18n::Language;
use tracing::debug;

/// The four info fields projected onto the builder panel.
///
/// Each field holds the locale's default label until an info document
/// supplies a value. When several info documents exist, the last one in
/// batch order wins wholesale; there is no field-by-field merge, so a field
/// the winning document omits falls back to the default label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInfo {
    pub name: String,
    pub author: String,
    pub ident: String,
    pub note: String,
}

impl PageInfo {
    /// All fields at the locale's default label.
    pub fn unknown(language: Language) -> PageInfo {
        let unknown = language.strings().unknown;
        PageInfo {
            name: unknown.to_string(),
            author: unknown.to_string(),
            ident: unknown.to_string(),
            note: unknown.to_string(),
        }
    }

    /// Scan `documents` in order and project the info fields.
    ///
    /// A document matches when its `type` field equals the locale's info
    /// label. The scan is total: documents missing expected fields never
    /// fail, and an empty list yields the defaults.
    pub fn extract(language: Language, documents: &[Document]) -> PageInfo {
        let t = language.strings();
        let mut info = PageInfo::unknown(language);

        for document in documents {
            if !document.has_type(t.info) {
                continue;
            }

            debug!("Found info document, taking its fields");
            let unknown = || t.unknown.to_string();
            info.name = document.get_text(t.name).unwrap_or_else(unknown);
            info.author = document.get_text(t.author).unwrap_or_else(unknown);
            info.ident = document.get_text(t.ident).unwrap_or_else(unknown);
            info.note = document.get_text(t.note).unwrap_or_else(unknown);
        }

        info
    }
}
