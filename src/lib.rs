//! Extract and render map-builder batch metadata into an HTML panel.
//!
//! A builder batch file is an ordered list of documents; at most one of
//! them, the "info" document, describes the area as a whole. This crate
//! locates that document under a configured locale's vocabulary, projects
//! its name/author/ident/note fields (falling back to the locale's default
//! label), and writes them plus the document count into an HTML panel.

pub mod config;
pub mod documents;
pub mod extract;
pub mod i18n;
pub mod render;
