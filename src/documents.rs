//! Builder batch documents.
//!
//! A batch file is an ordered sequence of string-keyed documents, written by
//! builders either as a YAML stream (one document per `---` section, or a
//! single top-level list) or as a JSON array of objects. Documents are
//! loaded once and never mutated; the rest of the crate only iterates them.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// The discriminator key is spelled `type` in every supported language;
/// only its value set is localized.
const TYPE_KEY: &str = "type";

/// Errors for batch files whose shape is not a sequence of documents.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("batch file does not contain a list of documents")]
    NotASequence,

    #[error("document {index} is not a mapping")]
    NotAMapping { index: usize },
}

/// A single read-only batch document.
///
/// Wraps the raw string-keyed mapping as parsed. No shape validation is
/// performed beyond "is a mapping": a document is free to omit any field,
/// and lookups on missing keys simply return `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document(Map<String, Value>);

impl Document {
    pub fn new(fields: Map<String, Value>) -> Self {
        Document(fields)
    }

    /// Get a raw field value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Get a field as renderable text.
    ///
    /// Strings are returned verbatim; other scalars (numbers, booleans)
    /// render in their JSON form. Null and missing fields are absent.
    pub fn get_text(&self, key: &str) -> Option<String> {
        match self.0.get(key) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Null) | None => None,
            Some(other) => Some(other.to_string()),
        }
    }

    /// The document's `type` label, if present.
    pub fn type_label(&self) -> Option<&str> {
        self.get(TYPE_KEY).and_then(Value::as_str)
    }

    /// Check whether this document carries the given `type` label.
    pub fn has_type(&self, label: &str) -> bool {
        self.type_label() == Some(label)
    }
}

impl From<Map<String, Value>> for Document {
    fn from(fields: Map<String, Value>) -> Self {
        Document(fields)
    }
}

/// Load an ordered document list from a batch file.
///
/// The format is chosen by extension: `.json` parses as a JSON array of
/// objects, anything else as YAML. Order is preserved exactly as written.
pub fn load_documents(path: &Path) -> Result<Vec<Document>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read batch file: {}", path.display()))?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let documents = if is_json {
        parse_json_documents(&content)
            .with_context(|| format!("Invalid JSON batch file: {}", path.display()))?
    } else {
        parse_yaml_documents(&content)
            .with_context(|| format!("Invalid YAML batch file: {}", path.display()))?
    };

    info!(
        "Loaded {} documents from {}",
        documents.len(),
        path.display()
    );
    Ok(documents)
}

/// Parse a JSON array of objects into documents.
pub fn parse_json_documents(content: &str) -> Result<Vec<Document>> {
    let value: Value = serde_json::from_str(content)?;
    documents_from_sequence(value)
}

/// Parse a YAML batch into documents.
///
/// Accepts both batch layouts builders use: a multi-document stream
/// (`---`-separated mappings) and a single document holding a top-level
/// list of mappings.
pub fn parse_yaml_documents(content: &str) -> Result<Vec<Document>> {
    let mut values = Vec::new();
    for document in serde_yaml::Deserializer::from_str(content) {
        let value = Value::deserialize(document)?;
        // Empty stream sections (trailing `---`) parse as null; skip them
        if value.is_null() {
            continue;
        }
        values.push(value);
    }

    // Single top-level list: its elements are the documents
    if values.len() == 1 && values[0].is_array() {
        let only = values.pop().expect("stream has one document");
        return documents_from_sequence(only);
    }

    debug!("YAML stream with {} document sections", values.len());
    documents_from_stream(values)
}

fn documents_from_sequence(value: Value) -> Result<Vec<Document>> {
    let Value::Array(items) = value else {
        return Err(DocumentError::NotASequence.into());
    };
    documents_from_stream(items)
}

fn documents_from_stream(items: Vec<Value>) -> Result<Vec<Document>> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(fields) => Ok(Document(fields)),
            _ => Err(DocumentError::NotAMapping { index }.into()),
        })
        .collect()
}
