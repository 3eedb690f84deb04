//! Integration tests for the builder info panel.
//!
//! These tests verify the full pipeline: loading a batch file from disk,
//! extracting the info fields under a locale, and rendering them into an
//! HTML panel.

use proptest::prelude::*;
use serde_json::{json, Map, Value};
use tempfile::TempDir;

use builder_info_panel::documents::{load_documents, Document};
use builder_info_panel::extract::PageInfo;
use builder_info_panel::i18n::Language;
use builder_info_panel::render::{render, ElementSink, HtmlPage, DEFAULT_TEMPLATE};

// ==================== Test Helpers ====================

/// Write a batch file into a temp dir and return its path.
fn write_batch(temp_dir: &TempDir, file_name: &str, content: &str) -> std::path::PathBuf {
    let path = temp_dir.path().join(file_name);
    std::fs::write(&path, content).expect("Failed to write batch file");
    path
}

fn to_documents(value: Value) -> Vec<Document> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::Object(fields) => Document::new(fields),
                _ => panic!("test document must be an object"),
            })
            .collect(),
        _ => panic!("test documents must be an array"),
    }
}

/// Sink recording writes into a map for easy lookup.
#[derive(Default)]
struct RecordingSink {
    texts: std::collections::HashMap<String, String>,
}

impl ElementSink for RecordingSink {
    fn set_text(&mut self, id: &str, text: &str) {
        self.texts.insert(id.to_string(), text.to_string());
    }
}

// ==================== End-To-End Scenario Tests ====================

#[test]
fn test_english_yaml_batch_end_to_end() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_batch(
        &temp_dir,
        "area.yml",
        "---\ntype: info\nname: Alpha Keep\nauthor: Jo\nident: AK1\nnote: v1\n\
         ---\ntype: room\ntitle: Hall\n",
    );

    let documents = load_documents(&path).expect("load");
    let info = PageInfo::extract(Language::ENGLISH, &documents);

    let mut page = HtmlPage::new(DEFAULT_TEMPLATE);
    render(&info, documents.len(), &mut page);

    assert!(page.missing_ids().is_empty());
    let html = page.into_html();
    assert!(html.contains(r#"<dd id="name">Alpha Keep</dd>"#));
    assert!(html.contains(r#"<dd id="author">Jo</dd>"#));
    assert!(html.contains(r#"<dd id="ident">AK1</dd>"#));
    assert!(html.contains(r#"<dd id="note">v1</dd>"#));
    assert!(html.contains(r#"<dd id="num-documents">2</dd>"#));
}

#[test]
fn test_french_yaml_batch_end_to_end() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_batch(
        &temp_dir,
        "zone.yml",
        "---\ntype: info\nnom: Château d'Aval\nauteur: Jo\nident: CH1\nnote: v1\n\
         ---\ntype: salle\ntitre: Entrée\n---\ntype: salle\ntitre: Cave\n",
    );

    let documents = load_documents(&path).expect("load");
    let info = PageInfo::extract(Language::FRENCH, &documents);

    let mut sink = RecordingSink::default();
    render(&info, documents.len(), &mut sink);

    assert_eq!(sink.texts["name"], "Château d'Aval");
    assert_eq!(sink.texts["author"], "Jo");
    assert_eq!(sink.texts["ident"], "CH1");
    assert_eq!(sink.texts["note"], "v1");
    assert_eq!(sink.texts["num-documents"], "3");
}

#[test]
fn test_json_batch_end_to_end() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_batch(
        &temp_dir,
        "area.json",
        r#"[{"type": "info", "name": "Alpha Keep", "author": "Jo", "ident": "AK1", "note": "v1"}]"#,
    );

    let documents = load_documents(&path).expect("load");
    let info = PageInfo::extract(Language::ENGLISH, &documents);

    let mut sink = RecordingSink::default();
    render(&info, documents.len(), &mut sink);

    assert_eq!(sink.texts["name"], "Alpha Keep");
    assert_eq!(sink.texts["num-documents"], "1");
}

#[test]
fn test_empty_batch_renders_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_batch(&temp_dir, "empty.json", "[]");

    let documents = load_documents(&path).expect("load");
    assert!(documents.is_empty());

    let info = PageInfo::extract(Language::ENGLISH, &documents);
    let mut sink = RecordingSink::default();
    render(&info, documents.len(), &mut sink);

    assert_eq!(sink.texts["name"], "Unknown");
    assert_eq!(sink.texts["author"], "Unknown");
    assert_eq!(sink.texts["ident"], "Unknown");
    assert_eq!(sink.texts["note"], "Unknown");
    assert_eq!(sink.texts["num-documents"], "0");
}

#[test]
fn test_custom_template_with_missing_elements() {
    // A template exposing only two of the five panel elements still
    // renders; the absent ids are reported, not fatal
    let template = r#"<h1 id="name"></h1><p id="note"></p>"#;
    let info = PageInfo::extract(
        Language::ENGLISH,
        &to_documents(json!([
            {"type": "info", "name": "Alpha Keep", "author": "Jo", "ident": "AK1", "note": "v1"}
        ])),
    );

    let mut page = HtmlPage::new(template);
    render(&info, 1, &mut page);

    let mut missing = page.missing_ids().to_vec();
    missing.sort();
    assert_eq!(missing, ["author", "ident", "num-documents"]);

    let html = page.into_html();
    assert!(html.contains(r#"<h1 id="name">Alpha Keep</h1>"#));
    assert!(html.contains(r#"<p id="note">v1</p>"#));
}

#[test]
fn test_unsupported_language_fails_fast() {
    let result = Language::from_code("de");
    let err = result.unwrap_err().to_string();
    assert!(err.contains("de"));
    assert!(err.contains("Unknown language code"));
}

// ==================== Property Tests ====================

/// Strategy for a document that is never info-typed.
fn non_info_document() -> impl Strategy<Value = Document> {
    (
        prop_oneof!["room", "salle", "carrefour", "psalle"],
        "[a-zA-Z ]{0,20}",
    )
        .prop_map(|(doc_type, title)| {
            let mut fields = Map::new();
            fields.insert("type".to_string(), Value::String(doc_type));
            fields.insert("title".to_string(), Value::String(title));
            Document::new(fields)
        })
}

/// Strategy for an info document with all four fields set.
fn info_document(language: Language) -> impl Strategy<Value = Document> {
    let t = language.strings();
    let (name_key, author_key, ident_key, note_key) = (t.name, t.author, t.ident, t.note);
    (
        "[a-zA-Z0-9 ]{1,20}",
        "[a-zA-Z ]{1,10}",
        "[A-Z0-9]{1,6}",
        "[a-zA-Z0-9 ]{0,30}",
    )
        .prop_map(move |(name, author, ident, note)| {
            let mut fields = Map::new();
            fields.insert("type".to_string(), Value::String("info".to_string()));
            fields.insert(name_key.to_string(), Value::String(name));
            fields.insert(author_key.to_string(), Value::String(author));
            fields.insert(ident_key.to_string(), Value::String(ident));
            fields.insert(note_key.to_string(), Value::String(note));
            Document::new(fields)
        })
}

proptest! {
    #[test]
    fn prop_no_info_document_keeps_defaults(
        docs in prop::collection::vec(non_info_document(), 0..10)
    ) {
        for language in [Language::ENGLISH, Language::FRENCH] {
            let info = PageInfo::extract(language, &docs);
            let unknown = language.strings().unknown;

            prop_assert_eq!(&info.name, unknown);
            prop_assert_eq!(&info.author, unknown);
            prop_assert_eq!(&info.ident, unknown);
            prop_assert_eq!(&info.note, unknown);
        }
    }

    #[test]
    fn prop_last_info_document_wins(
        mut docs in prop::collection::vec(non_info_document(), 0..6),
        infos in prop::collection::vec(info_document(Language::ENGLISH), 1..4)
    ) {
        // Interleave: filler documents first, then the info documents,
        // so the last info document is also last overall
        let last = infos.last().expect("at least one info document").clone();
        docs.extend(infos);

        let extracted = PageInfo::extract(Language::ENGLISH, &docs);
        let t = Language::ENGLISH.strings();

        prop_assert_eq!(Some(extracted.name), last.get_text(t.name));
        prop_assert_eq!(Some(extracted.author), last.get_text(t.author));
        prop_assert_eq!(Some(extracted.ident), last.get_text(t.ident));
        prop_assert_eq!(Some(extracted.note), last.get_text(t.note));
    }

    #[test]
    fn prop_rendered_count_matches_input_length(
        docs in prop::collection::vec(non_info_document(), 0..20)
    ) {
        let info = PageInfo::extract(Language::ENGLISH, &docs);
        let mut sink = RecordingSink::default();
        render(&info, docs.len(), &mut sink);

        prop_assert_eq!(&sink.texts["num-documents"], &docs.len().to_string());
    }

    #[test]
    fn prop_extraction_never_panics_on_arbitrary_scalars(
        value in prop_oneof![
            any::<i64>().prop_map(|n| json!(n)),
            any::<bool>().prop_map(|b| json!(b)),
            "[a-zA-Z]{0,8}".prop_map(|s| json!(s)),
            Just(Value::Null),
        ]
    ) {
        let mut fields = Map::new();
        fields.insert("type".to_string(), Value::String("info".to_string()));
        fields.insert("name".to_string(), value);
        let docs = vec![Document::new(fields)];

        // Total scan: whatever the field holds, extraction completes
        let _ = PageInfo::extract(Language::ENGLISH, &docs);
    }
}
