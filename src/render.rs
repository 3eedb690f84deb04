//! Panel rendering.
//!
//! Rendering is a thin projection of the extracted fields onto a page:
//! five text writes addressed by element identifier. The page itself sits
//! behind the [`ElementSink`] trait so extraction and rendering stay
//! testable without real markup, with [`HtmlPage`] as the concrete sink
//! that fills an HTML template.

use crate::extract::PageInfo;
use regex::{Captures, Regex};
use tracing::warn;

/// Element identifiers the panel writes, in render order.
pub const PANEL_ELEMENT_IDS: [&str; 5] = ["name", "author", "ident", "note", "num-documents"];

/// A page that accepts text assignments by element identifier.
pub trait ElementSink {
    /// Set the text content of the element with the given identifier.
    fn set_text(&mut self, id: &str, text: &str);
}

/// Write the extracted info fields and the document count into the sink.
///
/// Always performs exactly five writes, one per identifier in
/// [`PANEL_ELEMENT_IDS`]; what a missing element means is the sink's
/// business, not the renderer's.
pub fn render(info: &PageInfo, document_count: usize, sink: &mut dyn ElementSink) {
    sink.set_text("name", &info.name);
    sink.set_text("author", &info.author);
    sink.set_text("ident", &info.ident);
    sink.set_text("note", &info.note);
    sink.set_text("num-documents", &document_count.to_string());
}

/// Built-in minimal panel markup, used when no template is configured.
pub const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
  <head><meta charset="utf-8"><title>Builder panel</title></head>
  <body>
    <dl>
      <dt>Name</dt><dd id="name"></dd>
      <dt>Author</dt><dd id="author"></dd>
      <dt>Ident</dt><dd id="ident"></dd>
      <dt>Note</dt><dd id="note"></dd>
      <dt>Documents</dt><dd id="num-documents"></dd>
    </dl>
  </body>
</html>
"#;

/// An HTML template standing in for the browser page.
///
/// `set_text` replaces the text content of the first element carrying the
/// requested `id` attribute, leaving the rest of the markup untouched.
/// Identifiers the template lacks are collected rather than failed on, so
/// the caller can decide whether a partial template matters.
pub struct HtmlPage {
    html: String,
    missing_ids: Vec<String>,
}

impl HtmlPage {
    pub fn new(template: &str) -> Self {
        HtmlPage {
            html: template.to_string(),
            missing_ids: Vec::new(),
        }
    }

    /// Identifiers that were assigned but not found in the template.
    pub fn missing_ids(&self) -> &[String] {
        &self.missing_ids
    }

    /// Consume the page and return the rendered markup.
    pub fn into_html(self) -> String {
        self.html
    }

    fn element_regex(id: &str) -> Regex {
        // Opening tag carrying the id, current text content, closing tag
        // start. Text content cannot contain a child element after the
        // replacement, which is all the panel contract asks for.
        let pattern = format!(
            r#"(<[A-Za-z][^>]*\sid\s*=\s*"{}"[^>]*>)([^<]*)(</)"#,
            regex::escape(id)
        );
        Regex::new(&pattern).expect("element pattern is valid")
    }
}

impl ElementSink for HtmlPage {
    fn set_text(&mut self, id: &str, text: &str) {
        let re = Self::element_regex(id);
        if !re.is_match(&self.html) {
            warn!("Template has no element with id=\"{}\"", id);
            self.missing_ids.push(id.to_string());
            return;
        }

        let escaped = escape_html_text(text);
        self.html = re
            .replace(&self.html, |caps: &Captures| {
                format!("{}{}{}", &caps[1], escaped, &caps[3])
            })
            .into_owned();
    }
}

/// Escape a string for use as HTML text content.
fn escape_html_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}
