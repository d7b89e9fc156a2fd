//! Minimal structural parser for the supported SVG subset.
//!
//! Builds a small element tree (tag name, attribute list, children) with
//! quick-xml, so attribute extraction and element scanning are lookups over
//! real nodes instead of pattern matching over raw text. This also keeps
//! shape tags nested inside a `<defs>` block out of the drawable scan.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::error::ConvertError;

/// One parsed element: tag name, attributes in source order, child elements.
///
/// Text content is not retained; none of the supported SVG constructs carry
/// meaningful text.
#[derive(Debug, Clone, Default)]
pub struct Element {
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Element>,
}

impl Element {
    /// Look up an attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Look up an attribute value, falling back to a caller-supplied default.
    ///
    /// Absence is the common case for shape attributes, not an error.
    pub fn attr_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.attr(name).unwrap_or(default)
    }
}

/// Create a permissive reader; design-tool exports are not always well-formed.
fn create_reader(content: &str) -> Reader<&[u8]> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);
    reader.config_mut().enable_all_checks(false);
    reader
}

fn element_from(tag: &BytesStart<'_>) -> Element {
    let name = String::from_utf8_lossy(tag.local_name().as_ref()).into_owned();
    let attrs = tag
        .attributes()
        .flatten()
        .map(|attr| {
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| String::from_utf8_lossy(attr.value.as_ref()).into_owned());
            (key, value)
        })
        .collect();

    Element {
        name,
        attrs,
        children: Vec::new(),
    }
}

/// Parse a source document down to its `<svg>` root element.
///
/// This is the single structural failure of the whole conversion: no `<svg>`
/// start tag with inner content means there is nothing to translate.
pub fn parse_document(content: &str) -> Result<Element, ConvertError> {
    let mut reader = create_reader(content);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| ConvertError::InvalidDocument(e.to_string()))?;
        match event {
            Event::Start(e) => stack.push(element_from(&e)),
            Event::Empty(e) => {
                // A self-closing element outside any open tag has no parent
                // to attach to; it cannot be a root with inner content.
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(element_from(&e));
                }
            }
            Event::End(_) => {
                if let Some(closed) = stack.pop() {
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(closed),
                        None if root.is_none() && closed.name == "svg" => root = Some(closed),
                        None => {}
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    root.ok_or_else(|| {
        ConvertError::InvalidDocument("missing <svg> root element with inner content".to_string())
    })
}
