//! # XML <-> JSON Codec
//!
//! The gateway speaks XML, while the rest of the crate works with request fragments on the
//! way out and `serde_json::Value` trees on the way back.
//!
//! ## How it works
//!
//! 1. **Encoding (records -> XML fragment)**:
//!    - [`XmlFragment`] is an append-only builder of sibling elements.
//!    - Element text is always escaped; element order is the order of the builder calls,
//!      which matters because the gateway schema is sequence based.
//!
//! 2. **Decoding (XML document -> JSON)**:
//!    - [`parse_document`] walks the document with `quick_xml` and folds it into a JSON tree:
//!      an element with children becomes an object, repeated siblings become an array and a
//!      leaf becomes a string. Attributes and namespaces are dropped.
use quick_xml::{Reader, escape::escape, events::Event};
use serde_json::{Map, Value};
use std::fmt;

#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    #[error("Malformed XML: '{0}'")]
    Malformed(#[from] quick_xml::Error),
    #[error("Unexpected closing tag")]
    UnbalancedTags,
    #[error("The document has no root element")]
    EmptyDocument,
}

/// A sequence of sibling XML elements.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct XmlFragment(String);

impl XmlFragment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `<name>text</name>`, even if `text` is empty.
    pub fn element(&mut self, name: &str, text: impl fmt::Display) -> &mut Self {
        let text = text.to_string();
        self.open(name);
        self.0.push_str(&escape(text.as_str()));
        self.close(name);
        self
    }

    /// Appends `<name>text</name>` only when the value is present and renders to something.
    pub fn optional_element<V: fmt::Display>(&mut self, name: &str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            let text = value.to_string();
            if !text.is_empty() {
                self.element(name, text);
            }
        }
        self
    }

    /// Appends `<name>...</name>` around whatever `build` writes, even if it writes nothing.
    pub fn wrap(&mut self, name: &str, build: impl FnOnce(&mut XmlFragment)) -> &mut Self {
        let mut inner = XmlFragment::new();
        build(&mut inner);
        self.open(name);
        self.0.push_str(&inner.0);
        self.close(name);
        self
    }

    /// Like [`XmlFragment::wrap`], but leaves no trace when `build` writes nothing.
    pub fn optional_wrap(&mut self, name: &str, build: impl FnOnce(&mut XmlFragment)) -> &mut Self {
        let mut inner = XmlFragment::new();
        build(&mut inner);
        if !inner.is_empty() {
            self.open(name);
            self.0.push_str(&inner.0);
            self.close(name);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    fn open(&mut self, name: &str) {
        self.0.push('<');
        self.0.push_str(name);
        self.0.push('>');
    }

    fn close(&mut self, name: &str) {
        self.0.push_str("</");
        self.0.push_str(name);
        self.0.push('>');
    }
}

impl fmt::Display for XmlFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<XmlFragment> for String {
    fn from(fragment: XmlFragment) -> Self {
        fragment.0
    }
}

struct Node {
    name: String,
    children: Map<String, Value>,
    text: String,
}

impl Node {
    fn new(name: String) -> Self {
        Self {
            name,
            children: Map::new(),
            text: String::new(),
        }
    }

    fn finish(self) -> (String, Value) {
        let value = if self.children.is_empty() {
            Value::String(self.text)
        } else {
            Value::Object(self.children)
        };
        (self.name, value)
    }

    fn insert(&mut self, name: String, value: Value) {
        match self.children.get_mut(&name) {
            Some(Value::Array(items)) => items.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
            None => {
                self.children.insert(name, value);
            }
        }
    }
}

/// Parses a whole XML document, returning the root element's local name and its content.
///
/// A leading UTF-8 byte order mark is ignored, the gateway sends one.
pub fn parse_document(xml: &str) -> Result<(String, Value), XmlError> {
    let xml = xml.trim_start_matches('\u{feff}');
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Node> = Vec::new();
    let mut root = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
                stack.push(Node::new(name));
            }
            Event::Empty(empty) => {
                let name = String::from_utf8_lossy(empty.local_name().as_ref()).into_owned();
                match stack.last_mut() {
                    Some(parent) => parent.insert(name, Value::String(String::new())),
                    None => root = Some((name, Value::String(String::new()))),
                }
            }
            Event::Text(text) => {
                if let Some(node) = stack.last_mut() {
                    node.text.push_str(&text.unescape()?);
                }
            }
            Event::CData(data) => {
                if let Some(node) = stack.last_mut() {
                    node.text.push_str(&String::from_utf8_lossy(&data.into_inner()));
                }
            }
            Event::End(_) => {
                let (name, value) = stack.pop().ok_or(XmlError::UnbalancedTags)?.finish();
                match stack.last_mut() {
                    Some(parent) => parent.insert(name, value),
                    None => root = Some((name, value)),
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(XmlError::UnbalancedTags);
    }

    root.ok_or(XmlError::EmptyDocument)
}
