//! XML codec for webservice write payloads and responses.
//!
//! Create and update calls send `<prestashop>`-rooted XML documents and the
//! webservice answers in XML. This module converts between those documents
//! and nested [`serde_json::Value`] maps:
//!
//! - [`XmlNode`]: an owned element tree parsed with `roxmltree`
//! - [`xml_to_value`]: element tree to nested map
//! - [`value_to_xml`]: nested map to XML text, written with `quick-xml`
//!
//! # Mapping
//!
//! | XML | JSON |
//! |-----|------|
//! | `<a>text</a>` | `"text"` |
//! | `<a/>` | `""` |
//! | `<a><b>1</b><c>2</c></a>` | `{"b": "1", "c": "2"}` |
//! | `<a><b>1</b><b>2</b></a>` | `{"b": ["1", "2"]}` |
//! | `<a id="1">x</a>` | `{"@id": "1", "#text": "x"}` |
//!
//! Namespaced attributes such as `xlink:href` are dropped when parsing.
//!
//! # Example
//!
//! ```rust
//! use prestashop_api::xml::{value_to_xml, xml_to_value, XmlNode};
//! use serde_json::json;
//!
//! let xml = value_to_xml("prestashop", &json!({"product": {"price": "9.99"}})).unwrap();
//! let root = XmlNode::parse(&xml).unwrap();
//! let product = root.first_child().unwrap();
//! assert_eq!(xml_to_value(product), json!({"price": "9.99"}));
//! ```

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde_json::{Map, Value};
use thiserror::Error;

/// Key prefix marking an attribute in the JSON form.
pub const ATTRIBUTE_PREFIX: char = '@';

/// Key holding element text next to attributes or child elements.
pub const TEXT_KEY: &str = "#text";

/// Errors raised while reading or writing XML documents.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum XmlError {
    /// The document is not well-formed XML.
    #[error("Failed to parse XML document: {0}")]
    Parse(String),

    /// The document could not be written.
    #[error("Failed to write XML document: {0}")]
    Write(String),
}

/// An owned XML element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct XmlNode {
    /// Local tag name.
    pub name: String,
    /// Attributes without a namespace, in document order.
    pub attributes: Vec<(String, String)>,
    /// Direct text content, `None` when empty or whitespace only.
    pub text: Option<String>,
    /// Child elements in document order.
    pub children: Vec<XmlNode>,
}

impl XmlNode {
    /// Parses a document and returns its root element.
    ///
    /// # Errors
    ///
    /// Returns [`XmlError::Parse`] when the input is not well-formed.
    pub fn parse(input: &str) -> Result<Self, XmlError> {
        let doc =
            roxmltree::Document::parse(input).map_err(|e| XmlError::Parse(e.to_string()))?;
        Ok(Self::from_roxml(doc.root_element()))
    }

    fn from_roxml(node: roxmltree::Node<'_, '_>) -> Self {
        let attributes = node
            .attributes()
            .filter(|attr| attr.namespace().is_none())
            .map(|attr| (attr.name().to_string(), attr.value().to_string()))
            .collect();

        let mut text = String::new();
        let mut children = Vec::new();
        for child in node.children() {
            if child.is_element() {
                children.push(Self::from_roxml(child));
            } else if child.is_text() {
                text.push_str(child.text().unwrap_or_default());
            }
        }

        let text = text.trim();
        Self {
            name: node.tag_name().name().to_string(),
            attributes,
            text: (!text.is_empty()).then(|| text.to_string()),
            children,
        }
    }

    /// Returns the first child element, if any.
    #[must_use]
    pub fn first_child(&self) -> Option<&Self> {
        self.children.first()
    }

    /// Returns the first child element with the given name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Returns the value of an attribute.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Converts an element into a nested JSON value.
///
/// See the [module documentation](self) for the mapping rules.
#[must_use]
pub fn xml_to_value(node: &XmlNode) -> Value {
    if node.children.is_empty() && node.attributes.is_empty() {
        return Value::String(node.text.clone().unwrap_or_default());
    }

    let mut map = Map::new();
    for (key, value) in &node.attributes {
        map.insert(
            format!("{ATTRIBUTE_PREFIX}{key}"),
            Value::String(value.clone()),
        );
    }

    for child in &node.children {
        let value = xml_to_value(child);
        match map.get_mut(&child.name) {
            Some(Value::Array(items)) => items.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
            None => {
                map.insert(child.name.clone(), value);
            }
        }
    }

    if let Some(text) = &node.text {
        map.insert(TEXT_KEY.to_string(), Value::String(text.clone()));
    }

    Value::Object(map)
}

/// Writes a nested JSON value as an XML document under `root`.
///
/// Booleans are written as `1`/`0`, which is what the webservice expects.
///
/// # Errors
///
/// Returns [`XmlError::Write`] when the writer fails.
pub fn value_to_xml(root: &str, data: &Value) -> Result<String, XmlError> {
    let mut writer = Writer::new(Vec::new());
    write(
        &mut writer,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
    )?;
    write_element(&mut writer, root, data)?;

    String::from_utf8(writer.into_inner()).map_err(|e| XmlError::Write(e.to_string()))
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), XmlError> {
    writer
        .write_event(event)
        .map_err(|e| XmlError::Write(e.to_string()))
}

fn write_element(writer: &mut Writer<Vec<u8>>, name: &str, value: &Value) -> Result<(), XmlError> {
    match value {
        Value::Null => write(writer, Event::Empty(BytesStart::new(name))),
        Value::Array(items) => {
            for item in items {
                write_element(writer, name, item)?;
            }
            Ok(())
        }
        Value::Object(map) => {
            let mut start = BytesStart::new(name);
            for (key, attr) in map {
                if let Some(attr_name) = key.strip_prefix(ATTRIBUTE_PREFIX) {
                    start.push_attribute((attr_name, scalar_text(attr).as_str()));
                }
            }
            write(writer, Event::Start(start))?;

            for (key, child) in map {
                if key.starts_with(ATTRIBUTE_PREFIX) {
                    continue;
                }
                if key == TEXT_KEY {
                    write(writer, Event::Text(BytesText::new(&scalar_text(child))))?;
                } else {
                    write_element(writer, key, child)?;
                }
            }

            write(writer, Event::End(BytesEnd::new(name)))
        }
        scalar => {
            write(writer, Event::Start(BytesStart::new(name)))?;
            write(writer, Event::Text(BytesText::new(&scalar_text(scalar))))?;
            write(writer, Event::End(BytesEnd::new(name)))
        }
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => if *b { "1" } else { "0" }.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
