#![forbid(unsafe_code)]

//! Element tree read from a pane document.
//!
//! The loader works on a small owned tree instead of the event stream so
//! that a bad child can be skipped without losing reader position.

use std::collections::BTreeMap;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::{ConfigError, Result};

/// One element of a pane document.
///
/// Item decoders receive the element describing a single item; the loader
/// uses the same type for panes and the document root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemElement {
    pub name: String,
    pub attributes: BTreeMap<String, String>,
    /// Concatenated, trimmed text content.
    pub text: String,
    pub children: Vec<ItemElement>,
}

impl ItemElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    fn open(start: &BytesStart<'_>) -> Result<Self> {
        let mut element = Self::new(String::from_utf8_lossy(start.name().as_ref()));
        for attr in start.attributes() {
            let attr = attr?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.unescape_value()?.into_owned();
            element.attributes.insert(key, value);
        }
        Ok(element)
    }
}

/// Parse a document into its top-level elements.
pub fn parse_document(xml: &str) -> Result<Vec<ItemElement>> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut roots = Vec::new();
    let mut stack: Vec<ItemElement> = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => stack.push(ItemElement::open(e)?),
            Event::Empty(ref e) => {
                let element = ItemElement::open(e)?;
                attach(&mut stack, &mut roots, element);
            }
            Event::End(_) => {
                if let Some(element) = stack.pop() {
                    attach(&mut stack, &mut roots, element);
                }
            }
            Event::Text(ref t) => {
                if let Some(open) = stack.last_mut() {
                    open.text.push_str(&t.unescape()?);
                }
            }
            Event::CData(ref t) => {
                if let Some(open) = stack.last_mut() {
                    open.text.push_str(&String::from_utf8_lossy(&t[..]));
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.pop() {
        return Err(ConfigError::UnexpectedEof { element: open.name });
    }
    Ok(roots)
}

/// Parse a document that must contain exactly one root element.
pub fn parse_root(xml: &str) -> Result<ItemElement> {
    parse_document(xml)?
        .into_iter()
        .next()
        .ok_or(ConfigError::EmptyDocument)
}

fn attach(stack: &mut [ItemElement], roots: &mut Vec<ItemElement>, element: ItemElement) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => roots.push(element),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_nested_tree() {
        let root = parse_root(
            r#"<panes>
                 <outlinepane x="0" y="1" length="3" height="1">
                   <item id="A"/>
                   <empty/>
                 </outlinepane>
               </panes>"#,
        )
        .unwrap();
        assert_eq!(root.name, "panes");
        let pane = &root.children[0];
        assert_eq!(pane.name, "outlinepane");
        assert_eq!(pane.attr("y"), Some("1"));
        assert_eq!(pane.children.len(), 2);
        assert_eq!(pane.children[0].attr("id"), Some("A"));
        assert_eq!(pane.children[1].name, "empty");
    }

    #[test]
    fn collects_unescaped_text_and_attributes() {
        let root = parse_root(r#"<item label="a &amp; b">  fish &lt;3 </item>"#).unwrap();
        assert_eq!(root.attr("label"), Some("a & b"));
        assert_eq!(root.text, "fish <3");
    }

    #[test]
    fn unclosed_element_is_an_error() {
        assert!(parse_document("<panes><outlinepane>").is_err());
    }

    #[test]
    fn mismatched_end_tag_is_an_error() {
        assert!(matches!(
            parse_document("<panes></staticpane>"),
            Err(ConfigError::Xml(_))
        ));
    }

    #[test]
    fn empty_input_has_no_root() {
        assert!(matches!(parse_root("  "), Err(ConfigError::EmptyDocument)));
    }
}
