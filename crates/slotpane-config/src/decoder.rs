#![forbid(unsafe_code)]

//! Host hook turning item elements into rendered representations.

use crate::document::ItemElement;
use crate::error::{ConfigError, Result};

/// Builds the rendered representation of one item element.
pub trait ItemDecoder {
    type Item;

    /// Decode a non-`empty` child element of a pane.
    fn decode(&self, element: &ItemElement) -> Result<Self::Item>;

    /// Representation used for `<empty/>` placeholders. Placeholders are
    /// hidden, so this value is never rendered.
    fn placeholder(&self) -> Self::Item;
}

/// Decodes an item to its `id` attribute, or its text when there is none.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdDecoder;

impl ItemDecoder for IdDecoder {
    type Item = String;

    fn decode(&self, element: &ItemElement) -> Result<String> {
        if let Some(id) = element.attr("id") {
            return Ok(id.to_owned());
        }
        if !element.text.is_empty() {
            return Ok(element.text.clone());
        }
        Err(ConfigError::decode(&element.name, "expected an id attribute or text"))
    }

    fn placeholder(&self) -> String {
        String::new()
    }
}
