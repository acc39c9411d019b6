#![forbid(unsafe_code)]

use slotpane_core::GeometryError;
use slotpane_layout::ParseOrientationError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("malformed attribute: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    #[error("document has no root element")]
    EmptyDocument,

    #[error("document ended inside <{element}>")]
    UnexpectedEof { element: String },

    #[error("unknown pane type <{tag}>")]
    UnknownPane { tag: String },

    #[error("<{element}> is missing required attribute {attribute:?}")]
    MissingAttribute { element: String, attribute: String },

    #[error("<{element}> attribute {attribute}={value:?} is invalid: {reason}")]
    InvalidAttribute {
        element: String,
        attribute: String,
        value: String,
        reason: String,
    },

    #[error("no callback registered as {name:?}")]
    UnknownCallback { name: String },

    #[error(transparent)]
    Orientation(#[from] ParseOrientationError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error("cannot decode <{element}>: {message}")]
    Decode { element: String, message: String },
}

impl ConfigError {
    #[must_use]
    pub fn missing(element: &str, attribute: &str) -> Self {
        Self::MissingAttribute {
            element: element.to_owned(),
            attribute: attribute.to_owned(),
        }
    }

    #[must_use]
    pub fn decode(element: &str, message: impl Into<String>) -> Self {
        Self::Decode {
            element: element.to_owned(),
            message: message.into(),
        }
    }
}
