#![forbid(unsafe_code)]

//! SlotPane public facade crate.
//!
//! Re-exports the common types of the internal crates, adds [`PaneSet`] for
//! hosts that stack several panes in one container, and offers a prelude.

use std::fmt;

mod set;

pub use set::{PaneSet, SetClick};

// --- Core re-exports -------------------------------------------------------

pub use slotpane_core::GeometryError;
pub use slotpane_core::event::{ClickEvent, ClickKind, Modifiers};
pub use slotpane_core::geometry::{DEFAULT_ROW_WIDTH, GridSize, PaneOffset, SlotPos};
pub use slotpane_core::rotation::Rotation;

// --- Render re-exports -----------------------------------------------------

pub use slotpane_render::{Container, SlotBuffer};

// --- Layout re-exports -----------------------------------------------------

pub use slotpane_layout::{
    ClickAction, Orientation, OutlineLayout, OutlinePane, Pane, PaneItem, PaneKind, PaneTransform,
    Priority, Resolution, SlotPane, StaticPane,
};

// --- Config re-exports -----------------------------------------------------

#[cfg(feature = "config")]
pub use slotpane_config::{CallbackRegistry, ConfigError, IdDecoder, ItemDecoder, ItemElement, PaneLoader};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for SlotPane hosts.
#[derive(Debug)]
pub enum Error {
    /// Rejected rotation or grid combination.
    Geometry(GeometryError),
    /// Pane document could not be loaded.
    #[cfg(feature = "config")]
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Geometry(err) => write!(f, "{err}"),
            #[cfg(feature = "config")]
            Self::Config(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Geometry(err) => Some(err),
            #[cfg(feature = "config")]
            Self::Config(err) => Some(err),
        }
    }
}

impl From<GeometryError> for Error {
    fn from(err: GeometryError) -> Self {
        Self::Geometry(err)
    }
}

#[cfg(feature = "config")]
impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

/// Standard result type for SlotPane APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        ClickEvent, Container, Error, GridSize, Orientation, OutlinePane, Pane, PaneItem,
        PaneOffset, PaneSet, Priority, Resolution, Result, Rotation, SlotBuffer, SlotPane,
        SlotPos, StaticPane,
    };

    #[cfg(feature = "config")]
    pub use crate::{CallbackRegistry, ItemDecoder, PaneLoader};

    pub use crate::{core, layout, render};
}

pub use slotpane_core as core;
pub use slotpane_layout as layout;
pub use slotpane_render as render;

#[cfg(feature = "config")]
pub use slotpane_config as config;
