#![forbid(unsafe_code)]

//! Declarative pane documents.
//!
//! # Role in SlotPane
//! `slotpane-config` turns XML pane descriptions into [`Pane`] values. The
//! item representation is left to the host through [`ItemDecoder`], and
//! click callbacks and populators are looked up by name in a
//! [`CallbackRegistry`].
//!
//! ```xml
//! <panes>
//!   <outlinepane x="0" y="0" length="3" height="1" gap="1">
//!     <item id="A" onClick="pick"/>
//!     <empty/>
//!   </outlinepane>
//! </panes>
//! ```
//!
//! Loading is lenient below the pane level: a child that fails to decode is
//! dropped with a warning and the pane still loads. A pane with a bad
//! attribute fails as a whole.
//!
//! [`Pane`]: slotpane_layout::Pane

pub mod decoder;
pub mod document;
pub mod error;
pub mod loader;
pub mod registry;

pub use decoder::{IdDecoder, ItemDecoder};
pub use document::ItemElement;
pub use error::{ConfigError, Result};
pub use loader::PaneLoader;
pub use registry::{CallbackRegistry, Populator};
