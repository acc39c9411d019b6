#![forbid(unsafe_code)]

//! Pane layout: placing items into slot containers and resolving clicks.
//!
//! # Role in SlotPane
//! This crate owns the placement/resolution pair. Placement maps an ordered
//! item list onto a pane grid under a set of transform parameters
//! (orientation, rotation, gap, repeat, flips) and writes the result into a
//! [`Container`](slotpane_render::Container). Resolution maps a clicked slot
//! back to the item index under the same parameters.
//!
//! # Primary responsibilities
//! - **PaneTransform**: immutable parameter snapshot used by both directions.
//! - **OutlineLayout**: pure fill-order math, independent of items.
//! - **OutlinePane / StaticPane**: the pane variants, unified by [`SlotPane`]
//!   and the [`Pane`] enum.

pub mod item;
pub mod outline;
pub mod pane;
pub mod static_pane;
pub mod transform;

pub use item::{ClickAction, PaneItem};
pub use outline::{OutlineLayout, OutlinePane, Placement};
pub use pane::{Pane, PaneFrame, PaneKind, Priority, Resolution, SlotPane};
pub use static_pane::StaticPane;
pub use transform::{Orientation, PaneTransform, ParseOrientationError};
