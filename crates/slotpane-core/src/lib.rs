#![forbid(unsafe_code)]

//! Core: slot geometry, rotation primitives, and click events.
//!
//! # Role in SlotPane
//! `slotpane-core` holds the vocabulary every other crate speaks. It owns the
//! coordinate types used to address cells of a fixed-width slot container,
//! the square-grid rotation primitive shared by placement and resolution, and
//! the click event handed to panes when a slot is interacted with.
//!
//! # Primary responsibilities
//! - **Geometry**: [`SlotPos`](geometry::SlotPos), [`GridSize`](geometry::GridSize)
//!   and [`PaneOffset`](geometry::PaneOffset), plus linear slot folding.
//! - **Rotation**: [`Rotation`](rotation::Rotation) and its clockwise /
//!   counter-clockwise point transforms, which are exact inverses.
//! - **Events**: [`ClickEvent`](event::ClickEvent) carrying the clicked slot
//!   and the item found there.
//!
//! # How it fits in the system
//! `slotpane-layout` builds the placement/resolution pair on top of these
//! primitives, `slotpane-render` provides containers addressed by the same
//! linear slot indices.

pub mod event;
pub mod geometry;
pub mod rotation;

pub use rotation::GeometryError;
