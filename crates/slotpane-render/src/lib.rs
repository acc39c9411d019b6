#![forbid(unsafe_code)]

//! Render targets: fixed-width slot containers.
//!
//! # Role in SlotPane
//! Panes never own the grid they draw into. They write through the
//! [`Container`](container::Container) trait, which exposes a flat array of
//! slots folded into rows of a fixed width. Hosts implement the trait for
//! their own inventories; [`SlotBuffer`](container::SlotBuffer) is the
//! in-memory implementation used by tests, the demo, and headless rendering.

pub mod container;

pub use container::{Container, SlotBuffer};
