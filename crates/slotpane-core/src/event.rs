#![forbid(unsafe_code)]

//! Click events delivered to panes.
//!
//! A [`ClickEvent`] is produced by the host when a slot of a container is
//! clicked. It records the absolute slot, the container's row width (needed
//! to unfold the slot into a 2D position), and a copy of the item that was in
//! that slot at click time. Panes compare that payload against their own item
//! before claiming the click.
//!
//! Panes never mutate the event themselves; bound callbacks receive it
//! mutably so they can mark it cancelled for the host.

use bitflags::bitflags;

use crate::geometry::SlotPos;

/// Which button produced the click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClickKind {
    #[default]
    Left,
    Right,
    Middle,
}

bitflags! {
    /// Modifier keys held during a click.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const NONE  = 0b000;
        const SHIFT = 0b001;
        const CTRL  = 0b010;
        const ALT   = 0b100;
    }
}

/// A click on a container slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent<T> {
    /// Absolute slot index in the container.
    pub slot: usize,
    /// Row width of the container the slot belongs to.
    pub row_width: u16,
    /// Item found in the slot when it was clicked.
    pub current: Option<T>,
    /// Button used.
    pub kind: ClickKind,
    /// Modifier keys held.
    pub modifiers: Modifiers,
    cancelled: bool,
}

impl<T> ClickEvent<T> {
    /// Create a left click with no modifiers.
    #[must_use]
    pub fn new(slot: usize, row_width: u16, current: Option<T>) -> Self {
        Self {
            slot,
            row_width,
            current,
            kind: ClickKind::Left,
            modifiers: Modifiers::NONE,
            cancelled: false,
        }
    }

    /// Set the button.
    #[must_use]
    pub fn with_kind(mut self, kind: ClickKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the held modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Unfold the slot into a container position.
    ///
    /// Returns `None` for a zero row width or a row outside `u16` range.
    #[must_use]
    pub fn position(&self) -> Option<SlotPos> {
        if self.row_width == 0 {
            return None;
        }
        SlotPos::from_slot(self.slot, self.row_width)
    }

    /// Ask the host to cancel its default handling of this click.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Whether a callback cancelled the click.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}
