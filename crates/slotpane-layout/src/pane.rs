#![forbid(unsafe_code)]

//! The shared pane interface and the closed set of pane variants.
//!
//! Every pane answers two questions about the same grid:
//!
//! - **place**: which container slot does each visible item go to?
//! - **resolve**: which item, if any, sits under a clicked slot?
//!
//! [`SlotPane`] captures that pair. [`Pane`] is the tagged union of the
//! variants this crate ships; hosts store `Pane` values and dispatch on them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use slotpane_core::event::ClickEvent;
use slotpane_core::geometry::{GridSize, PaneOffset, SlotPos};
use slotpane_render::Container;

use crate::item::PaneItem;
use crate::outline::OutlinePane;
use crate::static_pane::StaticPane;

/// Outcome of offering a click to a pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The click landed on item `index`; its callback has run.
    Claimed { index: usize },
    /// Not this pane's cell. The next pane may try.
    NotClaimed,
}

impl Resolution {
    #[inline]
    pub const fn is_claimed(self) -> bool {
        matches!(self, Self::Claimed { .. })
    }

    /// Index of the claimed item.
    #[inline]
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::Claimed { index } => Some(index),
            Self::NotClaimed => None,
        }
    }
}

/// Placement of a pane's grid inside a container for one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneFrame {
    /// Pane origin plus the caller's offset.
    pub origin: SlotPos,
    /// Effective (clamped) grid size.
    pub size: GridSize,
}

impl PaneFrame {
    /// Combine a pane origin with a caller offset.
    ///
    /// Returns `None` if the combined origin overflows.
    pub fn new(origin: SlotPos, offset: PaneOffset, size: GridSize) -> Option<Self> {
        Some(Self {
            origin: origin.checked_add(offset)?,
            size,
        })
    }

    /// Container slot for a local cell, or `None` if it falls outside the
    /// container's row width.
    pub fn slot_of(&self, x: u16, y: u16, row_width: u16) -> Option<usize> {
        let cx = u32::from(self.origin.x) + u32::from(x);
        let cy = u32::from(self.origin.y) + u32::from(y);
        if cx >= u32::from(row_width) {
            return None;
        }
        Some(cy as usize * row_width as usize + cx as usize)
    }

    /// Local cell for a container slot, or `None` outside the grid.
    ///
    /// Bounds are strict on both axes, matching [`slot_of`](Self::slot_of):
    /// a local `x == length` is outside.
    pub fn local_of(&self, slot: usize, row_width: u16) -> Option<(u16, u16)> {
        if row_width == 0 {
            return None;
        }
        let width = row_width as usize;
        let x = (slot % width).checked_sub(self.origin.x as usize)?;
        let y = (slot / width).checked_sub(self.origin.y as usize)?;
        if x >= self.size.length as usize || y >= self.size.height as usize {
            return None;
        }
        Some((x as u16, y as u16))
    }
}

/// Tag naming a pane variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaneKind {
    Outline,
    Static,
}

impl PaneKind {
    /// Element name used in pane documents.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Outline => "outlinepane",
            Self::Static => "staticpane",
        }
    }
}

impl fmt::Display for PaneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for PaneKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "outlinepane" => Ok(Self::Outline),
            "staticpane" => Ok(Self::Static),
            other => Err(format!("unknown pane type {other:?}")),
        }
    }
}

/// Drawing and click order of panes sharing a container.
///
/// Lower priorities are placed first, so higher ones are drawn on top and
/// are offered clicks first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Lowest,
    Low,
    #[default]
    Normal,
    High,
    Highest,
    Monitor,
}

impl Priority {
    pub const ALL: [Self; 6] = [
        Self::Lowest,
        Self::Low,
        Self::Normal,
        Self::High,
        Self::Highest,
        Self::Monitor,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Lowest => "lowest",
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
            Self::Highest => "highest",
            Self::Monitor => "monitor",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Priority {
    type Err = String;

    /// Case-insensitive priority name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|priority| s.eq_ignore_ascii_case(priority.name()))
            .ok_or_else(|| format!("unknown priority {s:?}"))
    }
}

/// Forward placement and inverse resolution over one pane grid.
pub trait SlotPane<T: Clone + PartialEq> {
    /// Which variant this is.
    fn kind(&self) -> PaneKind;

    /// Top-left cell of the pane inside its parent.
    fn origin(&self) -> SlotPos;

    /// Declared (unclamped) size.
    fn size(&self) -> GridSize;

    /// Invisible panes neither place nor claim.
    fn is_visible(&self) -> bool;

    /// Item by stable index.
    fn item(&self, index: usize) -> Option<&PaneItem<T>>;

    /// Write visible items into `container`.
    ///
    /// `offset` shifts the pane inside the container and `max` bounds the
    /// area it may occupy.
    fn place<C: Container<T> + ?Sized>(&self, container: &mut C, offset: PaneOffset, max: GridSize);

    /// Index of the item laid out under `slot`, ignoring visibility and
    /// payloads. Pure geometry: the exact inverse of [`place`](Self::place).
    fn locate(&self, slot: usize, row_width: u16, offset: PaneOffset, max: GridSize) -> Option<usize>;

    /// Offer a click to this pane.
    ///
    /// The click is claimed when it lands on a visible item whose rendered
    /// representation equals the click payload. The item's callback then
    /// runs with the event.
    fn resolve(&self, event: &mut ClickEvent<T>, offset: PaneOffset, max: GridSize) -> Resolution {
        let _span = tracing::debug_span!(
            "pane_resolve",
            kind = %self.kind(),
            slot = event.slot,
            offset_x = offset.x,
            offset_y = offset.y
        )
        .entered();

        let Some(index) = self.locate(event.slot, event.row_width, offset, max) else {
            tracing::trace!("click outside pane");
            return Resolution::NotClaimed;
        };
        let Some(item) = self.item(index) else {
            return Resolution::NotClaimed;
        };
        if !item.is_visible() || event.current.as_ref() != Some(item.item()) {
            tracing::trace!(index, "payload mismatch or hidden item");
            return Resolution::NotClaimed;
        }

        item.invoke(event);
        tracing::debug!(index, "click claimed");
        Resolution::Claimed { index }
    }
}

/// The pane variants.
#[derive(Debug, Clone)]
pub enum Pane<T> {
    Outline(OutlinePane<T>),
    Static(StaticPane<T>),
}

impl<T> Pane<T> {
    pub fn as_outline(&self) -> Option<&OutlinePane<T>> {
        match self {
            Self::Outline(pane) => Some(pane),
            Self::Static(_) => None,
        }
    }

    pub fn as_static(&self) -> Option<&StaticPane<T>> {
        match self {
            Self::Static(pane) => Some(pane),
            Self::Outline(_) => None,
        }
    }

    pub fn priority(&self) -> Priority {
        match self {
            Self::Outline(pane) => pane.priority(),
            Self::Static(pane) => pane.priority(),
        }
    }

    /// Number of items held.
    pub fn item_count(&self) -> usize {
        match self {
            Self::Outline(pane) => pane.items().len(),
            Self::Static(pane) => pane.items().len(),
        }
    }
}

impl<T> From<OutlinePane<T>> for Pane<T> {
    fn from(pane: OutlinePane<T>) -> Self {
        Self::Outline(pane)
    }
}

impl<T> From<StaticPane<T>> for Pane<T> {
    fn from(pane: StaticPane<T>) -> Self {
        Self::Static(pane)
    }
}

impl<T: Clone + PartialEq> SlotPane<T> for Pane<T> {
    fn kind(&self) -> PaneKind {
        match self {
            Self::Outline(pane) => pane.kind(),
            Self::Static(pane) => pane.kind(),
        }
    }

    fn origin(&self) -> SlotPos {
        match self {
            Self::Outline(pane) => pane.origin(),
            Self::Static(pane) => pane.origin(),
        }
    }

    fn size(&self) -> GridSize {
        match self {
            Self::Outline(pane) => SlotPane::size(pane),
            Self::Static(pane) => SlotPane::size(pane),
        }
    }

    fn is_visible(&self) -> bool {
        match self {
            Self::Outline(pane) => SlotPane::is_visible(pane),
            Self::Static(pane) => SlotPane::is_visible(pane),
        }
    }

    fn item(&self, index: usize) -> Option<&PaneItem<T>> {
        match self {
            Self::Outline(pane) => pane.item(index),
            Self::Static(pane) => pane.item(index),
        }
    }

    fn place<C: Container<T> + ?Sized>(&self, container: &mut C, offset: PaneOffset, max: GridSize) {
        match self {
            Self::Outline(pane) => pane.place(container, offset, max),
            Self::Static(pane) => pane.place(container, offset, max),
        }
    }

    fn locate(&self, slot: usize, row_width: u16, offset: PaneOffset, max: GridSize) -> Option<usize> {
        match self {
            Self::Outline(pane) => pane.locate(slot, row_width, offset, max),
            Self::Static(pane) => pane.locate(slot, row_width, offset, max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_round_trips_slots() {
        let frame = PaneFrame::new(SlotPos::new(2, 1), PaneOffset::new(1, 0), GridSize::new(3, 2))
            .unwrap();
        assert_eq!(frame.origin, SlotPos::new(3, 1));
        let slot = frame.slot_of(2, 1, 9).unwrap();
        assert_eq!(slot, 2 * 9 + 5);
        assert_eq!(frame.local_of(slot, 9), Some((2, 1)));
    }

    #[test]
    fn frame_bounds_are_strict() {
        let frame = PaneFrame::new(SlotPos::new(0, 0), PaneOffset::ZERO, GridSize::new(3, 1)).unwrap();
        assert_eq!(frame.local_of(2, 9), Some((2, 0)));
        assert_eq!(frame.local_of(3, 9), None);
        assert_eq!(frame.local_of(9, 9), None);
        assert_eq!(frame.local_of(0, 0), None);
    }

    #[test]
    fn frame_rejects_slots_left_of_or_above_origin() {
        let frame = PaneFrame::new(SlotPos::new(4, 2), PaneOffset::ZERO, GridSize::new(2, 2)).unwrap();
        assert_eq!(frame.local_of(2 * 9 + 3, 9), None);
        assert_eq!(frame.local_of(9 + 4, 9), None);
        assert_eq!(frame.local_of(2 * 9 + 4, 9), Some((0, 0)));
    }

    #[test]
    fn frame_clips_columns_past_row_width() {
        let frame = PaneFrame::new(SlotPos::new(7, 0), PaneOffset::ZERO, GridSize::new(4, 1)).unwrap();
        assert_eq!(frame.slot_of(1, 0, 9), Some(8));
        assert_eq!(frame.slot_of(2, 0, 9), None);
    }

    #[test]
    fn frame_origin_overflow_is_none() {
        assert!(PaneFrame::new(SlotPos::new(u16::MAX, 0), PaneOffset::new(1, 0), GridSize::new(1, 1)).is_none());
    }

    #[test]
    fn pane_kind_tags_round_trip() {
        for kind in [PaneKind::Outline, PaneKind::Static] {
            assert_eq!(kind.tag().parse::<PaneKind>(), Ok(kind));
        }
        assert!("paginatedpane".parse::<PaneKind>().is_err());
    }

    #[test]
    fn priority_orders_and_parses() {
        assert!(Priority::Lowest < Priority::Normal);
        assert!(Priority::Highest < Priority::Monitor);
        assert_eq!(Priority::default(), Priority::Normal);
        assert_eq!("HIGH".parse(), Ok(Priority::High));
        for priority in Priority::ALL {
            assert_eq!(priority.to_string().parse(), Ok(priority));
        }
        assert_eq!(
            "urgent".parse::<Priority>(),
            Err("unknown priority \"urgent\"".to_owned())
        );
    }

    #[test]
    fn resolution_accessors() {
        assert_eq!(Resolution::Claimed { index: 4 }.index(), Some(4));
        assert!(!Resolution::NotClaimed.is_claimed());
    }
}
