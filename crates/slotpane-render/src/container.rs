#![forbid(unsafe_code)]

//! Container trait and the in-memory [`SlotBuffer`].
//!
//! # Usage
//!
//! ```
//! use slotpane_render::{Container, SlotBuffer};
//!
//! let mut chest = SlotBuffer::new(9, 3);
//! chest.set_item(10, 'A');
//! assert_eq!(chest.item_at(10), Some(&'A'));
//! assert_eq!(chest.click(10).current, Some('A'));
//! ```

use slotpane_core::event::ClickEvent;
use slotpane_core::geometry::{DEFAULT_ROW_WIDTH, GridSize, SlotPos};

/// An externally owned grid of slots with a fixed row width.
///
/// Slots are addressed by linear index `y * row_width + x`.
pub trait Container<T> {
    /// Number of slots per row.
    fn row_width(&self) -> u16;

    /// Total number of slots.
    fn capacity(&self) -> usize;

    /// Write an item into a slot.
    ///
    /// Implementations decide what happens for slots past [`capacity`];
    /// panes only ever write slots they computed from the container's row
    /// width, but a pane can be larger than the container it is shown in.
    ///
    /// [`capacity`]: Container::capacity
    fn set_item(&mut self, slot: usize, item: T);

    /// Read the item in a slot.
    fn item_at(&self, slot: usize) -> Option<&T>;

    /// Number of complete rows.
    fn rows(&self) -> u16 {
        let width = self.row_width();
        if width == 0 {
            return 0;
        }
        u16::try_from(self.capacity() / width as usize).unwrap_or(u16::MAX)
    }

    /// The largest area a top-level pane may occupy in this container.
    fn bounds(&self) -> GridSize {
        GridSize::new(self.row_width(), self.rows())
    }

    /// Build the click event a host would deliver for `slot`.
    fn click(&self, slot: usize) -> ClickEvent<T>
    where
        T: Clone,
    {
        ClickEvent::new(slot, self.row_width(), self.item_at(slot).cloned())
    }
}

/// In-memory, row-major slot container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotBuffer<T> {
    row_width: u16,
    rows: u16,
    slots: Vec<Option<T>>,
}

impl<T> SlotBuffer<T> {
    /// Create an empty container of `rows` rows of `row_width` slots.
    pub fn new(row_width: u16, rows: u16) -> Self {
        let size = row_width as usize * rows as usize;
        let mut slots = Vec::with_capacity(size);
        slots.resize_with(size, || None);
        Self {
            row_width,
            rows,
            slots,
        }
    }

    /// Create an empty container with the default row width of 9.
    pub fn with_rows(rows: u16) -> Self {
        Self::new(DEFAULT_ROW_WIDTH, rows)
    }

    /// Read the slot at a 2D position.
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&T> {
        if x >= self.row_width || y >= self.rows {
            return None;
        }
        let slot = SlotPos::new(x, y).to_slot(self.row_width)?;
        self.slots.get(slot).and_then(Option::as_ref)
    }

    /// Remove the item in a slot, returning it.
    pub fn take(&mut self, slot: usize) -> Option<T> {
        self.slots.get_mut(slot).and_then(Option::take)
    }

    /// Empty every slot.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }

    /// Slots of row `y`, or `None` past the last row.
    pub fn row(&self, y: u16) -> Option<&[Option<T>]> {
        if y >= self.rows {
            return None;
        }
        let start = y as usize * self.row_width as usize;
        Some(&self.slots[start..start + self.row_width as usize])
    }

    /// Iterate over occupied slots as `(slot, item)`.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, item)| item.as_ref().map(|item| (slot, item)))
    }

    /// Number of occupied slots.
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}

impl<T> Container<T> for SlotBuffer<T> {
    #[inline]
    fn row_width(&self) -> u16 {
        self.row_width
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    fn rows(&self) -> u16 {
        self.rows
    }

    /// Writes past the last slot are dropped.
    fn set_item(&mut self, slot: usize, item: T) {
        match self.slots.get_mut(slot) {
            Some(cell) => *cell = Some(item),
            None => tracing::trace!(slot, capacity = self.slots.len(), "slot write clipped"),
        }
    }

    #[inline]
    fn item_at(&self, slot: usize) -> Option<&T> {
        self.slots.get(slot).and_then(Option::as_ref)
    }
}
