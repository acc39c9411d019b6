#![forbid(unsafe_code)]

//! Outline panes: items laid out one after another in fill order.
//!
//! # Fill order
//!
//! A cursor starts at the top-left cell and advances `gap + 1` cells along
//! the fill axis after each item, carrying into the next row (horizontal) or
//! column (vertical). Item `k` therefore sits at fill index `k * (gap + 1)`
//! where the fill index is `y * length + x` for horizontal panes and
//! `x * height + y` for vertical ones. Placement stops when the cursor leaves
//! the grid, or after the last item unless the pane repeats.
//!
//! Resolution runs the same mapping backwards: un-rotate, un-flip, compute
//! the fill index, and divide by the stride. Cells that fall in a gap, or
//! past the last item of a non-repeating pane, resolve to nothing.
//!
//! [`OutlineLayout`] holds that math as pure functions over a
//! [`PaneTransform`] snapshot; [`OutlinePane`] owns items and parameters and
//! drives the layout against a container.

use slotpane_core::GeometryError;
use slotpane_core::geometry::{GridSize, PaneOffset, SlotPos};
use slotpane_core::rotation::Rotation;
use slotpane_render::Container;

use crate::item::PaneItem;
use crate::pane::{PaneFrame, PaneKind, Priority, SlotPane};
use crate::transform::{Orientation, PaneTransform};

/// One item placement produced by [`OutlineLayout::placements`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Iteration number; equals the fill index divided by the stride.
    pub step: usize,
    /// Index into the item list (`step % item_count`).
    pub item_index: usize,
    /// Fill-order cursor before flipping and rotation.
    pub cursor: (u16, u16),
    /// Local cell the item is rendered in.
    pub cell: (u16, u16),
}

/// Pure placement/resolution math for one outline pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutlineLayout {
    size: GridSize,
    transform: PaneTransform,
}

impl OutlineLayout {
    /// Create a layout over an effective grid.
    ///
    /// # Panics
    ///
    /// Panics if the transform rotates a non-square grid.
    pub fn new(size: GridSize, transform: PaneTransform) -> Self {
        if let Err(err) = transform.rotation.check_grid(size) {
            panic!("{err}");
        }
        Self { size, transform }
    }

    #[inline]
    pub const fn size(&self) -> GridSize {
        self.size
    }

    #[inline]
    pub const fn transform(&self) -> PaneTransform {
        self.transform
    }

    /// Iterate the placements for a list of `item_count` items.
    pub fn placements(&self, item_count: usize) -> Placements {
        let total = if item_count == 0 || self.size.is_empty() {
            0
        } else if self.transform.repeat {
            self.size.area()
        } else {
            item_count
        };
        Placements {
            layout: *self,
            item_count,
            total,
            step: 0,
            x: 0,
            y: 0,
        }
    }

    /// Fill index of a local cell, after undoing rotation and flips.
    pub fn fill_index(&self, x: u16, y: u16) -> Option<usize> {
        if !self.size.contains(x, y) {
            return None;
        }
        let (fx, fy) = self.transform.to_fill(x, y, self.size);
        Some(match self.transform.orientation {
            Orientation::Horizontal => fy as usize * self.size.length as usize + fx as usize,
            Orientation::Vertical => fx as usize * self.size.height as usize + fy as usize,
        })
    }

    /// Index of the item rendered in local cell `(x, y)`.
    pub fn item_index_at(&self, x: u16, y: u16, item_count: usize) -> Option<usize> {
        if item_count == 0 {
            return None;
        }
        let fill = self.fill_index(x, y)?;
        let stride = self.transform.stride();
        if fill % stride != 0 {
            return None;
        }
        let index = fill / stride;
        if index < item_count {
            Some(index)
        } else if self.transform.repeat {
            Some(index % item_count)
        } else {
            None
        }
    }
}

/// Iterator over the placements of one outline pass.
#[derive(Debug, Clone)]
pub struct Placements {
    layout: OutlineLayout,
    item_count: usize,
    total: usize,
    step: usize,
    // u32 so that advancing by a large gap cannot overflow
    x: u32,
    y: u32,
}

impl Iterator for Placements {
    type Item = Placement;

    fn next(&mut self) -> Option<Placement> {
        if self.step >= self.total {
            return None;
        }
        let size = self.layout.size;
        let length = u32::from(size.length);
        let height = u32::from(size.height);
        if self.x >= length || self.y >= height {
            return None;
        }

        let cursor = (self.x as u16, self.y as u16);
        let placement = Placement {
            step: self.step,
            item_index: self.step % self.item_count,
            cursor,
            cell: self.layout.transform.to_rendered(cursor.0, cursor.1, size),
        };
        self.step += 1;

        let stride = self.layout.transform.stride() as u32;
        match self.layout.transform.orientation {
            Orientation::Horizontal => {
                self.x += stride;
                if self.x >= length {
                    self.y += self.x / length;
                    self.x %= length;
                }
            }
            Orientation::Vertical => {
                self.y += stride;
                if self.y >= height {
                    self.x += self.y / height;
                    self.y %= height;
                }
            }
        }

        Some(placement)
    }
}

/// A pane that lays out its items in fill order.
#[derive(Debug, Clone)]
pub struct OutlinePane<T> {
    origin: SlotPos,
    size: GridSize,
    items: Vec<PaneItem<T>>,
    transform: PaneTransform,
    priority: Priority,
    visible: bool,
}

impl<T> OutlinePane<T> {
    /// Create an empty horizontal pane.
    pub fn new(origin: SlotPos, length: u16, height: u16) -> Self {
        Self {
            origin,
            size: GridSize::new(length, height),
            items: Vec::new(),
            transform: PaneTransform::default(),
            priority: Priority::Normal,
            visible: true,
        }
    }

    #[inline]
    pub fn origin(&self) -> SlotPos {
        self.origin
    }

    #[inline]
    pub fn length(&self) -> u16 {
        self.size.length
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.size.height
    }

    /// Snapshot of the current transform parameters.
    #[inline]
    pub fn transform(&self) -> PaneTransform {
        self.transform
    }

    pub fn items(&self) -> &[PaneItem<T>] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [PaneItem<T>] {
        &mut self.items
    }

    /// Append an item.
    pub fn add_item(&mut self, item: PaneItem<T>) {
        self.items.push(item);
    }

    /// Insert an item at `index`, shifting later items back.
    ///
    /// # Panics
    ///
    /// Panics if `index > items().len()`.
    pub fn insert_item(&mut self, item: PaneItem<T>, index: usize) {
        self.items.insert(index, item);
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn orientation(&self) -> Orientation {
        self.transform.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.transform.orientation = orientation;
    }

    pub fn rotation(&self) -> Rotation {
        self.transform.rotation
    }

    /// Set the clockwise rotation in degrees.
    ///
    /// # Panics
    ///
    /// Panics if `degrees` isn't a multiple of 90, or if the rotation is
    /// non-zero and the pane isn't square.
    pub fn set_rotation(&mut self, degrees: i32) {
        if let Err(err) = self.try_set_rotation(degrees) {
            panic!("{err}");
        }
    }

    /// Fallible form of [`set_rotation`](Self::set_rotation).
    pub fn try_set_rotation(&mut self, degrees: i32) -> Result<(), GeometryError> {
        let rotation = Rotation::from_degrees(degrees)?;
        rotation.check_grid(self.size)?;
        self.transform.rotation = rotation;
        Ok(())
    }

    pub fn gap(&self) -> u16 {
        self.transform.gap
    }

    pub fn set_gap(&mut self, gap: u16) {
        self.transform.gap = gap;
    }

    pub fn does_repeat(&self) -> bool {
        self.transform.repeat
    }

    pub fn set_repeat(&mut self, repeat: bool) {
        self.transform.repeat = repeat;
    }

    pub fn is_flipped_horizontally(&self) -> bool {
        self.transform.flip_horizontal
    }

    pub fn flip_horizontally(&mut self, flip: bool) {
        self.transform.flip_horizontal = flip;
    }

    pub fn is_flipped_vertically(&self) -> bool {
        self.transform.flip_vertical
    }

    pub fn flip_vertically(&mut self, flip: bool) {
        self.transform.flip_vertical = flip;
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    /// Layout and frame for a pass, or `None` if the pane can't be shown.
    fn pass(&self, offset: PaneOffset, max: GridSize) -> Option<(PaneFrame, OutlineLayout)> {
        if !self.visible {
            return None;
        }
        let transform = self.transform;
        let size = transform.effective_size(self.size, max);
        let frame = PaneFrame::new(self.origin, offset, size)?;
        Some((frame, OutlineLayout::new(size, transform)))
    }
}

impl<T: Clone + PartialEq> SlotPane<T> for OutlinePane<T> {
    fn kind(&self) -> PaneKind {
        PaneKind::Outline
    }

    fn origin(&self) -> SlotPos {
        self.origin
    }

    fn size(&self) -> GridSize {
        self.size
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn item(&self, index: usize) -> Option<&PaneItem<T>> {
        self.items.get(index)
    }

    fn place<C: Container<T> + ?Sized>(&self, container: &mut C, offset: PaneOffset, max: GridSize) {
        let Some((frame, layout)) = self.pass(offset, max) else {
            return;
        };
        let _span = tracing::debug_span!(
            "pane_place",
            kind = "outlinepane",
            length = frame.size.length,
            height = frame.size.height,
            items = self.items.len()
        )
        .entered();

        let row_width = container.row_width();
        let mut written = 0usize;
        for placement in layout.placements(self.items.len()) {
            let item = &self.items[placement.item_index];
            if !item.is_visible() {
                continue;
            }
            let (x, y) = placement.cell;
            if let Some(slot) = frame.slot_of(x, y, row_width) {
                container.set_item(slot, item.item().clone());
                written += 1;
            }
        }
        tracing::trace!(written, "outline pane placed");
    }

    fn locate(&self, slot: usize, row_width: u16, offset: PaneOffset, max: GridSize) -> Option<usize> {
        let (frame, layout) = self.pass(offset, max)?;
        let (x, y) = frame.local_of(slot, row_width)?;
        layout.item_index_at(x, y, self.items.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pane::Resolution;
    use slotpane_core::event::ClickEvent;
    use slotpane_render::SlotBuffer;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const MAX: GridSize = GridSize::new(9, 6);

    fn abc_pane() -> OutlinePane<char> {
        let mut pane = OutlinePane::new(SlotPos::new(0, 0), 3, 1);
        for c in ['A', 'B', 'C'] {
            pane.add_item(PaneItem::new(c));
        }
        pane
    }

    fn rendered(pane: &OutlinePane<char>) -> SlotBuffer<char> {
        let mut buf = SlotBuffer::with_rows(6);
        pane.place(&mut buf, PaneOffset::ZERO, MAX);
        buf
    }

    fn click(buf: &SlotBuffer<char>, pane: &OutlinePane<char>, slot: usize) -> Resolution {
        let mut event = buf.click(slot);
        pane.resolve(&mut event, PaneOffset::ZERO, MAX)
    }

    #[test]
    fn three_by_one_places_in_order() {
        let pane = abc_pane();
        let buf = rendered(&pane);
        assert_eq!(buf.item_at(0), Some(&'A'));
        assert_eq!(buf.item_at(1), Some(&'B'));
        assert_eq!(buf.item_at(2), Some(&'C'));
        assert_eq!(buf.occupied_count(), 3);
        assert_eq!(click(&buf, &pane, 1), Resolution::Claimed { index: 1 });
        assert_eq!(click(&buf, &pane, 5), Resolution::NotClaimed);
    }

    #[test]
    fn gap_leaves_empty_cells() {
        let mut pane = OutlinePane::new(SlotPos::new(0, 0), 5, 1);
        for c in ['A', 'B', 'C'] {
            pane.add_item(PaneItem::new(c));
        }
        pane.set_gap(1);
        let buf = rendered(&pane);
        assert_eq!(buf.item_at(0), Some(&'A'));
        assert_eq!(buf.item_at(1), None);
        assert_eq!(buf.item_at(2), Some(&'B'));
        assert_eq!(buf.item_at(4), Some(&'C'));
        assert_eq!(click(&buf, &pane, 1), Resolution::NotClaimed);
        assert_eq!(click(&buf, &pane, 3), Resolution::NotClaimed);
        assert_eq!(click(&buf, &pane, 4), Resolution::Claimed { index: 2 });
    }

    #[test]
    fn gap_stops_at_grid_edge() {
        // 3x1 with gap 1 only has room for A and B
        let mut pane = abc_pane();
        pane.set_gap(1);
        let buf = rendered(&pane);
        assert_eq!(buf.item_at(0), Some(&'A'));
        assert_eq!(buf.item_at(2), Some(&'B'));
        assert_eq!(buf.occupied_count(), 2);
        assert_eq!(pane.locate(1, 9, PaneOffset::ZERO, MAX), None);
    }

    #[test]
    fn horizontal_wraps_into_next_row() {
        let mut pane = OutlinePane::new(SlotPos::new(1, 1), 2, 2);
        for c in ['A', 'B', 'C'] {
            pane.add_item(PaneItem::new(c));
        }
        let buf = rendered(&pane);
        assert_eq!(buf.get(1, 1), Some(&'A'));
        assert_eq!(buf.get(2, 1), Some(&'B'));
        assert_eq!(buf.get(1, 2), Some(&'C'));
        assert_eq!(buf.get(2, 2), None);
    }

    #[test]
    fn vertical_fills_columns_first() {
        let mut pane = OutlinePane::new(SlotPos::new(0, 0), 2, 2);
        for c in ['A', 'B', 'C'] {
            pane.add_item(PaneItem::new(c));
        }
        pane.set_orientation(Orientation::Vertical);
        let buf = rendered(&pane);
        assert_eq!(buf.get(0, 0), Some(&'A'));
        assert_eq!(buf.get(0, 1), Some(&'B'));
        assert_eq!(buf.get(1, 0), Some(&'C'));
        assert_eq!(click(&buf, &pane, 9), Resolution::Claimed { index: 1 });
        assert_eq!(click(&buf, &pane, 1), Resolution::Claimed { index: 2 });
    }

    #[test]
    fn repeat_cycles_items() {
        let mut pane = OutlinePane::new(SlotPos::new(0, 0), 5, 1);
        pane.add_item(PaneItem::new('A'));
        pane.add_item(PaneItem::new('B'));
        pane.set_repeat(true);
        let buf = rendered(&pane);
        let row: Vec<_> = (0..5).map(|slot| buf.item_at(slot).copied()).collect();
        assert_eq!(row, [Some('A'), Some('B'), Some('A'), Some('B'), Some('A')]);
        assert_eq!(click(&buf, &pane, 4), Resolution::Claimed { index: 0 });
        assert_eq!(click(&buf, &pane, 3), Resolution::Claimed { index: 1 });
    }

    #[test]
    fn hidden_items_keep_their_cell() {
        let mut pane = abc_pane();
        pane.items_mut()[1].set_visible(false);
        let buf = rendered(&pane);
        assert_eq!(buf.item_at(0), Some(&'A'));
        assert_eq!(buf.item_at(1), None);
        assert_eq!(buf.item_at(2), Some(&'C'));
        assert_eq!(pane.locate(1, 9, PaneOffset::ZERO, MAX), Some(1));
        let mut event = ClickEvent::new(1, 9, Some('B'));
        assert_eq!(pane.resolve(&mut event, PaneOffset::ZERO, MAX), Resolution::NotClaimed);
    }

    #[test]
    fn payload_mismatch_is_not_claimed() {
        let pane = abc_pane();
        let mut event = ClickEvent::new(1, 9, Some('Z'));
        assert_eq!(pane.resolve(&mut event, PaneOffset::ZERO, MAX), Resolution::NotClaimed);
        let mut empty = ClickEvent::new(1, 9, None);
        assert_eq!(pane.resolve(&mut empty, PaneOffset::ZERO, MAX), Resolution::NotClaimed);
    }

    #[test]
    fn claim_runs_bound_action() {
        let clicks = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&clicks);
        let mut pane = OutlinePane::new(SlotPos::new(0, 0), 3, 1);
        pane.add_item(PaneItem::new('A'));
        pane.add_item(PaneItem::new('B').with_action(move |event: &mut ClickEvent<char>| {
            counter.fetch_add(1, Ordering::SeqCst);
            event.cancel();
        }));
        let buf = rendered(&pane);
        let mut event = buf.click(1);
        assert!(pane.resolve(&mut event, PaneOffset::ZERO, MAX).is_claimed());
        assert!(event.is_cancelled());
        let mut other = buf.click(0);
        assert!(pane.resolve(&mut other, PaneOffset::ZERO, MAX).is_claimed());
        assert_eq!(clicks.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn flip_horizontally_mirrors_row() {
        let mut pane = abc_pane();
        pane.flip_horizontally(true);
        let buf = rendered(&pane);
        assert_eq!(buf.item_at(0), Some(&'C'));
        assert_eq!(buf.item_at(2), Some(&'A'));
        assert_eq!(click(&buf, &pane, 0), Resolution::Claimed { index: 2 });
    }

    #[test]
    fn rotation_turns_first_row_into_last_column() {
        let mut pane = OutlinePane::new(SlotPos::new(0, 0), 3, 3);
        for c in ['A', 'B', 'C'] {
            pane.add_item(PaneItem::new(c));
        }
        pane.set_rotation(90);
        let buf = rendered(&pane);
        assert_eq!(buf.get(2, 0), Some(&'A'));
        assert_eq!(buf.get(2, 1), Some(&'B'));
        assert_eq!(buf.get(2, 2), Some(&'C'));
        assert_eq!(click(&buf, &pane, 2 * 9 + 2), Resolution::Claimed { index: 2 });
    }

    #[test]
    fn max_bounds_clamp_the_grid() {
        let mut pane = OutlinePane::new(SlotPos::new(0, 0), 9, 3);
        for c in 'a'..='z' {
            pane.add_item(PaneItem::new(c));
        }
        let mut buf = SlotBuffer::with_rows(6);
        let max = GridSize::new(9, 1);
        pane.place(&mut buf, PaneOffset::ZERO, max);
        assert_eq!(buf.occupied_count(), 9);
        assert_eq!(pane.locate(9, 9, PaneOffset::ZERO, max), None);
        assert_eq!(pane.locate(8, 9, PaneOffset::ZERO, max), Some(8));
    }

    #[test]
    fn rotated_pane_clamped_to_rectangle_stays_square() {
        let mut pane = OutlinePane::new(SlotPos::new(0, 0), 3, 3);
        for c in ['A', 'B', 'C', 'D'] {
            pane.add_item(PaneItem::new(c));
        }
        pane.set_rotation(180);
        let mut buf = SlotBuffer::with_rows(6);
        let max = GridSize::new(9, 2);
        pane.place(&mut buf, PaneOffset::ZERO, max);
        // effective grid is 2x2; half turn puts A bottom-right
        assert_eq!(buf.get(1, 1), Some(&'A'));
        assert_eq!(buf.get(0, 0), Some(&'D'));
        assert_eq!(pane.locate(1, 9, PaneOffset::ZERO, max), Some(2));
    }

    #[test]
    fn offset_shifts_placement_and_resolution() {
        let pane = abc_pane();
        let mut buf = SlotBuffer::with_rows(6);
        let offset = PaneOffset::new(2, 1);
        pane.place(&mut buf, offset, MAX);
        assert_eq!(buf.get(2, 1), Some(&'A'));
        let mut event = buf.click(9 + 4);
        assert_eq!(pane.resolve(&mut event, offset, MAX), Resolution::Claimed { index: 2 });
        let mut event = buf.click(9 + 4);
        assert_eq!(pane.resolve(&mut event, PaneOffset::ZERO, MAX), Resolution::NotClaimed);
    }

    #[test]
    fn invisible_pane_does_nothing() {
        let mut pane = abc_pane();
        pane.set_visible(false);
        let buf = rendered(&pane);
        assert_eq!(buf.occupied_count(), 0);
        let mut event = ClickEvent::new(0, 9, Some('A'));
        assert_eq!(pane.resolve(&mut event, PaneOffset::ZERO, MAX), Resolution::NotClaimed);
    }

    #[test]
    fn empty_pane_places_nothing() {
        let pane: OutlinePane<char> = OutlinePane::new(SlotPos::new(0, 0), 3, 3);
        let buf = rendered(&pane);
        assert_eq!(buf.occupied_count(), 0);
        assert_eq!(pane.locate(0, 9, PaneOffset::ZERO, MAX), None);
    }

    #[test]
    fn rotation_setter_normalises_and_validates() {
        let mut pane: OutlinePane<char> = OutlinePane::new(SlotPos::new(0, 0), 4, 4);
        pane.set_rotation(450);
        assert_eq!(pane.rotation(), Rotation::Deg90);
        assert!(pane.try_set_rotation(45).is_err());
        assert_eq!(pane.rotation(), Rotation::Deg90);

        let mut wide: OutlinePane<char> = OutlinePane::new(SlotPos::new(0, 0), 4, 2);
        assert!(matches!(
            wide.try_set_rotation(90),
            Err(GeometryError::NonSquareRotation { .. })
        ));
        wide.set_rotation(360);
        assert_eq!(wide.rotation(), Rotation::Deg0);
    }

    #[test]
    #[should_panic(expected = "length and height are different")]
    fn rotating_wide_pane_panics() {
        let mut pane: OutlinePane<char> = OutlinePane::new(SlotPos::new(0, 0), 4, 2);
        pane.set_rotation(90);
    }

    #[test]
    #[should_panic(expected = "isn't divisible by 90")]
    fn odd_rotation_panics() {
        let mut pane: OutlinePane<char> = OutlinePane::new(SlotPos::new(0, 0), 3, 3);
        pane.set_rotation(30);
    }

    #[test]
    fn full_size_pane_allocates_nothing_up_front() {
        let mut pane = OutlinePane::new(SlotPos::new(0, 0), u16::MAX, u16::MAX);
        assert_eq!(pane.items().len(), 0);
        pane.add_item(PaneItem::new('A'));
        pane.set_repeat(true);
        let buf = rendered(&pane);
        assert_eq!(buf.occupied_count(), MAX.area());
        assert_eq!(click(&buf, &pane, 5 * 9 + 8), Resolution::Claimed { index: 0 });
        assert_eq!(pane.priority(), Priority::Normal);
    }

    #[test]
    fn insert_item_shifts_fill_order() {
        let mut pane = abc_pane();
        pane.insert_item(PaneItem::new('Z'), 0);
        let buf = rendered(&pane);
        assert_eq!(buf.item_at(0), Some(&'Z'));
        assert_eq!(buf.item_at(2), Some(&'B'));
        assert_eq!(buf.occupied_count(), 3);
    }

    #[test]
    fn placements_report_cursor_and_cell() {
        let transform = PaneTransform {
            flip_vertical: true,
            ..Default::default()
        };
        let layout = OutlineLayout::new(GridSize::new(2, 2), transform);
        let placements: Vec<_> = layout.placements(3).collect();
        assert_eq!(placements.len(), 3);
        assert_eq!(placements[0].cursor, (0, 0));
        assert_eq!(placements[0].cell, (0, 1));
        assert_eq!(placements[2].cursor, (0, 1));
        assert_eq!(placements[2].cell, (0, 0));
    }
}
