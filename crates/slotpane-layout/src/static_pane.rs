#![forbid(unsafe_code)]

//! Static panes: items pinned to explicit cells.
//!
//! Each item carries its own pane-local position. Rotation and flips apply
//! exactly as for outline panes; items whose position falls outside the
//! clamped grid are not shown and cannot be clicked.

use slotpane_core::GeometryError;
use slotpane_core::geometry::{GridSize, PaneOffset, SlotPos};
use slotpane_core::rotation::Rotation;
use slotpane_render::Container;

use crate::item::PaneItem;
use crate::pane::{PaneFrame, PaneKind, Priority, SlotPane};
use crate::transform::PaneTransform;

/// A pane whose items sit at fixed positions.
#[derive(Debug, Clone)]
pub struct StaticPane<T> {
    origin: SlotPos,
    size: GridSize,
    items: Vec<(SlotPos, PaneItem<T>)>,
    rotation: Rotation,
    flip_horizontal: bool,
    flip_vertical: bool,
    priority: Priority,
    visible: bool,
}

impl<T> StaticPane<T> {
    pub fn new(origin: SlotPos, length: u16, height: u16) -> Self {
        Self {
            origin,
            size: GridSize::new(length, height),
            items: Vec::new(),
            rotation: Rotation::Deg0,
            flip_horizontal: false,
            flip_vertical: false,
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

    /// Items with their pane-local positions, in insertion order.
    pub fn items(&self) -> &[(SlotPos, PaneItem<T>)] {
        &self.items
    }

    /// Pin an item at a pane-local position.
    ///
    /// An item already at that position is replaced and keeps its index.
    pub fn add_item(&mut self, item: PaneItem<T>, position: SlotPos) {
        match self.items.iter_mut().find(|(at, _)| *at == position) {
            Some(entry) => entry.1 = item,
            None => self.items.push((position, item)),
        }
    }

    /// Remove the item at a position, returning it.
    pub fn remove_item(&mut self, position: SlotPos) -> Option<PaneItem<T>> {
        let index = self.items.iter().position(|(at, _)| *at == position)?;
        Some(self.items.remove(index).1)
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
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
        self.rotation = rotation;
        Ok(())
    }

    pub fn is_flipped_horizontally(&self) -> bool {
        self.flip_horizontal
    }

    pub fn flip_horizontally(&mut self, flip: bool) {
        self.flip_horizontal = flip;
    }

    pub fn is_flipped_vertically(&self) -> bool {
        self.flip_vertical
    }

    pub fn flip_vertically(&mut self, flip: bool) {
        self.flip_vertical = flip;
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

    /// Static panes only use the rotation and flip parameters.
    pub fn transform(&self) -> PaneTransform {
        PaneTransform {
            rotation: self.rotation,
            flip_horizontal: self.flip_horizontal,
            flip_vertical: self.flip_vertical,
            ..PaneTransform::default()
        }
    }

    fn pass(&self, offset: PaneOffset, max: GridSize) -> Option<(PaneFrame, PaneTransform)> {
        if !self.visible {
            return None;
        }
        let transform = self.transform();
        let size = transform.effective_size(self.size, max);
        Some((PaneFrame::new(self.origin, offset, size)?, transform))
    }
}

impl<T: Clone + PartialEq> SlotPane<T> for StaticPane<T> {
    fn kind(&self) -> PaneKind {
        PaneKind::Static
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
        self.items.get(index).map(|(_, item)| item)
    }

    fn place<C: Container<T> + ?Sized>(&self, container: &mut C, offset: PaneOffset, max: GridSize) {
        let Some((frame, transform)) = self.pass(offset, max) else {
            return;
        };
        let _span = tracing::debug_span!(
            "pane_place",
            kind = "staticpane",
            length = frame.size.length,
            height = frame.size.height,
            items = self.items.len()
        )
        .entered();

        let row_width = container.row_width();
        for (position, item) in &self.items {
            if !item.is_visible() || !frame.size.contains(position.x, position.y) {
                continue;
            }
            let (x, y) = transform.to_rendered(position.x, position.y, frame.size);
            if let Some(slot) = frame.slot_of(x, y, row_width) {
                container.set_item(slot, item.item().clone());
            }
        }
    }

    fn locate(&self, slot: usize, row_width: u16, offset: PaneOffset, max: GridSize) -> Option<usize> {
        let (frame, transform) = self.pass(offset, max)?;
        let (x, y) = frame.local_of(slot, row_width)?;
        let (x, y) = transform.to_fill(x, y, frame.size);
        let position = SlotPos::new(x, y);
        self.items.iter().position(|(at, _)| *at == position)
    }
}
