#![forbid(unsafe_code)]

//! Several panes sharing one container.

use slotpane_core::event::ClickEvent;
use slotpane_core::geometry::{GridSize, PaneOffset};
use slotpane_layout::{Pane, Priority, Resolution, SlotPane};
use slotpane_render::Container;

/// Which pane and item claimed a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetClick {
    pub pane: usize,
    pub item: usize,
}

/// Ordered panes drawn into one container.
///
/// Panes are kept sorted by [`Priority`], lowest first, with ties in
/// insertion order. They are placed in that order, so higher panes overwrite
/// lower ones where they overlap. Clicks are offered in reverse order for
/// the same reason.
#[derive(Debug, Clone)]
pub struct PaneSet<T> {
    entries: Vec<(Pane<T>, PaneOffset)>,
}

impl<T> Default for PaneSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PaneSet<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a pane at its own origin. Returns its current index.
    pub fn push(&mut self, pane: impl Into<Pane<T>>) -> usize {
        self.push_at(pane, PaneOffset::ZERO)
    }

    /// Add a pane shifted by `offset`. Returns its current index.
    ///
    /// The pane goes after every pane of lower or equal priority, so indices
    /// of higher-priority panes move up by one.
    pub fn push_at(&mut self, pane: impl Into<Pane<T>>, offset: PaneOffset) -> usize {
        let pane = pane.into();
        let priority = pane.priority();
        let index = self
            .entries
            .partition_point(|(existing, _)| existing.priority() <= priority);
        self.entries.insert(index, (pane, offset));
        index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Pane<T>> {
        self.entries.get(index).map(|(pane, _)| pane)
    }

    /// Panes in drawing order.
    pub fn iter(&self) -> impl Iterator<Item = &Pane<T>> {
        self.entries.iter().map(|(pane, _)| pane)
    }

    /// Highest priority held, if any pane is present.
    pub fn top_priority(&self) -> Option<Priority> {
        self.entries.last().map(|(pane, _)| pane.priority())
    }
}

impl<T> FromIterator<Pane<T>> for PaneSet<T> {
    fn from_iter<I: IntoIterator<Item = Pane<T>>>(iter: I) -> Self {
        let mut entries: Vec<_> = iter.into_iter().map(|pane| (pane, PaneOffset::ZERO)).collect();
        // stable, so equal priorities keep their order
        entries.sort_by_key(|(pane, _)| pane.priority());
        Self { entries }
    }
}

impl<T: Clone + PartialEq> PaneSet<T> {
    /// Place every pane, bounded by the container's grid.
    pub fn place_all<C: Container<T> + ?Sized>(&self, container: &mut C) {
        let max = container.bounds();
        for (pane, offset) in &self.entries {
            pane.place(container, *offset, max);
        }
    }

    /// Build the click event for `slot` from the container and dispatch it.
    pub fn click<C: Container<T> + ?Sized>(
        &self,
        container: &C,
        slot: usize,
    ) -> (ClickEvent<T>, Option<SetClick>) {
        let mut event = container.click(slot);
        let claimed = self.dispatch(&mut event, container.bounds());
        (event, claimed)
    }

    /// Offer an event to each pane, topmost first, until one claims it.
    pub fn dispatch(&self, event: &mut ClickEvent<T>, max: GridSize) -> Option<SetClick> {
        for (index, (pane, offset)) in self.entries.iter().enumerate().rev() {
            if let Resolution::Claimed { index: item } = pane.resolve(event, *offset, max) {
                return Some(SetClick { pane: index, item });
            }
        }
        tracing::trace!(slot = event.slot, "click not claimed by any pane");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotpane_core::geometry::SlotPos;
    use slotpane_layout::{OutlinePane, PaneItem, StaticPane};
    use slotpane_render::SlotBuffer;

    fn row(origin: SlotPos, items: &str) -> OutlinePane<char> {
        let mut pane = OutlinePane::new(origin, items.len() as u16, 1);
        for c in items.chars() {
            pane.add_item(PaneItem::new(c));
        }
        pane
    }

    #[test]
    fn later_panes_win_overlaps() {
        let mut set = PaneSet::new();
        set.push(row(SlotPos::new(0, 0), "abc"));
        let mut overlay = StaticPane::new(SlotPos::new(1, 0), 1, 1);
        overlay.add_item(PaneItem::new('X'), SlotPos::new(0, 0));
        set.push(overlay);

        let mut buf = SlotBuffer::with_rows(1);
        set.place_all(&mut buf);
        assert_eq!(buf.item_at(1), Some(&'X'));

        let (_, claimed) = set.click(&buf, 1);
        assert_eq!(claimed, Some(SetClick { pane: 1, item: 0 }));
        let (_, claimed) = set.click(&buf, 2);
        assert_eq!(claimed, Some(SetClick { pane: 0, item: 2 }));
        let (event, claimed) = set.click(&buf, 5);
        assert_eq!(claimed, None);
        assert_eq!(event.current, None);
    }

    #[test]
    fn offsets_shift_panes() {
        let mut set = PaneSet::new();
        set.push_at(row(SlotPos::new(0, 0), "ab"), PaneOffset::new(0, 1));
        let mut buf = SlotBuffer::with_rows(2);
        set.place_all(&mut buf);
        assert_eq!(buf.get(1, 1), Some(&'b'));
        assert_eq!(set.click(&buf, 10).1, Some(SetClick { pane: 0, item: 1 }));
    }

    #[test]
    fn higher_priority_draws_on_top_regardless_of_order() {
        let mut overlay = StaticPane::new(SlotPos::new(1, 0), 1, 1);
        overlay.add_item(PaneItem::new('X'), SlotPos::new(0, 0));
        overlay.set_priority(Priority::High);

        let mut set = PaneSet::new();
        assert_eq!(set.push(overlay), 0);
        assert_eq!(set.push(row(SlotPos::new(0, 0), "abc")), 0);
        assert_eq!(set.top_priority(), Some(Priority::High));

        let mut buf = SlotBuffer::with_rows(1);
        set.place_all(&mut buf);
        assert_eq!(buf.item_at(1), Some(&'X'));
        assert_eq!(set.click(&buf, 1).1, Some(SetClick { pane: 1, item: 0 }));
        assert_eq!(set.click(&buf, 0).1, Some(SetClick { pane: 0, item: 0 }));
    }

    #[test]
    fn equal_priorities_keep_insertion_order() {
        let mut low = row(SlotPos::new(0, 0), "a");
        low.set_priority(Priority::Lowest);
        let set: PaneSet<char> = [
            Pane::from(row(SlotPos::new(0, 0), "b")),
            Pane::from(low),
            Pane::from(row(SlotPos::new(0, 0), "c")),
        ]
        .into_iter()
        .collect();
        let order: Vec<_> = set.iter().filter_map(|pane| pane.item(0)).map(|item| *item.item()).collect();
        assert_eq!(order, ['a', 'b', 'c']);

        let mut buf = SlotBuffer::with_rows(1);
        set.place_all(&mut buf);
        assert_eq!(buf.item_at(0), Some(&'c'));
    }

    #[test]
    fn collects_from_panes() {
        let set: PaneSet<char> = [Pane::from(row(SlotPos::new(0, 0), "a"))].into_iter().collect();
        assert_eq!(set.len(), 1);
        assert!(set.get(0).is_some_and(|pane| pane.item_count() == 1));
    }
}
