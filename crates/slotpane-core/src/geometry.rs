#![forbid(unsafe_code)]

//! Geometric primitives for slot grids.
//!
//! A slot container is a flat array of cells laid out in rows of fixed width.
//! Cells are addressed either by a 2D [`SlotPos`] or by the linear index
//! obtained by folding that position with the container's row width.

use serde::{Deserialize, Serialize};

/// Row width of the containers SlotPane was designed around.
pub const DEFAULT_ROW_WIDTH: u16 = 9;

/// A cell position (0-indexed, origin at top-left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct SlotPos {
    /// Column.
    pub x: u16,
    /// Row.
    pub y: u16,
}

impl SlotPos {
    /// Create a new position.
    #[inline]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Unfold a linear slot index into a position.
    ///
    /// Returns `None` if the row does not fit in `u16`.
    ///
    /// # Panics
    ///
    /// Panics if `row_width` is zero.
    #[inline]
    pub fn from_slot(slot: usize, row_width: u16) -> Option<Self> {
        assert!(row_width > 0, "row width must be positive");
        let width = row_width as usize;
        let y = u16::try_from(slot / width).ok()?;
        Some(Self {
            x: (slot % width) as u16,
            y,
        })
    }

    /// Fold this position into a linear slot index.
    ///
    /// Returns `None` when the column does not fit in a row of `row_width`
    /// cells; such a position would otherwise alias a cell of the next row.
    #[inline]
    pub const fn to_slot(self, row_width: u16) -> Option<usize> {
        if self.x >= row_width {
            return None;
        }
        Some(self.y as usize * row_width as usize + self.x as usize)
    }

    /// Translate by an offset, returning `None` on overflow.
    #[inline]
    pub fn checked_add(self, offset: PaneOffset) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(offset.x)?,
            y: self.y.checked_add(offset.y)?,
        })
    }
}

impl From<(u16, u16)> for SlotPos {
    fn from((x, y): (u16, u16)) -> Self {
        Self::new(x, y)
    }
}

/// Additional translation applied when a pane is rendered inside another one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PaneOffset {
    pub x: u16,
    pub y: u16,
}

impl PaneOffset {
    /// No translation.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new offset.
    #[inline]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Dimensions of a pane grid in cells.
///
/// `length` runs along x (columns), `height` along y (rows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridSize {
    pub length: u16,
    pub height: u16,
}

impl GridSize {
    /// Create a new grid size.
    #[inline]
    pub const fn new(length: u16, height: u16) -> Self {
        Self { length, height }
    }

    /// Number of cells.
    #[inline]
    pub const fn area(&self) -> usize {
        self.length as usize * self.height as usize
    }

    /// Check if the grid has no cells.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.length == 0 || self.height == 0
    }

    /// Check if both sides are equal.
    #[inline]
    pub const fn is_square(&self) -> bool {
        self.length == self.height
    }

    /// Check if a local position lies inside the grid.
    #[inline]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x < self.length && y < self.height
    }

    /// Shrink each side to fit within `max`.
    #[inline]
    pub fn clamp_to(self, max: GridSize) -> Self {
        Self {
            length: self.length.min(max.length),
            height: self.height.min(max.height),
        }
    }

    /// Shrink the longer side so both sides are equal.
    #[inline]
    pub fn squared(self) -> Self {
        let side = self.length.min(self.height);
        Self::new(side, side)
    }
}

impl From<(u16, u16)> for GridSize {
    fn from((length, height): (u16, u16)) -> Self {
        Self::new(length, height)
    }
}
