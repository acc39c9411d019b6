#![forbid(unsafe_code)]

//! Transform parameter snapshot shared by placement and resolution.
//!
//! Panes copy their parameters into a [`PaneTransform`] at the start of each
//! pass. Placement maps fill-order positions to rendered cells with
//! [`PaneTransform::to_rendered`] (flip, then rotate clockwise); resolution
//! maps clicked cells back with [`PaneTransform::to_fill`] (rotate
//! counter-clockwise, then un-flip). Both take the same snapshot, so the two
//! directions cannot disagree.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use slotpane_core::geometry::GridSize;
use slotpane_core::rotation::{Rotation, rotate_clockwise, rotate_counter_clockwise};

/// Primary fill axis of an outline pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Left to right, then top to bottom.
    #[default]
    Horizontal,
    /// Top to bottom, then left to right.
    Vertical,
}

impl FromStr for Orientation {
    type Err = ParseOrientationError;

    /// Case-insensitive `horizontal` / `vertical`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("horizontal") {
            Ok(Self::Horizontal)
        } else if s.eq_ignore_ascii_case("vertical") {
            Ok(Self::Vertical)
        } else {
            Err(ParseOrientationError(s.to_owned()))
        }
    }
}

/// Unrecognised orientation name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOrientationError(pub String);

impl fmt::Display for ParseOrientationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown orientation {:?}", self.0)
    }
}

impl std::error::Error for ParseOrientationError {}

/// Immutable copy of a pane's transform parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PaneTransform {
    pub orientation: Orientation,
    pub rotation: Rotation,
    /// Empty cells skipped between consecutive items.
    pub gap: u16,
    /// Cycle through the items until every cell is filled.
    pub repeat: bool,
    pub flip_horizontal: bool,
    pub flip_vertical: bool,
}

impl PaneTransform {
    /// Distance between consecutive items in fill order.
    #[inline]
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.gap as usize + 1
    }

    /// Mirror a point according to the flip flags.
    ///
    /// Mirroring is its own inverse.
    #[inline]
    #[must_use]
    pub fn flip(&self, x: u16, y: u16, size: GridSize) -> (u16, u16) {
        let x = if self.flip_horizontal {
            size.length - x - 1
        } else {
            x
        };
        let y = if self.flip_vertical {
            size.height - y - 1
        } else {
            y
        };
        (x, y)
    }

    /// Map a fill-order position to the cell it is rendered in.
    #[inline]
    #[must_use]
    pub fn to_rendered(&self, x: u16, y: u16, size: GridSize) -> (u16, u16) {
        let (x, y) = self.flip(x, y, size);
        rotate_clockwise(x, y, size, self.rotation)
    }

    /// Map a rendered cell back to its fill-order position.
    #[inline]
    #[must_use]
    pub fn to_fill(&self, x: u16, y: u16, size: GridSize) -> (u16, u16) {
        let (x, y) = rotate_counter_clockwise(x, y, size, self.rotation);
        self.flip(x, y, size)
    }

    /// Grid actually used for a pass.
    ///
    /// The pane's own size is clamped to `max`. A rotated pane clamped into
    /// a rectangle is further shrunk to a square so rotation stays defined.
    #[must_use]
    pub fn effective_size(&self, own: GridSize, max: GridSize) -> GridSize {
        let size = own.clamp_to(max);
        if self.rotation.is_identity() {
            size
        } else {
            size.squared()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_parses_any_case() {
        assert_eq!("HORIZONTAL".parse(), Ok(Orientation::Horizontal));
        assert_eq!("vertical".parse(), Ok(Orientation::Vertical));
        assert_eq!("Vertical".parse(), Ok(Orientation::Vertical));
        let err = "diagonal".parse::<Orientation>().unwrap_err();
        assert_eq!(err.to_string(), "unknown orientation \"diagonal\"");
    }

    #[test]
    fn flip_mirrors_selected_axes() {
        let size = GridSize::new(4, 3);
        let both = PaneTransform {
            flip_horizontal: true,
            flip_vertical: true,
            ..Default::default()
        };
        assert_eq!(both.flip(0, 0, size), (3, 2));
        let horizontal = PaneTransform {
            flip_horizontal: true,
            ..Default::default()
        };
        assert_eq!(horizontal.flip(1, 2, size), (2, 2));
    }

    #[test]
    fn rendered_and_fill_are_inverse_with_flip_and_rotation() {
        let size = GridSize::new(3, 3);
        let transform = PaneTransform {
            rotation: Rotation::Deg90,
            flip_horizontal: true,
            ..Default::default()
        };
        for y in 0..3 {
            for x in 0..3 {
                let (rx, ry) = transform.to_rendered(x, y, size);
                assert_eq!(transform.to_fill(rx, ry, size), (x, y));
            }
        }
    }

    #[test]
    fn flip_applies_before_rotation() {
        let size = GridSize::new(3, 3);
        let transform = PaneTransform {
            rotation: Rotation::Deg90,
            flip_horizontal: true,
            ..Default::default()
        };
        // flip (0,0) -> (2,0), then a quarter turn -> (2,2)
        assert_eq!(transform.to_rendered(0, 0, size), (2, 2));
    }

    #[test]
    fn effective_size_squares_rotated_panes() {
        let plain = PaneTransform::default();
        let rotated = PaneTransform {
            rotation: Rotation::Deg180,
            ..Default::default()
        };
        let own = GridSize::new(5, 5);
        let max = GridSize::new(9, 3);
        assert_eq!(plain.effective_size(own, max), GridSize::new(5, 3));
        assert_eq!(rotated.effective_size(own, max), GridSize::new(3, 3));
        assert_eq!(rotated.effective_size(own, GridSize::new(9, 6)), own);
    }

    #[test]
    fn snapshot_serializes_field_names() {
        let transform = PaneTransform {
            orientation: Orientation::Vertical,
            rotation: Rotation::Deg90,
            gap: 2,
            repeat: true,
            flip_horizontal: false,
            flip_vertical: true,
        };
        let value = serde_json::to_value(transform).unwrap();
        assert_eq!(value["orientation"], "vertical");
        assert_eq!(value["rotation"], 90);
        assert_eq!(value["gap"], 2);
        assert_eq!(value["flip_vertical"], true);
    }
}
