#![forbid(unsafe_code)]

//! Quarter-turn rotation of points inside a square grid.
//!
//! Placement rotates clockwise and resolution rotates counter-clockwise with
//! the same [`Rotation`], so the two transforms must stay exact inverses:
//!
//! ```
//! use slotpane_core::geometry::GridSize;
//! use slotpane_core::rotation::{rotate_clockwise, rotate_counter_clockwise, Rotation};
//!
//! let size = GridSize::new(4, 4);
//! let turned = rotate_clockwise(1, 0, size, Rotation::Deg90);
//! assert_eq!(turned, (3, 1));
//! assert_eq!(rotate_counter_clockwise(turned.0, turned.1, size, Rotation::Deg90), (1, 0));
//! ```
//!
//! Rotation is only defined on square grids. Asking for a non-zero rotation
//! of a rectangular grid is a programming error and panics.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::GridSize;

/// Clockwise rotation in quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// All rotations in ascending order.
    pub const ALL: [Self; 4] = [Self::Deg0, Self::Deg90, Self::Deg180, Self::Deg270];

    /// Parse a rotation in degrees.
    ///
    /// Any multiple of 90 is accepted and normalised into `[0, 360)`, so
    /// `450` becomes `Deg90` and `-90` becomes `Deg270`.
    pub fn from_degrees(degrees: i32) -> Result<Self, GeometryError> {
        if degrees % 90 != 0 {
            return Err(GeometryError::InvalidRotation { degrees });
        }
        Ok(match degrees.rem_euclid(360) {
            0 => Self::Deg0,
            90 => Self::Deg90,
            180 => Self::Deg180,
            _ => Self::Deg270,
        })
    }

    /// Rotation in degrees, in `[0, 360)`.
    #[must_use]
    pub const fn degrees(self) -> u16 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    /// Check whether this is the identity rotation.
    #[inline]
    #[must_use]
    pub const fn is_identity(self) -> bool {
        matches!(self, Self::Deg0)
    }

    /// Verify the rotation can be applied to a grid of the given size.
    pub fn check_grid(self, size: GridSize) -> Result<(), GeometryError> {
        if self.is_identity() || size.is_square() {
            Ok(())
        } else {
            Err(GeometryError::NonSquareRotation {
                rotation: self,
                size,
            })
        }
    }
}

impl TryFrom<i32> for Rotation {
    type Error = GeometryError;

    fn try_from(degrees: i32) -> Result<Self, Self::Error> {
        Self::from_degrees(degrees)
    }
}

impl From<Rotation> for i32 {
    fn from(rotation: Rotation) -> Self {
        i32::from(rotation.degrees())
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// Rotate a point clockwise inside a grid.
///
/// # Panics
///
/// Panics if `rotation` is not the identity and `size` is not square.
/// The point must lie inside `size`.
#[must_use]
pub fn rotate_clockwise(x: u16, y: u16, size: GridSize, rotation: Rotation) -> (u16, u16) {
    assert_square(size, rotation);
    debug_assert!(size.contains(x, y), "point ({x}, {y}) outside grid");
    let last = size.length.saturating_sub(1);
    match rotation {
        Rotation::Deg0 => (x, y),
        Rotation::Deg90 => (last - y, x),
        Rotation::Deg180 => (last - x, last - y),
        Rotation::Deg270 => (y, last - x),
    }
}

/// Rotate a point counter-clockwise inside a grid, undoing [`rotate_clockwise`].
///
/// # Panics
///
/// Panics if `rotation` is not the identity and `size` is not square.
/// The point must lie inside `size`.
#[must_use]
pub fn rotate_counter_clockwise(x: u16, y: u16, size: GridSize, rotation: Rotation) -> (u16, u16) {
    assert_square(size, rotation);
    debug_assert!(size.contains(x, y), "point ({x}, {y}) outside grid");
    let last = size.length.saturating_sub(1);
    match rotation {
        Rotation::Deg0 => (x, y),
        Rotation::Deg90 => (y, last - x),
        Rotation::Deg180 => (last - x, last - y),
        Rotation::Deg270 => (last - y, x),
    }
}

#[inline]
fn assert_square(size: GridSize, rotation: Rotation) {
    assert!(
        rotation.is_identity() || size.is_square(),
        "cannot rotate a {}x{} grid by {rotation}: length and height are different",
        size.length,
        size.height
    );
}

/// Errors raised by invalid geometry parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// Rotation is not a multiple of 90 degrees.
    InvalidRotation { degrees: i32 },
    /// A non-zero rotation was requested for a rectangular grid.
    NonSquareRotation { rotation: Rotation, size: GridSize },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRotation { degrees } => {
                write!(f, "rotation {degrees} isn't divisible by 90")
            }
            Self::NonSquareRotation { rotation, size } => write!(
                f,
                "cannot rotate a {}x{} grid by {rotation}: length and height are different",
                size.length, size.height
            ),
        }
    }
}

impl std::error::Error for GeometryError {}
