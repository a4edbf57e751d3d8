//! Integer grid coordinates and the bounded surface robots explore.

use std::fmt;

use crate::{MarsError, MarsResult};

/// Largest value accepted for either surface bound.
pub const MAX_COORDINATE: i32 = 50;

/// A cell on the integer grid.
///
/// Coordinates are signed: a robot walking south or west of the origin
/// produces negative values, which the surface never flags as off-grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell offset by `(dx, dy)`, or `None` if either axis overflows.
    #[inline]
    pub fn offset(self, (dx, dy): (i32, i32)) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// The rectangular world, spanning `(0, 0)` to `(max_x, max_y)` inclusive.
///
/// Immutable once built; the explorer holds it for the length of a run.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Surface {
    max_x: i32,
    max_y: i32,
}

impl Surface {
    /// Build a surface whose bounds must lie in `0..=MAX_COORDINATE`.
    pub fn new(max_x: i32, max_y: i32) -> MarsResult<Self> {
        Self::with_limit(max_x, max_y, MAX_COORDINATE)
    }

    /// Like [`new`](Self::new) with a caller-chosen upper limit.
    pub fn with_limit(max_x: i32, max_y: i32, limit: i32) -> MarsResult<Self> {
        check_bound('x', max_x, limit)?;
        check_bound('y', max_y, limit)?;
        Ok(Self { max_x, max_y })
    }

    #[inline]
    pub fn max_x(&self) -> i32 {
        self.max_x
    }

    #[inline]
    pub fn max_y(&self) -> i32 {
        self.max_y
    }

    /// `true` when `pos` lies beyond the upper-right corner.
    ///
    /// Only the upper bounds are enforced.  Cells with negative coordinates
    /// are never reported as off-grid.
    #[inline]
    pub fn is_off_grid(&self, pos: GridPos) -> bool {
        pos.x > self.max_x || pos.y > self.max_y
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.max_x, self.max_y)
    }
}

fn check_bound(axis: char, value: i32, limit: i32) -> MarsResult<()> {
    if (0..=limit).contains(&value) {
        Ok(())
    } else {
        Err(MarsError::BoundOutOfRange { axis, value, limit })
    }
}
