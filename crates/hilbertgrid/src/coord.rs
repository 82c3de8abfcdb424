//! Grid coordinates and distance helpers.

use std::fmt;

/// A cell position on the grid.
///
/// `x` is the column and `y` the row, both in `[0, side)` for a grid of a
/// given side. The origin is the top-left cell when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    /// Column, in `[0, side)`.
    pub x: u32,
    /// Row, in `[0, side)`.
    pub y: u32,
}

impl Coord {
    /// Create a coordinate from its column and row.
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance to `other`: the larger of the per-axis absolute
    /// differences.
    ///
    /// Consecutive Hilbert curve points are always at Chebyshev distance 1
    /// from each other.
    pub fn chebyshev(self, other: Self) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(u32, u32)> for Coord {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}
