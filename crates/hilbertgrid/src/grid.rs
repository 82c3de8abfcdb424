//! Validated power-of-two grid geometry.

use crate::error::{Error, Result};

/// Largest supported grid order. A grid of order `k` has `2^(2k)` cells, and
/// the whole index space must fit in `u32`.
pub const MAX_ORDER: u32 = 15;

/// A validated square grid with a power-of-two side length.
///
/// `Grid` ties the three equivalent descriptions of the geometry together:
/// the side length `2^order`, the order itself, and the cell count
/// `side²`. Constructing one proves the side is valid, so the transform never
/// has to re-check it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    /// Side length of the grid, always `2^order`.
    side: u32,
    /// Base-2 logarithm of the side length.
    order: u32,
}

impl Grid {
    /// Build a grid from its side length.
    ///
    /// Fails unless `side` is a positive power of two no larger than
    /// `2^MAX_ORDER`.
    pub fn from_side(side: u32) -> Result<Self> {
        if side == 0 || !side.is_power_of_two() {
            return Err(Error::InvalidSide { side });
        }
        let order = side.trailing_zeros();
        if order > MAX_ORDER {
            return Err(Error::SideTooLarge { side });
        }
        Ok(Self { side, order })
    }

    /// Build a grid of side `2^order`.
    ///
    /// Fails when `order` exceeds [`MAX_ORDER`].
    pub fn from_order(order: u32) -> Result<Self> {
        if order > MAX_ORDER {
            return Err(Error::OrderTooLarge {
                order,
                max: MAX_ORDER,
            });
        }
        Ok(Self {
            side: 1 << order,
            order,
        })
    }

    /// Side length of the grid.
    pub fn side(self) -> u32 {
        self.side
    }

    /// Base-2 logarithm of the side length.
    pub fn order(self) -> u32 {
        self.order
    }

    /// Total number of cells, `side²`. Also the curve length.
    pub fn cells(self) -> u32 {
        self.side * self.side
    }
}
