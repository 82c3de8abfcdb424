//! The Hilbert transform itself.
//!
//! Both directions walk the bit-planes of the grid one recursion level at a
//! time: encoding from the coarsest sub-square (`s = side/2`) down to the
//! finest, decoding in the opposite order. At every level the quadrant bits
//! `rx`/`ry` select one of four sub-squares and drive a shared rotate/reflect
//! step that keeps successive quadrants joined into one continuous path.

use crate::{
    coord::Coord,
    error::{Error, Result},
    grid::Grid,
};

/// An implementation of the 2D Hilbert curve over a validated grid.
///
/// The curve value itself is just the grid geometry; both transform
/// directions are pure functions of their inputs, so a `HilbertCurve` is
/// freely shareable across threads.
#[derive(Debug, Clone, Copy)]
pub struct HilbertCurve {
    /// The validated grid the curve fills.
    grid: Grid,
}

impl HilbertCurve {
    /// Construct a curve filling a square grid with the given side length.
    ///
    /// The side must be a positive power of two or the result is an error.
    pub fn from_side(side: u32) -> Result<Self> {
        Ok(Self {
            grid: Grid::from_side(side)?,
        })
    }

    /// Construct a curve filling a grid of side `2^order`.
    pub fn from_order(order: u32) -> Result<Self> {
        Ok(Self {
            grid: Grid::from_order(order)?,
        })
    }

    /// Side length of the underlying grid.
    pub fn side(&self) -> u32 {
        self.grid.side()
    }

    /// Base-2 logarithm of the side length.
    pub fn order(&self) -> u32 {
        self.grid.order()
    }

    /// Total number of points on the curve, `side²`.
    pub fn length(&self) -> u32 {
        self.grid.cells()
    }

    /// Map a grid coordinate to its index along the curve.
    ///
    /// Fails with [`Error::CoordinateOutOfRange`] when either axis is outside
    /// `[0, side)`. Out-of-range coordinates would otherwise encode to a
    /// meaningless index, so they are rejected rather than accepted silently.
    pub fn index(&self, p: Coord) -> Result<u32> {
        let side = self.grid.side();
        if p.x >= side || p.y >= side {
            return Err(Error::CoordinateOutOfRange {
                side,
                x: p.x,
                y: p.y,
            });
        }
        Ok(curve_index(side, p.x, p.y))
    }

    /// Map a curve index back to its grid coordinate.
    ///
    /// Fails with [`Error::IndexOutOfRange`] when `index` is not in
    /// `[0, side²)`. The check is load-bearing: wrapping or clamping here
    /// would silently break the round-trip contract.
    pub fn point(&self, index: u32) -> Result<Coord> {
        let cells = self.grid.cells();
        if index >= cells {
            return Err(Error::IndexOutOfRange {
                side: self.grid.side(),
                index,
                max: cells - 1,
            });
        }
        Ok(curve_point(self.grid.side(), index))
    }

    /// Iterate over every grid coordinate in curve order, from index 0 to
    /// `length() - 1`.
    pub fn points(&self) -> impl Iterator<Item = Coord> + '_ {
        let side = self.grid.side();
        (0..self.grid.cells()).map(move |index| curve_point(side, index))
    }
}

/// Encode: coordinates to curve index on a grid of side `side`.
///
/// Callers guarantee `x, y < side` and `side` a power of two.
fn curve_index(side: u32, mut x: u32, mut y: u32) -> u32 {
    let mut d = 0;
    let mut s = side / 2;
    while s > 0 {
        let rx = u32::from(x & s != 0);
        let ry = u32::from(y & s != 0);
        d += s * s * ((3 * rx) ^ ry);
        (x, y) = rotate_reflect(s, x, y, rx, ry);
        s /= 2;
    }
    d
}

/// Decode: curve index to coordinates on a grid of side `side`.
///
/// Callers guarantee `index < side²` and `side` a power of two.
fn curve_point(side: u32, index: u32) -> Coord {
    let (mut x, mut y) = (0, 0);
    let mut t = index;
    let mut s = 1;
    while s < side {
        let rx = 1 & (t / 2);
        let ry = 1 & (t ^ rx);
        (x, y) = rotate_reflect(s, x, y, rx, ry);
        x += s * rx;
        y += s * ry;
        t /= 4;
        s *= 2;
    }
    Coord::new(x, y)
}

/// Rotate/reflect a sub-square of side `s` so that successive quadrants join
/// into a single continuous curve. Shared verbatim by both directions; the
/// round trip only holds while the two call sites agree.
///
/// During encoding `x` and `y` still carry bits above `s`, so the reflection
/// uses wrapping subtraction; later levels only consume bits below `s`, which
/// the wrapped value gets right.
fn rotate_reflect(s: u32, x: u32, y: u32, rx: u32, ry: u32) -> (u32, u32) {
    if ry == 0 {
        if rx == 1 {
            return ((s - 1).wrapping_sub(y), (s - 1).wrapping_sub(x));
        }
        return (y, x);
    }
    (x, y)
}
