//! Bidirectional mapping between 2D grid coordinates and Hilbert curve
//! indices.
//!
//! The Hilbert curve visits every cell of a `2^k × 2^k` grid exactly once,
//! and cells with consecutive curve indices are always grid-adjacent. This
//! crate provides the two directions of that mapping via [`HilbertCurve`],
//! plus one-shot free functions for callers that don't want to hold a curve
//! value.
//!
//! Both directions share a single rotate/reflect step applied once per
//! recursion level, so each call runs in `O(log side)` with no allocation and
//! no shared state.

/// Grid coordinates and distance helpers.
pub mod coord;
/// The Hilbert transform itself.
pub mod curve;
/// Error types used across the crate.
pub mod error;
/// Validated power-of-two grid geometry.
pub mod grid;

pub use crate::{coord::Coord, curve::HilbertCurve, grid::Grid};

/// Map grid coordinates to the Hilbert curve index for a grid of side `side`.
///
/// `side` must be a positive power of two and `x`, `y` must both be in
/// `[0, side)`; anything else is an error. One-shot variant of
/// [`HilbertCurve::index`].
pub fn coordinates_to_index(side: u32, x: u32, y: u32) -> error::Result<u32> {
    HilbertCurve::from_side(side)?.index(Coord::new(x, y))
}

/// Map a Hilbert curve index back to grid coordinates for a grid of side
/// `side`.
///
/// `side` must be a positive power of two and `index` must be in
/// `[0, side²)`; anything else is an error. One-shot variant of
/// [`HilbertCurve::point`].
pub fn index_to_coordinates(side: u32, index: u32) -> error::Result<Coord> {
    HilbertCurve::from_side(side)?.point(index)
}
