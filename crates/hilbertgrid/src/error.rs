//! Error types used across the crate.

use thiserror::Error;

/// Errors produced by grid validation and the Hilbert transform.
///
/// Every variant is a domain error: the inputs were outside the contract.
/// Nothing here is retryable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The grid side is not a positive power of two.
    #[error("grid side {side} is not a positive power of two")]
    InvalidSide {
        /// The rejected side length.
        side: u32,
    },

    /// The grid side is a power of two, but its index space exceeds `u32`.
    #[error("grid side {side} too large: index space does not fit in u32")]
    SideTooLarge {
        /// The rejected side length.
        side: u32,
    },

    /// The grid order would produce an index space exceeding `u32`.
    #[error("grid order {order} too large: maximum supported order is {max}")]
    OrderTooLarge {
        /// The rejected order.
        order: u32,
        /// The largest supported order.
        max: u32,
    },

    /// A curve index lies outside `[0, side²)`.
    #[error("curve index {index} out of range for side {side} (max {max})")]
    IndexOutOfRange {
        /// Side length of the grid.
        side: u32,
        /// The rejected index.
        index: u32,
        /// The largest valid index, `side² - 1`.
        max: u32,
    },

    /// A coordinate lies outside `[0, side)` on at least one axis.
    #[error("coordinate ({x}, {y}) out of range for side {side}")]
    CoordinateOutOfRange {
        /// Side length of the grid.
        side: u32,
        /// The rejected x coordinate.
        x: u32,
        /// The rejected y coordinate.
        y: u32,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
