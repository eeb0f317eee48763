// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type shared by every fallible tree operation.

use thiserror::Error;

/// Failures surfaced at the boundary of a tree operation.
///
/// All checks run before any node is built, so the tree an operation was
/// called on is always left intact and usable.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The input's coordinate count differs from the tree's established dimension.
    #[error("dimension mismatch: tree holds {expected}-dimensional points, got {found}")]
    DimensionMismatch {
        /// Dimension of the points already stored in the tree.
        expected: usize,
        /// Dimension of the rejected input.
        found: usize,
    },

    /// A point was built at runtime from an empty coordinate list.
    #[error("points need at least one coordinate")]
    ZeroDimension,

    /// An axis was requested that the tree's points do not have.
    #[error("axis {axis} is out of range for {dimension}-dimensional points")]
    AxisOutOfRange {
        /// The requested axis.
        axis: usize,
        /// Dimension of the points stored in the tree.
        dimension: usize,
    },

    /// A coordinate has no place in the order, such as a float NaN.
    #[error("coordinate on axis {axis} is unordered (NaN)")]
    UnorderedCoordinate {
        /// First axis holding an unordered coordinate.
        axis: usize,
    },
}
