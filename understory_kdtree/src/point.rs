// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Immutable fixed-length points.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt::{self, Display};
use core::ops::Index;

use crate::coord::Coordinate;
use crate::error::Error;

/// An immutable point: an ordered, fixed-length tuple of coordinates.
///
/// Cloning is cheap (the coordinates live behind an `Arc`), which matters
/// because deletion copies points up into ancestors.
#[derive(Clone, Debug, PartialEq)]
pub struct Point<T> {
    coords: Arc<[T]>,
}

impl<T> Point<T> {
    /// Build a point from a runtime coordinate list.
    ///
    /// Returns [`Error::ZeroDimension`] when `coords` is empty.
    pub fn new(coords: Vec<T>) -> Result<Self, Error> {
        if coords.is_empty() {
            return Err(Error::ZeroDimension);
        }
        Ok(Self {
            coords: coords.into(),
        })
    }

    /// Number of coordinates.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.coords.len()
    }

    /// The coordinates in axis order.
    #[inline]
    pub fn coords(&self) -> &[T] {
        &self.coords
    }

    /// Coordinate along `axis`, if the point has that axis.
    #[inline]
    pub fn get(&self, axis: usize) -> Option<&T> {
        self.coords.get(axis)
    }
}

impl<T: Clone> Point<T> {
    /// Keep only the first `dimension` coordinates. `dimension` must be at least 1.
    pub(crate) fn truncated(&self, dimension: usize) -> Self {
        debug_assert!(dimension >= 1, "points keep at least one coordinate");
        if dimension >= self.dimension() {
            return self.clone();
        }
        Self {
            coords: self.coords[..dimension].into(),
        }
    }
}

impl<T: Coordinate> Point<T> {
    /// Whether `self` falls on the left side of `pivot` along `axis`.
    #[inline]
    pub(crate) fn goes_left_of(&self, pivot: &Self, axis: usize) -> bool {
        self.coords[axis].is_less_than(&pivot.coords[axis])
    }

    /// First axis whose coordinate is outside the order, if any.
    pub(crate) fn unordered_axis(&self) -> Option<usize> {
        self.coords.iter().position(|c| !c.is_ordered())
    }
}

impl<T, const N: usize> From<[T; N]> for Point<T> {
    fn from(coords: [T; N]) -> Self {
        const { assert!(N > 0, "points need at least one coordinate") };
        Self {
            coords: Arc::from(coords),
        }
    }
}

impl<T> TryFrom<Vec<T>> for Point<T> {
    type Error = Error;

    fn try_from(coords: Vec<T>) -> Result<Self, Error> {
        Self::new(coords)
    }
}

impl<T> Index<usize> for Point<T> {
    type Output = T;

    fn index(&self, axis: usize) -> &T {
        &self.coords[axis]
    }
}

impl<T: Display> Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, c) in self.coords.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            Display::fmt(c, f)?;
        }
        f.write_str(")")
    }
}

#[cfg(feature = "kurbo")]
impl From<kurbo::Point> for Point<f64> {
    fn from(p: kurbo::Point) -> Self {
        Self::from([p.x, p.y])
    }
}

#[cfg(feature = "kurbo")]
impl From<kurbo::Vec2> for Point<f64> {
    fn from(v: kurbo::Vec2) -> Self {
        Self::from([v.x, v.y])
    }
}
