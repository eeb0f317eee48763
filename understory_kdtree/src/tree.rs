// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public [`KdTree`] handle and its operations.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt::{self, Debug, Display};

use tracing::{debug, trace};

use crate::coord::Coordinate;
use crate::delete::delete;
use crate::error::Error;
use crate::insert::{Attach, insert};
use crate::node::{Node, Points};
use crate::point::Point;
use crate::search::{contains, find_minimum};

/// A persistent K-D tree.
///
/// Every update returns a new tree and leaves `self` untouched; the two share
/// every subtree the update did not walk through. Cloning is an `Arc` bump.
///
/// The tree's dimension is fixed by the first point it receives. Every
/// point- or tree-accepting operation checks it and fails with
/// [`Error::DimensionMismatch`] before doing any work. Points holding an
/// unordered coordinate (float NaN) are refused with
/// [`Error::UnorderedCoordinate`], so stored coordinates are always totally
/// ordered.
///
/// ```
/// use understory_kdtree::{KdTree, Point};
///
/// let tree = KdTree::from_points([[4, 5], [2, 3], [5, 6]].map(Point::from));
/// let bigger = tree.insert([1, 3]).unwrap();
///
/// assert!(bigger.contains(&[1, 3].into()).unwrap());
/// assert!(!tree.contains(&[1, 3].into()).unwrap());
///
/// let smaller = bigger.delete(&[4, 5].into()).unwrap();
/// assert_eq!(smaller.len(), 3);
/// ```
#[derive(Clone, PartialEq)]
pub struct KdTree<T> {
    root: Arc<Node<T>>,
}

impl<T> Default for KdTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> KdTree<T> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            root: Node::empty(),
        }
    }

    /// The root node.
    pub fn root(&self) -> &Node<T> {
        &self.root
    }

    /// Whether the tree holds no points.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Dimension of the stored points; `0` while the tree is empty.
    pub fn dimension(&self) -> usize {
        self.root.dimension()
    }

    /// Height of the tree: `0` when empty, `1` for a single point.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        self.points().count()
    }

    /// Pre-order iterator over the stored points.
    pub fn points(&self) -> Points<'_, T> {
        self.root.points()
    }

    fn check_dimension(&self, found: usize) -> Result<(), Error> {
        let expected = self.dimension();
        if expected != 0 && found != 0 && expected != found {
            debug!(expected, found, "rejecting input with mismatched dimension");
            return Err(Error::DimensionMismatch { expected, found });
        }
        Ok(())
    }
}

impl<T: Coordinate> KdTree<T> {
    /// Create a tree holding a single point.
    ///
    /// Fails with [`Error::UnorderedCoordinate`] if the point holds a NaN.
    pub fn from_point(point: impl Into<Point<T>>) -> Result<Self, Error> {
        let point = point.into();
        check_ordered(&point)?;
        Ok(Self {
            root: Node::leaf(point),
        })
    }

    /// Build a tree by inserting `points` in order.
    ///
    /// Every point is first truncated to the dimension of the smallest one, so
    /// this never fails; coordinates beyond that dimension are dropped. Points
    /// holding an unordered coordinate are skipped. An empty input gives an
    /// empty tree.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Point<T>>,
    {
        let points: Vec<Point<T>> = points
            .into_iter()
            .filter(|point| check_ordered(point).is_ok())
            .collect();
        let Some(dimension) = points.iter().map(Point::dimension).min() else {
            return Self::new();
        };
        let root = points.iter().fold(Node::empty(), |root, point| {
            let point = point.truncated(dimension);
            insert(&root, &Attach::Point(&point), 0)
        });
        Self { root }
    }

    /// Return a tree that also holds `point`.
    ///
    /// Inserting a point that is already present returns an identical tree.
    pub fn insert(&self, point: impl Into<Point<T>>) -> Result<Self, Error> {
        let point = point.into();
        self.check_point(&point)?;
        Ok(Self {
            root: insert(&self.root, &Attach::Point(&point), 0),
        })
    }

    /// Graft `other` wholesale into this tree.
    ///
    /// The landing spot is found by steering `other`'s root point down this
    /// tree exactly as [`insert`](Self::insert) would, and `other` is hung there
    /// with its existing children. Those children are not re-partitioned, so the
    /// result can break the axis ordering for points below the graft and
    /// lookups for them may miss. Use [`merge`](Self::merge) to combine trees
    /// safely.
    pub fn insert_tree(&self, other: &Self) -> Result<Self, Error> {
        self.check_dimension(other.dimension())?;
        if self.is_empty() {
            return Ok(other.clone());
        }
        trace!(depth = other.depth(), "grafting subtree");
        Ok(Self {
            root: insert(&self.root, &Attach::Graft(&other.root), 0),
        })
    }

    /// Return a tree holding the points of both trees, inserting `other`'s
    /// points one by one in pre-order.
    pub fn merge(&self, other: &Self) -> Result<Self, Error> {
        self.check_dimension(other.dimension())?;
        trace!(incoming = other.len(), "merging trees point by point");
        let root = other.points().fold(Arc::clone(&self.root), |root, point| {
            insert(&root, &Attach::Point(point), 0)
        });
        Ok(Self { root })
    }

    /// Whether `point` is stored in the tree.
    pub fn contains(&self, point: &Point<T>) -> Result<bool, Error> {
        self.check_point(point)?;
        Ok(contains(&self.root, point, 0))
    }

    /// Whether every point of `other` is stored in this tree.
    ///
    /// `other`'s shape plays no part; it is only a bag of points to look up.
    /// An empty `other` is contained in every tree.
    pub fn contains_tree(&self, other: &Self) -> Result<bool, Error> {
        self.check_dimension(other.dimension())?;
        Ok(other.points().all(|point| contains(&self.root, point, 0)))
    }

    /// Return a tree without `point`. Absent points give back an identical tree.
    pub fn delete(&self, point: &Point<T>) -> Result<Self, Error> {
        self.check_point(point)?;
        Ok(Self {
            root: delete(&self.root, point, 0),
        })
    }

    /// Return a tree without any of `other`'s points.
    ///
    /// Only applies when every point of `other` is present; otherwise the tree
    /// comes back unchanged. Points are removed in `other`'s pre-order: its
    /// root, then its left subtree, then its right subtree.
    pub fn delete_tree(&self, other: &Self) -> Result<Self, Error> {
        if !self.contains_tree(other)? {
            trace!("subtree not fully present, nothing deleted");
            return Ok(self.clone());
        }
        let root = other.points().fold(Arc::clone(&self.root), |root, point| {
            delete(&root, point, 0)
        });
        Ok(Self { root })
    }

    /// The point with the smallest coordinate along `axis`.
    ///
    /// Returns `Ok(None)` for an empty tree and [`Error::AxisOutOfRange`] when
    /// `axis` is not below the tree's dimension.
    pub fn find_minimum(&self, axis: usize) -> Result<Option<&Point<T>>, Error> {
        let dimension = self.dimension();
        if dimension != 0 && axis >= dimension {
            return Err(Error::AxisOutOfRange { axis, dimension });
        }
        Ok(find_minimum(&self.root, axis, 0))
    }

    fn check_point(&self, point: &Point<T>) -> Result<(), Error> {
        self.check_dimension(point.dimension())?;
        check_ordered(point)
    }
}

fn check_ordered<T: Coordinate>(point: &Point<T>) -> Result<(), Error> {
    match point.unordered_axis() {
        Some(axis) => {
            debug!(axis, "rejecting point with an unordered coordinate");
            Err(Error::UnorderedCoordinate { axis })
        }
        None => Ok(()),
    }
}

impl<T: Coordinate> FromIterator<Point<T>> for KdTree<T> {
    fn from_iter<I: IntoIterator<Item = Point<T>>>(iter: I) -> Self {
        Self::from_points(iter)
    }
}

impl<T: Display> Display for KdTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&*self.root, f)
    }
}

impl<T> Debug for KdTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KdTree")
            .field("dimension", &self.dimension())
            .field("len", &self.len())
            .field("depth", &self.depth())
            .finish_non_exhaustive()
    }
}
