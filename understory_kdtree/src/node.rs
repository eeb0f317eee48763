// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The recursive node type and read-only traversal helpers.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt::{self, Display};

use crate::point::Point;

/// One node of a K-D tree.
///
/// Nodes are immutable once built and shared between tree versions through
/// `Arc`, so a subtree untouched by an update is reused, not copied.
///
/// The shape is kept canonical: an `Internal` node always has at least one
/// non-empty child. A node whose children both become empty is rebuilt as a
/// `Leaf`.
#[derive(Clone, Debug, PartialEq)]
pub enum Node<T> {
    /// No point. Its children are conceptually itself.
    Empty,
    /// A point with no children.
    Leaf(Point<T>),
    /// A point with two children, at least one of them non-empty.
    Internal {
        /// The point stored at this node.
        point: Point<T>,
        /// Points whose coordinate on this node's axis sorts before `point`'s.
        left: Arc<Node<T>>,
        /// Points whose coordinate on this node's axis does not sort before `point`'s.
        right: Arc<Node<T>>,
    },
}

impl<T> Node<T> {
    pub(crate) fn empty() -> Arc<Self> {
        Arc::new(Self::Empty)
    }

    pub(crate) fn leaf(point: Point<T>) -> Arc<Self> {
        Arc::new(Self::Leaf(point))
    }

    /// Build a node from a point and two children, collapsing to a leaf when
    /// both children are empty.
    pub(crate) fn branch(point: Point<T>, left: Arc<Self>, right: Arc<Self>) -> Arc<Self> {
        if left.is_empty() && right.is_empty() {
            return Self::leaf(point);
        }
        Arc::new(Self::Internal { point, left, right })
    }

    /// Whether this is the `Empty` node.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The point stored here, if any.
    pub fn point(&self) -> Option<&Point<T>> {
        match self {
            Self::Empty => None,
            Self::Leaf(point) | Self::Internal { point, .. } => Some(point),
        }
    }

    /// The left child, if it holds any points.
    pub fn left(&self) -> Option<&Self> {
        match self {
            Self::Internal { left, .. } if !left.is_empty() => Some(left.as_ref()),
            _ => None,
        }
    }

    /// The right child, if it holds any points.
    pub fn right(&self) -> Option<&Self> {
        match self {
            Self::Internal { right, .. } if !right.is_empty() => Some(right.as_ref()),
            _ => None,
        }
    }

    /// Number of coordinates of the stored point; `0` for `Empty`.
    pub fn dimension(&self) -> usize {
        self.point().map_or(0, Point::dimension)
    }

    /// Height of the subtree: `0` for `Empty`, `1` for a leaf.
    pub fn depth(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Leaf(_) => 1,
            Self::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Pre-order iterator: this node's point, then the left subtree, then the right.
    pub fn points(&self) -> Points<'_, T> {
        let mut stack = Vec::new();
        if !self.is_empty() {
            stack.push(self);
        }
        Points { stack }
    }
}

/// Pre-order iterator over the points of a subtree.
///
/// Created by [`Node::points`] and [`KdTree::points`](crate::KdTree::points).
#[derive(Debug)]
pub struct Points<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for Points<'a, T> {
    type Item = &'a Point<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node = self.stack.pop()?;
            match node {
                Node::Empty => continue,
                Node::Leaf(point) => return Some(point),
                Node::Internal { point, left, right } => {
                    self.stack.push(right);
                    self.stack.push(left);
                    return Some(point);
                }
            }
        }
    }
}

impl<T: Display> Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("Empty"),
            Self::Leaf(point) => write!(f, "Leaf({point})"),
            Self::Internal { point, left, right } => {
                write!(f, "Node({point}, {left}, {right})")
            }
        }
    }
}
