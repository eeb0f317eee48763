// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path-copying insertion of points and grafting of whole subtrees.

use alloc::sync::Arc;

use crate::coord::Coordinate;
use crate::node::Node;
use crate::point::Point;

/// What gets attached at the landing spot of an insertion.
#[derive(Debug)]
pub(crate) enum Attach<'a, T> {
    /// A single point, stored as a new leaf. Already-present points are not duplicated.
    Point(&'a Point<T>),
    /// A whole subtree, attached as-is. Only its root point steers the descent.
    Graft(&'a Arc<Node<T>>),
}

impl<T: Clone> Attach<'_, T> {
    fn key(&self) -> Option<&Point<T>> {
        match self {
            Self::Point(point) => Some(*point),
            Self::Graft(node) => node.point(),
        }
    }

    fn node(&self) -> Arc<Node<T>> {
        match self {
            Self::Point(point) => Node::leaf((*point).clone()),
            Self::Graft(node) => Arc::clone(node),
        }
    }
}

/// Insert into the subtree rooted at `node` (at `depth`), returning the new root.
///
/// Only the ancestors on the descent path are rebuilt; the sibling at each
/// level is shared with the input. When nothing changes the input root itself
/// is returned.
pub(crate) fn insert<T: Coordinate>(
    node: &Arc<Node<T>>,
    what: &Attach<'_, T>,
    depth: usize,
) -> Arc<Node<T>> {
    let Some(key) = what.key() else {
        return Arc::clone(node);
    };
    match &**node {
        Node::Empty => what.node(),
        Node::Leaf(here) => {
            if matches!(what, Attach::Point(_)) && here == key {
                return Arc::clone(node);
            }
            let axis = depth % here.dimension();
            if key.goes_left_of(here, axis) {
                Node::branch(here.clone(), what.node(), Node::empty())
            } else {
                Node::branch(here.clone(), Node::empty(), what.node())
            }
        }
        Node::Internal {
            point: here,
            left,
            right,
        } => {
            if matches!(what, Attach::Point(_)) && here == key {
                return Arc::clone(node);
            }
            let axis = depth % here.dimension();
            if key.goes_left_of(here, axis) {
                let new_left = insert(left, what, depth + 1);
                if Arc::ptr_eq(&new_left, left) {
                    return Arc::clone(node);
                }
                Node::branch(here.clone(), new_left, Arc::clone(right))
            } else {
                let new_right = insert(right, what, depth + 1);
                if Arc::ptr_eq(&new_right, right) {
                    return Arc::clone(node);
                }
                Node::branch(here.clone(), Arc::clone(left), new_right)
            }
        }
    }
}
