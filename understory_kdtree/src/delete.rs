// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path-copying deletion.

use alloc::sync::Arc;

use crate::coord::Coordinate;
use crate::node::Node;
use crate::point::Point;
use crate::search::find_minimum;

/// Remove `point` from the subtree rooted at `node` (at `depth`), returning the new root.
///
/// Absent points leave the subtree untouched and the input root is returned.
///
/// A removed node is replaced by the minimum, along the node's own axis, of
/// its right subtree; that minimum is then deleted from the right subtree one
/// level down. With no right subtree, the minimum of the left subtree is
/// promoted instead and what remains of the left subtree becomes the right
/// child, since its points are no longer strictly below the new pivot.
/// Leaving that remainder on the left, as the classic one-sided description
/// does, would put points equal to the pivot on its left where later lookups
/// cannot reach them.
pub(crate) fn delete<T: Coordinate>(
    node: &Arc<Node<T>>,
    point: &Point<T>,
    depth: usize,
) -> Arc<Node<T>> {
    match &**node {
        Node::Empty => Arc::clone(node),
        Node::Leaf(here) => {
            if here == point {
                Node::empty()
            } else {
                Arc::clone(node)
            }
        }
        Node::Internal {
            point: here,
            left,
            right,
        } => {
            let axis = depth % here.dimension();
            if here != point {
                return if point.goes_left_of(here, axis) {
                    let new_left = delete(left, point, depth + 1);
                    if Arc::ptr_eq(&new_left, left) {
                        return Arc::clone(node);
                    }
                    Node::branch(here.clone(), new_left, Arc::clone(right))
                } else {
                    let new_right = delete(right, point, depth + 1);
                    if Arc::ptr_eq(&new_right, right) {
                        return Arc::clone(node);
                    }
                    Node::branch(here.clone(), Arc::clone(left), new_right)
                };
            }

            if let Some(successor) = find_minimum(right, axis, depth + 1) {
                let successor = successor.clone();
                let new_right = delete(right, &successor, depth + 1);
                return Node::branch(successor, Arc::clone(left), new_right);
            }
            if let Some(successor) = find_minimum(left, axis, depth + 1) {
                let successor = successor.clone();
                let moved = delete(left, &successor, depth + 1);
                return Node::branch(successor, Node::empty(), moved);
            }
            Node::empty()
        }
    }
}
