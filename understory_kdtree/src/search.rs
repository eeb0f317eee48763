// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Membership and minimum-along-axis searches.

use crate::coord::Coordinate;
use crate::node::Node;
use crate::point::Point;

/// Whether `point` is stored in the subtree rooted at `node`, which sits at `depth`.
///
/// Follows the single path insertion would take; never visits both children.
pub(crate) fn contains<T: Coordinate>(node: &Node<T>, point: &Point<T>, depth: usize) -> bool {
    let mut node = node;
    let mut depth = depth;
    loop {
        match node {
            Node::Empty => return false,
            Node::Leaf(here) => return here == point,
            Node::Internal {
                point: here,
                left,
                right,
            } => {
                if here == point {
                    return true;
                }
                let axis = depth % here.dimension();
                node = if point.goes_left_of(here, axis) {
                    &**left
                } else {
                    &**right
                };
                depth += 1;
            }
        }
    }
}

/// The point with the smallest coordinate along `axis` in the subtree rooted
/// at `node`, which sits at `depth`.
///
/// When the node partitions on `axis` itself, its right subtree cannot hold a
/// smaller coordinate and is skipped. Otherwise the node, the left minimum and
/// the right minimum compete; on a tie the first of left, right, self wins.
pub(crate) fn find_minimum<T: Coordinate>(
    node: &Node<T>,
    axis: usize,
    depth: usize,
) -> Option<&Point<T>> {
    match node {
        Node::Empty => None,
        Node::Leaf(point) => Some(point),
        Node::Internal { point, left, right } => {
            if depth % point.dimension() == axis {
                return find_minimum(left, axis, depth + 1).or(Some(point));
            }
            let candidates = [find_minimum(right, axis, depth + 1), Some(point)];
            let mut best = find_minimum(left, axis, depth + 1);
            for candidate in candidates.into_iter().flatten() {
                best = match best {
                    Some(b) if !candidate[axis].is_less_than(&b[axis]) => Some(b),
                    _ => Some(candidate),
                };
            }
            best
        }
    }
}
