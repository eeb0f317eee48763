// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory K-D Tree: a persistent, structure-sharing K-D tree.
//!
//! Understory K-D Tree is a small building block for exact point membership over
//! multi-dimensional keys.
//!
//! - Insert, look up, and delete points of any fixed dimension.
//! - Every update returns a new tree; old versions stay valid and share all
//!   subtrees the update did not touch (path copying).
//! - Generic over the coordinate type through [`Coordinate`], a strict total
//!   order. Primitive integers, `f32`, `f64`, and the mixed [`Number`] are
//!   provided.
//!
//! Each level of the tree partitions on one axis, cycling through the
//! dimensions: the root splits on axis 0, its children on axis 1, and so on.
//! Points whose coordinate on that axis sorts before the node's go left; all
//! others go right. Depth is not stored; it is threaded through every walk.
//!
//! # Example
//!
//! ```rust
//! use understory_kdtree::{KdTree, Point};
//!
//! let tree: KdTree<i32> = [[4, 5], [2, 3], [5, 6], [1, 3], [5, 2]]
//!     .into_iter()
//!     .map(Point::from)
//!     .collect();
//!
//! assert_eq!(
//!     tree.to_string(),
//!     "Node((4, 5), Node((2, 3), Empty, Leaf((1, 3))), Node((5, 6), Leaf((5, 2)), Empty))"
//! );
//!
//! // Updates return new versions; the old one is untouched.
//! let smaller = tree.delete(&[1, 3].into()).unwrap();
//! assert!(tree.contains(&[1, 3].into()).unwrap());
//! assert!(!smaller.contains(&[1, 3].into()).unwrap());
//!
//! // Points must match the tree's dimension.
//! assert!(tree.insert([1, 2, 3]).is_err());
//! ```
//!
//! ## Combining trees
//!
//! - [`KdTree::merge`] re-inserts every point of another tree and keeps the
//!   axis ordering intact.
//! - [`KdTree::insert_tree`] grafts another tree in as a single subtree. It is
//!   cheap, but the grafted points are not re-partitioned, so lookups for them
//!   can miss. Reach for it only when the caller knows the graft is ordered.
//!
//! ### Float semantics
//!
//! NaN has no place in the order of `f32`/`f64`, so trees refuse points that
//! hold one: [`KdTree::from_point`], [`KdTree::insert`], [`KdTree::contains`],
//! and [`KdTree::delete`] fail with [`Error::UnorderedCoordinate`], and
//! [`KdTree::from_points`] skips such points. Every stored coordinate is
//! therefore totally ordered.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support in dependencies.
//! - `kurbo`: converts `kurbo::Point` and `kurbo::Vec2` into `Point<f64>`.
//! - `libm`: lets `kurbo` build without `std`.
//!
//! The minimum supported Rust version is 1.88.

#![no_std]

extern crate alloc;

pub mod coord;
pub mod error;
pub mod node;
pub mod point;
pub mod tree;

mod delete;
mod insert;
mod search;

pub use coord::{Coordinate, Number};
pub use error::Error;
pub use node::{Node, Points};
pub use point::Point;
pub use tree::KdTree;
