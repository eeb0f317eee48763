// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Understory K-D Tree: build, delete, combine, and query.

use understory_kdtree::{KdTree, Point};

fn main() {
    let tree: KdTree<i32> = [[4, 5], [2, 3], [5, 6], [1, 3], [5, 2]]
        .into_iter()
        .map(Point::from)
        .collect();
    println!("built: {tree}");
    println!("{tree:?}");

    // Deleting the root promotes the smallest x from the right subtree.
    let smaller = tree.delete(&[4, 5].into()).unwrap();
    println!("without (4, 5): {smaller}");
    println!("old version still has it: {}", tree.contains(&[4, 5].into()).unwrap());

    // Merge keeps the partition; a graft attaches the other tree as-is.
    let other = KdTree::from_points([[6, 1], [1, 9]].map(Point::from));
    let merged = tree.merge(&other).unwrap();
    let grafted = tree.insert_tree(&other).unwrap();
    println!("merged: {merged}");
    println!("grafted: {grafted}");

    println!("min x: {:?}", merged.find_minimum(0).unwrap());
    println!("min y: {:?}", merged.find_minimum(1).unwrap());
}
