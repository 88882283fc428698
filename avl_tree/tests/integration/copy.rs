/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Tests for deep copies.

use avl_tree::{AvlTree, PlainTree};

#[test]
fn test_clone_preserves_shape_and_stats() {
    let tree = AvlTree::from([5, 3, 8, 1, 4, 7, 9, 2, 6]);
    let copy = tree.clone();

    assert_eq!(format!("{copy:?}"), format!("{tree:?}"));
    assert_eq!(copy.size(), tree.size());
    assert_eq!(copy.height(), tree.height());
    for key in 1..=9 {
        assert_eq!(copy.depth_of(key), tree.depth_of(key));
    }
    copy.assert_invariants();
}

#[test]
fn test_clone_is_independent() {
    let mut tree = AvlTree::from([2, 1, 3]);
    let mut copy = tree.clone();

    assert!(copy.delete(2));
    assert!(copy.insert(10));
    assert!(tree.insert(0));

    assert_eq!(tree.iter().collect::<Vec<_>>(), [0, 1, 2, 3]);
    assert_eq!(copy.iter().collect::<Vec<_>>(), [1, 3, 10]);
    tree.assert_invariants();
    copy.assert_invariants();
}

#[test]
fn test_clone_after_deletions_compacts_arena() {
    let mut tree: AvlTree = (0..64).collect();
    for key in 0..32 {
        tree.delete(key);
    }
    let copy = tree.clone();
    assert_eq!(format!("{copy:?}"), format!("{tree:?}"));
    // `assert_invariants` also checks that no unreachable node was copied.
    copy.assert_invariants();
}

#[test]
fn test_clone_empty() {
    let tree = PlainTree::new();
    let copy = tree.clone();
    assert!(copy.is_empty());
    copy.assert_invariants();
}

#[test]
fn test_copy_avl_into_plain_tree() {
    let avl: AvlTree = (1..=7).collect();
    let mut plain = PlainTree::from(&avl);
    assert_eq!(format!("{plain:?}"), format!("{avl:?}"));

    // The copy no longer rebalances.
    for key in 8..=10 {
        plain.insert(key);
    }
    assert_eq!(plain.height(), Some(5));
    assert_eq!(plain.depth_of(10), Some(5));
    plain.assert_invariants();
}

#[test]
fn test_copy_avl_into_avl_tree() {
    let avl: AvlTree = (1..=7).rev().collect();
    let copy = AvlTree::from(&avl);
    assert_eq!(format!("{copy:?}"), format!("{avl:?}"));
}

#[test]
fn test_copy_plain_into_plain_tree() {
    let plain = PlainTree::from([3, 1, 2]);
    let copy = PlainTree::from(&plain);
    assert_eq!(copy.node(copy.root_index().unwrap()).key(), 3);
    assert_eq!(copy.height(), Some(2));
    copy.assert_invariants();
}
