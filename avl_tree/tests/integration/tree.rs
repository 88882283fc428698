/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Tests for construction, insertion and lookups shared by every tree kind.

use avl_tree::{AvlTree, PlainTree};

#[test]
fn test_new_tree() {
    let tree = AvlTree::new();
    assert_eq!(tree.size(), 0);
    assert!(tree.is_empty());
    assert_eq!(tree.height(), None);
    assert_eq!(tree.root_index(), None);
    assert_eq!(tree.min(), None);
    assert_eq!(tree.max(), None);
    assert_eq!(tree.depth_of(0), None);
    tree.assert_invariants();
}

#[test]
fn test_insert_basic() {
    let mut tree = PlainTree::new();
    assert!(tree.insert(10));
    assert_eq!(tree.size(), 1);
    assert_eq!(tree.height(), Some(0));
    assert_eq!(tree.depth_of(10), Some(0));

    assert!(tree.insert(5));
    assert!(tree.insert(15));
    assert_eq!(tree.size(), 3);
    assert_eq!(tree.depth_of(5), Some(1));
    assert_eq!(tree.depth_of(15), Some(1));
    tree.assert_invariants();
}

#[test]
fn test_duplicate_insert_rejected() {
    let mut tree = AvlTree::from([4, 2, 6]);
    let before = format!("{tree:?}");

    assert!(!tree.insert(2));
    assert!(!tree.insert(4));
    assert_eq!(tree.size(), 3);
    assert_eq!(format!("{tree:?}"), before);
}

#[test]
fn test_from_sequence_skips_duplicates() {
    let tree: AvlTree = [3, 1, 3, 2, 1, 2].into_iter().collect();
    assert_eq!(tree.size(), 3);
    assert_eq!(tree.iter().collect::<Vec<_>>(), [1, 2, 3]);
    tree.assert_invariants();
}

#[test]
fn test_extend() {
    let mut tree = PlainTree::from([2]);
    tree.extend([1, 3, 2]);
    assert_eq!(tree.size(), 3);
    assert_eq!(tree.min(), Some(1));
    assert_eq!(tree.max(), Some(3));
}

#[test]
fn test_depth_of_missing_key() {
    let tree = AvlTree::from([5, 3, 8]);
    assert_eq!(tree.depth_of(4), None);
    assert_eq!(tree.depth_of(i32::MIN), None);
    assert_eq!(tree.depth_of(i32::MAX), None);
    assert!(!tree.contains(4));
    assert!(tree.contains(8));
}

#[test]
fn test_extreme_keys() {
    let mut tree = AvlTree::new();
    assert!(tree.insert(i32::MAX));
    assert!(tree.insert(i32::MIN));
    assert!(tree.insert(0));
    assert_eq!(tree.iter().collect::<Vec<_>>(), [i32::MIN, 0, i32::MAX]);
    assert!(tree.delete(i32::MIN));
    assert_eq!(tree.min(), Some(0));
    tree.assert_invariants();
}

#[test]
fn test_plain_tree_degenerates_on_sorted_input() {
    let tree: PlainTree = (0..64).collect();
    assert_eq!(tree.height(), Some(63));
    assert_eq!(tree.depth_of(63), Some(63));
    tree.assert_invariants();
}

#[test]
fn test_avl_tree_stays_shallow_on_sorted_input() {
    let tree: AvlTree = (0..1024).collect();
    // A perfect tree of 1023 nodes has height 9, so 1024 nodes need 10.
    assert_eq!(tree.height(), Some(10));
    assert_eq!(tree.size(), 1024);
    tree.assert_invariants();
}

/// Insert 5, 3, 8, 1, 4, 7, 9, 2, 6 and check the resulting lookups.
#[test]
fn test_nine_key_scenario() {
    let tree = AvlTree::from([5, 3, 8, 1, 4, 7, 9, 2, 6]);
    assert_eq!(tree.size(), 9);
    assert_eq!(tree.height(), Some(3));
    assert_eq!(tree.depth_of(6), Some(3));
    assert_eq!(tree.depth_of(5), Some(0));
    assert_eq!(tree.depth_of(10), None);
    assert_eq!(tree.iter().collect::<Vec<_>>(), (1..=9).collect::<Vec<_>>());
    tree.assert_invariants();
}
