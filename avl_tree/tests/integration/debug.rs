/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Snapshot tests for the tree's debug rendering.

use avl_tree::{AvlTree, PlainTree};

/// Forwards to `insta::assert_debug_snapshot!`,
/// but is disabled in Miri, as snapshot testing
/// involves file I/O, which is not supported in Miri.
macro_rules! assert_debug_snapshot {
    ($($arg:tt)*) => {
        #[cfg(not(miri))]
        insta::assert_debug_snapshot!($($arg)*);
    };
}

#[test]
fn test_debug_empty_tree() {
    let tree = AvlTree::new();
    assert_debug_snapshot!(tree, @"<empty>");
}

#[test]
fn test_debug_nine_key_tree() {
    let mut tree = AvlTree::from([5, 3, 8, 1, 4, 7, 9, 2, 6]);
    assert_debug_snapshot!(tree, @r###"
    5 (size=9, height=3)
      L: 3 (size=4, height=2)
        L: 1 (size=2, height=1)
          R: 2 (size=1, height=0)
        R: 4 (size=1, height=0)
      R: 8 (size=4, height=2)
        L: 7 (size=2, height=1)
          L: 6 (size=1, height=0)
        R: 9 (size=1, height=0)
    "###);

    tree.delete(5);
    assert_debug_snapshot!(tree, @r###"
    6 (size=8, height=3)
      L: 3 (size=4, height=2)
        L: 1 (size=2, height=1)
          R: 2 (size=1, height=0)
        R: 4 (size=1, height=0)
      R: 8 (size=3, height=1)
        L: 7 (size=1, height=0)
        R: 9 (size=1, height=0)
    "###);
}

#[test]
fn test_debug_double_rotation() {
    let mut tree = AvlTree::from([10, 5, 20, 15, 30]);
    // 12 lands under 15, leaving 20 left-heavy inside a right-heavy root.
    tree.insert(12);
    assert_debug_snapshot!(tree, @r###"
    15 (size=6, height=2)
      L: 10 (size=3, height=1)
        L: 5 (size=1, height=0)
        R: 12 (size=1, height=0)
      R: 20 (size=2, height=1)
        R: 30 (size=1, height=0)
    "###);
}

#[test]
fn test_debug_plain_spine() {
    let tree = PlainTree::from([1, 2, 3]);
    assert_debug_snapshot!(tree, @r###"
    1 (size=3, height=2)
      R: 2 (size=2, height=1)
        R: 3 (size=1, height=0)
    "###);
}
