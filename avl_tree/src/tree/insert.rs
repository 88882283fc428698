/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Write path: insertion.

use std::cmp::Ordering;

use super::BinaryTree;
use crate::balance::Rebalance;
use crate::node::TreeNode;

impl<R: Rebalance> BinaryTree<R> {
    /// Insert `key` into the tree.
    ///
    /// Returns `false`, leaving the tree untouched, if `key` is already
    /// present. Otherwise the key is attached as a new leaf under the node
    /// a BST descent ends at, and the tree is fixed up from there to the root.
    pub fn insert(&mut self, key: i32) -> bool {
        #[cfg(feature = "unittest")]
        let size_before = self.size();

        let inserted = self.insert_inner(key);

        #[cfg(feature = "unittest")]
        {
            assert_eq!(
                self.size(),
                size_before + usize::from(inserted),
                "size mismatch after inserting {key}: before={size_before}, inserted={inserted}",
            );
            self.assert_invariants();
        }
        inserted
    }

    fn insert_inner(&mut self, key: i32) -> bool {
        let Some(parent_idx) = self.closest_node(key) else {
            let root_idx = self.nodes.insert(TreeNode::leaf(key, None));
            self.attach_left(None, Some(root_idx));
            return true;
        };

        let ordering = key.cmp(&self.nodes[parent_idx].key());
        if ordering == Ordering::Equal {
            return false;
        }

        let leaf_idx = self.nodes.insert(TreeNode::leaf(key, Some(parent_idx)));
        if ordering == Ordering::Less {
            self.attach_left(Some(parent_idx), Some(leaf_idx));
        } else {
            self.attach_right(Some(parent_idx), Some(leaf_idx));
        }

        self.fix_path(Some(parent_idx));
        true
    }
}
