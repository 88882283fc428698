/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Write path: deletion.
//!
//! A node with at most one child is spliced out: its only child (or
//! nothing) takes its place. A node with two children instead takes over
//! its successor's key, and the successor is spliced out in its place. The
//! successor is the leftmost node of the right subtree, so it never has a
//! left child and can always be spliced.

use tracing::trace;

use super::BinaryTree;
use crate::arena::NodeIndex;
use crate::balance::Rebalance;
use crate::node::TreeNode;

impl<R: Rebalance> BinaryTree<R> {
    /// Remove `key` from the tree.
    ///
    /// Returns `false` if `key` is not present.
    pub fn delete(&mut self, key: i32) -> bool {
        #[cfg(feature = "unittest")]
        let size_before = self.size();

        let deleted = self.delete_inner(key);

        #[cfg(feature = "unittest")]
        {
            assert_eq!(
                self.size() + usize::from(deleted),
                size_before,
                "size mismatch after deleting {key}: before={size_before}, deleted={deleted}",
            );
            self.assert_invariants();
        }
        deleted
    }

    fn delete_inner(&mut self, key: i32) -> bool {
        let Some(target_idx) = self
            .closest_node(key)
            .filter(|&idx| self.nodes[idx].key() == key)
        else {
            return false;
        };

        let spliced_idx = if self.nodes[target_idx].child_count() == 2 {
            let successor_idx = TreeNode::successor(&self.nodes, target_idx)
                .expect("a node with a right child has a successor");
            debug_assert!(
                self.nodes[successor_idx].left_index().is_none(),
                "successor of a node with two children must not have a left child",
            );
            let successor_key = self.nodes[successor_idx].key();
            self.nodes[target_idx].key = successor_key;
            successor_idx
        } else {
            target_idx
        };

        let parent = self.splice(spliced_idx);
        self.fix_path(parent);
        true
    }

    /// Remove a node with at most one child from the tree, moving that
    /// child into its slot.
    ///
    /// Returns the removed node's former parent, where fix-up must start.
    fn splice(&mut self, node_idx: NodeIndex) -> Option<NodeIndex> {
        let node = &self.nodes[node_idx];
        debug_assert!(node.child_count() <= 1, "cannot splice a node with two children");
        let child = node.right_index().or(node.left_index());

        self.replace_in_parent(node_idx, child);
        let removed = self.nodes.remove(node_idx);
        trace!(node = ?node_idx, key = removed.key(), "spliced node");
        removed.parent_index()
    }
}
