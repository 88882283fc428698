/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Read path: key lookups.

use std::cmp::Ordering;

use super::BinaryTree;
use crate::arena::NodeIndex;
use crate::balance::Rebalance;
use crate::node::TreeNode;

impl<R: Rebalance> BinaryTree<R> {
    /// Depth of the node holding `key` (the root is at depth 0), or `None`
    /// if `key` is not in the tree.
    pub fn depth_of(&self, key: i32) -> Option<usize> {
        let mut current = self.root;
        let mut depth = 0;
        while let Some(node_idx) = current {
            let node = &self.nodes[node_idx];
            current = match key.cmp(&node.key()) {
                Ordering::Equal => return Some(depth),
                Ordering::Less => node.left_index(),
                Ordering::Greater => node.right_index(),
            };
            depth += 1;
        }
        None
    }

    /// Returns true if `key` is in the tree.
    pub fn contains(&self, key: i32) -> bool {
        self.depth_of(key).is_some()
    }

    /// Smallest key in the tree.
    pub fn min(&self) -> Option<i32> {
        self.min_index().map(|idx| self.nodes[idx].key())
    }

    /// Largest key in the tree.
    pub fn max(&self) -> Option<i32> {
        let mut current = self.root?;
        while let Some(right) = self.nodes[current].right_index() {
            current = right;
        }
        Some(self.nodes[current].key())
    }

    /// Index of the node holding the smallest key.
    pub(crate) fn min_index(&self) -> Option<NodeIndex> {
        self.root.map(|root| TreeNode::leftmost(&self.nodes, root))
    }

    /// Descend towards `key` and return the last node visited.
    ///
    /// That is the node holding `key` when present, and otherwise the node
    /// that would become its parent on insertion. `None` only for an empty
    /// tree.
    pub(crate) fn closest_node(&self, key: i32) -> Option<NodeIndex> {
        let mut current = self.root?;
        loop {
            let node = &self.nodes[current];
            let next = match key.cmp(&node.key()) {
                Ordering::Equal => return Some(current),
                Ordering::Less => node.left_index(),
                Ordering::Greater => node.right_index(),
            };
            match next {
                Some(child) => current = child,
                None => return Some(current),
            }
        }
    }
}
