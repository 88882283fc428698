/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Structural invariant checks.
//!
//! These run after every `insert` and `delete` when the `unittest` feature
//! is enabled, and are available to tests regardless.

use super::BinaryTree;
use crate::balance::Rebalance;
use crate::node::{subtree_height, subtree_size};

impl<R: Rebalance> BinaryTree<R> {
    /// Verify all structural invariants of the tree.
    ///
    /// Checks, for every reachable node:
    /// 1. children point back at it through their parent reference;
    /// 2. its cached `size` and `height` match its children's;
    /// 3. its balance factor is within the strategy's bound;
    ///
    /// and for the whole tree:
    /// 4. an in-order walk yields strictly ascending keys (BST invariant);
    /// 5. the arena holds exactly the reachable nodes.
    ///
    /// # Panics
    ///
    /// Panics with a descriptive message if any invariant is violated.
    pub fn assert_invariants(&self) {
        let Some(root) = self.root else {
            assert_eq!(self.nodes.len(), 0, "empty tree still owns arena nodes");
            return;
        };
        assert_eq!(
            self.nodes[root].parent_index(),
            None,
            "root {root:?} has a parent"
        );

        let mut reachable = 0;
        let mut stack = vec![root];
        while let Some(node_idx) = stack.pop() {
            reachable += 1;
            let node = &self.nodes[node_idx];

            // --- Invariant 1: parent back-references ---
            for child_idx in [node.left_index(), node.right_index()].into_iter().flatten() {
                assert_eq!(
                    self.nodes[child_idx].parent_index(),
                    Some(node_idx),
                    "child {child_idx:?} of node {node_idx:?} (key {}) does not point back to it",
                    node.key(),
                );
                stack.push(child_idx);
            }

            // --- Invariant 2: cached stats ---
            let expected_size =
                1 + subtree_size(&self.nodes, node.left_index())
                    + subtree_size(&self.nodes, node.right_index());
            assert_eq!(
                node.size(),
                expected_size,
                "size mismatch at node {node_idx:?} (key {})",
                node.key(),
            );
            let left_height = subtree_height(&self.nodes, node.left_index());
            let right_height = subtree_height(&self.nodes, node.right_index());
            let expected_height = left_height.max(right_height) + 1;
            assert_eq!(
                i64::from(node.height()),
                expected_height,
                "height mismatch at node {node_idx:?} (key {}): left={left_height}, right={right_height}",
                node.key(),
            );

            // --- Invariant 3: balance ---
            if let Some(limit) = R::MAXIMUM_IMBALANCE {
                let balance = right_height - left_height;
                assert!(
                    balance.abs() <= i64::from(limit),
                    "balance factor {balance} exceeds {limit} at node {node_idx:?} (key {}): \
                     left={left_height}, right={right_height}",
                    node.key(),
                );
            }
        }

        // --- Invariant 4: BST ordering ---
        let mut visited = 0;
        let mut previous = None;
        for key in self.iter() {
            if let Some(previous) = previous {
                assert!(
                    previous < key,
                    "in-order keys not strictly ascending: {previous} then {key}"
                );
            }
            previous = Some(key);
            visited += 1;
        }
        assert_eq!(
            visited, reachable,
            "in-order walk visited {visited} keys, expected {reachable}"
        );

        // --- Invariant 5: no leaked or unreachable nodes ---
        assert_eq!(
            reachable,
            self.nodes.len(),
            "arena holds {} nodes but {reachable} are reachable",
            self.nodes.len(),
        );
        assert_eq!(self.size(), reachable, "root size disagrees with node count");
    }
}
