/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Rotation primitives.
//!
//! A rotation lifts one child of a node into the node's slot and lowers the
//! node beneath it, preserving the in-order key sequence. Rotations are
//! named after the direction the lowered node moves.

use tracing::trace;

use super::BinaryTree;
use crate::arena::NodeIndex;
use crate::balance::Rebalance;
use crate::node::TreeNode;

impl<R: Rebalance> BinaryTree<R> {
    /// Left rotation at `node_idx`: its right child becomes the subtree root.
    ///
    /// ```text
    ///     C                P
    ///    / \              / \
    ///   a   P     =>     C   c
    ///      / \          / \
    ///     b   c        a   b
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `node_idx` has no right child.
    pub(crate) fn rotate_left(&mut self, node_idx: NodeIndex) {
        let pivot_idx = self.nodes[node_idx]
            .right_index()
            .expect("cannot rotate left without a right child");
        trace!(node = ?node_idx, pivot = ?pivot_idx, "rotate left");

        self.replace_in_parent(node_idx, Some(pivot_idx));
        let inner = self.nodes[pivot_idx].left_index();
        self.attach_right(Some(node_idx), inner);
        self.attach_left(Some(pivot_idx), Some(node_idx));

        // The lowered node first: the pivot's stats depend on it.
        TreeNode::update_stats(&mut self.nodes, node_idx);
        TreeNode::update_stats(&mut self.nodes, pivot_idx);
    }

    /// Right rotation at `node_idx`: its left child becomes the subtree root.
    ///
    /// ```text
    ///       C            P
    ///      / \          / \
    ///     P   c   =>   a   C
    ///    / \              / \
    ///   a   b            b   c
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `node_idx` has no left child.
    pub(crate) fn rotate_right(&mut self, node_idx: NodeIndex) {
        let pivot_idx = self.nodes[node_idx]
            .left_index()
            .expect("cannot rotate right without a left child");
        trace!(node = ?node_idx, pivot = ?pivot_idx, "rotate right");

        self.replace_in_parent(node_idx, Some(pivot_idx));
        let inner = self.nodes[pivot_idx].right_index();
        self.attach_left(Some(node_idx), inner);
        self.attach_right(Some(pivot_idx), Some(node_idx));

        TreeNode::update_stats(&mut self.nodes, node_idx);
        TreeNode::update_stats(&mut self.nodes, pivot_idx);
    }
}
