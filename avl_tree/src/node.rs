/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! TreeNode - A single key in the tree and its local structure.

use crate::arena::{NodeArena, NodeIndex};

/// A node of a [`BinaryTree`](crate::BinaryTree).
///
/// Child links are owning edges: each node is reachable from the root
/// through exactly one chain of `left`/`right` links. The `parent` link is a
/// plain back-reference used for upward walks (successor lookup and the
/// bottom-up rebalancing pass) and always agrees with the child slot that
/// holds this node.
///
/// `size` and `height` are cached for the subtree rooted at this node and
/// are recomputed from the direct children only, so they stay O(1) to
/// maintain as long as updates run bottom-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub(crate) key: i32,
    pub(crate) left: Option<NodeIndex>,
    pub(crate) right: Option<NodeIndex>,
    pub(crate) parent: Option<NodeIndex>,
    /// Number of nodes in this subtree, including this node.
    pub(crate) size: usize,
    /// Longest path to a descendant leaf; a leaf has height 0.
    pub(crate) height: u32,
}

impl TreeNode {
    /// Create a detached leaf holding `key`.
    pub(crate) const fn leaf(key: i32, parent: Option<NodeIndex>) -> Self {
        Self {
            key,
            left: None,
            right: None,
            parent,
            size: 1,
            height: 0,
        }
    }

    /// Copy `key` and the cached stats, with no children and the given parent.
    pub(crate) const fn detached_copy(&self, parent: Option<NodeIndex>) -> Self {
        Self {
            key: self.key,
            left: None,
            right: None,
            parent,
            size: self.size,
            height: self.height,
        }
    }

    /// The key stored in this node.
    pub const fn key(&self) -> i32 {
        self.key
    }

    /// Index of the left child, if any.
    pub const fn left_index(&self) -> Option<NodeIndex> {
        self.left
    }

    /// Index of the right child, if any.
    pub const fn right_index(&self) -> Option<NodeIndex> {
        self.right
    }

    /// Index of the parent node, or `None` for the root.
    pub const fn parent_index(&self) -> Option<NodeIndex> {
        self.parent
    }

    /// Number of nodes in the subtree rooted here.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Height of the subtree rooted here.
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Returns true if this node has no children.
    pub const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of present children: 0, 1 or 2.
    pub const fn child_count(&self) -> usize {
        self.left.is_some() as usize + self.right.is_some() as usize
    }

    /// Walk `left` links from `node_idx` down to the smallest key of its subtree.
    pub(crate) fn leftmost(nodes: &NodeArena, node_idx: NodeIndex) -> NodeIndex {
        let mut current = node_idx;
        while let Some(left) = nodes[current].left {
            current = left;
        }
        current
    }

    /// Find the node holding the next larger key, if any.
    ///
    /// With a right subtree the successor is its leftmost node, which
    /// therefore never has a left child. Otherwise it is the first ancestor
    /// holding a larger key.
    pub(crate) fn successor(nodes: &NodeArena, node_idx: NodeIndex) -> Option<NodeIndex> {
        let node = &nodes[node_idx];
        if let Some(right) = node.right {
            return Some(Self::leftmost(nodes, right));
        }

        let mut current = node.parent;
        while let Some(ancestor) = current {
            if nodes[ancestor].key > node.key {
                return Some(ancestor);
            }
            current = nodes[ancestor].parent;
        }
        None
    }

    /// Recompute `size` from the direct children.
    pub(crate) fn update_size(nodes: &mut NodeArena, node_idx: NodeIndex) {
        let node = &nodes[node_idx];
        let size = 1 + subtree_size(nodes, node.left) + subtree_size(nodes, node.right);
        nodes[node_idx].size = size;
    }

    /// Recompute `height` from the direct children.
    pub(crate) fn update_height(nodes: &mut NodeArena, node_idx: NodeIndex) {
        let node = &nodes[node_idx];
        let tallest = subtree_height(nodes, node.left).max(subtree_height(nodes, node.right));
        // An absent child counts as -1, so a leaf ends up at 0.
        nodes[node_idx].height = (tallest + 1) as u32;
    }

    /// Recompute both `size` and `height`.
    pub(crate) fn update_stats(nodes: &mut NodeArena, node_idx: NodeIndex) {
        Self::update_size(nodes, node_idx);
        Self::update_height(nodes, node_idx);
    }

    /// Height of the right subtree minus height of the left subtree.
    pub(crate) fn balance_factor(nodes: &NodeArena, node_idx: NodeIndex) -> i32 {
        let node = &nodes[node_idx];
        (subtree_height(nodes, node.right) - subtree_height(nodes, node.left)) as i32
    }
}

/// Cached size of an optional subtree; an empty subtree has size 0.
pub(crate) fn subtree_size(nodes: &NodeArena, idx: Option<NodeIndex>) -> usize {
    idx.map_or(0, |idx| nodes[idx].size)
}

/// Cached height of an optional subtree; an empty subtree has height -1.
pub(crate) fn subtree_height(nodes: &NodeArena, idx: Option<NodeIndex>) -> i64 {
    idx.map_or(-1, |idx| i64::from(nodes[idx].height))
}
