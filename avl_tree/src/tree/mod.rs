/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Binary search tree core.
//!
//! This module contains the tree structure, its connection primitives and
//! the bottom-up fix pass shared by every structural change. The remaining
//! algorithms are split into sub-modules by concern:
//! - [`find`]: Read path (lookups, depth queries, min/max)
//! - [`insert`]: Insertion
//! - [`delete`]: Deletion by splicing
//! - [`rotate`]: Rotation primitives used by balancing strategies
//! - [`invariants`]: Structural self-checks

mod delete;
mod find;
mod insert;
mod invariants;
mod rotate;

use std::marker::PhantomData;

use tracing::trace;

use crate::arena::{NodeArena, NodeIndex};
use crate::balance::{Avl, Rebalance, Unbalanced};
use crate::node::TreeNode;
use crate::{AscendingIter, TreeError};

/// A binary search tree of unique `i32` keys.
///
/// The balancing behaviour is chosen by the strategy parameter `R`; see
/// [`PlainTree`] and [`AvlTree`].
///
/// # Arena Storage
///
/// All nodes are stored in a slab-backed arena. Children and parents are
/// referenced by [`NodeIndex`] instead of `Box<TreeNode>`, which lets a
/// rotation rewire parent back-references without shared ownership. Nodes
/// removed by [`delete`](Self::delete) free their slot for reuse, and any
/// index still held for a removed node stops resolving.
///
/// # Structural Changes
///
/// Only [`attach_left`](Self::attach_left), [`attach_right`](Self::attach_right)
/// and [`replace_in_parent`](Self::replace_in_parent) mutate links. Insertion,
/// deletion and rotations are all expressed in terms of them. After an edit
/// the tree runs [`fix_path`](Self::fix_path) from the edit point to the root.
pub struct BinaryTree<R = Unbalanced> {
    /// The root node index, `None` for an empty tree.
    pub(crate) root: Option<NodeIndex>,
    /// Arena holding all tree nodes.
    pub(crate) nodes: NodeArena,
    strategy: PhantomData<R>,
}

/// A plain, unbalanced binary search tree.
pub type PlainTree = BinaryTree<Unbalanced>;

/// A self-balancing AVL tree.
pub type AvlTree = BinaryTree<Avl>;

/// Which child slot of a parent a node hangs from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl<R: Rebalance> BinaryTree<R> {
    /// Create a new empty tree.
    pub const fn new() -> Self {
        Self {
            root: None,
            nodes: NodeArena::new(),
            strategy: PhantomData,
        }
    }

    /// Number of keys in the tree.
    pub fn size(&self) -> usize {
        self.root.map_or(0, |root| self.nodes[root].size())
    }

    /// Returns true if the tree holds no keys.
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the tree, `None` when empty. A single node has height 0.
    pub fn height(&self) -> Option<u32> {
        self.root.map(|root| self.nodes[root].height())
    }

    /// Get the root node index.
    pub const fn root_index(&self) -> Option<NodeIndex> {
        self.root
    }

    /// Resolve a [`NodeIndex`] to a shared reference to the node.
    ///
    /// # Panics
    ///
    /// Panics if `idx` does not refer to a live node of this tree, including
    /// an index whose node has since been deleted.
    pub fn node(&self, idx: NodeIndex) -> &TreeNode {
        &self.nodes[idx]
    }

    /// Resolve a [`NodeIndex`] to the node, or `None` if its node has been
    /// deleted.
    pub fn get_node(&self, idx: NodeIndex) -> Option<&TreeNode> {
        self.nodes.get(idx)
    }

    /// The node holding the next larger key after the one at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` does not refer to a live node of this tree.
    pub fn successor(&self, idx: NodeIndex) -> Option<NodeIndex> {
        TreeNode::successor(&self.nodes, idx)
    }

    /// Right subtree height minus left subtree height at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` does not refer to a live node of this tree.
    pub fn balance_factor(&self, idx: NodeIndex) -> i32 {
        TreeNode::balance_factor(&self.nodes, idx)
    }

    /// Returns an iterator over the keys in ascending order.
    pub fn iter(&self) -> AscendingIter<'_, R> {
        AscendingIter::new(self)
    }

    /// Minimum number of nodes in an AVL tree of height `h`.
    ///
    /// See [`min_nodes_for_height`](crate::min_nodes_for_height).
    pub fn min_nodes_for_height(h: i32) -> Result<u64, TreeError> {
        crate::min_nodes_for_height(h)
    }

    /// Maximum number of nodes in a binary tree of height `h`.
    ///
    /// See [`max_nodes_for_height`](crate::max_nodes_for_height).
    pub fn max_nodes_for_height(h: i32) -> Result<u64, TreeError> {
        crate::max_nodes_for_height(h)
    }

    /// Make `child` the left child of `parent`.
    ///
    /// With no `parent`, `child` becomes the root instead. The child's parent
    /// back-reference is updated either way.
    pub(crate) fn attach_left(&mut self, parent: Option<NodeIndex>, child: Option<NodeIndex>) {
        self.attach(parent, child, Side::Left);
    }

    /// Make `child` the right child of `parent`.
    ///
    /// With no `parent`, `child` becomes the root instead. The child's parent
    /// back-reference is updated either way.
    pub(crate) fn attach_right(&mut self, parent: Option<NodeIndex>, child: Option<NodeIndex>) {
        self.attach(parent, child, Side::Right);
    }

    fn attach(&mut self, parent: Option<NodeIndex>, child: Option<NodeIndex>, side: Side) {
        match parent {
            Some(parent_idx) => match side {
                Side::Left => self.nodes[parent_idx].left = child,
                Side::Right => self.nodes[parent_idx].right = child,
            },
            None => self.root = child,
        }
        if let Some(child_idx) = child {
            self.nodes[child_idx].parent = parent;
        }
    }

    /// Put `new` in the slot currently holding `old`: its parent's left or
    /// right child, or the root.
    ///
    /// `old` keeps its own (now stale) parent back-reference; callers either
    /// re-attach it elsewhere or drop it.
    pub(crate) fn replace_in_parent(&mut self, old: NodeIndex, new: Option<NodeIndex>) {
        let parent = self.nodes[old].parent;
        match parent {
            Some(parent_idx) if self.nodes[parent_idx].left == Some(old) => {
                self.attach_left(parent, new)
            }
            Some(_) => self.attach_right(parent, new),
            None => self.attach_left(None, new),
        }
    }

    /// Bottom-up pass from `start` to the root.
    ///
    /// Each visited node is first handed to the balancing strategy, then has
    /// its stats recomputed. The walk continues with the node's parent as it
    /// stands after any rotation, so a rotated subtree's new root is visited
    /// next.
    pub(crate) fn fix_path(&mut self, start: Option<NodeIndex>) {
        let mut current = start;
        while let Some(node_idx) = current {
            R::rebalance(self, node_idx);
            TreeNode::update_stats(&mut self.nodes, node_idx);
            current = self.nodes[node_idx].parent;
        }
    }

    /// Deep copy of `source`, node for node.
    ///
    /// The copy has exactly the shape of `source`, and cached sizes and
    /// heights are copied rather than recomputed. Only valid when `source`'s
    /// shape satisfies `R`'s invariant.
    fn copy_of<S: Rebalance>(source: &BinaryTree<S>) -> Self {
        let mut copy = Self {
            root: None,
            nodes: NodeArena::with_capacity(source.size()),
            strategy: PhantomData,
        };
        let Some(source_root) = source.root else {
            return copy;
        };

        // (node in `source`, slot in `copy` it must be attached to)
        let mut stack: Vec<(NodeIndex, Option<(NodeIndex, Side)>)> = vec![(source_root, None)];
        while let Some((source_idx, slot)) = stack.pop() {
            let source_node = &source.nodes[source_idx];
            let parent = slot.map(|(parent_idx, _)| parent_idx);
            let copy_idx = copy.nodes.insert(source_node.detached_copy(parent));
            match slot {
                Some((parent_idx, Side::Left)) => copy.nodes[parent_idx].left = Some(copy_idx),
                Some((parent_idx, Side::Right)) => copy.nodes[parent_idx].right = Some(copy_idx),
                None => copy.root = Some(copy_idx),
            }

            if let Some(right) = source_node.right {
                stack.push((right, Some((copy_idx, Side::Right))));
            }
            if let Some(left) = source_node.left {
                stack.push((left, Some((copy_idx, Side::Left))));
            }
        }

        trace!(nodes = copy.nodes.len(), "copied tree");
        copy
    }
}

impl<R: Rebalance> Default for BinaryTree<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rebalance> Clone for BinaryTree<R> {
    fn clone(&self) -> Self {
        Self::copy_of(self)
    }
}

/// An AVL-shaped tree is a valid shape for every strategy.
impl<R: Rebalance> From<&AvlTree> for BinaryTree<R> {
    fn from(source: &AvlTree) -> Self {
        Self::copy_of(source)
    }
}

impl From<&PlainTree> for PlainTree {
    fn from(source: &PlainTree) -> Self {
        Self::copy_of(source)
    }
}

impl<R: Rebalance> FromIterator<i32> for BinaryTree<R> {
    /// Insert every key in order. Duplicates are skipped.
    fn from_iter<I: IntoIterator<Item = i32>>(keys: I) -> Self {
        let mut tree = Self::new();
        tree.extend(keys);
        tree
    }
}

impl<R: Rebalance> Extend<i32> for BinaryTree<R> {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, keys: I) {
        for key in keys {
            self.insert(key);
        }
    }
}

impl<R: Rebalance, const N: usize> From<[i32; N]> for BinaryTree<R> {
    fn from(keys: [i32; N]) -> Self {
        keys.into_iter().collect()
    }
}

impl<'a, R: Rebalance> IntoIterator for &'a BinaryTree<R> {
    type Item = i32;
    type IntoIter = AscendingIter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
