/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Ascending-order iteration over the keys of a tree.

use std::fmt;
use std::iter::FusedIterator;

use crate::arena::NodeIndex;
use crate::balance::Rebalance;
use crate::node::TreeNode;
use crate::{BinaryTree, TreeError};

/// An iterator over the keys of a [`BinaryTree`] in ascending order.
///
/// The cursor starts at the leftmost node and moves to the in-order
/// successor after each key, so no auxiliary stack is kept. The iterator
/// borrows the tree, which therefore cannot be modified while it is alive.
///
/// Once exhausted it keeps returning `None` from [`next`](Iterator::next);
/// [`try_next`](Self::try_next) reports the same condition as
/// [`TreeError::IteratorExhausted`].
pub struct AscendingIter<'a, R> {
    /// Reference to the tree (used to resolve node indices).
    tree: &'a BinaryTree<R>,
    /// Node whose key is yielded next.
    cursor: Option<NodeIndex>,
    /// Keys not yet yielded.
    remaining: usize,
}

impl<'a, R: Rebalance> AscendingIter<'a, R> {
    /// Create a new iterator starting at the smallest key of `tree`.
    pub fn new(tree: &'a BinaryTree<R>) -> Self {
        Self {
            tree,
            cursor: tree.min_index(),
            remaining: tree.size(),
        }
    }

    /// Returns true if another key remains.
    pub const fn has_next(&self) -> bool {
        self.cursor.is_some()
    }

    /// Yield the next key, or fail if every key has been yielded.
    ///
    /// # Errors
    ///
    /// [`TreeError::IteratorExhausted`] once the sequence has ended.
    pub fn try_next(&mut self) -> Result<i32, TreeError> {
        self.next().ok_or(TreeError::IteratorExhausted)
    }
}

impl<R: Rebalance> Iterator for AscendingIter<'_, R> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        let node_idx = self.cursor?;
        self.cursor = TreeNode::successor(&self.tree.nodes, node_idx);
        self.remaining = self.remaining.saturating_sub(1);
        Some(self.tree.nodes[node_idx].key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R> fmt::Debug for AscendingIter<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AscendingIter")
            .field("cursor", &self.cursor)
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}

impl<R: Rebalance> ExactSizeIterator for AscendingIter<'_, R> {}

impl<R: Rebalance> FusedIterator for AscendingIter<'_, R> {}
