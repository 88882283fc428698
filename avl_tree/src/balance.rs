/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Rebalancing strategies plugged into [`BinaryTree`].
//!
//! The tree core performs plain BST edits and then walks from the edit
//! point up to the root. At every node on that path it first hands the node
//! to its [`Rebalance`] strategy, then recomputes the node's cached stats.
//!
//! - [`Unbalanced`] does nothing, which yields a plain binary search tree.
//! - [`Avl`] restores the AVL invariant with single or double rotations.

use tracing::trace;

use crate::arena::NodeIndex;
use crate::error::TreeError;
use crate::tree::BinaryTree;

/// A balancing policy for [`BinaryTree`].
pub trait Rebalance: Sized {
    /// Largest balance factor magnitude this strategy guarantees at every
    /// node after a mutation returns, or `None` if the shape is unconstrained.
    const MAXIMUM_IMBALANCE: Option<i32>;

    /// Restore the strategy's invariant at `node_idx`.
    ///
    /// Called bottom-up along the path from a structural change to the root.
    /// The subtrees below `node_idx` are already valid and carry up-to-date
    /// stats; the stats of `node_idx` itself may be stale and are
    /// recomputed by the caller right after this returns.
    fn rebalance(tree: &mut BinaryTree<Self>, node_idx: NodeIndex);
}

/// Plain binary search tree: no rotations are ever performed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unbalanced;

impl Rebalance for Unbalanced {
    const MAXIMUM_IMBALANCE: Option<i32> = None;

    fn rebalance(_tree: &mut BinaryTree<Self>, _node_idx: NodeIndex) {}
}

/// AVL balancing: sibling subtree heights differ by at most one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Avl;

impl Avl {
    /// Maximum allowed `|height(right) - height(left)|` at any node.
    pub const MAXIMUM_BALANCE_FACTOR: i32 = 1;
}

impl Rebalance for Avl {
    const MAXIMUM_IMBALANCE: Option<i32> = Some(Avl::MAXIMUM_BALANCE_FACTOR);

    /// Resolve an AVL violation at `node_idx`, if there is one.
    ///
    /// | node balance | heavy child balance | fix                                |
    /// |--------------|---------------------|------------------------------------|
    /// | `> 1`        | right `>= 0`        | rotate left at node                |
    /// | `> 1`        | right `< 0`         | rotate right at right, then left   |
    /// | `< -1`       | left `<= 0`         | rotate right at node               |
    /// | `< -1`       | left `> 0`          | rotate left at left, then right    |
    fn rebalance(tree: &mut BinaryTree<Self>, node_idx: NodeIndex) {
        let balance = tree.balance_factor(node_idx);

        if balance > Avl::MAXIMUM_BALANCE_FACTOR {
            let right = tree
                .node(node_idx)
                .right_index()
                .expect("a right-heavy node must have a right child");
            if tree.balance_factor(right) < 0 {
                trace!(node = ?node_idx, key = tree.node(node_idx).key(), "right-left imbalance");
                tree.rotate_right(right);
            }
            tree.rotate_left(node_idx);
        } else if balance < -Avl::MAXIMUM_BALANCE_FACTOR {
            let left = tree
                .node(node_idx)
                .left_index()
                .expect("a left-heavy node must have a left child");
            if tree.balance_factor(left) > 0 {
                trace!(node = ?node_idx, key = tree.node(node_idx).key(), "left-right imbalance");
                tree.rotate_left(left);
            }
            tree.rotate_right(node_idx);
        }
    }
}

/// Minimum number of nodes in an AVL tree of height `h`.
///
/// Follows `N(0) = 1`, `N(1) = 2`, `N(h) = N(h - 1) + N(h - 2) + 1`: the
/// sparsest AVL tree hangs a minimal tree of height `h - 1` and one of
/// height `h - 2` below its root.
///
/// # Errors
///
/// [`TreeError::InvalidHeight`] if `h` is negative,
/// [`TreeError::HeightOverflow`] if the count does not fit in a `u64`.
pub fn min_nodes_for_height(h: i32) -> Result<u64, TreeError> {
    if h < 0 {
        return Err(TreeError::InvalidHeight { height: h });
    }

    if h == 0 {
        return Ok(1);
    }

    let (mut low, mut high) = (1u64, 2u64);
    for _ in 1..h {
        let next = low
            .checked_add(high)
            .and_then(|sum| sum.checked_add(1))
            .ok_or(TreeError::HeightOverflow { height: h })?;
        low = high;
        high = next;
    }
    Ok(high)
}

/// Maximum number of nodes in any binary tree of height `h`: `2^(h+1) - 1`,
/// reached by a perfect binary tree.
///
/// # Errors
///
/// [`TreeError::InvalidHeight`] if `h` is negative,
/// [`TreeError::HeightOverflow`] if the count does not fit in a `u64`.
pub fn max_nodes_for_height(h: i32) -> Result<u64, TreeError> {
    match h {
        i32::MIN..=-1 => Err(TreeError::InvalidHeight { height: h }),
        0..=63 => Ok(u64::MAX >> (63 - h)),
        _ => Err(TreeError::HeightOverflow { height: h }),
    }
}
