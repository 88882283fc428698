/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! A self-balancing binary search tree over `i32` keys.
//!
//! This crate provides an arena-backed binary search tree with a pluggable
//! rebalancing strategy. Each node caches the size and height of its
//! subtree, and carries a parent back-reference for upward walks.
//!
//! # Overview
//!
//! - [`AvlTree`] keeps sibling subtree heights within one of each other by
//!   running single and double rotations bottom-up after every change.
//! - [`PlainTree`] performs the same edits with no rebalancing at all.
//! - [`AscendingIter`] yields keys in sorted order by repeatedly moving to
//!   the in-order successor.
//! - [`min_nodes_for_height`] and [`max_nodes_for_height`] bound the number
//!   of nodes a tree of a given height can hold.
//!
//! # Example
//!
//! ```
//! use avl_tree::AvlTree;
//!
//! let mut tree: AvlTree = [5, 3, 8, 1, 4].into_iter().collect();
//! assert_eq!(tree.depth_of(5), Some(0));
//! assert_eq!(tree.depth_of(4), Some(2));
//! assert_eq!(tree.depth_of(10), None);
//!
//! // Unbalances the left side, rotating 3 up to the root.
//! assert!(tree.insert(2));
//! assert!(!tree.insert(2));
//! assert_eq!(tree.depth_of(3), Some(0));
//!
//! assert!(tree.delete(3));
//! assert_eq!(tree.iter().collect::<Vec<_>>(), [1, 2, 4, 5, 8]);
//! assert_eq!(tree.size(), 5);
//! ```
//!
//! # Features
//!
//! - `unittest`: verify every structural invariant after each `insert` and
//!   `delete`. Slow, intended for test builds.

mod arena;
mod balance;
mod debug;
mod error;
mod iter;
mod node;
mod tree;

pub use arena::NodeIndex;
pub use balance::{Avl, Rebalance, Unbalanced, max_nodes_for_height, min_nodes_for_height};
pub use error::TreeError;
pub use iter::AscendingIter;
pub use node::TreeNode;
pub use tree::{AvlTree, BinaryTree, PlainTree};
