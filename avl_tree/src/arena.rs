/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Arena storage for tree nodes.
//!
//! Children and parents are referenced by [`NodeIndex`] rather than by
//! pointer, so rotations and splices rewire links by overwriting indices
//! while every node keeps a single owner: the arena.

use std::ops::{Index, IndexMut};

use slab::Slab;

use crate::TreeNode;

/// Index into the node arena.
///
/// A slab position paired with the generation of that slot at insertion
/// time. This is a lightweight handle that is stable across mutations to
/// other slots in the arena. Once its node is removed the handle is stale:
/// the slot's generation moves on, so the handle never resolves to a node
/// that later reuses the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeIndex {
    position: usize,
    generation: u32,
}

impl NodeIndex {
    /// Return the underlying slab position.
    ///
    /// Positions are reused after a removal. Two handles with the same
    /// position but different generations refer to different nodes.
    pub const fn position(self) -> usize {
        self.position
    }

    /// Return the generation of the slot when the node was inserted.
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

/// Arena storage for [`TreeNode`]s.
///
/// This is a newtype wrapper around [`Slab<TreeNode>`] that provides
/// type-safe indexing via [`NodeIndex`] instead of a raw `usize`, plus a
/// per-slot generation counter that is bumped on every removal.
#[derive(Debug, Default)]
pub(crate) struct NodeArena {
    nodes: Slab<TreeNode>,
    /// Current generation of every slot the slab has ever handed out.
    generations: Vec<u32>,
}

impl NodeArena {
    /// Create a new empty arena.
    pub const fn new() -> Self {
        Self {
            nodes: Slab::new(),
            generations: Vec::new(),
        }
    }

    /// Create an empty arena with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            generations: Vec::with_capacity(capacity),
        }
    }

    /// Get the number of nodes currently stored in the arena.
    ///
    /// This is not to be confused with the current _capacity_
    /// of the arena, i.e. the size of the underlying currently-allocated
    /// slab.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Insert a node into the arena, returning its index.
    pub fn insert(&mut self, node: TreeNode) -> NodeIndex {
        let position = self.nodes.insert(node);
        // The slab only grows one slot at a time, so a fresh slot is always
        // the next position past the known generations.
        if position == self.generations.len() {
            self.generations.push(0);
        }
        NodeIndex {
            position,
            generation: self.generations[position],
        }
    }

    /// Remove a node from the arena, returning it.
    ///
    /// # Panics
    ///
    /// Panics if the index is stale or invalid.
    pub fn remove(&mut self, idx: NodeIndex) -> TreeNode {
        assert!(self.is_live(idx), "removing stale node index {idx:?}");
        let generation = &mut self.generations[idx.position];
        *generation = generation.wrapping_add(1);
        self.nodes.remove(idx.position)
    }

    /// Get a shared reference to a node, or `None` if `idx` is stale.
    pub fn get(&self, idx: NodeIndex) -> Option<&TreeNode> {
        if self.is_live(idx) {
            self.nodes.get(idx.position)
        } else {
            None
        }
    }

    /// Get a mutable reference to a node, or `None` if `idx` is stale.
    pub fn get_mut(&mut self, idx: NodeIndex) -> Option<&mut TreeNode> {
        if self.is_live(idx) {
            self.nodes.get_mut(idx.position)
        } else {
            None
        }
    }

    fn is_live(&self, idx: NodeIndex) -> bool {
        self.generations.get(idx.position) == Some(&idx.generation)
            && self.nodes.contains(idx.position)
    }
}

impl Index<NodeIndex> for NodeArena {
    type Output = TreeNode;

    fn index(&self, idx: NodeIndex) -> &Self::Output {
        match self.get(idx) {
            Some(node) => node,
            None => panic!("stale or invalid node index {idx:?}"),
        }
    }
}

impl IndexMut<NodeIndex> for NodeArena {
    fn index_mut(&mut self, idx: NodeIndex) -> &mut Self::Output {
        match self.get_mut(idx) {
            Some(node) => node,
            None => panic!("stale or invalid node index {idx:?}"),
        }
    }
}
