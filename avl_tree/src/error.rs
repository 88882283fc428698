/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Error types for the tree API.
//!
//! Only contract violations reachable through the public API surface here.
//! Duplicate inserts and lookups or deletes of absent keys are ordinary
//! `false`/`None` results, and broken internal invariants panic.

use thiserror::Error;

/// Errors reported by tree operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// A value was requested from an [`AscendingIter`](crate::AscendingIter)
    /// that has already yielded every key.
    #[error("the ascending iterator has no more keys")]
    IteratorExhausted,
    /// A node-count bound was requested for a negative height.
    #[error("tree height must be non-negative, got {height}")]
    InvalidHeight {
        /// The rejected height.
        height: i32,
    },
    /// The node-count bound for this height does not fit in a `u64`.
    #[error("node count for a tree of height {height} overflows u64")]
    HeightOverflow {
        /// The rejected height.
        height: i32,
    },
}
