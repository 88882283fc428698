/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Debug rendering of the tree shape.
//!
//! Nodes are printed in pre-order, one per line, indented by depth and
//! tagged with the child slot they occupy:
//!
//! ```text
//! 2 (size=3, height=1)
//!   L: 1 (size=1, height=0)
//!   R: 3 (size=1, height=0)
//! ```

use std::fmt;

use crate::BinaryTree;
use crate::balance::Rebalance;

impl<R: Rebalance> fmt::Debug for BinaryTree<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(root) = self.root else {
            return writeln!(f, "<empty>");
        };

        let mut stack = vec![(root, 0, "")];
        while let Some((node_idx, depth, tag)) = stack.pop() {
            let node = &self.nodes[node_idx];
            let indent = "  ".repeat(depth);
            writeln!(
                f,
                "{indent}{tag}{} (size={}, height={})",
                node.key(),
                node.size(),
                node.height()
            )?;

            if let Some(right) = node.right_index() {
                stack.push((right, depth + 1, "R: "));
            }
            if let Some(left) = node.left_index() {
                stack.push((left, depth + 1, "L: "));
            }
        }
        Ok(())
    }
}
