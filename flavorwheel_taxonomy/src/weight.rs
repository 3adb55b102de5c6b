// Copyright 2026 the Flavorwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Leaf weights: the proportional basis for angular allocation.
//!
//! A node's weight is the number of leaves in its subtree, so sibling
//! weights always sum to their parent's weight and every weight is at
//! least 1. [`leaf_weight`] is the pure recursive contract;
//! [`WeightTable`] precomputes every weight in one pass so layout can
//! query them in O(1) instead of re-folding a subtree once per ancestor.

use alloc::vec::Vec;

use crate::document::{Document, Node, NodeIndex};

/// Returns the number of leaf descendants of `node`.
///
/// A leaf (no children, or an explicitly empty children list) weighs 1;
/// an interior node weighs the sum of its children. Any well-formed node
/// is valid input; there are no error conditions.
#[must_use]
pub fn leaf_weight(node: &Node) -> u64 {
    if node.children.is_empty() {
        1
    } else {
        node.children.iter().map(leaf_weight).sum()
    }
}

/// Precomputed leaf weights for every node of a [`Document`].
///
/// Weights are stored in a flat vector indexed by [`NodeIndex`] (pre-order
/// position), built in a single traversal. The table also records the
/// combined weight of the root set, which is the denominator for the
/// top-level angular split.
#[derive(Clone, Debug)]
pub struct WeightTable {
    weights: Vec<u64>,
    total: u64,
}

impl WeightTable {
    /// Computes the weight of every node in `doc`.
    #[must_use]
    pub fn new(doc: &Document) -> Self {
        fn build(nodes: &[Node], weights: &mut Vec<u64>) -> u64 {
            let mut sum = 0;
            for node in nodes {
                let slot = weights.len();
                weights.push(0);
                let weight = if node.children.is_empty() {
                    1
                } else {
                    build(&node.children, weights)
                };
                weights[slot] = weight;
                sum += weight;
            }
            sum
        }

        let mut weights = Vec::with_capacity(doc.node_count());
        let total = build(doc.roots(), &mut weights);
        Self { weights, total }
    }

    /// Returns the weight of the node at `index`, if the handle belongs to
    /// the document this table was built from.
    #[must_use]
    pub fn weight(&self, index: NodeIndex) -> Option<u64> {
        self.weights.get(index.0 as usize).copied()
    }

    /// Combined weight of the root set (equivalently, the total number of
    /// leaves in the document).
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of nodes covered by this table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns `true` if the table covers no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}
