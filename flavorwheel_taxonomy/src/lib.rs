// Copyright 2026 the Flavorwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flavorwheel Taxonomy: the immutable flavor taxonomy model.
//!
//! This crate owns the data that the rest of the workspace visualizes:
//! a hierarchical taxonomy document (a "flavor wheel") loaded once at
//! startup and treated as read-only for the session. It provides:
//!
//! - [`Document`], [`Meta`], [`Node`], and [`Reference`]: the serde model
//!   of the taxonomy JSON asset, including validation of the structural
//!   invariants layout relies on (non-empty root set, sibling names unique).
//! - [`NodeIndex`]: a small copyable handle identifying a node by its
//!   depth-first pre-order position, so downstream layers can reference
//!   nodes without borrowing the tree.
//! - [`leaf_weight`] and [`WeightTable`]: the leaf-descendant counts that
//!   drive proportional angular allocation, computed once per document.
//!
//! ## Minimal example
//!
//! ```
//! use flavorwheel_taxonomy::{Document, WeightTable};
//!
//! let doc = Document::from_json_str(
//!     r##"{
//!         "meta": { "maxDepth": 2, "name": "Demo" },
//!         "data": [
//!             { "name": "Fruity", "colour": "#DA1D23", "children": [
//!                 { "name": "Berry", "colour": "#DD4C51" },
//!                 { "name": "Citrus", "colour": "#F7A128" }
//!             ]},
//!             { "name": "Roasted", "colour": "#C94930" }
//!         ]
//!     }"##,
//! )
//! .unwrap();
//!
//! let weights = WeightTable::new(&doc);
//! // "Fruity" has two leaf descendants, "Roasted" is itself a leaf.
//! assert_eq!(weights.total(), 3);
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod document;
mod weight;

pub use document::{Document, Meta, Node, NodeIndex, Reference, TaxonomyError};
pub use weight::{WeightTable, leaf_weight};
