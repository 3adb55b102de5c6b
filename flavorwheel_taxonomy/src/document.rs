// Copyright 2026 the Flavorwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The taxonomy document: metadata, the node tree, and structural validation.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while loading or validating a taxonomy document.
///
/// These are programmer-facing: a failing document is a malformed asset,
/// not a runtime condition the user can recover from.
#[derive(Debug, Error)]
pub enum TaxonomyError {
    /// The document text is not valid JSON for the taxonomy schema.
    #[error("taxonomy document parse error: {0}")]
    Parse(serde_json::Error),
    /// The document has no root nodes; there is nothing to lay out.
    #[error("taxonomy document contains no root nodes")]
    Empty,
    /// Two siblings share a name. Names are only required to be unique
    /// among siblings, not globally.
    #[error("duplicate sibling name {0:?}")]
    DuplicateSiblingName(String),
}

/// Identifier for a node within a [`Document`].
///
/// The raw value is the node's position in a depth-first pre-order
/// traversal of the document (roots first, each followed by its subtree).
/// Handles let layout output and selection state refer to nodes without
/// borrowing the tree; resolve one back with [`Document::node`].
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(pub u32);

/// Document metadata.
///
/// Only `max_depth` and `name` are consumed by the visualization (ring
/// schedule and hub title); the remaining fields describe provenance and
/// are carried through untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    /// Nominal depth of the tree, used for the even ring-width schedule.
    #[serde(rename = "maxDepth", default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<u32>,
    /// Display name of the taxonomy, shown in the wheel hub.
    #[serde(default)]
    pub name: String,
    /// Kind of taxonomy (e.g. "flavor").
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub kind: String,
    /// Whether the taxonomy includes fault descriptors.
    #[serde(default)]
    pub faults: bool,
    /// Document author.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub author: String,
    /// Publication date, as free text.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub date: String,
    /// Languages the taxonomy is available in.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<String>,
    /// Source attribution.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub source: String,
    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

impl Meta {
    /// Creates metadata with the given display name and all other fields
    /// defaulted.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// The nominal tree depth, falling back to 3 and never below 1.
    #[must_use]
    pub fn max_depth_or_default(&self) -> u32 {
        self.max_depth.unwrap_or(3).max(1)
    }
}

/// One element of the taxonomy tree.
///
/// A node with an empty `children` list is a leaf; an explicitly empty
/// list and an absent field mean the same thing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Display name, unique among this node's siblings.
    pub name: String,
    /// Fill color as an RGB hex string (`#RRGGBB`).
    #[serde(rename = "colour")]
    pub color: String,
    /// Optional prose definition shown in detail views.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    /// Literature references with optional intensity scores.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<Reference>,
    /// Child nodes, in display order. Order is significant: it determines
    /// adjacency in the wheel, and layout never sorts.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
    /// Whether this entry is one of the taxonomy's fundamental descriptors.
    #[serde(default)]
    pub fundamental: bool,
}

impl Node {
    /// Creates a leaf node with the given name and fill color.
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            definition: None,
            references: Vec::new(),
            children: Vec::new(),
            fundamental: false,
        }
    }

    /// Replaces this node's children, returning the node for chaining.
    #[must_use]
    pub fn with_children(mut self, children: Vec<Self>) -> Self {
        self.children = children;
        self
    }

    /// Returns `true` if this node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// A literature reference attached to a node.
///
/// Intensity scores are roughly 0.0–5.0 and displayed with one decimal.
/// References are purely descriptive and never consumed by layout.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    /// Citation text.
    pub reference: String,
    /// Flavor intensity score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavor: Option<f64>,
    /// Preparation annotation for the flavor score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavor_preparation: Option<String>,
    /// Aroma intensity score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aroma: Option<f64>,
    /// Preparation annotation for the aroma score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aroma_preparation: Option<String>,
}

/// A complete taxonomy document: metadata plus the ordered root nodes.
///
/// Loaded once at startup and immutable for the session. All traversal
/// helpers use depth-first pre-order, which is also the order in which
/// [`NodeIndex`] handles are assigned.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata.
    pub meta: Meta,
    /// The ordered top-level nodes.
    pub data: Vec<Node>,
}

impl Document {
    /// Creates a document from metadata and root nodes.
    ///
    /// This does not validate; call [`Document::validate`] when the parts
    /// come from an untrusted source.
    pub fn new(meta: Meta, data: Vec<Node>) -> Self {
        Self { meta, data }
    }

    /// Parses and validates a taxonomy document from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, TaxonomyError> {
        let doc: Self = serde_json::from_str(json).map_err(TaxonomyError::Parse)?;
        doc.validate()?;
        log::debug!(
            "loaded taxonomy {:?} with {} nodes",
            doc.meta.name,
            doc.node_count()
        );
        Ok(doc)
    }

    /// Checks the structural invariants the visualization relies on:
    /// at least one root node, and names unique among siblings.
    pub fn validate(&self) -> Result<(), TaxonomyError> {
        fn check(nodes: &[Node]) -> Result<(), TaxonomyError> {
            let mut seen: HashSet<&str> = HashSet::new();
            for node in nodes {
                if !seen.insert(node.name.as_str()) {
                    return Err(TaxonomyError::DuplicateSiblingName(node.name.clone()));
                }
                check(&node.children)?;
            }
            Ok(())
        }

        if self.data.is_empty() {
            return Err(TaxonomyError::Empty);
        }
        check(&self.data)
    }

    /// Returns the ordered root nodes.
    #[must_use]
    pub fn roots(&self) -> &[Node] {
        &self.data
    }

    /// Visits every node in depth-first pre-order.
    ///
    /// The callback receives the node's [`NodeIndex`], its depth (roots are
    /// depth 0), and the node itself.
    pub fn visit<F: FnMut(NodeIndex, usize, &Node)>(&self, mut f: F) {
        fn walk<F: FnMut(NodeIndex, usize, &Node)>(
            nodes: &[Node],
            depth: usize,
            next: &mut u32,
            f: &mut F,
        ) {
            for node in nodes {
                let index = NodeIndex(*next);
                *next += 1;
                f(index, depth, node);
                walk(&node.children, depth + 1, next, f);
            }
        }

        let mut next = 0;
        walk(&self.data, 0, &mut next, &mut f);
    }

    /// Resolves a [`NodeIndex`] back to its node.
    ///
    /// Returns `None` if the handle does not belong to this document. The
    /// lookup walks the tree, which is fine for the occasional selection
    /// query this exists for.
    #[must_use]
    pub fn node(&self, index: NodeIndex) -> Option<&Node> {
        fn find<'a>(nodes: &'a [Node], target: u32, next: &mut u32) -> Option<&'a Node> {
            for node in nodes {
                let current = *next;
                *next += 1;
                if current == target {
                    return Some(node);
                }
                if let Some(found) = find(&node.children, target, next) {
                    return Some(found);
                }
            }
            None
        }

        let mut next = 0;
        find(&self.data, index.0, &mut next)
    }

    /// Total number of nodes in the document.
    #[must_use]
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.visit(|_, _, _| count += 1);
        count
    }
}
