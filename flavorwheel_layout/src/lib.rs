// Copyright 2026 the Flavorwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flavorwheel Layout: radial sunburst layout for flavor taxonomies.
//!
//! This crate turns an arbitrary-depth taxonomy tree into a flat, ordered
//! list of drawable annular segments. Each tree level subdivides the
//! angular span of its parent in proportion to leaf weight; sibling order
//! is preserved exactly (the wheel reflects input order, never magnitude
//! order). The pieces:
//!
//! - [`WheelLayout`]: the layout engine. One generic recursion over
//!   (nodes, depth, angle range, radius) produces [`Segment`]s; the result
//!   is computed once per document and cached for the session.
//! - [`annular_wedge`] / [`wheel_point`]: the arc geometry builder, using
//!   the wheel convention that 0° points up and angles grow clockwise.
//! - [`label_rotation`] / [`contrasting_text_color`]: the label
//!   orientation resolver. Labels always read left-to-right and upright,
//!   and text picks black or white by perceptual luma of the fill.
//! - [`WheelLayout::hit_test`] / [`WheelLayout::node_at`]: polar
//!   containment queries that resolve a point (in wheel coordinates) back
//!   to a segment and its source node, the seam for selection callbacks.
//!
//! The viewport transform that pans and zooms the rendered wheel is a
//! separate concern; see the `flavorwheel_viewport` crate. Layout output
//! is in untransformed wheel coordinates.
//!
//! ## Minimal example
//!
//! ```
//! use flavorwheel_layout::{WheelLayout, WheelParams};
//! use flavorwheel_taxonomy::{Document, Meta, Node};
//!
//! let doc = Document::new(
//!     Meta::new("Demo"),
//!     vec![
//!         Node::new("Fruity", "#DA1D23").with_children(vec![
//!             Node::new("Berry", "#DD4C51"),
//!             Node::new("Citrus", "#F7A128"),
//!         ]),
//!         Node::new("Roasted", "#C94930"),
//!     ],
//! );
//!
//! let layout = WheelLayout::new(&doc, WheelParams::new((400.0, 400.0).into(), 70.0)).unwrap();
//! // One segment per node, in pre-order.
//! assert_eq!(layout.segments().len(), 4);
//! // The roots split the full circle 2:1 by leaf weight.
//! assert_eq!(layout.segments()[0].end_angle, 240.0);
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`); enable the `libm`
//! feature for builds without `std`.

#![no_std]

extern crate alloc;

mod arc;
mod color;
mod engine;
mod label;
mod segment;

pub use arc::{ARC_TOLERANCE, annular_wedge, wheel_angle_of, wheel_point};
pub use color::{ColorParseError, contrasting_text_color, parse_hex_color, relative_luma};
pub use engine::{LayoutError, RingSchedule, WheelLayout, WheelParams};
pub use label::{LabelSizing, label_rotation};
pub use segment::{Label, Segment};
