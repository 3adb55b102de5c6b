// Copyright 2026 the Flavorwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The radial layout engine.
//!
//! One recursion handles every level of the tree: a sibling run spanning
//! an angle range splits it proportionally by leaf weight, emits a segment
//! per node, and recurses into children with the node's own span, one ring
//! further out. Order is significant and preserved; nothing is sorted.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use flavorwheel_taxonomy::{Document, Node, NodeIndex, WeightTable};
use kurbo::Point;
use thiserror::Error;

use crate::arc::{annular_wedge, wheel_angle_of, wheel_point};
use crate::color::{ColorParseError, contrasting_text_color, parse_hex_color};
use crate::label::{LabelSizing, label_rotation};
use crate::segment::{Label, Segment};

/// Errors produced by layout.
///
/// Layout fails loudly on malformed input instead of silently rendering
/// nothing; callers substitute their own "no data" presentation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    /// The document has no root nodes.
    #[error("cannot lay out a taxonomy with no root nodes")]
    EmptyTaxonomy,
    /// A node's fill color string failed to parse.
    #[error("node {name:?} has an invalid fill color: {source}")]
    Color {
        /// Name of the offending node.
        name: String,
        /// The underlying parse failure.
        source: ColorParseError,
    },
}

/// Radial thickness of each ring, by depth.
///
/// Widths are always clamped to a strictly positive minimum so that a
/// pathologically deep tree can never produce zero or negative radii.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingSchedule {
    /// Width of the depth-0 ring.
    pub base: f64,
    /// Width decrease per depth level.
    pub taper: f64,
    /// Lower bound on any ring's width.
    pub min: f64,
}

impl RingSchedule {
    /// The default tapering schedule: `160 − 10·depth`, floored at 12.
    ///
    /// Without the floor the formula goes non-positive past depth 15; the
    /// floor keeps arbitrarily deep documents renderable.
    pub const DEFAULT: Self = Self {
        base: 160.0,
        taper: 10.0,
        min: 12.0,
    };

    /// A tapering schedule with an explicit floor.
    #[must_use]
    pub const fn tapering(base: f64, taper: f64, min: f64) -> Self {
        Self { base, taper, min }
    }

    /// An even schedule dividing a fixed annulus of thickness `total` into
    /// `depth_count` equally thick rings, the split the original design
    /// derived from the document's nominal `maxDepth`.
    #[must_use]
    pub fn even(total: f64, depth_count: u32) -> Self {
        let width = total / f64::from(depth_count.max(1));
        Self {
            base: width,
            taper: 0.0,
            min: width.max(1.0),
        }
    }

    /// Ring width at the given depth.
    #[must_use]
    pub fn width(&self, depth: usize) -> f64 {
        (self.base - self.taper * depth as f64).max(self.min)
    }
}

impl Default for RingSchedule {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Parameters for laying out a wheel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelParams {
    /// Center of the wheel in output coordinates.
    pub center: Point,
    /// Radius of the empty hub reserved for the title; the depth-0 ring
    /// starts here.
    pub center_radius: f64,
    /// Ring thickness schedule.
    pub rings: RingSchedule,
    /// Label sizing policy.
    pub labels: LabelSizing,
}

impl WheelParams {
    /// Creates parameters with the default ring schedule and label sizing.
    #[must_use]
    pub fn new(center: Point, center_radius: f64) -> Self {
        Self {
            center,
            center_radius,
            rings: RingSchedule::DEFAULT,
            labels: LabelSizing::DEFAULT,
        }
    }

    /// Replaces the ring schedule, returning the parameters for chaining.
    #[must_use]
    pub fn with_rings(mut self, rings: RingSchedule) -> Self {
        self.rings = rings;
        self
    }

    /// Replaces the label sizing policy, returning the parameters for
    /// chaining.
    #[must_use]
    pub fn with_labels(mut self, labels: LabelSizing) -> Self {
        self.labels = labels;
        self
    }
}

/// A laid-out wheel: the ordered segment list plus the parameters that
/// produced it.
///
/// Layout is synchronous and runs once per document; the result is cached
/// here for the session. It must never run inside a gesture-frame
/// callback — the viewport transform handles per-frame motion.
#[derive(Clone, Debug)]
pub struct WheelLayout {
    segments: Vec<Segment>,
    params: WheelParams,
}

impl WheelLayout {
    /// Lays out every node of `doc` as an annular segment.
    ///
    /// The roots share the full circle starting at 0°; each sibling run
    /// splits its parent's span proportionally by leaf weight, in input
    /// order, with no gaps or overlap.
    pub fn new(doc: &Document, params: WheelParams) -> Result<Self, LayoutError> {
        if doc.roots().is_empty() {
            return Err(LayoutError::EmptyTaxonomy);
        }

        let weights = WeightTable::new(doc);
        let mut state = LayoutState {
            params,
            weights,
            next: 0,
            segments: Vec::with_capacity(doc.node_count()),
        };
        let group_weight = state.weights.total();
        state.lay_ring(doc.roots(), 0, 0.0, 360.0, params.center_radius, group_weight)?;

        log::debug!(
            "laid out {} segments for taxonomy {:?}",
            state.segments.len(),
            doc.meta.name
        );
        Ok(Self {
            segments: state.segments,
            params,
        })
    }

    /// The ordered segments, one per node in depth-first pre-order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The parameters this layout was built with.
    #[must_use]
    pub fn params(&self) -> &WheelParams {
        &self.params
    }

    /// Outer radius of the outermost ring, e.g. for sizing a viewport or
    /// view box around the wheel.
    #[must_use]
    pub fn max_outer_radius(&self) -> f64 {
        self.segments
            .iter()
            .fold(self.params.center_radius, |max, s| max.max(s.outer_radius))
    }

    /// Finds the segment containing `point` (in untransformed wheel
    /// coordinates), if any.
    ///
    /// Callers applying a viewport transform should map the pointer
    /// through the inverse transform first. Rings occupy disjoint radius
    /// bands, so at most one segment contains any point.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<&Segment> {
        let offset = point - self.params.center;
        let radius = offset.hypot();
        let angle = wheel_angle_of(offset);
        self.segments.iter().find(|s| {
            radius >= s.inner_radius
                && radius < s.outer_radius
                && angle >= s.start_angle
                && angle < s.end_angle
        })
    }

    /// Resolves `point` to the source node of the segment it activates.
    ///
    /// This is the seam for selection callbacks: the caller invokes its
    /// `on_segment_activated(&Node)` handler with the result, keeping
    /// detail-view lifecycle out of the layout engine.
    #[must_use]
    pub fn node_at<'d>(&self, doc: &'d Document, point: Point) -> Option<&'d Node> {
        self.hit_test(point).and_then(|s| doc.node(s.node))
    }
}

struct LayoutState {
    params: WheelParams,
    weights: WeightTable,
    next: u32,
    segments: Vec<Segment>,
}

impl LayoutState {
    /// Lays out one run of siblings spanning
    /// `[start_angle, start_angle + total_angle)`, then recurses into each
    /// node's children with the node's own span.
    fn lay_ring(
        &mut self,
        nodes: &[Node],
        depth: usize,
        start_angle: f64,
        total_angle: f64,
        inner_radius: f64,
        group_weight: u64,
    ) -> Result<(), LayoutError> {
        let ring_width = self.params.rings.width(depth);
        let outer_radius = inner_radius + ring_width;
        let center = self.params.center;

        let mut current = start_angle;
        for node in nodes {
            let index = NodeIndex(self.next);
            self.next += 1;
            let weight = self
                .weights
                .weight(index)
                .expect("weight table and layout share one pre-order traversal");
            let angle_size = total_angle * weight as f64 / group_weight as f64;
            let end = current + angle_size;
            let mid = current + angle_size / 2.0;

            let fill = parse_hex_color(&node.color).map_err(|source| LayoutError::Color {
                name: node.name.clone(),
                source,
            })?;
            let size = self.params.labels.size_for(depth, angle_size);
            self.segments.push(Segment {
                node: index,
                depth,
                start_angle: current,
                end_angle: end,
                inner_radius,
                outer_radius,
                fill,
                path: annular_wedge(center, inner_radius, outer_radius, current, end),
                label: Label {
                    text: node.name.to_string(),
                    anchor: wheel_point(center, inner_radius + ring_width * 0.5, mid),
                    rotation: label_rotation(mid),
                    size,
                    color: contrasting_text_color(fill),
                },
            });

            if !node.children.is_empty() {
                self.lay_ring(&node.children, depth + 1, current, angle_size, outer_radius, weight)?;
            }
            current = end;
        }
        Ok(())
    }
}
