// Copyright 2026 the Flavorwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout output types.

use alloc::string::String;

use flavorwheel_taxonomy::NodeIndex;
use kurbo::{BezPath, Point};
use peniko::Color;

/// One annular wedge of the laid-out wheel, corresponding to one taxonomy
/// node.
///
/// Angles are degrees under the wheel convention (0° up, clockwise);
/// radii satisfy `inner_radius < outer_radius`. Segments are ephemeral
/// layout output: regenerate them by re-running layout, never mutate them.
/// For any run of siblings, each segment's `end_angle` equals the next
/// sibling's `start_angle`, and the sibling spans exactly tile the
/// parent's span.
#[derive(Clone, Debug)]
pub struct Segment {
    /// Handle of the source node, resolvable through the document this
    /// layout was built from. This is the value to hand to a selection
    /// callback when the segment is activated.
    pub node: NodeIndex,
    /// Tree depth of the source node; roots are depth 0.
    pub depth: usize,
    /// Angle at which this wedge begins.
    pub start_angle: f64,
    /// Angle at which this wedge ends.
    pub end_angle: f64,
    /// Inner edge radius of the wedge's ring.
    pub inner_radius: f64,
    /// Outer edge radius of the wedge's ring.
    pub outer_radius: f64,
    /// Fill color inherited from the source node.
    pub fill: Color,
    /// Closed outline of the wedge, ready for solid fill.
    pub path: BezPath,
    /// Label placement for the node's name.
    pub label: Label,
}

impl Segment {
    /// Angular span of this segment, in degrees.
    #[must_use]
    pub fn angle_size(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Angular midpoint of this segment, in degrees.
    #[must_use]
    pub fn mid_angle(&self) -> f64 {
        self.start_angle + self.angle_size() / 2.0
    }
}

/// Placement of a segment's label.
#[derive(Clone, Debug)]
pub struct Label {
    /// The text to draw: the source node's name.
    pub text: String,
    /// Anchor point at the segment's mid-angle and mid-radius; text is
    /// centered on this point.
    pub anchor: Point,
    /// Rotation about the anchor, in degrees, always in `[−90°, 90°]`.
    pub rotation: f64,
    /// Font size in the wheel's coordinate units.
    pub size: f64,
    /// Text color chosen to contrast with the segment fill.
    pub color: Color,
}
