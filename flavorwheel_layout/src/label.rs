// Copyright 2026 the Flavorwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label orientation and sizing.
//!
//! Labels sit at a segment's mid-angle and mid-radius and are rotated so
//! the text follows the ring. The rotation rule guarantees text is never
//! upside-down, no matter which side of the circle the segment occupies.

/// Rotation, in degrees, for a label at the given wheel mid-angle.
///
/// Two passes: segments on the left half of the circle (mid-angle in
/// (90°, 270°)) rotate by `mid − 90`, the rest by `mid + 90`; any result
/// that still lands in (90°, 270°) gets a further 180° flip. The
/// composition always resolves to a value in `[−90°, 90°]` (returned
/// normalized into (−180°, 180°]), so the text reads left-to-right and
/// upright everywhere.
#[must_use]
pub fn label_rotation(mid_angle: f64) -> f64 {
    let mid = normalize_unsigned(mid_angle);
    let mut rotation = if mid > 90.0 && mid < 270.0 {
        mid - 90.0
    } else {
        mid + 90.0
    };
    if rotation > 90.0 && rotation < 270.0 {
        rotation += 180.0;
    }
    normalize_signed(rotation)
}

/// Normalizes an angle into `[0°, 360°)`.
fn normalize_unsigned(angle: f64) -> f64 {
    let mut a = angle % 360.0;
    if a < 0.0 {
        a += 360.0;
    }
    a
}

/// Normalizes an angle into `(−180°, 180°]`.
fn normalize_signed(angle: f64) -> f64 {
    let mut a = normalize_unsigned(angle);
    if a > 180.0 {
        a -= 360.0;
    }
    a
}

/// Label font sizing policy.
///
/// Shallow rings get larger text, deeper rings smaller, and a segment with
/// a narrow angular span shrinks its label further so it does not overflow
/// the wedge. Thresholds here are presentation tuning, not part of the
/// layout contract.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelSizing {
    /// Font size at depth 0.
    pub base: f64,
    /// Size decrease per depth level.
    pub step: f64,
    /// Lower bound on the depth-derived size.
    pub min: f64,
    /// Angular span, in degrees, below which labels shrink further.
    pub narrow_span: f64,
    /// Shrink factor applied below `narrow_span`.
    pub narrow_factor: f64,
}

impl LabelSizing {
    /// The default policy: 16/14/12… tapering, floored at 10, with narrow
    /// segments (< 10°) shrunk to three quarters.
    pub const DEFAULT: Self = Self {
        base: 16.0,
        step: 2.0,
        min: 10.0,
        narrow_span: 10.0,
        narrow_factor: 0.75,
    };

    /// Font size for a label at `depth` whose segment spans `angle_size`
    /// degrees.
    #[must_use]
    pub fn size_for(&self, depth: usize, angle_size: f64) -> f64 {
        let by_depth = (self.base - self.step * depth as f64).max(self.min);
        if angle_size < self.narrow_span {
            by_depth * self.narrow_factor
        } else {
            by_depth
        }
    }
}

impl Default for LabelSizing {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spot_values_from_the_orientation_rule() {
        assert_eq!(label_rotation(0.0), 90.0);
        assert_eq!(label_rotation(180.0), 90.0);
        // 45° → first pass 135° → flipped to 315° → normalized −45°.
        assert_eq!(label_rotation(45.0), -45.0);
    }

    #[test]
    fn rotation_is_never_upside_down() {
        let mut angle = 0.0;
        while angle < 360.0 {
            let rotation = label_rotation(angle);
            assert!(
                (-90.0..=90.0).contains(&rotation),
                "mid-angle {angle} produced upside-down rotation {rotation}"
            );
            angle += 0.25;
        }
    }

    #[test]
    fn right_and_left_halves_mirror_onto_the_same_range() {
        // A segment at 100° (left half) and its mirror at 260° both stay
        // upright rather than flipping sign wildly.
        assert_eq!(label_rotation(100.0), 10.0);
        assert_eq!(label_rotation(260.0), -10.0);
    }

    #[test]
    fn negative_and_wrapped_inputs_normalize_first() {
        assert_eq!(label_rotation(-315.0), label_rotation(45.0));
        assert_eq!(label_rotation(405.0), label_rotation(45.0));
    }

    #[test]
    fn sizes_taper_with_depth_and_floor() {
        let sizing = LabelSizing::DEFAULT;
        assert_eq!(sizing.size_for(0, 90.0), 16.0);
        assert_eq!(sizing.size_for(1, 90.0), 14.0);
        assert_eq!(sizing.size_for(2, 90.0), 12.0);
        // Depths past the original 3-ring design keep a readable floor
        // instead of indexing off the end of a size table.
        assert_eq!(sizing.size_for(9, 90.0), 10.0);
    }

    #[test]
    fn narrow_segments_shrink() {
        let sizing = LabelSizing::DEFAULT;
        assert_eq!(sizing.size_for(1, 4.0), 14.0 * 0.75);
        assert_eq!(sizing.size_for(1, 10.0), 14.0);
    }
}
