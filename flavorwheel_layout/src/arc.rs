// Copyright 2026 the Flavorwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arc geometry: polar conversion and annular wedge outlines.
//!
//! All angles are in degrees under the wheel convention: 0° points up
//! (12 o'clock) and angles increase clockwise. In screen coordinates
//! (y down) that makes the conversion `x = cx + r·sin θ`,
//! `y = cy − r·cos θ`.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Arc, BezPath, Point, Vec2};

/// Tolerance used when flattening arcs into Bézier segments.
pub const ARC_TOLERANCE: f64 = 0.1;

/// Converts wheel-polar coordinates to a Cartesian point.
#[must_use]
pub fn wheel_point(center: Point, radius: f64, angle: f64) -> Point {
    let rad = (angle - 90.0).to_radians();
    Point::new(center.x + radius * rad.cos(), center.y + radius * rad.sin())
}

/// Returns the wheel angle, in degrees in `[0°, 360°)`, of an offset from
/// the wheel center. The inverse of [`wheel_point`]'s angular part.
#[must_use]
pub fn wheel_angle_of(offset: Vec2) -> f64 {
    let degrees = offset.x.atan2(-offset.y).to_degrees();
    if degrees < 0.0 { degrees + 360.0 } else { degrees }
}

/// Builds the closed outline of an annular wedge.
///
/// The boundary runs: inner-start, radial line out to outer-start, outer
/// arc clockwise to outer-end, radial line in to inner-end, inner arc
/// counterclockwise back to inner-start, close. That ordering yields a
/// simple, non-self-intersecting region suitable for solid fill.
///
/// A zero angular span produces a zero-area path; that is an acceptable
/// degenerate segment, not an error.
#[must_use]
pub fn annular_wedge(
    center: Point,
    inner_radius: f64,
    outer_radius: f64,
    start_angle: f64,
    end_angle: f64,
) -> BezPath {
    let start_rad = (start_angle - 90.0).to_radians();
    let sweep_rad = (end_angle - start_angle).to_radians();

    let mut path = BezPath::new();
    path.move_to(wheel_point(center, inner_radius, start_angle));
    path.line_to(wheel_point(center, outer_radius, start_angle));
    let outer = Arc::new(
        center,
        Vec2::new(outer_radius, outer_radius),
        start_rad,
        sweep_rad,
        0.0,
    );
    path.extend(outer.append_iter(ARC_TOLERANCE));
    path.line_to(wheel_point(center, inner_radius, end_angle));
    let inner = Arc::new(
        center,
        Vec2::new(inner_radius, inner_radius),
        start_rad + sweep_rad,
        -sweep_rad,
        0.0,
    );
    path.extend(inner.append_iter(ARC_TOLERANCE));
    path.close_path();
    path
}

#[cfg(test)]
mod tests {
    use kurbo::Shape;

    use super::*;

    fn assert_close(a: Point, b: Point) {
        assert!((a - b).hypot() < 1e-9, "{a:?} != {b:?}");
    }

    #[test]
    fn wheel_point_hits_the_cardinal_directions() {
        let center = Point::new(100.0, 100.0);
        assert_close(wheel_point(center, 50.0, 0.0), Point::new(100.0, 50.0));
        assert_close(wheel_point(center, 50.0, 90.0), Point::new(150.0, 100.0));
        assert_close(wheel_point(center, 50.0, 180.0), Point::new(100.0, 150.0));
        assert_close(wheel_point(center, 50.0, 270.0), Point::new(50.0, 100.0));
    }

    #[test]
    fn wheel_angle_of_inverts_wheel_point() {
        let center = Point::new(40.0, 60.0);
        for angle in [0.0, 33.5, 90.0, 179.0, 245.0, 359.0] {
            let p = wheel_point(center, 25.0, angle);
            let back = wheel_angle_of(p - center);
            assert!((back - angle).abs() < 1e-9, "angle {angle} came back as {back}");
        }
    }

    #[test]
    fn wedge_starts_at_the_inner_start_corner() {
        let center = Point::new(0.0, 0.0);
        let path = annular_wedge(center, 20.0, 40.0, 30.0, 120.0);
        let first = path.elements().first().copied();
        match first {
            Some(kurbo::PathEl::MoveTo(p)) => assert_close(p, wheel_point(center, 20.0, 30.0)),
            other => panic!("expected a leading MoveTo, got {other:?}"),
        }
    }

    #[test]
    fn wedge_stays_inside_the_outer_circle() {
        let center = Point::new(200.0, 200.0);
        let path = annular_wedge(center, 70.0, 230.0, 0.0, 200.0);
        let bbox = path.bounding_box();
        // Flattening tolerance allows a small excursion past the true arc.
        let limit = 230.0 + ARC_TOLERANCE;
        assert!(bbox.min_x() >= center.x - limit);
        assert!(bbox.max_x() <= center.x + limit);
        assert!(bbox.min_y() >= center.y - limit);
        assert!(bbox.max_y() <= center.y + limit);
    }

    #[test]
    fn wedge_spanning_more_than_half_the_circle_is_closed_and_nonempty() {
        let path = annular_wedge(Point::new(0.0, 0.0), 10.0, 30.0, 90.0, 360.0);
        assert!(matches!(path.elements().last(), Some(kurbo::PathEl::ClosePath)));
        assert!(path.area().abs() > 0.0);
    }

    #[test]
    fn zero_span_wedge_has_zero_area() {
        let path = annular_wedge(Point::new(0.0, 0.0), 10.0, 30.0, 45.0, 45.0);
        assert!(path.area().abs() < 1e-9);
    }
}
