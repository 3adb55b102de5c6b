// Copyright 2026 the Flavorwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The viewport transform value object.

use kurbo::{Affine, Point, Vec2};

/// The transform applied uniformly to the rendered wheel.
///
/// One value object owned by the controller, so the pan and pinch
/// recognizers never race on partially updated fields: recognizers produce
/// deltas and ratios, and the controller writes them here atomically per
/// frame. The renderer reads this (usually via [`WheelTransform::affine`])
/// every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelTransform {
    /// Translation in view coordinates. Unbounded: the wheel may be
    /// panned arbitrarily far off-screen.
    pub translation: Vec2,
    /// Uniform scale factor. The controller keeps gesture- and
    /// button-driven values within its scale bounds; the entrance
    /// animation briefly passes below them on its way to 1.
    pub scale: f64,
    /// Rotation in degrees, clockwise.
    pub rotation: f64,
}

impl WheelTransform {
    /// The identity transform: no translation, scale 1, no rotation.
    pub const IDENTITY: Self = Self {
        translation: Vec2::ZERO,
        scale: 1.0,
        rotation: 0.0,
    };

    /// The transform as an affine about the origin: translate, then
    /// scale, then rotate (rotation innermost), matching how a stacked
    /// translate/scale/rotate style list composes.
    #[must_use]
    pub fn affine(&self) -> Affine {
        Affine::translate(self.translation)
            * Affine::scale(self.scale)
            * Affine::rotate(self.rotation.to_radians())
    }

    /// The transform as an affine with scale and rotation applied about
    /// `pivot` (typically the wheel center), which is how an on-screen
    /// view scales about its own middle.
    #[must_use]
    pub fn affine_about(&self, pivot: Point) -> Affine {
        let to_pivot = pivot.to_vec2();
        Affine::translate(self.translation + to_pivot)
            * Affine::scale(self.scale)
            * Affine::rotate(self.rotation.to_radians())
            * Affine::translate(-to_pivot)
    }

    /// Returns `true` if this transform is within `epsilon` of the
    /// identity on every component.
    #[must_use]
    pub fn is_near_identity(&self, epsilon: f64) -> bool {
        self.translation.x.abs() <= epsilon
            && self.translation.y.abs() <= epsilon
            && (self.scale - 1.0).abs() <= epsilon
            && self.rotation.abs() <= epsilon
    }
}

impl Default for WheelTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_affine_is_identity() {
        assert_eq!(WheelTransform::IDENTITY.affine(), Affine::IDENTITY);
    }

    #[test]
    fn affine_applies_rotation_innermost() {
        let transform = WheelTransform {
            translation: Vec2::new(10.0, 0.0),
            scale: 2.0,
            rotation: 90.0,
        };
        // A point one unit up from the origin rotates 90° clockwise to one
        // unit right, doubles, then translates.
        let p = transform.affine() * Point::new(0.0, -1.0);
        assert!((p.x - 12.0).abs() < 1e-9);
        assert!(p.y.abs() < 1e-9);
    }

    #[test]
    fn affine_about_keeps_the_pivot_fixed_under_scale_and_rotation() {
        let transform = WheelTransform {
            translation: Vec2::ZERO,
            scale: 3.0,
            rotation: 42.0,
        };
        let pivot = Point::new(400.0, 300.0);
        let mapped = transform.affine_about(pivot) * pivot;
        assert!((mapped - pivot).hypot() < 1e-9);
    }

    #[test]
    fn near_identity_tolerates_small_errors_only() {
        let mut transform = WheelTransform::IDENTITY;
        transform.scale = 1.0 + 1e-9;
        assert!(transform.is_near_identity(1e-6));
        transform.scale = 1.2;
        assert!(!transform.is_near_identity(1e-6));
    }
}
