// Copyright 2026 the Flavorwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flavorwheel Viewport: the pan/pinch/zoom transform over the rendered
//! wheel.
//!
//! This crate is headless and independent of layout: it maintains one
//! [`WheelTransform`] (translation, uniform scale, rotation) that a
//! renderer applies to the whole diagram each frame. It does not own a
//! scene or issue any drawing. The pieces:
//!
//! - [`WheelTransform`]: the transform value object, convertible to a
//!   [`kurbo::Affine`] (optionally about a pivot such as the wheel center).
//! - [`PanRecognizer`] / [`PinchRecognizer`]: small gesture state machines
//!   that snapshot a baseline on gesture start and derive the new
//!   translation or scale from cumulative drag offsets and live pinch
//!   spans. Both may be active at once (a two-finger drag pans and scales
//!   simultaneously).
//! - [`PressState`]: the touched-segment highlight flag, generic over the
//!   application's id type.
//! - [`Spring`], [`Tween`], [`Easing`]: time-driven animation primitives.
//! - [`ViewportController`]: composes all of the above; owns the
//!   transform, clamps scale to the [`MIN_SCALE`]..=[`MAX_SCALE`] range,
//!   drives the one-shot entrance animation, the ±0.5 zoom steps, and the
//!   spring-animated reset.
//!
//! Every gesture update and every [`ViewportController::tick`] is O(1);
//! layout never runs here. Starting a gesture cancels any in-flight
//! animation on the channels that gesture drives.
//!
//! ## Minimal example
//!
//! ```
//! use flavorwheel_viewport::ViewportController;
//! use kurbo::Vec2;
//!
//! let mut view = ViewportController::new();
//!
//! // One-finger drag: cumulative offsets from the gesture start.
//! view.pan_begin();
//! view.pan_update(Vec2::new(24.0, -10.0));
//! view.pan_end();
//!
//! // Two-finger pinch: live inter-pointer distances.
//! view.pinch_begin(120.0);
//! view.pinch_update(240.0); // spread to 2x
//! view.pinch_end();
//!
//! assert_eq!(view.transform().scale, 2.0);
//! assert_eq!(view.transform().translation, Vec2::new(24.0, -10.0));
//!
//! // Reset springs back to the identity transform over subsequent ticks.
//! view.reset();
//! while view.is_animating() {
//!     view.tick(1.0 / 60.0);
//! }
//! assert_eq!(view.transform().scale, 1.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod animate;
mod controller;
mod gesture;
mod transform;

pub use animate::{Easing, Spring, SpringConfig, Tween};
pub use controller::{MAX_SCALE, MIN_SCALE, ViewportController, ZOOM_STEP};
pub use gesture::{PanRecognizer, PinchRecognizer, PressState};
pub use transform::WheelTransform;
