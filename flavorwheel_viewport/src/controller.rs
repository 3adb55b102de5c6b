// Copyright 2026 the Flavorwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The viewport transform controller.

use kurbo::{Affine, Vec2};

use crate::animate::{Easing, Spring, SpringConfig, Tween};
use crate::gesture::{PanRecognizer, PinchRecognizer};
use crate::transform::WheelTransform;

/// Smallest allowed gesture/button scale.
pub const MIN_SCALE: f64 = 0.5;
/// Largest allowed gesture/button scale.
pub const MAX_SCALE: f64 = 3.0;
/// Scale change per zoom-button press.
pub const ZOOM_STEP: f64 = 0.5;

const ENTRANCE_DELAY: f64 = 0.3;
const ENTRANCE_SCALE_DURATION: f64 = 1.2;
const ENTRANCE_ROTATION_DURATION: f64 = 1.5;
const ENTRANCE_START_ROTATION: f64 = -90.0;

/// One animated value: either a spring toward a target or a fixed-duration
/// tween.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Drive {
    Spring(Spring),
    Tween(Tween),
}

impl Drive {
    fn tick(&mut self, dt: f64) -> f64 {
        match self {
            Self::Spring(spring) => spring.tick(dt),
            Self::Tween(tween) => tween.tick(dt),
        }
    }

    fn is_finished(&self) -> bool {
        match self {
            Self::Spring(spring) => spring.is_settled(),
            Self::Tween(tween) => tween.is_finished(),
        }
    }
}

/// Owns the wheel's [`WheelTransform`] and every way it changes: pan and
/// pinch gestures, discrete zoom buttons, animated reset, and the one-shot
/// entrance animation.
///
/// Gesture updates and [`ViewportController::tick`] are O(1) and safe to
/// call at display refresh rate. Each of the four transform channels
/// (translate x/y, scale, rotation) has at most one animation driving it;
/// starting a gesture cancels the animations on the channels that gesture
/// writes, so a new gesture always interrupts an in-flight spring.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewportController {
    transform: WheelTransform,
    pan: PanRecognizer,
    pinch: PinchRecognizer,
    anim_translate_x: Option<Drive>,
    anim_translate_y: Option<Drive>,
    anim_scale: Option<Drive>,
    anim_rotation: Option<Drive>,
    entrance_started: bool,
}

impl ViewportController {
    /// Creates a controller at the identity transform with no animations
    /// running.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current transform. Renderers read this every frame.
    #[must_use]
    pub fn transform(&self) -> WheelTransform {
        self.transform
    }

    /// The current transform as an affine about the origin.
    #[must_use]
    pub fn affine(&self) -> Affine {
        self.transform.affine()
    }

    /// Starts the entrance animation: scale grows 0 → 1 with an elastic
    /// overshoot while the wheel rotates in from −90°, after a short
    /// delay.
    ///
    /// Runs once per controller: later calls do nothing and return
    /// `false`. Purely cosmetic; gestures interrupt it per channel like
    /// any other animation.
    pub fn start_entrance(&mut self) -> bool {
        if self.entrance_started {
            return false;
        }
        self.entrance_started = true;
        self.transform.scale = 0.0;
        self.transform.rotation = ENTRANCE_START_ROTATION;
        self.anim_scale = Some(Drive::Tween(
            Tween::new(0.0, 1.0, ENTRANCE_SCALE_DURATION, Easing::ElasticOut(1.0))
                .with_delay(ENTRANCE_DELAY),
        ));
        self.anim_rotation = Some(Drive::Tween(
            Tween::new(
                ENTRANCE_START_ROTATION,
                0.0,
                ENTRANCE_ROTATION_DURATION,
                Easing::QuadOut,
            )
            .with_delay(ENTRANCE_DELAY),
        ));
        true
    }

    /// Returns `true` if the entrance animation has been started (it only
    /// ever starts once).
    #[must_use]
    pub fn entrance_started(&self) -> bool {
        self.entrance_started
    }

    /// Begins a pan, snapshotting the current translation and
    /// interrupting any animation on the translation channels.
    pub fn pan_begin(&mut self) {
        self.anim_translate_x = None;
        self.anim_translate_y = None;
        self.pan.start(self.transform.translation);
    }

    /// Applies a pan event carrying the cumulative drag offset since the
    /// gesture began. Translation is unclamped.
    pub fn pan_update(&mut self, offset: Vec2) {
        if let Some(translation) = self.pan.update(offset) {
            self.transform.translation = translation;
        }
    }

    /// Ends the pan.
    pub fn pan_end(&mut self) {
        self.pan.end();
    }

    /// Returns `true` while a pan is active.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.pan.is_active()
    }

    /// Begins a pinch with the starting inter-pointer span, snapshotting
    /// the current scale and interrupting any animation on the scale
    /// channel.
    ///
    /// Pan and pinch compose: both may be active at once, so a two-finger
    /// drag pans and scales simultaneously.
    pub fn pinch_begin(&mut self, span: f64) {
        self.anim_scale = None;
        self.pinch.start(self.transform.scale, span);
    }

    /// Applies a pinch event carrying the live inter-pointer span. The
    /// resulting scale is clamped to `[MIN_SCALE, MAX_SCALE]`.
    pub fn pinch_update(&mut self, span: f64) {
        if let Some(scale) = self.pinch.update(span) {
            self.transform.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
        }
    }

    /// Ends the pinch.
    pub fn pinch_end(&mut self) {
        self.pinch.end();
    }

    /// Returns `true` while a pinch is active.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.pinch.is_active()
    }

    /// Zoom-button step in: springs the scale up by [`ZOOM_STEP`],
    /// clamped to [`MAX_SCALE`].
    pub fn zoom_in(&mut self) {
        self.spring_scale_to((self.transform.scale + ZOOM_STEP).clamp(MIN_SCALE, MAX_SCALE));
    }

    /// Zoom-button step out: springs the scale down by [`ZOOM_STEP`],
    /// clamped to [`MIN_SCALE`]. The floor deliberately matches the pinch
    /// clamp rather than stopping at 1.
    pub fn zoom_out(&mut self) {
        self.spring_scale_to((self.transform.scale - ZOOM_STEP).clamp(MIN_SCALE, MAX_SCALE));
    }

    /// Animates back to the identity transform (translation zero, scale 1,
    /// rotation 0°) with a damped spring per channel, and clears any
    /// active gesture baselines.
    pub fn reset(&mut self) {
        let config = SpringConfig::default();
        self.anim_translate_x = Some(Drive::Spring(Spring::new(
            self.transform.translation.x,
            0.0,
            config,
        )));
        self.anim_translate_y = Some(Drive::Spring(Spring::new(
            self.transform.translation.y,
            0.0,
            config,
        )));
        self.anim_scale = Some(Drive::Spring(Spring::new(self.transform.scale, 1.0, config)));
        self.anim_rotation = Some(Drive::Spring(Spring::new(
            self.transform.rotation,
            0.0,
            config,
        )));
        self.pan.end();
        self.pinch.end();
    }

    /// Advances all running animations by `dt` seconds, writing their
    /// values into the transform and dropping the ones that finished.
    pub fn tick(&mut self, dt: f64) {
        if let Some(value) = Self::advance(&mut self.anim_translate_x, dt) {
            self.transform.translation.x = value;
        }
        if let Some(value) = Self::advance(&mut self.anim_translate_y, dt) {
            self.transform.translation.y = value;
        }
        if let Some(value) = Self::advance(&mut self.anim_scale, dt) {
            self.transform.scale = value;
        }
        if let Some(value) = Self::advance(&mut self.anim_rotation, dt) {
            self.transform.rotation = value;
        }
    }

    /// Returns `true` while any channel animation is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.anim_translate_x.is_some()
            || self.anim_translate_y.is_some()
            || self.anim_scale.is_some()
            || self.anim_rotation.is_some()
    }

    fn spring_scale_to(&mut self, target: f64) {
        self.anim_scale = Some(Drive::Spring(Spring::new(
            self.transform.scale,
            target,
            SpringConfig::default(),
        )));
    }

    fn advance(slot: &mut Option<Drive>, dt: f64) -> Option<f64> {
        let drive = slot.as_mut()?;
        let value = drive.tick(dt);
        if drive.is_finished() {
            *slot = None;
        }
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn settle(view: &mut ViewportController) {
        let mut frames = 0;
        while view.is_animating() {
            view.tick(FRAME);
            frames += 1;
            assert!(frames < 10_000, "animation failed to settle");
        }
    }

    #[test]
    fn pan_offsets_accumulate_from_the_gesture_baseline() {
        let mut view = ViewportController::new();
        view.pan_begin();
        view.pan_update(Vec2::new(30.0, 0.0));
        view.pan_end();
        view.pan_begin();
        view.pan_update(Vec2::new(0.0, -12.0));
        view.pan_end();
        assert_eq!(view.transform().translation, Vec2::new(30.0, -12.0));
    }

    #[test]
    fn scale_never_leaves_its_bounds_under_extreme_pinches() {
        let mut view = ViewportController::new();
        view.pinch_begin(100.0);
        view.pinch_update(1.0e9);
        assert_eq!(view.transform().scale, MAX_SCALE);
        view.pinch_update(1.0e-9);
        assert_eq!(view.transform().scale, MIN_SCALE);
        view.pinch_end();

        // A fresh pinch from the clamped scale still clamps.
        view.pinch_begin(50.0);
        view.pinch_update(5.0e7);
        assert_eq!(view.transform().scale, MAX_SCALE);
        view.pinch_end();
    }

    #[test]
    fn pan_and_pinch_compose_simultaneously() {
        let mut view = ViewportController::new();
        view.pan_begin();
        view.pinch_begin(100.0);
        view.pan_update(Vec2::new(8.0, 8.0));
        view.pinch_update(200.0);
        assert_eq!(view.transform().translation, Vec2::new(8.0, 8.0));
        assert_eq!(view.transform().scale, 2.0);
        assert!(view.is_panning() && view.is_pinching());
    }

    #[test]
    fn reset_restores_the_identity_exactly() {
        let mut view = ViewportController::new();
        view.pan_begin();
        view.pan_update(Vec2::new(250.0, -80.0));
        view.pan_end();
        view.pinch_begin(100.0);
        view.pinch_update(260.0);
        view.pinch_end();

        view.reset();
        settle(&mut view);
        assert_eq!(view.transform(), WheelTransform::IDENTITY);
    }

    #[test]
    fn zoom_buttons_step_by_half_and_clamp() {
        let mut view = ViewportController::new();
        view.zoom_in();
        settle(&mut view);
        assert_eq!(view.transform().scale, 1.5);

        for _ in 0..10 {
            view.zoom_in();
            settle(&mut view);
        }
        assert_eq!(view.transform().scale, MAX_SCALE);

        for _ in 0..10 {
            view.zoom_out();
            settle(&mut view);
        }
        // The zoom-out floor matches the pinch clamp, not 1.
        assert_eq!(view.transform().scale, MIN_SCALE);
    }

    #[test]
    fn entrance_runs_once_and_lands_upright_at_full_size() {
        let mut view = ViewportController::new();
        assert!(view.start_entrance());
        assert!(!view.start_entrance(), "entrance must be one-shot");
        assert!(view.entrance_started());

        // Before the delay elapses the wheel is still collapsed and turned.
        view.tick(0.1);
        assert_eq!(view.transform().scale, 0.0);
        assert_eq!(view.transform().rotation, -90.0);

        settle(&mut view);
        assert_eq!(view.transform().scale, 1.0);
        assert_eq!(view.transform().rotation, 0.0);
    }

    #[test]
    fn a_new_gesture_interrupts_an_in_flight_spring() {
        let mut view = ViewportController::new();
        view.pan_begin();
        view.pan_update(Vec2::new(300.0, 0.0));
        view.pan_end();
        view.reset();
        view.tick(FRAME);
        assert!(view.is_animating());

        // Grabbing the wheel mid-spring stops the translation animation
        // where it is; the scale/rotation springs keep going.
        view.pan_begin();
        let grabbed = view.transform().translation;
        view.tick(1.0);
        assert_eq!(view.transform().translation, grabbed);

        // And the pan continues from the grabbed position.
        view.pan_update(Vec2::new(10.0, 0.0));
        assert_eq!(view.transform().translation, grabbed + Vec2::new(10.0, 0.0));
    }

    #[test]
    fn pinch_interrupts_the_entrance_scale_but_not_its_rotation() {
        let mut view = ViewportController::new();
        view.start_entrance();
        view.tick(0.5);

        view.pinch_begin(100.0);
        view.pinch_update(120.0);
        let pinched = view.transform().scale;
        assert!(pinched >= MIN_SCALE);

        // Rotation keeps tweening to upright; scale stays gesture-driven.
        settle(&mut view);
        assert_eq!(view.transform().rotation, 0.0);
        assert_eq!(view.transform().scale, pinched);
    }
}
