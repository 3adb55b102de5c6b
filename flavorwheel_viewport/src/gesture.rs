// Copyright 2026 the Flavorwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture state machines.
//!
//! Each recognizer snapshots a baseline when its gesture starts and turns
//! subsequent events into an absolute translation or scale for the
//! controller to apply. The recognizers hold no reference to the
//! transform, so pan and pinch can run simultaneously without racing on
//! shared fields.

use kurbo::Vec2;

/// Tracks a one-pointer pan.
///
/// Pan events are expected to carry the cumulative translation since the
/// gesture began (not per-frame deltas), which is what the recognizer adds
/// to the baseline snapshotted at [`PanRecognizer::start`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanRecognizer {
    baseline: Option<Vec2>,
}

impl PanRecognizer {
    /// Starts a pan, snapshotting the current translation as the baseline.
    pub fn start(&mut self, translation: Vec2) {
        self.baseline = Some(translation);
    }

    /// Returns the new translation for a cumulative drag `offset`, or
    /// `None` if no pan is active.
    #[must_use]
    pub fn update(&self, offset: Vec2) -> Option<Vec2> {
        self.baseline.map(|baseline| baseline + offset)
    }

    /// Ends the pan.
    pub fn end(&mut self) {
        self.baseline = None;
    }

    /// Returns `true` while a pan is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.baseline.is_some()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct PinchBaseline {
    scale: f64,
    span: f64,
}

/// Tracks a two-pointer pinch.
///
/// Pinch events carry the live inter-pointer distance; the recognizer
/// turns the ratio of the current span to the span at gesture start into
/// an absolute scale from the baseline snapshotted at
/// [`PinchRecognizer::start`]. The result is unclamped; the controller
/// owns the scale bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PinchRecognizer {
    baseline: Option<PinchBaseline>,
}

impl PinchRecognizer {
    /// Starts a pinch, snapshotting the current scale and the starting
    /// inter-pointer span. A non-positive span is ignored: two pointers on
    /// the same pixel define no ratio.
    pub fn start(&mut self, scale: f64, span: f64) {
        if span > 0.0 {
            self.baseline = Some(PinchBaseline { scale, span });
        }
    }

    /// Returns the new (unclamped) scale for the current inter-pointer
    /// `span`, or `None` if no pinch is active or the span is degenerate.
    #[must_use]
    pub fn update(&self, span: f64) -> Option<f64> {
        if span <= 0.0 {
            return None;
        }
        self.baseline
            .map(|baseline| baseline.scale * (span / baseline.span))
    }

    /// Ends the pinch.
    pub fn end(&mut self) {
        self.baseline = None;
    }

    /// Returns `true` while a pinch is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.baseline.is_some()
    }
}

/// Tracks which element is currently pressed, for touch-feedback
/// highlighting and click-style activation.
///
/// Generic over the application's id type (e.g. a segment's node handle).
/// Releasing reports the pressed id so the caller can fire its selection
/// callback; a cancel (pointer left the element, gesture claimed the
/// pointer) drops the press without activating.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PressState<T> {
    pressed: Option<T>,
}

impl<T> Default for PressState<T> {
    fn default() -> Self {
        Self { pressed: None }
    }
}

impl<T: Copy + PartialEq> PressState<T> {
    /// Records a press on `target`, replacing any previous press.
    pub fn press(&mut self, target: T) {
        self.pressed = Some(target);
    }

    /// Releases the press, returning the activated id if one was pressed.
    pub fn release(&mut self) -> Option<T> {
        self.pressed.take()
    }

    /// Drops the press without activating anything.
    pub fn cancel(&mut self) {
        self.pressed = None;
    }

    /// Returns `true` while `target` is the pressed element (e.g. to
    /// render it dimmed).
    #[must_use]
    pub fn is_pressed(&self, target: T) -> bool {
        self.pressed == Some(target)
    }

    /// The currently pressed id, if any.
    #[must_use]
    pub fn pressed(&self) -> Option<T> {
        self.pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pan_adds_cumulative_offset_to_the_baseline() {
        let mut pan = PanRecognizer::default();
        assert_eq!(pan.update(Vec2::new(5.0, 5.0)), None);

        pan.start(Vec2::new(10.0, -4.0));
        assert!(pan.is_active());
        assert_eq!(pan.update(Vec2::new(3.0, 7.0)), Some(Vec2::new(13.0, 3.0)));
        // Offsets are cumulative, not additive across updates.
        assert_eq!(pan.update(Vec2::new(6.0, 0.0)), Some(Vec2::new(16.0, -4.0)));

        pan.end();
        assert_eq!(pan.update(Vec2::new(1.0, 1.0)), None);
    }

    #[test]
    fn pinch_scales_by_span_ratio() {
        let mut pinch = PinchRecognizer::default();
        pinch.start(2.0, 100.0);
        assert_eq!(pinch.update(150.0), Some(3.0));
        assert_eq!(pinch.update(50.0), Some(1.0));
    }

    #[test]
    fn pinch_ignores_degenerate_spans() {
        let mut pinch = PinchRecognizer::default();
        pinch.start(1.0, 0.0);
        assert!(!pinch.is_active());

        pinch.start(1.0, 80.0);
        assert_eq!(pinch.update(0.0), None);
        assert_eq!(pinch.update(-5.0), None);
    }

    #[test]
    fn press_release_reports_the_activation() {
        let mut press: PressState<u32> = PressState::default();
        press.press(7);
        assert!(press.is_pressed(7));
        assert!(!press.is_pressed(3));
        assert_eq!(press.release(), Some(7));
        assert_eq!(press.release(), None);
    }

    #[test]
    fn press_cancel_activates_nothing() {
        let mut press: PressState<u32> = PressState::default();
        press.press(7);
        press.cancel();
        assert_eq!(press.release(), None);
        assert_eq!(press.pressed(), None);
    }
}
