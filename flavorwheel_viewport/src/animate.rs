// Copyright 2026 the Flavorwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time-driven animation primitives.
//!
//! Two kinds of drive cover everything the viewport needs: a damped
//! [`Spring`] toward a target (reset, zoom buttons) and a fixed-duration
//! eased [`Tween`] (the entrance choreography). Both are advanced by
//! elapsed seconds, are cancellable by simply dropping them, and converge;
//! neither promises a wall-clock completion time.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use core::f64::consts::PI;

/// Spring parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    /// Restoring force per unit displacement.
    pub stiffness: f64,
    /// Velocity damping.
    pub damping: f64,
    /// Mass of the animated value.
    pub mass: f64,
}

impl Default for SpringConfig {
    /// The viewport's house spring: slightly underdamped, settles in
    /// roughly half a second at 60 Hz ticks.
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 15.0,
            mass: 1.0,
        }
    }
}

/// Largest integration step, in seconds. Incoming frame deltas are split
/// into substeps no coarser than this so the integration stays stable even
/// if the host skips frames.
const MAX_SPRING_STEP: f64 = 1.0 / 120.0;

/// Displacement and velocity thresholds below which a spring snaps to its
/// target and reports itself settled.
const SPRING_REST: f64 = 1e-3;

/// A damped spring animating one scalar toward a target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    value: f64,
    velocity: f64,
    target: f64,
    config: SpringConfig,
}

impl Spring {
    /// Creates a spring at `value`, at rest, heading for `target`.
    #[must_use]
    pub fn new(value: f64, target: f64, config: SpringConfig) -> Self {
        Self {
            value,
            velocity: 0.0,
            target,
            config,
        }
    }

    /// Advances the spring by `dt` seconds and returns the new value.
    ///
    /// Semi-implicit Euler with bounded substeps; once displacement and
    /// velocity are both negligible the value snaps exactly to the target.
    pub fn tick(&mut self, dt: f64) -> f64 {
        let mut remaining = dt.max(0.0);
        while remaining > 0.0 && !self.is_settled() {
            let h = remaining.min(MAX_SPRING_STEP);
            let displacement = self.value - self.target;
            let acceleration =
                (-self.config.stiffness * displacement - self.config.damping * self.velocity)
                    / self.config.mass;
            self.velocity += acceleration * h;
            self.value += self.velocity * h;
            remaining -= h;
        }
        if !self.is_settled()
            && (self.value - self.target).abs() < SPRING_REST
            && self.velocity.abs() < SPRING_REST
        {
            self.value = self.target;
            self.velocity = 0.0;
        }
        self.value
    }

    /// The current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The target value.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Redirects the spring toward a new target, keeping its momentum.
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Returns `true` once the spring has snapped to its target.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }
}

/// Easing curves for [`Tween`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    /// No easing.
    Linear,
    /// Quadratic ease-out: fast start, decelerating finish.
    QuadOut,
    /// Elastic ease-out with the given bounciness: overshoots the target
    /// and rings before settling. Bounciness 1 gives a single overshoot.
    ElasticOut(f64),
}

impl Easing {
    /// Maps normalized time `t` in `[0, 1]` to eased progress.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::ElasticOut(bounciness) => {
                let p = bounciness * PI;
                1.0 - (t * PI / 2.0).cos().powi(3) * (t * p).cos()
            }
        }
    }
}

/// A fixed-duration eased interpolation between two values, with an
/// optional start delay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    duration: f64,
    delay: f64,
    elapsed: f64,
    easing: Easing,
}

impl Tween {
    /// Creates a tween from `from` to `to` over `duration` seconds.
    #[must_use]
    pub fn new(from: f64, to: f64, duration: f64, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            delay: 0.0,
            elapsed: 0.0,
            easing,
        }
    }

    /// Delays the start by `delay` seconds, returning the tween for
    /// chaining. The value holds at `from` during the delay.
    #[must_use]
    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    /// Advances the tween by `dt` seconds and returns the new value.
    pub fn tick(&mut self, dt: f64) -> f64 {
        self.elapsed += dt.max(0.0);
        self.value()
    }

    /// The current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        let t = self.elapsed - self.delay;
        if t <= 0.0 {
            self.from
        } else if t >= self.duration {
            self.to
        } else {
            self.from + (self.to - self.from) * self.easing.apply(t / self.duration)
        }
    }

    /// Returns `true` once the delay and duration have fully elapsed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed - self.delay >= self.duration
    }
}
