//! Animation primitives: easing curves, spring physics and timed transitions.
//!
//! Everything here is advanced explicitly with `update(dt)` (seconds), so the
//! host's frame scheduler stays in charge of when animations run.

use serde::{Deserialize, Serialize};

// =============================================================================
// Easing
// =============================================================================

/// Standard easing functions for animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Linear interpolation (no easing)
    Linear,
    /// Ease in (slow start)
    EaseIn,
    /// Ease out (slow end)
    EaseOut,
    /// Ease in and out (slow start and end)
    #[default]
    EaseInOut,
    /// Cubic ease in and out
    CubicInOut,
}

impl Easing {
    /// Apply easing function to a normalized time value (0.0 to 1.0).
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => (1.0 - t).mul_add(-(1.0 - t), 1.0),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0f64).mul_add(t, 2.0).powi(2) / 2.0
                }
            }
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0f64).mul_add(t, 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

// =============================================================================
// SpringConfig
// =============================================================================

/// Spring physics configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    /// Mass of the object (affects inertia)
    pub mass: f64,
    /// Stiffness of the spring (affects speed)
    pub stiffness: f64,
    /// Damping coefficient (affects bounciness)
    pub damping: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::from_tension_friction(100.0, 7.0)
    }
}

impl SpringConfig {
    /// Create custom spring config.
    #[must_use]
    pub const fn custom(mass: f64, stiffness: f64, damping: f64) -> Self {
        Self {
            mass,
            stiffness,
            damping,
        }
    }

    /// Build a unit-mass spring from Origami-style tension/friction values.
    ///
    /// Tension maps to stiffness as `(tension - 30) * 3.62 + 194` and friction
    /// to damping as `(friction - 8) * 3 + 25`.
    #[must_use]
    pub fn from_tension_friction(tension: f64, friction: f64) -> Self {
        let stiffness = (tension - 30.0).mul_add(3.62, 194.0);
        let damping = (friction - 8.0).mul_add(3.0, 25.0);
        Self::custom(1.0, stiffness.max(0.0), damping.max(0.0))
    }
}

// =============================================================================
// Spring
// =============================================================================

/// A spring-animated value.
#[derive(Debug, Clone)]
pub struct Spring {
    /// Current value
    pub value: f64,
    /// Target value
    pub target: f64,
    /// Current velocity
    pub velocity: f64,
    /// Spring configuration
    pub config: SpringConfig,
    /// Whether animation is complete
    pub at_rest: bool,
    /// Precision threshold for settling
    pub precision: f64,
}

impl Spring {
    /// Longest single integration step, in seconds.
    pub const MAX_SUBSTEP: f64 = 1.0 / 120.0;

    /// Create a new spring resting at an initial value.
    #[must_use]
    pub fn new(initial: f64) -> Self {
        Self {
            value: initial,
            target: initial,
            velocity: 0.0,
            config: SpringConfig::default(),
            at_rest: true,
            precision: 0.001,
        }
    }

    /// Set spring configuration.
    #[must_use]
    pub const fn with_config(mut self, config: SpringConfig) -> Self {
        self.config = config;
        self
    }

    /// Set target value.
    pub fn set_target(&mut self, target: f64) {
        if (self.target - target).abs() > f64::EPSILON {
            self.target = target;
            self.at_rest = false;
        }
    }

    /// Update spring physics for a time step (dt in seconds).
    ///
    /// Long frames are integrated in substeps of at most
    /// [`Self::MAX_SUBSTEP`] so the integration stays stable.
    pub fn update(&mut self, dt: f64) {
        if self.at_rest || !dt.is_finite() || dt <= 0.0 {
            return;
        }

        let steps = (dt / Self::MAX_SUBSTEP).ceil().max(1.0);
        let h = dt / steps;
        for _ in 0..steps as u64 {
            self.integrate(h);
            if self.at_rest {
                break;
            }
        }
    }

    fn integrate(&mut self, h: f64) {
        let displacement = self.value - self.target;
        let spring_force = -self.config.stiffness * displacement;
        let damping_force = -self.config.damping * self.velocity;
        let acceleration = (spring_force + damping_force) / self.config.mass;

        // Semi-implicit Euler
        self.velocity += acceleration * h;
        self.value += self.velocity * h;

        if (self.value - self.target).abs() < self.precision && self.velocity.abs() < self.precision
        {
            self.value = self.target;
            self.velocity = 0.0;
            self.at_rest = true;
        }
    }
}

// =============================================================================
// EasedValue
// =============================================================================

/// A fixed-duration transition following an easing curve.
#[derive(Debug, Clone)]
pub struct EasedValue {
    /// Start value
    pub from: f64,
    /// End value
    pub to: f64,
    /// Total duration in seconds
    pub duration: f64,
    /// Time to wait before the transition starts, in seconds
    pub delay: f64,
    /// Elapsed time including the delay
    pub elapsed: f64,
    /// Easing function
    pub easing: Easing,
}

impl EasedValue {
    /// Create new eased animation.
    #[must_use]
    pub fn new(from: f64, to: f64, duration: f64) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            delay: 0.0,
            elapsed: 0.0,
            easing: Easing::EaseInOut,
        }
    }

    /// Set easing function.
    #[must_use]
    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Delay the start of the transition.
    #[must_use]
    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    /// Progress from 0.0 to 1.0, ignoring the delay period.
    #[must_use]
    pub fn progress(&self) -> f64 {
        let active = (self.elapsed - self.delay).max(0.0);
        if self.duration > 0.0 {
            (active / self.duration).clamp(0.0, 1.0)
        } else if self.elapsed >= self.delay {
            1.0
        } else {
            0.0
        }
    }

    /// Get current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        let eased = self.easing.apply(self.progress());
        (self.to - self.from).mul_add(eased, self.from)
    }

    /// Whether animation is complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.delay + self.duration
    }

    /// Update animation.
    pub fn update(&mut self, dt: f64) {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.delay + self.duration);
    }
}

// =============================================================================
// AnimatedValue
// =============================================================================

/// An in-flight animation driven by either easing or spring physics.
#[derive(Debug, Clone)]
pub enum AnimatedValue {
    /// Easing-based animation
    Eased(EasedValue),
    /// Spring physics animation
    Spring(Spring),
}

impl AnimatedValue {
    /// Get current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        match self {
            Self::Eased(e) => e.value(),
            Self::Spring(s) => s.value,
        }
    }

    /// Value the animation is heading towards.
    #[must_use]
    pub fn target(&self) -> f64 {
        match self {
            Self::Eased(e) => e.to,
            Self::Spring(s) => s.target,
        }
    }

    /// Whether animation is complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        match self {
            Self::Eased(e) => e.is_complete(),
            Self::Spring(s) => s.at_rest,
        }
    }

    /// Update animation for a time step.
    pub fn update(&mut self, dt: f64) {
        match self {
            Self::Eased(e) => e.update(dt),
            Self::Spring(s) => s.update(dt),
        }
    }
}
