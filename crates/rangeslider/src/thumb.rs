//! Per-thumb value cells and their transitions.
//!
//! Each thumb owns one [`ThumbValue`] for the whole lifetime of the slider.
//! Reconfiguration mutates the cell in place; it is never recreated, so an
//! in-flight transition or an active drag survives unrelated updates.

use rangeslider_core::{AnimatedValue, EasedValue, Easing, Spring, SpringConfig};
use serde::{Deserialize, Serialize};

/// Which handle of the range slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Thumb {
    /// Lower handle
    Left,
    /// Upper handle
    Right,
}

impl Thumb {
    /// Both thumbs, left first.
    pub const ALL: [Self; 2] = [Self::Left, Self::Right];
}

/// How a thumb moves to a new externally supplied value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionPolicy {
    /// Spring physics parameterized by Origami tension/friction.
    Spring {
        /// Spring tension
        tension: f64,
        /// Spring friction
        friction: f64,
    },
    /// Fixed-duration eased transition.
    Timing {
        /// Duration in milliseconds
        duration_ms: f64,
        /// Delay before starting, in milliseconds
        delay_ms: f64,
        /// Easing curve
        easing: Easing,
    },
}

impl TransitionPolicy {
    /// Build the animation that carries a thumb from `from` to `to`.
    ///
    /// `velocity` seeds a spring so a superseded spring hands over smoothly.
    #[must_use]
    pub fn start(self, from: f32, to: f32, velocity: f64) -> AnimatedValue {
        match self {
            Self::Spring { tension, friction } => {
                let mut spring = Spring::new(f64::from(from))
                    .with_config(SpringConfig::from_tension_friction(tension, friction));
                spring.velocity = velocity;
                spring.set_target(f64::from(to));
                AnimatedValue::Spring(spring)
            }
            Self::Timing {
                duration_ms,
                delay_ms,
                easing,
            } => AnimatedValue::Eased(
                EasedValue::new(f64::from(from), f64::from(to), duration_ms / 1000.0)
                    .with_delay(delay_ms / 1000.0)
                    .with_easing(easing),
            ),
        }
    }
}

/// Persistent value cell for one thumb.
#[derive(Debug, Clone)]
pub struct ThumbValue {
    value: f32,
    animation: Option<AnimatedValue>,
}

impl ThumbValue {
    /// Create a cell resting at `value`.
    #[must_use]
    pub const fn new(value: f32) -> Self {
        Self {
            value,
            animation: None,
        }
    }

    /// Current (possibly mid-transition) value.
    #[must_use]
    pub const fn value(&self) -> f32 {
        self.value
    }

    /// Value the cell will settle at.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.animation
            .as_ref()
            .map_or(self.value, |anim| anim.target() as f32)
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Set the value immediately, cancelling any in-flight transition.
    pub fn set(&mut self, value: f32) {
        self.animation = None;
        self.value = value;
    }

    /// Start a transition towards `target`, superseding any in-flight one.
    pub fn animate_to(&mut self, target: f32, policy: TransitionPolicy) {
        let velocity = match &self.animation {
            Some(AnimatedValue::Spring(spring)) => spring.velocity,
            _ => 0.0,
        };
        let animation = policy.start(self.value, target, velocity);
        if animation.is_complete() {
            self.set(target);
        } else {
            self.animation = Some(animation);
        }
    }

    /// Advance the in-flight transition by `dt` seconds.
    ///
    /// Returns whether the value changed.
    pub fn tick(&mut self, dt: f64) -> bool {
        let Some(animation) = self.animation.as_mut() else {
            return false;
        };
        animation.update(dt);
        let next = animation.value() as f32;
        if animation.is_complete() {
            self.animation = None;
        }
        let changed = next != self.value;
        self.value = next;
        changed
    }
}
