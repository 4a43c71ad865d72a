//! Gesture-to-value bridge.
//!
//! A drag is a small state machine: `Idle -> Dragging -> Idle`. Each input
//! is fed through [`step`] together with a snapshot of the slider
//! ([`GestureContext`]); the result carries the next state, the
//! notifications to deliver and, if any, the value to apply to the thumb.
//!
//! ```text
//!          Down inside touch rect
//!   Idle ─────────────────────────▶ Dragging { thumb, anchor }
//!    ▲                                  │  Move: value = f(anchor + dx)
//!    └──────────────────────────────────┘
//!          Release / Terminate
//! ```

use crate::range::ValueRange;
use crate::thumb::Thumb;
use crate::touch::TouchGeometry;
use rangeslider_core::Point;
use serde::{Deserialize, Serialize};

/// Drag state of the slider.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DragState {
    /// No active drag
    #[default]
    Idle,
    /// A thumb is being dragged
    Dragging {
        /// Thumb under the finger
        thumb: Thumb,
        /// Pixel offset of the thumb at touch-down
        anchor: f32,
    },
}

impl DragState {
    /// Whether a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Whether another component may take over the gesture.
    ///
    /// An active drag is never handed over voluntarily.
    #[must_use]
    pub const fn grants_termination(&self) -> bool {
        !self.is_dragging()
    }
}

/// Recognized gesture input.
///
/// `dx` is the cumulative horizontal delta since touch-down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Touch-down at a touch-surface-local location
    Down {
        /// Location of the touch
        location: Point,
    },
    /// Finger moved
    Move {
        /// Cumulative delta
        dx: f32,
    },
    /// Finger lifted
    Release {
        /// Cumulative delta
        dx: f32,
    },
    /// Gesture forcibly taken away
    Terminate {
        /// Cumulative delta
        dx: f32,
    },
}

/// Notification emitted to the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum SliderNotification {
    /// Drag began; carries the value before any change
    SlidingStart(f32),
    /// Value changed during a drag
    ValueChange(f32),
    /// Drag ended; carries the final value
    SlidingComplete(f32),
}

impl SliderNotification {
    /// Carried value.
    #[must_use]
    pub const fn value(&self) -> f32 {
        match *self {
            Self::SlidingStart(v) | Self::ValueChange(v) | Self::SlidingComplete(v) => v,
        }
    }
}

/// Snapshot of the slider used to interpret a gesture.
#[derive(Debug, Clone, Copy)]
pub struct GestureContext {
    /// Value range
    pub range: ValueRange,
    /// Touch geometry of the thumbs
    pub touch: TouchGeometry,
    /// Thumb wired to gestures
    pub thumb: Thumb,
    /// Current value of that thumb
    pub value: f32,
    /// Whether drags are ignored
    pub disabled: bool,
}

impl GestureContext {
    /// Pixel travel of a thumb.
    #[must_use]
    pub fn track_length(&self) -> f32 {
        self.touch.container.width - self.touch.thumb.width
    }

    /// Current pixel offset of the thumb; degenerate ranges pin it at 0.
    #[must_use]
    pub fn thumb_offset(&self) -> f32 {
        self.range
            .pixel_offset_of(self.value, self.track_length())
            .unwrap_or(0.0)
    }

    fn value_at(&self, anchor: f32, dx: f32) -> f32 {
        self.range.value_from_pixel(anchor + dx, self.track_length())
    }
}

/// Result of feeding one event through the state machine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GestureOutcome {
    /// Next drag state
    pub state: DragState,
    /// Notifications in delivery order
    pub notifications: Vec<SliderNotification>,
    /// Value to set on the dragged thumb
    pub value: Option<(Thumb, f32)>,
}

impl GestureOutcome {
    fn unchanged(state: DragState) -> Self {
        Self {
            state,
            ..Self::default()
        }
    }

    /// Whether the event was consumed.
    #[must_use]
    pub fn is_claimed(&self) -> bool {
        self.state.is_dragging() || !self.notifications.is_empty() || self.value.is_some()
    }
}

/// Advance the drag state machine by one event.
#[must_use]
pub fn step(state: DragState, ctx: &GestureContext, event: GestureEvent) -> GestureOutcome {
    match (state, event) {
        (DragState::Idle, GestureEvent::Down { location }) => {
            let anchor = ctx.thumb_offset();
            if !ctx.touch.hit_test(anchor, location) {
                return GestureOutcome::unchanged(DragState::Idle);
            }
            GestureOutcome {
                state: DragState::Dragging {
                    thumb: ctx.thumb,
                    anchor,
                },
                notifications: vec![SliderNotification::SlidingStart(ctx.value)],
                value: None,
            }
        }
        (DragState::Dragging { thumb, anchor }, GestureEvent::Move { dx }) => {
            if ctx.disabled {
                return GestureOutcome::unchanged(state);
            }
            let value = ctx.value_at(anchor, dx);
            GestureOutcome {
                state,
                notifications: vec![SliderNotification::ValueChange(value)],
                value: Some((thumb, value)),
            }
        }
        (
            DragState::Dragging { thumb, anchor },
            GestureEvent::Release { dx } | GestureEvent::Terminate { dx },
        ) => {
            if ctx.disabled {
                return GestureOutcome::unchanged(DragState::Idle);
            }
            let value = ctx.value_at(anchor, dx);
            GestureOutcome {
                state: DragState::Idle,
                notifications: vec![SliderNotification::SlidingComplete(value)],
                value: Some((thumb, value)),
            }
        }
        // A second touch-down mid-drag, or moves without a drag
        _ => GestureOutcome::unchanged(state),
    }
}
