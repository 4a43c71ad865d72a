//! Input events for widgets.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Input event types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Mouse moved to position
    MouseMove {
        /// New position
        position: Point,
    },
    /// Mouse button pressed
    MouseDown {
        /// Position of click
        position: Point,
        /// Button pressed
        button: MouseButton,
    },
    /// Mouse button released
    MouseUp {
        /// Position of release
        position: Point,
        /// Button released
        button: MouseButton,
    },
    /// Touch started
    TouchStart {
        /// Touch identifier
        id: TouchId,
        /// Touch position
        position: Point,
    },
    /// Touch moved
    TouchMove {
        /// Touch identifier
        id: TouchId,
        /// New position
        position: Point,
    },
    /// Touch ended
    TouchEnd {
        /// Touch identifier
        id: TouchId,
        /// Final position
        position: Point,
    },
    /// Touch cancelled by the platform (e.g. palm rejection)
    TouchCancel {
        /// Touch identifier
        id: TouchId,
    },
    /// Pointer down
    PointerDown {
        /// Pointer ID
        pointer_id: PointerId,
        /// Pointer type
        pointer_type: PointerType,
        /// Position
        position: Point,
        /// Is primary pointer
        is_primary: bool,
    },
    /// Pointer moved
    PointerMove {
        /// Pointer ID
        pointer_id: PointerId,
        /// Position
        position: Point,
        /// Is primary pointer
        is_primary: bool,
    },
    /// Pointer up
    PointerUp {
        /// Pointer ID
        pointer_id: PointerId,
        /// Position
        position: Point,
        /// Is primary pointer
        is_primary: bool,
    },
    /// Pointer cancelled
    PointerCancel {
        /// Pointer ID
        pointer_id: PointerId,
    },
    /// Widget lost focus
    FocusOut,
}

/// Touch identifier for multi-touch tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct TouchId(pub u32);

/// Pointer identifier for pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct PointerId(pub u32);

/// Type of pointer device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PointerType {
    /// Mouse pointer
    #[default]
    Mouse,
    /// Touch pointer
    Touch,
    /// Pen/stylus pointer
    Pen,
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (wheel click)
    Middle,
}

/// Device-independent phase of a single press (mouse, touch or pointer).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PressPhase {
    /// Press began at a position
    Down(Point),
    /// Press moved to a position
    Move(Point),
    /// Press released at a position
    Up(Point),
    /// Press was taken away by the platform
    Cancel,
}

/// Device that produced a press.
///
/// A press is only continued by events from the same source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PressSource {
    /// The mouse
    Mouse,
    /// A touch point
    Touch(TouchId),
    /// A pointer
    Pointer(PointerId),
}

impl Event {
    /// Device that produced this event, if it belongs to a press.
    ///
    /// `FocusOut` has no source; it cancels whatever press is active.
    #[must_use]
    pub const fn press_source(&self) -> Option<PressSource> {
        match *self {
            Self::MouseMove { .. } | Self::MouseDown { .. } | Self::MouseUp { .. } => {
                Some(PressSource::Mouse)
            }
            Self::TouchStart { id, .. }
            | Self::TouchMove { id, .. }
            | Self::TouchEnd { id, .. }
            | Self::TouchCancel { id } => Some(PressSource::Touch(id)),
            Self::PointerDown { pointer_id, .. }
            | Self::PointerMove { pointer_id, .. }
            | Self::PointerUp { pointer_id, .. }
            | Self::PointerCancel { pointer_id } => Some(PressSource::Pointer(pointer_id)),
            Self::FocusOut => None,
        }
    }

    /// Classify this event as a phase of a primary press.
    ///
    /// Only the left mouse button, any touch and primary pointers count.
    /// Mouse moves are reported regardless of button state; callers track
    /// whether a press is active.
    #[must_use]
    pub fn press_phase(&self) -> Option<PressPhase> {
        match *self {
            Self::MouseDown {
                position,
                button: MouseButton::Left,
            }
            | Self::TouchStart { position, .. }
            | Self::PointerDown {
                position,
                is_primary: true,
                ..
            } => Some(PressPhase::Down(position)),
            Self::MouseMove { position }
            | Self::TouchMove { position, .. }
            | Self::PointerMove {
                position,
                is_primary: true,
                ..
            } => Some(PressPhase::Move(position)),
            Self::MouseUp {
                position,
                button: MouseButton::Left,
            }
            | Self::TouchEnd { position, .. }
            | Self::PointerUp {
                position,
                is_primary: true,
                ..
            } => Some(PressPhase::Up(position)),
            Self::TouchCancel { .. } | Self::PointerCancel { .. } | Self::FocusOut => {
                Some(PressPhase::Cancel)
            }
            _ => None,
        }
    }
}
