//! Draggable dual-handle range slider.
//!
//! The widget maps a value range onto a horizontal track, hit-tests touches
//! against enlarged thumb targets, turns drags into value notifications and
//! reconciles externally supplied values with optional transitions.
//!
//! # Example
//!
//! ```
//! use rangeslider::{GestureEvent, RangeSlider, SliderConfig, SliderNotification};
//! use rangeslider_core::{Point, Rect, Widget};
//!
//! let mut slider = RangeSlider::new(SliderConfig::default()).unwrap();
//! slider.layout(Rect::new(0.0, 0.0, 300.0, 20.0));
//!
//! // The left thumb rests at 0.2: offset 56 on a 280 px track
//! slider.on_gesture_event(GestureEvent::Down { location: Point::new(76.0, 20.0) });
//! let out = slider.on_gesture_event(GestureEvent::Move { dx: 28.0 });
//! assert!(matches!(out[0], SliderNotification::ValueChange(v) if (v - 0.3).abs() < 1e-5));
//! ```

pub mod config;
pub mod error;
pub mod gesture;
pub mod measure;
pub mod range;
pub mod slider;
pub mod thumb;
pub mod touch;

pub use config::{AnimationConfig, AnimationType, SliderConfig};
pub use error::{ConfigError, RangeError};
pub use gesture::{DragState, GestureContext, GestureEvent, GestureOutcome, SliderNotification};
pub use measure::{Dimension, MeasuredSizes};
pub use range::ValueRange;
pub use slider::{RangeSlider, ValueCallback};
pub use thumb::{Thumb, ThumbValue, TransitionPolicy};
pub use touch::{touch_overflow, touch_surface, TouchGeometry};
