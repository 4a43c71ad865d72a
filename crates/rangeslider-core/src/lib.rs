//! Core types and traits for the rangeslider widget.
//!
//! This crate provides the UI primitives the widget is built on:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`] with hex parsing
//! - Layout constraints: [`Constraints`]
//! - Input events: [`Event`], normalized through [`PressPhase`]
//! - Animation: [`Easing`], [`Spring`], [`EasedValue`], [`AnimatedValue`]
//! - Painting: [`Canvas`], [`RecordingCanvas`], [`DrawCommand`]

pub mod animation;
mod canvas;
mod color;
mod constraints;
pub mod draw;
mod event;
mod geometry;
pub mod widget;

pub use animation::{AnimatedValue, EasedValue, Easing, Spring, SpringConfig};
pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use draw::DrawCommand;
pub use event::{Event, MouseButton, PointerId, PointerType, PressPhase, PressSource, TouchId};
pub use geometry::{CornerRadius, Point, Rect, Size};
pub use widget::{AccessibleRole, Canvas, LayoutResult, TypeId, Widget};
