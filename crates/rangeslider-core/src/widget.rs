//! Widget trait and related types.
//!
//! Widgets follow a measure-layout-paint cycle:
//!
//! 1. **Measure**: Compute intrinsic size given constraints
//! 2. **Layout**: Position self within allocated bounds
//! 3. **Paint**: Generate draw commands for rendering
//!
//! Input arrives through [`Widget::event`], which may return a message for
//! the host to route.
//!
//! # Examples
//!
//! ```
//! use rangeslider_core::TypeId;
//!
//! let string_type = TypeId::of::<String>();
//! let i32_type = TypeId::of::<i32>();
//! assert_ne!(string_type, i32_type);
//! ```

use crate::constraints::Constraints;
use crate::event::Event;
use crate::geometry::{Point, Rect, Size};
use crate::Color;
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Type identifier for widget types (used for diffing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(std::any::TypeId);

impl TypeId {
    /// Get the type ID for a type.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self(std::any::TypeId::of::<T>())
    }
}

/// Result of laying out a widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutResult {
    /// Computed size after layout
    pub size: Size,
}

/// Core widget trait that all UI elements implement.
pub trait Widget: Send + Sync {
    /// Get the type identifier for this widget type.
    fn type_id(&self) -> TypeId;

    /// Compute intrinsic size constraints.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Position children within allocated bounds.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Generate draw commands for rendering.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Handle input events.
    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>>;

    /// Get child widgets for tree traversal.
    fn children(&self) -> &[Box<dyn Widget>];

    /// Get mutable child widgets.
    fn children_mut(&mut self) -> &mut [Box<dyn Widget>];

    /// Check if this widget is interactive (can receive focus/events).
    fn is_interactive(&self) -> bool {
        false
    }

    /// Check if this widget can receive keyboard focus.
    fn is_focusable(&self) -> bool {
        false
    }

    /// Get the accessible name for screen readers.
    fn accessible_name(&self) -> Option<&str> {
        None
    }

    /// Get the accessible role.
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Generic
    }

    /// Get the test ID for this widget (if any).
    fn test_id(&self) -> Option<&str> {
        None
    }

    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect {
        Rect::default()
    }
}

/// Canvas trait for paint operations.
///
/// This is a minimal abstraction over the rendering backend.
pub trait Canvas {
    /// Draw a filled rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw a filled rectangle with uniformly rounded corners.
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color);

    /// Draw a filled circle.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);

    /// Multiply the opacity of everything drawn until the matching pop.
    fn push_opacity(&mut self, alpha: f32);

    /// Pop the opacity layer.
    fn pop_opacity(&mut self);
}

/// Accessible role for screen readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccessibleRole {
    /// Generic element
    #[default]
    Generic,
    /// Slider
    Slider,
}
