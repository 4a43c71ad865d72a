//! Draw commands recorded by canvases.
//!
//! All painting reduces to these primitives.

use crate::{Color, CornerRadius, Point, Rect};
use serde::{Deserialize, Serialize};

/// Box styling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxStyle {
    /// Fill color (None = no fill)
    pub fill: Option<Color>,
}

impl BoxStyle {
    /// Create a box with only fill color.
    #[must_use]
    pub const fn fill(color: Color) -> Self {
        Self { fill: Some(color) }
    }
}

/// Drawing primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Draw a rectangle
    Rect {
        /// Rectangle bounds
        bounds: Rect,
        /// Corner radius
        radius: CornerRadius,
        /// Box style
        style: BoxStyle,
    },

    /// Draw a circle
    Circle {
        /// Center point
        center: Point,
        /// Radius
        radius: f32,
        /// Box style
        style: BoxStyle,
    },

    /// Apply opacity
    Opacity {
        /// Alpha value (0.0 - 1.0)
        alpha: f32,
        /// Child command
        child: Box<DrawCommand>,
    },
}

impl DrawCommand {
    /// Create a filled rectangle.
    #[must_use]
    pub const fn filled_rect(bounds: Rect, color: Color) -> Self {
        Self::Rect {
            bounds,
            radius: CornerRadius::ZERO,
            style: BoxStyle::fill(color),
        }
    }

    /// Create a filled rounded rectangle.
    #[must_use]
    pub const fn rounded_rect(bounds: Rect, radius: f32, color: Color) -> Self {
        Self::Rect {
            bounds,
            radius: CornerRadius::uniform(radius),
            style: BoxStyle::fill(color),
        }
    }

    /// Create a filled circle.
    #[must_use]
    pub const fn filled_circle(center: Point, radius: f32, color: Color) -> Self {
        Self::Circle {
            center,
            radius,
            style: BoxStyle::fill(color),
        }
    }

    /// Wrap with opacity.
    #[must_use]
    pub fn with_opacity(self, alpha: f32) -> Self {
        Self::Opacity {
            alpha: alpha.clamp(0.0, 1.0),
            child: Box::new(self),
        }
    }

    /// Effective opacity after unwrapping any `Opacity` layers.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        match self {
            Self::Opacity { alpha, child } => alpha * child.opacity(),
            _ => 1.0,
        }
    }

    /// The innermost drawable primitive.
    #[must_use]
    pub fn primitive(&self) -> &Self {
        match self {
            Self::Opacity { child, .. } => child.primitive(),
            other => other,
        }
    }

    /// Bounds of the innermost primitive.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        match self.primitive() {
            Self::Rect { bounds, .. } => *bounds,
            Self::Circle { center, radius, .. } => Rect::new(
                center.x - radius,
                center.y - radius,
                radius * 2.0,
                radius * 2.0,
            ),
            Self::Opacity { .. } => Rect::default(),
        }
    }

    /// Fill color of the innermost primitive.
    #[must_use]
    pub fn fill(&self) -> Option<Color> {
        match self.primitive() {
            Self::Rect { style, .. } | Self::Circle { style, .. } => style.fill,
            Self::Opacity { .. } => None,
        }
    }
}
