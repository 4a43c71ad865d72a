//! Thumb touch targets.
//!
//! A thumb can be visually small while its touch target stays large. The
//! touch target has the same center as the visible thumb; the amount by
//! which it exceeds the visible element (the overflow) also pads the
//! touch-capture surface so targets near the widget edges are not clipped.
//!
//! Touch rectangles are expressed in touch-surface-local coordinates: the
//! surface is the container outset by half the overflow on every side.

use rangeslider_core::{Point, Rect, Size};

/// Per-axis amount by which the touch target exceeds the visible element.
///
/// Each component is `max(0, touch - visible)`; half of it lands on each side.
#[must_use]
pub fn touch_overflow(touch_size: Size, visible_size: Size) -> Size {
    touch_size.excess_over(&visible_size)
}

/// Touch-capture surface in the container's coordinate space.
#[must_use]
pub fn touch_surface(container: Rect, overflow: Size) -> Rect {
    container.outset(overflow.width / 2.0, overflow.height / 2.0)
}

/// Geometry needed to place a thumb's touch rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchGeometry {
    /// Measured container size
    pub container: Size,
    /// Measured visible thumb size
    pub thumb: Size,
    /// Configured touch target size
    pub touch_size: Size,
}

impl TouchGeometry {
    /// Overflow of the touch target.
    ///
    /// Horizontally the target is compared with the thumb; vertically with
    /// the container, since the capture surface spans the container height.
    #[must_use]
    pub fn overflow(&self) -> Size {
        touch_overflow(
            self.touch_size,
            Size::new(self.thumb.width, self.container.height),
        )
    }

    /// Touch rectangle for a thumb whose left edge is at `thumb_offset`.
    ///
    /// Surface-local coordinates.
    #[must_use]
    pub fn thumb_touch_rect(&self, thumb_offset: f32) -> Rect {
        let overflow = self.overflow();
        Rect::new(
            overflow.width / 2.0
                + thumb_offset
                + (self.thumb.width - self.touch_size.width) / 2.0,
            overflow.height / 2.0 + (self.container.height - self.touch_size.height) / 2.0,
            self.touch_size.width,
            self.touch_size.height,
        )
    }

    /// Whether a surface-local point hits the thumb at `thumb_offset`.
    #[must_use]
    pub fn hit_test(&self, thumb_offset: f32, point: Point) -> bool {
        self.thumb_touch_rect(thumb_offset).contains_point(&point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn geometry() -> TouchGeometry {
        TouchGeometry {
            container: Size::new(300.0, 20.0),
            thumb: Size::square(20.0),
            touch_size: Size::square(40.0),
        }
    }

    #[test]
    fn test_overflow_twenty_vs_forty() {
        let overflow = touch_overflow(Size::square(40.0), Size::square(20.0));
        assert_eq!(overflow, Size::square(20.0));
        // Split evenly: 10 on each side
        assert_eq!(overflow.width / 2.0, 10.0);
        assert_eq!(overflow.height / 2.0, 10.0);
    }

    #[test]
    fn test_overflow_never_negative() {
        let overflow = touch_overflow(Size::square(10.0), Size::new(20.0, 5.0));
        assert_eq!(overflow, Size::new(0.0, 5.0));
    }

    #[test]
    fn test_geometry_overflow_uses_container_height() {
        let tall = TouchGeometry {
            container: Size::new(300.0, 40.0),
            ..geometry()
        };
        assert_eq!(tall.overflow(), Size::new(20.0, 0.0));
    }

    #[test]
    fn test_touch_surface_outsets_container() {
        let surface = touch_surface(Rect::new(0.0, 0.0, 300.0, 20.0), Size::square(20.0));
        assert_eq!(surface, Rect::new(-10.0, -10.0, 320.0, 40.0));
    }

    #[test]
    fn test_thumb_touch_rect_centered_on_thumb() {
        let g = geometry();
        let rect = g.thumb_touch_rect(50.0);
        // 10 (overflow/2) + 50 + (20 - 40)/2
        assert_eq!(rect, Rect::new(50.0, 0.0, 40.0, 40.0));
        // Thumb center in surface space is 10 + 50 + 10 = 70
        assert_eq!(rect.center().x, 70.0);
        assert_eq!(rect.center().y, 20.0);
    }

    #[test]
    fn test_hit_test_edges_inclusive() {
        let g = geometry();
        assert!(g.hit_test(50.0, Point::new(50.0, 0.0)));
        assert!(g.hit_test(50.0, Point::new(90.0, 40.0)));
        assert!(!g.hit_test(50.0, Point::new(49.0, 20.0)));
        assert!(!g.hit_test(50.0, Point::new(91.0, 20.0)));
        assert!(!g.hit_test(50.0, Point::new(70.0, 41.0)));
        assert!(!g.hit_test(50.0, Point::new(70.0, -1.0)));
    }

    #[test]
    fn test_thumb_touch_rect_at_edge_stays_on_surface() {
        let g = geometry();
        let rect = g.thumb_touch_rect(0.0);
        assert_eq!(rect.x, 0.0);
        let rect = g.thumb_touch_rect(280.0);
        let surface = touch_surface(Rect::from_size(g.container), g.overflow());
        assert_eq!(rect.right(), surface.width);
    }

    proptest! {
        #[test]
        fn prop_touch_rect_contains_thumb_center(
            offset in 0.0f32..500.0,
            thumb in 1.0f32..60.0,
            touch in 1.0f32..80.0,
            height in 1.0f32..60.0,
        ) {
            let g = TouchGeometry {
                container: Size::new(600.0, height),
                thumb: Size::square(thumb),
                touch_size: Size::square(touch),
            };
            let overflow = g.overflow();
            let center = Point::new(
                overflow.width / 2.0 + offset + thumb / 2.0,
                overflow.height / 2.0 + height / 2.0,
            );
            prop_assert!(g.hit_test(offset, center));
        }
    }
}
