//! Dual-handle range slider widget.

use crate::config::SliderConfig;
use crate::error::ConfigError;
use crate::gesture::{self, DragState, GestureContext, GestureEvent, SliderNotification};
use crate::measure::{Dimension, MeasuredSizes};
use crate::range::ValueRange;
use crate::thumb::{Thumb, ThumbValue};
use crate::touch::{touch_surface, TouchGeometry};
use rangeslider_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Color, Constraints, Event, Point, PressPhase, PressSource, Rect, Size, TypeId,
    Widget,
};
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Callback receiving the value of the active thumb.
pub type ValueCallback = Arc<dyn Fn(f32) + Send + Sync>;

/// Press being tracked by [`Widget::event`].
#[derive(Debug, Clone, Copy, PartialEq)]
struct Press {
    source: PressSource,
    origin: Point,
    dx: f32,
}

/// Range slider with two thumbs.
///
/// The host drives it through the explicit entry points
/// ([`on_measured`](Self::on_measured),
/// [`on_config_replaced`](Self::on_config_replaced),
/// [`on_gesture_event`](Self::on_gesture_event) and [`tick`](Self::tick))
/// or through the [`Widget`] trait, which forwards to them.
pub struct RangeSlider {
    config: SliderConfig,
    range: ValueRange,
    left: ThumbValue,
    right: ThumbValue,
    sizes: MeasuredSizes,
    drag: DragState,
    press: Option<Press>,
    bounds: Rect,
    on_value_change: Option<ValueCallback>,
    on_sliding_start: Option<ValueCallback>,
    on_sliding_complete: Option<ValueCallback>,
    test_id_value: Option<String>,
    accessible_name_value: Option<String>,
}

impl fmt::Debug for RangeSlider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeSlider")
            .field("config", &self.config)
            .field("left", &self.left)
            .field("right", &self.right)
            .field("sizes", &self.sizes)
            .field("drag", &self.drag)
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}

impl RangeSlider {
    /// Thumb that responds to drags. The right thumb moves only through
    /// [`on_config_replaced`](Self::on_config_replaced).
    pub const DRAGGABLE_THUMB: Thumb = Thumb::Left;

    /// Create a slider from a validated configuration.
    pub fn new(config: SliderConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let range = config.range()?;
        if range.is_degenerate() {
            warn!(
                "Degenerate range: minimum and maximum are both {}; thumbs pinned at the start",
                range.min()
            );
        }
        Ok(Self {
            left: ThumbValue::new(config.left_value),
            right: ThumbValue::new(config.right_value),
            config,
            range,
            sizes: MeasuredSizes::new(),
            drag: DragState::Idle,
            press: None,
            bounds: Rect::default(),
            on_value_change: None,
            on_sliding_start: None,
            on_sliding_complete: None,
            test_id_value: None,
            accessible_name_value: None,
        })
    }

    /// Call `f` with the new value on every drag move.
    #[must_use]
    pub fn on_value_change(mut self, f: impl Fn(f32) + Send + Sync + 'static) -> Self {
        self.on_value_change = Some(Arc::new(f));
        self
    }

    /// Call `f` with the current value when a drag begins.
    #[must_use]
    pub fn on_sliding_start(mut self, f: impl Fn(f32) + Send + Sync + 'static) -> Self {
        self.on_sliding_start = Some(Arc::new(f));
        self
    }

    /// Call `f` with the final value when a drag ends.
    #[must_use]
    pub fn on_sliding_complete(mut self, f: impl Fn(f32) + Send + Sync + 'static) -> Self {
        self.on_sliding_complete = Some(Arc::new(f));
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Set accessible name.
    #[must_use]
    pub fn with_accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Current configuration.
    #[must_use]
    pub const fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Validated range of the current configuration.
    #[must_use]
    pub const fn range(&self) -> ValueRange {
        self.range
    }

    /// Current (possibly animating) value of a thumb.
    #[must_use]
    pub const fn value(&self, thumb: Thumb) -> f32 {
        self.cell(thumb).value()
    }

    /// Value of the left thumb.
    #[must_use]
    pub const fn left_value(&self) -> f32 {
        self.left.value()
    }

    /// Value of the right thumb.
    #[must_use]
    pub const fn right_value(&self) -> f32 {
        self.right.value()
    }

    /// Whether either thumb is mid-transition.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.left.is_animating() || self.right.is_animating()
    }

    /// Drag state.
    #[must_use]
    pub const fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Measured sizes.
    #[must_use]
    pub const fn sizes(&self) -> &MeasuredSizes {
        &self.sizes
    }

    /// Whether container, track and thumb have all been measured.
    #[must_use]
    pub const fn is_measured(&self) -> bool {
        self.sizes.all_measured()
    }

    const fn cell(&self, thumb: Thumb) -> &ThumbValue {
        match thumb {
            Thumb::Left => &self.left,
            Thumb::Right => &self.right,
        }
    }

    fn cell_mut(&mut self, thumb: Thumb) -> &mut ThumbValue {
        match thumb {
            Thumb::Left => &mut self.left,
            Thumb::Right => &mut self.right,
        }
    }

    fn touch_geometry(&self) -> TouchGeometry {
        TouchGeometry {
            container: self.sizes.container(),
            thumb: self.sizes.thumb(),
            touch_size: self.config.thumb_touch_size,
        }
    }

    /// Pixel offset of a thumb's left edge from the container's left edge.
    #[must_use]
    pub fn thumb_offset(&self, thumb: Thumb) -> f32 {
        self.range
            .pixel_offset_of(self.value(thumb), self.sizes.track_length())
            .unwrap_or(0.0)
    }

    /// Touch-capture surface in the same space as the widget bounds.
    #[must_use]
    pub fn touch_surface(&self) -> Rect {
        touch_surface(self.bounds, self.touch_geometry().overflow())
    }

    // =========================================================================
    // Entry points
    // =========================================================================

    /// Record a measured size.
    ///
    /// Returns `false` when the size is unchanged.
    pub fn on_measured(&mut self, dimension: Dimension, size: Size) -> bool {
        let was_measured = self.sizes.all_measured();
        if !self.sizes.record(dimension, size) {
            return false;
        }
        debug!(
            "Measured {dimension:?}: {}x{}",
            size.width, size.height
        );
        if !was_measured && self.sizes.all_measured() {
            debug!(
                "All sizes measured; track length {}",
                self.sizes.track_length()
            );
        }
        true
    }

    /// Replace the configuration.
    ///
    /// A thumb whose configured value differs from the previous
    /// configuration's is moved immediately or, with `animate_transitions`,
    /// through the configured transition. Unchanged values leave the thumb
    /// alone, so an in-flight drag or transition is not disturbed. On error
    /// the previous configuration stays in place.
    pub fn on_config_replaced(&mut self, config: SliderConfig) -> Result<(), ConfigError> {
        config.validate()?;
        let range = config.range()?;
        if range.is_degenerate() && range != self.range {
            warn!(
                "Degenerate range: minimum and maximum are both {}; thumbs pinned at the start",
                range.min()
            );
        }

        let policy = config
            .animate_transitions
            .then(|| config.transition_policy());
        let updates = [
            (Thumb::Left, self.config.left_value, config.left_value),
            (Thumb::Right, self.config.right_value, config.right_value),
        ];
        for (thumb, previous, next) in updates {
            if previous == next {
                continue;
            }
            let cell = self.cell_mut(thumb);
            match policy {
                Some(policy) => {
                    debug!("Animating {thumb:?} thumb to {next} with {policy:?}");
                    cell.animate_to(next, policy);
                }
                None => {
                    debug!("Setting {thumb:?} thumb to {next}");
                    cell.set(next);
                }
            }
        }

        let thumb_resized = config.thumb_size != self.config.thumb_size;
        let track_resized = config.track_height != self.config.track_height;
        self.range = range;
        self.config = config;

        // Sizes taken from the config follow it without waiting for layout
        if thumb_resized && self.sizes.is_measured(Dimension::Thumb) {
            self.on_measured(Dimension::Thumb, self.config.thumb_size);
        }
        if track_resized && self.sizes.is_measured(Dimension::Track) {
            let width = self.sizes.track().width;
            self.on_measured(
                Dimension::Track,
                Size::new(width, self.config.track_height),
            );
        }
        Ok(())
    }

    /// Feed a recognized gesture to the drag state machine.
    ///
    /// Callbacks run before this returns; the notifications are also
    /// returned in delivery order.
    pub fn on_gesture_event(&mut self, event: GestureEvent) -> Vec<SliderNotification> {
        let ctx = GestureContext {
            range: self.range,
            touch: self.touch_geometry(),
            thumb: Self::DRAGGABLE_THUMB,
            value: self.value(Self::DRAGGABLE_THUMB),
            disabled: self.config.disabled,
        };
        let outcome = gesture::step(self.drag, &ctx, event);

        if outcome.state != self.drag {
            debug!("Drag state {:?} -> {:?}", self.drag, outcome.state);
        } else {
            trace!("Gesture {event:?} in {:?}", self.drag);
        }
        self.drag = outcome.state;

        if let Some((thumb, value)) = outcome.value {
            self.cell_mut(thumb).set(value);
        }
        for notification in &outcome.notifications {
            self.notify(*notification);
        }
        outcome.notifications
    }

    /// Advance in-flight transitions by `dt` seconds.
    ///
    /// Returns whether either thumb moved.
    pub fn tick(&mut self, dt: f64) -> bool {
        let left = self.left.tick(dt);
        let right = self.right.tick(dt);
        left || right
    }

    /// Whether another component may take over the current gesture.
    #[must_use]
    pub const fn grants_termination(&self) -> bool {
        self.drag.grants_termination()
    }

    fn notify(&self, notification: SliderNotification) {
        let callback = match notification {
            SliderNotification::SlidingStart(_) => &self.on_sliding_start,
            SliderNotification::ValueChange(_) => &self.on_value_change,
            SliderNotification::SlidingComplete(_) => &self.on_sliding_complete,
        };
        if let Some(callback) = callback {
            callback(notification.value());
        }
    }

    /// Convert a press position into touch-surface-local coordinates.
    fn surface_local(&self, position: Point) -> Point {
        position - self.touch_surface().origin()
    }

    /// Whether a follow-up event belongs to the tracked press.
    ///
    /// Events without a source (focus loss) belong to every press.
    fn owns_press(&self, source: Option<PressSource>) -> bool {
        match (self.press, source) {
            (Some(press), Some(source)) => press.source == source,
            (Some(_), None) => true,
            (None, _) => false,
        }
    }

    fn press_to_gesture(
        &mut self,
        phase: PressPhase,
        source: Option<PressSource>,
    ) -> Option<GestureEvent> {
        if !matches!(phase, PressPhase::Down(_)) && !self.owns_press(source) {
            return None;
        }
        match phase {
            PressPhase::Down(position) => {
                if self.drag.is_dragging() {
                    return None;
                }
                self.press = Some(Press {
                    source: source?,
                    origin: position,
                    dx: 0.0,
                });
                Some(GestureEvent::Down {
                    location: self.surface_local(position),
                })
            }
            PressPhase::Move(position) => {
                let press = self.press.as_mut()?;
                press.dx = position.x - press.origin.x;
                Some(GestureEvent::Move { dx: press.dx })
            }
            PressPhase::Up(position) => {
                let press = self.press.take()?;
                Some(GestureEvent::Release {
                    dx: position.x - press.origin.x,
                })
            }
            PressPhase::Cancel => {
                let press = self.press.take()?;
                Some(GestureEvent::Terminate { dx: press.dx })
            }
        }
    }
}

/// Thumb color of a disabled slider.
const DISABLED_THUMB: Color = Color {
    r: 0.6,
    g: 0.6,
    b: 0.6,
    a: 1.0,
};

impl Widget for RangeSlider {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let height = self
            .config
            .thumb_touch_size
            .height
            .max(self.config.thumb_size.height);
        constraints.constrain(Size::new(200.0, height))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        self.on_measured(Dimension::Container, bounds.size());
        self.on_measured(
            Dimension::Track,
            Size::new(bounds.width, self.config.track_height),
        );
        self.on_measured(Dimension::Thumb, self.config.thumb_size);
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let container = Rect::from_size(self.sizes.container()).translate(self.bounds.origin());
        let track = self.sizes.track();
        let thumb = self.sizes.thumb();
        let track_rect = Rect::new(
            container.x,
            container.y + (container.height - track.height) / 2.0,
            container.width,
            track.height,
        );
        let track_radius = track.height / 2.0;

        canvas.fill_rounded_rect(
            track_rect,
            track_radius,
            self.config.maximum_track_tint_color,
        );

        // Geometry uses zero placeholders until everything is measured
        let hidden = !self.sizes.all_measured();
        if hidden {
            canvas.push_opacity(0.0);
        }

        let left_offset = self.thumb_offset(Thumb::Left);
        let min_track = Rect::new(
            track_rect.x,
            track_rect.y,
            left_offset + thumb.width / 2.0,
            track_rect.height,
        );
        canvas.fill_rounded_rect(min_track, track_radius, self.config.minimum_track_tint_color);

        let thumb_color = if self.config.disabled {
            DISABLED_THUMB
        } else {
            self.config.thumb_tint_color
        };
        for which in Thumb::ALL {
            let center = Point::new(
                container.x + self.thumb_offset(which) + thumb.width / 2.0,
                container.y + container.height / 2.0,
            );
            canvas.fill_circle(center, thumb.width / 2.0, thumb_color);
        }

        if hidden {
            canvas.pop_opacity();
        }

        if self.config.debug_touch_area {
            let surface = self.touch_surface();
            canvas.fill_rect(surface, Color::ORANGE.with_alpha(0.5));
            let touch_rect = self
                .touch_geometry()
                .thumb_touch_rect(left_offset)
                .translate(surface.origin());
            canvas.fill_rect(touch_rect, Color::GREEN.with_alpha(0.5));
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        let gesture = self.press_to_gesture(event.press_phase()?, event.press_source())?;
        let notifications = self.on_gesture_event(gesture);
        if matches!(gesture, GestureEvent::Down { .. }) && !self.drag.is_dragging() {
            // Not claimed; forget the press
            self.press = None;
        }
        if notifications.is_empty() {
            None
        } else {
            Some(Box::new(notifications))
        }
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut []
    }

    fn is_interactive(&self) -> bool {
        !self.config.disabled
    }

    fn is_focusable(&self) -> bool {
        !self.config.disabled
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Slider
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
