//! Integration tests for rangeslider.
//!
//! These drive the widget the way a host would: load a config, lay it out,
//! feed input events, advance animations and paint.

use proptest::prelude::*;
use rangeslider::{
    Dimension, DragState, GestureEvent, RangeSlider, SliderConfig, SliderNotification, Thumb,
    ValueRange,
};
use rangeslider_core::{
    Color, Event, Point, PointerId, PointerType, RecordingCanvas, Rect, Size, Widget,
};
use std::sync::{Arc, Mutex};

fn laid_out(config: SliderConfig) -> RangeSlider {
    let mut slider = RangeSlider::new(config).expect("valid config");
    slider.layout(Rect::new(0.0, 0.0, 300.0, 20.0));
    slider
}

fn notifications(out: Option<Box<dyn std::any::Any + Send>>) -> Vec<SliderNotification> {
    out.map(|msg| *msg.downcast::<Vec<SliderNotification>>().expect("notifications"))
        .unwrap_or_default()
}

// =============================================================================
// Configuration Integration Tests
// =============================================================================

#[test]
fn test_json_config_to_painted_slider() {
    let config = SliderConfig::from_json(
        r##"{
            "leftValue": 25,
            "rightValue": 75,
            "minimumValue": 0,
            "maximumValue": 100,
            "minimumTrackTintColor": "#ff0000",
            "thumbTouchSize": {"width": 30, "height": 30}
        }"##,
    )
    .expect("valid json");
    let slider = laid_out(config);

    let mut canvas = RecordingCanvas::new();
    slider.paint(&mut canvas);
    let commands = canvas.commands();
    assert_eq!(commands[1].fill(), Some(Color::rgb(1.0, 0.0, 0.0)));
    // 25% of 280 plus half a thumb
    assert_eq!(commands[1].bounds().width, 80.0);
}

#[test]
fn test_toml_config_stepped_drag() {
    let config = SliderConfig::from_toml(
        r#"
leftValue = 0.0
rightValue = 10.0
maximumValue = 10.0
step = 1.0
"#,
    )
    .expect("valid toml");
    let mut slider = laid_out(config);

    slider.on_gesture_event(GestureEvent::Down {
        location: Point::new(20.0, 20.0),
    });
    // 3.3 steps worth of pixels snaps to 3
    let out = slider.on_gesture_event(GestureEvent::Move { dx: 92.4 });
    assert_eq!(out, vec![SliderNotification::ValueChange(3.0)]);
    let out = slider.on_gesture_event(GestureEvent::Release { dx: 95.0 });
    assert_eq!(out, vec![SliderNotification::SlidingComplete(3.0)]);
}

// =============================================================================
// Input Integration Tests
// =============================================================================

#[test]
fn test_pointer_drag_with_callbacks() {
    let values = Arc::new(Mutex::new(Vec::new()));
    let sink = values.clone();
    let mut slider = laid_out(SliderConfig::default()).on_value_change(move |v| {
        sink.lock().expect("lock").push(v);
    });

    let down = Event::PointerDown {
        pointer_id: PointerId(1),
        pointer_type: PointerType::Touch,
        position: Point::new(66.0, 10.0),
        is_primary: true,
    };
    assert_eq!(
        notifications(slider.event(&down)),
        vec![SliderNotification::SlidingStart(0.2)]
    );

    for x in [80.0, 94.0, 122.0] {
        slider.event(&Event::PointerMove {
            pointer_id: PointerId(1),
            position: Point::new(x, 10.0),
            is_primary: true,
        });
    }
    let done = notifications(slider.event(&Event::PointerUp {
        pointer_id: PointerId(1),
        position: Point::new(122.0, 10.0),
        is_primary: true,
    }));

    let values = values.lock().expect("lock");
    assert_eq!(values.len(), 3);
    assert!((values[2] - 0.4).abs() < 1e-5);
    assert!(matches!(done[..], [SliderNotification::SlidingComplete(v)] if (v - 0.4).abs() < 1e-5));
    assert_eq!(slider.drag_state(), DragState::Idle);
}

#[test]
fn test_disabled_slider_swallows_drag() {
    let mut slider = laid_out(SliderConfig {
        disabled: true,
        ..SliderConfig::default()
    });
    slider.on_gesture_event(GestureEvent::Down {
        location: Point::new(76.0, 20.0),
    });
    assert!(slider
        .on_gesture_event(GestureEvent::Move { dx: 50.0 })
        .is_empty());
    assert!(slider
        .on_gesture_event(GestureEvent::Release { dx: 50.0 })
        .is_empty());
    assert_eq!(slider.left_value(), 0.2);
    assert_eq!(slider.drag_state(), DragState::Idle);
}

#[test]
fn test_enlarged_touch_target_reaches_past_thumb() {
    let mut slider = laid_out(SliderConfig::default());
    // Left thumb spans surface x 66..86; the touch target spans 56..96
    let out = slider.on_gesture_event(GestureEvent::Down {
        location: Point::new(56.0, 0.0),
    });
    assert_eq!(out.len(), 1);
}

// =============================================================================
// External Sync Integration Tests
// =============================================================================

#[test]
fn test_transition_superseded_mid_flight() {
    let mut slider = laid_out(SliderConfig {
        animate_transitions: true,
        ..SliderConfig::default()
    });
    let mut next = slider.config().clone();
    next.right_value = 1.0;
    slider.on_config_replaced(next.clone()).expect("valid");
    slider.tick(0.075);
    let midway = slider.right_value();
    assert!(midway > 0.5 && midway < 1.0);

    next.right_value = 0.0;
    slider.on_config_replaced(next).expect("valid");
    assert_eq!(slider.right_value(), midway);
    for _ in 0..30 {
        slider.tick(1.0 / 60.0);
    }
    assert_eq!(slider.right_value(), 0.0);
    assert!(!slider.is_animating());
}

#[test]
fn test_degenerate_range_pins_thumbs() {
    let slider = laid_out(SliderConfig {
        minimum_value: 2.0,
        maximum_value: 2.0,
        left_value: 2.0,
        right_value: 2.0,
        ..SliderConfig::default()
    });
    assert_eq!(slider.thumb_offset(Thumb::Left), 0.0);
    assert_eq!(slider.thumb_offset(Thumb::Right), 0.0);
}

#[test]
fn test_measurement_before_layout() {
    let mut slider = RangeSlider::new(SliderConfig::default()).expect("valid");
    slider.on_measured(Dimension::Container, Size::new(220.0, 40.0));
    slider.on_measured(Dimension::Thumb, Size::square(20.0));
    assert!(!slider.is_measured());
    slider.on_measured(Dimension::Track, Size::new(220.0, 4.0));
    assert!(slider.is_measured());
    // 0.5 of a 200 px track
    assert_eq!(slider.thumb_offset(Thumb::Right), 100.0);
}

proptest! {
    #[test]
    fn prop_drag_values_stay_in_range(
        min in -50.0f32..50.0,
        span in 1.0f32..100.0,
        dx in -1000.0f32..1000.0,
    ) {
        let range = ValueRange::new(min, min + span, 0.0).expect("valid");
        let mut slider = laid_out(SliderConfig {
            minimum_value: range.min(),
            maximum_value: range.max(),
            left_value: range.min(),
            right_value: range.max(),
            ..SliderConfig::default()
        });
        slider.on_gesture_event(GestureEvent::Down { location: Point::new(20.0, 20.0) });
        let out = slider.on_gesture_event(GestureEvent::Move { dx });
        prop_assert_eq!(out.len(), 1);
        let value = out[0].value();
        prop_assert!(value >= range.min() && value <= range.max());
    }
}
