//! Integration tests for pillswitch-core.
//!
//! These tests verify the public API works correctly end-to-end.

use pillswitch_core::{
    BoxStyle, Canvas, Color, DrawCommand, Point, RecordingCanvas, StrokeStyle, TextStyle,
};

// =============================================================================
// Color Integration Tests
// =============================================================================

#[test]
fn test_default_palette_parses() {
    for css in ["black", "#CBCBCB", "#DDDDDD", "white", "gray"] {
        assert!(Color::from_css(css).is_ok(), "{css} should parse");
    }
}

// =============================================================================
// Recording Integration Tests
// =============================================================================

#[test]
fn test_recorded_commands_serialize_as_json_array() {
    let mut canvas = RecordingCanvas::new();
    canvas.draw_capsule(
        Point::new(14.0, 14.0),
        Point::new(66.0, 14.0),
        14.0,
        &BoxStyle::fill(Color::BLACK).with_stroke(StrokeStyle::default()),
    );
    canvas.draw_text("ON", Point::new(10.0, 3.0), &TextStyle::default());
    canvas.fill_circle(Point::new(66.0, 14.0), 14.0, Color::WHITE);

    let json = serde_json::to_string(canvas.commands()).expect("serialize");
    let parsed: Vec<DrawCommand> = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(parsed.as_slice(), canvas.commands());
}

#[test]
fn test_canvas_as_trait_object() {
    fn paint_knob(canvas: &mut dyn Canvas) {
        canvas.fill_circle(Point::new(14.0, 14.0), 14.0, Color::WHITE);
        canvas.stroke_circle(Point::new(14.0, 14.0), 14.0, Color::BLACK, 1.0);
    }

    let mut canvas = RecordingCanvas::new();
    paint_knob(&mut canvas);
    assert_eq!(canvas.command_count(), 2);
}
