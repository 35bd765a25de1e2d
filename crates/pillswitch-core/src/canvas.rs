//! Canvas implementations for rendering.

use crate::draw::{BoxStyle, DrawCommand, StrokeStyle};
use crate::widget::{Canvas, TextStyle};
use crate::{Color, Point};

/// Average glyph advance as a fraction of the font size.
///
/// Used when no real font metrics are available.
pub const AVERAGE_GLYPH_WIDTH: f32 = 0.6;

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// This is useful for:
/// - Testing (verify what was painted)
/// - Serialization (dump commands as JSON)
/// - Diffing (compare render outputs)
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clear all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn draw_capsule(&mut self, left: Point, right: Point, radius: f32, style: &BoxStyle) {
        self.commands.push(DrawCommand::Capsule {
            left,
            right,
            radius,
            style: style.clone(),
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.commands
            .push(DrawCommand::filled_circle(center, radius, color));
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, color: Color, width: f32) {
        self.commands.push(DrawCommand::stroked_circle(
            center,
            radius,
            StrokeStyle::new(color, width),
        ));
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            content: text.to_string(),
            position,
            style: style.clone(),
        });
    }

    fn measure_text(&self, text: &str, style: &TextStyle) -> f32 {
        text.chars().count() as f32 * style.size * AVERAGE_GLYPH_WIDTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // RecordingCanvas Creation Tests
    // =========================================================================

    #[test]
    fn test_recording_canvas_new() {
        let canvas = RecordingCanvas::new();
        assert!(canvas.is_empty());
        assert_eq!(canvas.command_count(), 0);
    }

    // =========================================================================
    // Drawing Tests
    // =========================================================================

    #[test]
    fn test_draw_capsule() {
        let mut canvas = RecordingCanvas::new();
        let style = BoxStyle::fill(Color::RED);
        canvas.draw_capsule(Point::new(14.0, 14.0), Point::new(66.0, 14.0), 14.0, &style);

        assert_eq!(canvas.command_count(), 1);
        match &canvas.commands()[0] {
            DrawCommand::Capsule {
                left,
                right,
                radius,
                style: recorded,
            } => {
                assert_eq!(*left, Point::new(14.0, 14.0));
                assert_eq!(*right, Point::new(66.0, 14.0));
                assert_eq!(*radius, 14.0);
                assert_eq!(recorded, &style);
            }
            _ => panic!("Expected Capsule command"),
        }
    }

    #[test]
    fn test_fill_and_stroke_circle() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_circle(Point::new(10.0, 10.0), 5.0, Color::WHITE);
        canvas.stroke_circle(Point::new(10.0, 10.0), 5.0, Color::BLACK, 1.0);

        assert_eq!(canvas.command_count(), 2);
        match &canvas.commands()[1] {
            DrawCommand::Circle { style, .. } => {
                assert_eq!(style.fill, None);
                assert_eq!(style.stroke, Some(StrokeStyle::new(Color::BLACK, 1.0)));
            }
            _ => panic!("Expected Circle command"),
        }
    }

    #[test]
    fn test_draw_text() {
        let mut canvas = RecordingCanvas::new();
        canvas.draw_text("ON", Point::new(1.0, 2.0), &TextStyle::default());

        match &canvas.commands()[0] {
            DrawCommand::Text {
                content, position, ..
            } => {
                assert_eq!(content, "ON");
                assert_eq!(*position, Point::new(1.0, 2.0));
            }
            _ => panic!("Expected Text command"),
        }
    }

    #[test]
    fn test_measure_text_estimate() {
        let canvas = RecordingCanvas::new();
        let style = TextStyle {
            size: 10.0,
            ..TextStyle::default()
        };
        assert!((canvas.measure_text("OFF", &style) - 18.0).abs() < 1e-4);
        assert_eq!(canvas.measure_text("", &style), 0.0);
    }

    #[test]
    fn test_take_commands_clears() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_circle(Point::ORIGIN, 1.0, Color::BLACK);
        let taken = canvas.take_commands();
        assert_eq!(taken.len(), 1);
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_circle(Point::ORIGIN, 1.0, Color::BLACK);
        canvas.clear();
        assert!(canvas.is_empty());
    }
}
