//! Draw commands.
//!
//! Everything the toggle paints reduces to these primitives.

use crate::widget::TextStyle;
use crate::{Color, Point};
use serde::{Deserialize, Serialize};

/// Stroke style for outlines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Color,
    /// Stroke width in pixels
    pub width: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

impl StrokeStyle {
    /// Create a stroke of the given color and width.
    #[must_use]
    pub const fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

/// Box style for capsules and circles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxStyle {
    /// Fill color (None = no fill)
    pub fill: Option<Color>,
    /// Stroke style (None = no stroke)
    pub stroke: Option<StrokeStyle>,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            fill: Some(Color::WHITE),
            stroke: None,
        }
    }
}

impl BoxStyle {
    /// Create a box with only fill color.
    #[must_use]
    pub const fn fill(color: Color) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
        }
    }

    /// Create a box with only stroke.
    #[must_use]
    pub const fn stroke(style: StrokeStyle) -> Self {
        Self {
            fill: None,
            stroke: Some(style),
        }
    }

    /// Add an outline to the box. Fill is painted first, then the stroke.
    #[must_use]
    pub fn with_stroke(mut self, style: StrokeStyle) -> Self {
        self.stroke = Some(style);
        self
    }
}

/// Drawing primitive - all rendering reduces to these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Draw a capsule between two focal points
    Capsule {
        /// Center of the left half circle
        left: Point,
        /// Center of the right half circle
        right: Point,
        /// Radius of both half circles
        radius: f32,
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

    /// Draw text
    Text {
        /// Text content
        content: String,
        /// Top-left of the text box
        position: Point,
        /// Text style
        style: TextStyle,
    },
}

impl DrawCommand {
    /// Create a filled circle command.
    #[must_use]
    pub const fn filled_circle(center: Point, radius: f32, color: Color) -> Self {
        Self::Circle {
            center,
            radius,
            style: BoxStyle::fill(color),
        }
    }

    /// Create a stroked circle command.
    #[must_use]
    pub const fn stroked_circle(center: Point, radius: f32, stroke: StrokeStyle) -> Self {
        Self::Circle {
            center,
            radius,
            style: BoxStyle::stroke(stroke),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_style_default() {
        let stroke = StrokeStyle::default();
        assert_eq!(stroke.color, Color::BLACK);
        assert_eq!(stroke.width, 1.0);
    }

    #[test]
    fn test_box_style_fill_then_stroke() {
        let style = BoxStyle::fill(Color::RED).with_stroke(StrokeStyle::new(Color::BLUE, 2.0));
        assert_eq!(style.fill, Some(Color::RED));
        assert_eq!(style.stroke, Some(StrokeStyle::new(Color::BLUE, 2.0)));
    }

    #[test]
    fn test_box_style_stroke_only() {
        let style = BoxStyle::stroke(StrokeStyle::default());
        assert_eq!(style.fill, None);
        assert!(style.stroke.is_some());
    }

    #[test]
    fn test_filled_circle() {
        match DrawCommand::filled_circle(Point::new(14.0, 14.0), 14.0, Color::GREEN) {
            DrawCommand::Circle {
                center,
                radius,
                style,
            } => {
                assert_eq!(center, Point::new(14.0, 14.0));
                assert_eq!(radius, 14.0);
                assert_eq!(style.fill, Some(Color::GREEN));
                assert_eq!(style.stroke, None);
            }
            other => panic!("Expected Circle, got {other:?}"),
        }
    }

    #[test]
    fn test_capsule_json_roundtrip() {
        let cmd = DrawCommand::Capsule {
            left: Point::new(14.0, 14.0),
            right: Point::new(66.0, 14.0),
            radius: 14.0,
            style: BoxStyle::fill(Color::BLACK).with_stroke(StrokeStyle::default()),
        };
        let json = serde_json::to_string(&cmd).expect("serialize");
        let parsed: DrawCommand = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, cmd);
    }
}
