//! Widget trait and related types.
//!
//! Widgets follow a layout-event-paint cycle:
//!
//! 1. **Layout**: Take the bounds the host surface allots
//! 2. **Event**: React to input and report a message when state changes
//! 3. **Paint**: Emit draw calls on a [`Canvas`]; painting never mutates state
//!
//! # Examples
//!
//! ```
//! use pillswitch_core::{FontWeight, TextStyle};
//!
//! let style = TextStyle::default();
//! assert_eq!(style.size, 16.0);
//! assert_eq!(style.weight, FontWeight::Normal);
//! ```

use crate::draw::BoxStyle;
use crate::event::Event;
use crate::geometry::{Point, Rect, Size};
use crate::Color;
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Result of laying out a widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutResult {
    /// Computed size after layout
    pub size: Size,
}

/// Core widget trait that all UI elements implement.
pub trait Widget: Send + Sync {
    /// Take the bounds allotted by the host.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Emit draw calls for the current state.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Handle an input event, returning a message if state changed.
    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>>;

    /// Check if this widget is interactive (can receive events).
    fn is_interactive(&self) -> bool {
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
    /// Draw a capsule (pill): two half circles around `left` and `right`
    /// joined by straight top and bottom edges.
    fn draw_capsule(&mut self, left: Point, right: Point, radius: f32, style: &BoxStyle);

    /// Draw a filled circle.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);

    /// Draw a stroked circle.
    fn stroke_circle(&mut self, center: Point, radius: f32, color: Color, width: f32);

    /// Draw text. `position` is the top-left of the text box.
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);

    /// Measure the advance width of `text` rendered with `style`.
    fn measure_text(&self, text: &str, style: &TextStyle) -> f32;
}

/// Text style for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: f32,
    /// Text color
    pub color: Color,
    /// Font family name
    pub family: String,
    /// Font weight
    pub weight: FontWeight,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 16.0,
            color: Color::BLACK,
            family: "sans-serif".to_string(),
            weight: FontWeight::Normal,
        }
    }
}

impl TextStyle {
    /// CSS font shorthand, e.g. `normal 18px Arial`.
    #[must_use]
    pub fn css_font(&self) -> String {
        format!("{} {}px {}", self.weight.css_value(), self.size, self.family)
    }
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontWeight {
    /// Normal (400)
    #[default]
    Normal,
    /// Bold (700)
    Bold,
}

impl FontWeight {
    /// Value accepted by the CSS `font-weight` property.
    #[must_use]
    pub const fn css_value(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
        }
    }
}

/// Accessible roles for screen readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccessibleRole {
    /// Generic element
    #[default]
    Generic,
    /// Checkbox
    Checkbox,
    /// On/off switch
    Switch,
}
