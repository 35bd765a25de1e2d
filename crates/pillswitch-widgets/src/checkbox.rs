//! iOS-style checkbox: a pill with an ON/OFF label and a sliding knob.
//!
//! The widget is bound to a drawing surface through [`Widget::layout`]; the
//! bounds passed there are the whole surface. Any press inside the surface
//! flips the state, including on the rounded caps.
//!
//! State changes never repaint by themselves. Every mutation raises
//! [`IosCheckbox::needs_render`] until the owner calls
//! [`IosCheckbox::render`].

use crate::shape::{cap_radius, left_focal_point, right_focal_point};
use crate::style::CheckboxStyle;
use pillswitch_core::{
    widget::{AccessibleRole, LayoutResult},
    BoxStyle, Canvas, Color, Event, Point, Rect, StrokeStyle, TextStyle, Widget,
};
use std::any::Any;

/// Gap between the label box and the top/bottom edges of the surface.
const TEXT_INSET: f32 = 5.0;

/// Distance the label baseline sits above the visual center line.
const BASELINE_NUDGE: f32 = 2.0;

/// Outline width for the pill and the knob.
const OUTLINE_WIDTH: f32 = 1.0;

/// Outline color of the knob, independent of state.
const KNOB_OUTLINE: Color = Color::BLACK;

/// Message emitted when the checked state changes through input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckboxChanged {
    /// The new checked state
    pub checked: bool,
}

/// iOS-style toggle checkbox.
#[derive(Debug, Clone)]
pub struct IosCheckbox {
    /// Current state
    checked: bool,
    /// Whether input is accepted
    enabled: bool,
    /// A press is in progress
    mouse_down: bool,
    /// Colors, labels and font
    style: CheckboxStyle,
    /// Accessible name
    accessible_name_value: Option<String>,
    /// Test ID
    test_id_value: Option<String>,
    /// Surface bounds from layout
    bounds: Rect,
    /// State or style changed since the last render
    needs_render: bool,
}

impl Default for IosCheckbox {
    fn default() -> Self {
        Self {
            checked: false,
            enabled: true,
            mouse_down: false,
            style: CheckboxStyle::default(),
            accessible_name_value: None,
            test_id_value: None,
            bounds: Rect::default(),
            needs_render: true,
        }
    }
}

impl IosCheckbox {
    /// Create an unchecked, enabled checkbox with the default style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a checkbox with initial state.
    #[must_use]
    pub fn with_state(checked: bool) -> Self {
        Self::default().checked(checked)
    }

    /// Set the checked state.
    #[must_use]
    pub const fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Set whether the checkbox accepts input.
    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Replace the whole style.
    #[must_use]
    pub fn style(mut self, style: CheckboxStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the label shown when on.
    #[must_use]
    pub fn on_text(mut self, text: impl Into<String>) -> Self {
        self.style.on_text = text.into();
        self
    }

    /// Set the label shown when off.
    #[must_use]
    pub fn off_text(mut self, text: impl Into<String>) -> Self {
        self.style.off_text = text.into();
        self
    }

    /// Set the label font family.
    #[must_use]
    pub fn font(mut self, family: impl Into<String>) -> Self {
        self.style.font = family.into();
        self
    }

    /// Set the accessible name.
    #[must_use]
    pub fn accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Get current state.
    #[must_use]
    pub const fn is_checked(&self) -> bool {
        self.checked
    }

    /// Get enabled state.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether a press is currently held on the surface.
    #[must_use]
    pub const fn is_mouse_down(&self) -> bool {
        self.mouse_down
    }

    /// Whether state or style changed since the last [`render`](Self::render).
    #[must_use]
    pub const fn needs_render(&self) -> bool {
        self.needs_render
    }

    /// Get the style.
    #[must_use]
    pub const fn get_style(&self) -> &CheckboxStyle {
        &self.style
    }

    /// Set the checked state. Does not repaint.
    pub fn set_checked(&mut self, checked: bool) {
        if self.checked != checked {
            self.checked = checked;
            self.needs_render = true;
        }
    }

    /// Set the enabled state. Does not repaint.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.needs_render = true;
        }
    }

    /// Replace the style. Does not repaint.
    pub fn set_style(&mut self, style: CheckboxStyle) {
        log::debug!("checkbox style replaced");
        self.style = style;
        self.needs_render = true;
    }

    /// Edit the style in place. Does not repaint.
    pub fn update_style(&mut self, edit: impl FnOnce(&mut CheckboxStyle)) {
        edit(&mut self.style);
        self.needs_render = true;
    }

    /// Flip the checked state if enabled. Returns whether it flipped.
    pub fn toggle(&mut self) -> bool {
        if !self.enabled {
            return false;
        }
        self.checked = !self.checked;
        self.needs_render = true;
        true
    }

    /// Where the knob is drawn: the right focal point when checked,
    /// otherwise the left one.
    #[must_use]
    pub fn knob_center(&self) -> Point {
        if self.checked {
            right_focal_point(self.bounds)
        } else {
            left_focal_point(self.bounds)
        }
    }

    /// The label for the current state.
    #[must_use]
    pub fn label(&self) -> &str {
        if self.checked {
            &self.style.on_text
        } else {
            &self.style.off_text
        }
    }

    /// Pill background for the current state.
    #[must_use]
    pub const fn background_color(&self) -> Color {
        if !self.enabled {
            self.style.disabled_color
        } else if self.checked {
            self.style.on_color
        } else {
            self.style.off_color
        }
    }

    /// Pill outline for the current state.
    #[must_use]
    pub const fn border_color(&self) -> Color {
        if self.enabled {
            self.style.enabled_border_color
        } else {
            self.style.disabled_border_color
        }
    }

    /// Label color for the current state.
    #[must_use]
    pub const fn text_color(&self) -> Color {
        if !self.enabled {
            self.style.text_disabled_color
        } else if self.checked {
            self.style.text_on_color
        } else {
            self.style.text_off_color
        }
    }

    /// Label font size: scales with the surface height.
    #[must_use]
    pub fn font_size(&self) -> f32 {
        2.0f32.mul_add(-TEXT_INSET, self.bounds.height).max(1.0)
    }

    fn text_style(&self) -> TextStyle {
        TextStyle {
            size: self.font_size(),
            color: self.text_color(),
            family: self.style.font.clone(),
            ..TextStyle::default()
        }
    }

    /// Top-left of the label box for a label `label_width` wide.
    ///
    /// The label is centered in the half of the pill the knob does not
    /// cover: left of the knob when on, right of it when off.
    fn label_position(&self, label_width: f32) -> Point {
        let Rect {
            x, width, height, ..
        } = self.bounds;
        let free_span = width - height;
        let free_start = if self.checked { x } else { x + height };
        let font_size = self.font_size();
        let baseline = self.bounds.center().y + font_size / 2.0 - BASELINE_NUDGE;

        Point::new(
            free_start + free_span / 2.0 - label_width / 2.0,
            baseline - font_size,
        )
    }

    /// Paint and clear [`needs_render`](Self::needs_render).
    ///
    /// This is the only way to make state changes visible.
    pub fn render(&mut self, canvas: &mut dyn Canvas) {
        self.paint(canvas);
        self.needs_render = false;
    }
}

impl Widget for IosCheckbox {
    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        if self.bounds != bounds {
            self.bounds = bounds;
            self.needs_render = true;
        }
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        if self.bounds.size().is_empty() {
            log::trace!("checkbox has no area, nothing to paint");
            return;
        }
        log::trace!(
            "painting checkbox checked={} enabled={} bounds={:?}",
            self.checked,
            self.enabled,
            self.bounds
        );

        let radius = cap_radius(self.bounds);

        // Silhouette
        let silhouette = BoxStyle::fill(self.background_color())
            .with_stroke(StrokeStyle::new(self.border_color(), OUTLINE_WIDTH));
        canvas.draw_capsule(
            left_focal_point(self.bounds),
            right_focal_point(self.bounds),
            radius,
            &silhouette,
        );

        // Label
        let text_style = self.text_style();
        let label = self.label();
        let label_width = canvas.measure_text(label, &text_style);
        canvas.draw_text(label, self.label_position(label_width), &text_style);

        // Knob, always filled with the off color
        let knob = self.knob_center();
        canvas.fill_circle(knob, radius, self.style.off_color);
        canvas.stroke_circle(knob, radius, KNOB_OUTLINE, OUTLINE_WIDTH);
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        match event {
            Event::MouseDown { position, button } => {
                self.mouse_down = true;
                if !self.toggle() {
                    log::trace!("press at {position:?} ignored, checkbox disabled");
                    return None;
                }
                log::debug!(
                    "checkbox toggled to {} by {button:?} press at {position:?}",
                    self.checked
                );
                Some(Box::new(CheckboxChanged {
                    checked: self.checked,
                }))
            }
            Event::MouseUp { .. } | Event::MouseLeave => {
                self.mouse_down = false;
                None
            }
        }
    }

    fn is_interactive(&self) -> bool {
        self.enabled
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Switch
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
