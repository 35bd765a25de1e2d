//! Canvas2D renderer - paints the checkbox on an HTML5 Canvas.

use super::SurfaceError;
use pillswitch_core::{
    BoxStyle, Canvas, Color, Point, Rect, Size, TextStyle, AVERAGE_GLYPH_WIDTH,
};
use std::f64::consts::{FRAC_PI_2, PI, TAU};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Renderer that draws to an HTML5 Canvas 2D context.
pub struct Canvas2DRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Canvas2DRenderer {
    /// Create a new renderer for the given canvas element.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, SurfaceError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| SurfaceError::NoContext(format!("{e:?}")))?
            .ok_or_else(|| SurfaceError::NoContext("no 2d context available".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SurfaceError::NoContext("not a CanvasRenderingContext2d".to_string()))?;

        Ok(Self { canvas, ctx })
    }

    /// The canvas element being drawn on.
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Canvas size in pixels, read fresh from the element.
    pub fn size(&self) -> Size {
        Size::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    /// The whole canvas as layout bounds.
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.size())
    }

    /// Clear the canvas.
    pub fn clear(&self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
    }

    /// Fill then stroke the current path.
    fn finish_path(&self, style: &BoxStyle) {
        if let Some(fill) = style.fill {
            self.ctx.set_fill_style_str(&fill.to_css_rgba());
            self.ctx.fill();
        }

        if let Some(stroke) = &style.stroke {
            self.ctx.set_stroke_style_str(&stroke.color.to_css_rgba());
            self.ctx.set_line_width(f64::from(stroke.width));
            self.ctx.stroke();
        }
    }

    fn circle_path(&self, center: Point, radius: f32) {
        self.ctx.begin_path();
        self.ctx
            .arc(
                f64::from(center.x),
                f64::from(center.y),
                f64::from(radius),
                0.0,
                TAU,
            )
            .ok();
    }
}

impl Canvas for Canvas2DRenderer {
    fn draw_capsule(&mut self, left: Point, right: Point, radius: f32, style: &BoxStyle) {
        let r = f64::from(radius);
        self.ctx.begin_path();
        // Left cap, bottom to top through the leftmost point.
        self.ctx
            .arc(
                f64::from(left.x),
                f64::from(left.y),
                r,
                FRAC_PI_2,
                3.0 * FRAC_PI_2,
            )
            .ok();
        self.ctx
            .line_to(f64::from(right.x), f64::from(right.y) - r);
        // Right cap, top to bottom through the rightmost point.
        self.ctx
            .arc(
                f64::from(right.x),
                f64::from(right.y),
                r,
                3.0 * FRAC_PI_2,
                2.0 * PI + FRAC_PI_2,
            )
            .ok();
        self.ctx.close_path();
        self.finish_path(style);
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.circle_path(center, radius);
        self.finish_path(&BoxStyle::fill(color));
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, color: Color, width: f32) {
        self.circle_path(center, radius);
        self.ctx.set_stroke_style_str(&color.to_css_rgba());
        self.ctx.set_line_width(f64::from(width));
        self.ctx.stroke();
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.ctx.set_font(&style.css_font());
        self.ctx.set_fill_style_str(&style.color.to_css_rgba());
        self.ctx
            .fill_text(
                text,
                f64::from(position.x),
                f64::from(position.y + style.size),
            )
            .ok();
    }

    fn measure_text(&self, text: &str, style: &TextStyle) -> f32 {
        self.ctx.set_font(&style.css_font());
        match self.ctx.measure_text(text) {
            Ok(metrics) => metrics.width() as f32,
            Err(err) => {
                log::warn!("measureText failed ({err:?}), estimating label width");
                text.chars().count() as f32 * style.size * AVERAGE_GLYPH_WIDTH
            }
        }
    }
}
