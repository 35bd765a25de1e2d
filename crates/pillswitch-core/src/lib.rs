//! Core types and traits for the pillswitch toggle widget.
//!
//! This crate provides foundational types used throughout pillswitch:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`] with CSS parsing
//! - Input: [`Event`], [`MouseButton`]
//! - Painting: [`Canvas`], [`RecordingCanvas`], [`draw::DrawCommand`]

mod canvas;
mod color;
pub mod draw;
mod event;
mod geometry;
pub mod widget;

pub use canvas::{RecordingCanvas, AVERAGE_GLYPH_WIDTH};
pub use color::{Color, ColorParseError};
pub use draw::{BoxStyle, DrawCommand, StrokeStyle};
pub use event::{Event, MouseButton};
pub use geometry::{Point, Rect, Size};
pub use widget::{AccessibleRole, Canvas, FontWeight, LayoutResult, TextStyle, Widget};
