//! Browser event handling - converts DOM pointer events to widget events
//! and owns the listeners attached to a canvas.

use super::SurfaceError;
use pillswitch_core::{Event, MouseButton, Point};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MouseEvent};

/// DOM event types a checkbox listens to.
///
/// Pointer events cover mouse, touch and pen with one code path; a
/// `PointerEvent` is a `MouseEvent` so the same conversion applies.
pub const CHECKBOX_EVENTS: [&str; 3] = ["pointerdown", "pointerup", "pointerleave"];

/// Convert a DOM mouse or pointer event to a widget [`Event`].
///
/// The position is relative to the canvas (`offsetX`/`offsetY`).
/// Returns `None` for event types the checkbox does not handle.
pub fn mouse_event_to_event(event: &MouseEvent, event_type: &str) -> Option<Event> {
    let position = Point::new(event.offset_x() as f32, event.offset_y() as f32);
    let button = MouseButton::from_dom_code(event.button());

    match event_type {
        "pointerdown" | "mousedown" => Some(Event::MouseDown { position, button }),
        "pointerup" | "mouseup" => Some(Event::MouseUp { position, button }),
        "pointerleave" | "mouseleave" => Some(Event::MouseLeave),
        _ => None,
    }
}

/// An event listener attached to a canvas.
///
/// The callback stays registered for as long as the `Listener` lives and
/// is removed from the canvas when it is dropped.
pub struct Listener {
    target: HtmlCanvasElement,
    event_type: &'static str,
    callback: Closure<dyn FnMut(MouseEvent)>,
}

impl Listener {
    /// Attach `handler` to `target` for `event_type`.
    pub fn register(
        target: &HtmlCanvasElement,
        event_type: &'static str,
        handler: impl FnMut(MouseEvent) + 'static,
    ) -> Result<Self, SurfaceError> {
        let callback = Closure::<dyn FnMut(MouseEvent)>::new(handler);
        target
            .add_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref())
            .map_err(|e| SurfaceError::Listener {
                event: event_type.to_string(),
                reason: format!("{e:?}"),
            })?;
        log::trace!("registered '{event_type}' listener");

        Ok(Self {
            target: target.clone(),
            event_type,
            callback,
        })
    }

    /// The DOM event type this listener handles.
    pub fn event_type(&self) -> &'static str {
        self.event_type
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(err) = self.target.remove_event_listener_with_callback(
            self.event_type,
            self.callback.as_ref().unchecked_ref(),
        ) {
            log::warn!("failed to remove '{}' listener: {err:?}", self.event_type);
        }
    }
}
