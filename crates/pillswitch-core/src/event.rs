//! Input events for widgets.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Input event types.
///
/// Positions are surface-local: (0, 0) is the top-left corner of the
/// drawing surface the widget is bound to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Pointer button pressed
    MouseDown {
        /// Position of press
        position: Point,
        /// Button pressed
        button: MouseButton,
    },
    /// Pointer button released
    MouseUp {
        /// Position of release
        position: Point,
        /// Button released
        button: MouseButton,
    },
    /// Pointer left the surface
    MouseLeave,
}

impl Event {
    /// Surface-local position carried by the event, if any.
    #[must_use]
    pub const fn position(&self) -> Option<Point> {
        match self {
            Self::MouseDown { position, .. } | Self::MouseUp { position, .. } => Some(*position),
            Self::MouseLeave => None,
        }
    }
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left mouse button (also touch and pen contact)
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (wheel click)
    Middle,
    /// Additional button 1
    Button4,
    /// Additional button 2
    Button5,
}

impl MouseButton {
    /// Map a DOM `MouseEvent.button` code to a button.
    #[must_use]
    pub const fn from_dom_code(code: i16) -> Self {
        match code {
            0 => Self::Left,
            1 => Self::Middle,
            2 => Self::Right,
            3 => Self::Button4,
            _ => Self::Button5,
        }
    }
}
