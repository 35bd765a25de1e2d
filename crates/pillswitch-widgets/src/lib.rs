//! iOS-style toggle/checkbox widget for pillswitch.
//!
//! ```
//! use pillswitch_core::{Event, MouseButton, Point, RecordingCanvas, Rect, Widget};
//! use pillswitch_widgets::IosCheckbox;
//!
//! let mut checkbox = IosCheckbox::new();
//! checkbox.layout(Rect::new(0.0, 0.0, 80.0, 28.0));
//!
//! let press = Event::MouseDown {
//!     position: Point::new(40.0, 14.0),
//!     button: MouseButton::Left,
//! };
//! assert!(checkbox.event(&press).is_some());
//! assert!(checkbox.needs_render());
//!
//! let mut canvas = RecordingCanvas::new();
//! checkbox.render(&mut canvas);
//! assert!(!checkbox.needs_render());
//! ```

pub mod checkbox;
pub mod shape;
pub mod style;

pub use checkbox::{CheckboxChanged, IosCheckbox};
pub use shape::{cap_radius, focal_points, left_focal_point, right_focal_point};
pub use style::{CheckboxStyle, ColorRole, StyleError};
