//! Browser surface for the checkbox.
//!
//! This module provides the bridge between the widget and the browser's
//! Canvas2D API and DOM events.

mod error;

// WASM-only modules
#[cfg(target_arch = "wasm32")]
pub mod canvas2d;
#[cfg(target_arch = "wasm32")]
pub mod events;
#[cfg(target_arch = "wasm32")]
pub mod handle;

pub use error::SurfaceError;

#[cfg(target_arch = "wasm32")]
pub use canvas2d::Canvas2DRenderer;
#[cfg(target_arch = "wasm32")]
pub use events::{mouse_event_to_event, Listener};
#[cfg(target_arch = "wasm32")]
pub use handle::{init_logging, Checkbox};
