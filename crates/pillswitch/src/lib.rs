//! pillswitch: an iOS-style toggle checkbox drawn on an HTML canvas.
//!
//! # Browser Usage (WASM)
//!
//! ```javascript
//! import init, { Checkbox, initLogging } from './pillswitch.js';
//!
//! async function main() {
//!     await init();
//!     initLogging('info');
//!     const checkbox = new Checkbox('mycheckbox');   // <canvas id="mycheckbox" width="80" height="28">
//!     checkbox.checked = true;
//!     checkbox.enabled = true;
//!     checkbox.render();
//! }
//! ```
//!
//! Presses on the canvas toggle the state and repaint on their own.
//! Assigning `checked`, `enabled` or any style value does not repaint;
//! call `render()` afterwards.
//!
//! Outside the browser the widget is used directly through
//! [`widgets::IosCheckbox`] and any [`Canvas`] implementation.

pub use pillswitch_core::*;
pub use pillswitch_widgets as widgets;

pub mod browser;

#[cfg(target_arch = "wasm32")]
pub use browser::{init_logging, Canvas2DRenderer, Checkbox};

pub use browser::SurfaceError;
