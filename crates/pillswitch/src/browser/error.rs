//! Errors raised while binding a checkbox to a page.

use thiserror::Error;

/// Failure to bind a checkbox to a canvas element.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// No global `window` (not running in a browser main thread).
    #[error("no global window")]
    NoWindow,

    /// The window has no document.
    #[error("window has no document")]
    NoDocument,

    /// No element with the given id.
    #[error("canvas '{0}' not found")]
    NotFound(String),

    /// The element exists but is not a `<canvas>`.
    #[error("element '{0}' is not a canvas")]
    NotACanvas(String),

    /// The canvas refused a 2D rendering context.
    #[error("2d context unavailable: {0}")]
    NoContext(String),

    /// An event listener could not be attached.
    #[error("failed to register '{event}' listener: {reason}")]
    Listener {
        /// DOM event type
        event: String,
        /// Browser-reported reason
        reason: String,
    },
}

#[cfg(target_arch = "wasm32")]
impl From<SurfaceError> for wasm_bindgen::JsValue {
    fn from(err: SurfaceError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_error_display() {
        assert_eq!(
            SurfaceError::NotFound("mycheckbox".into()).to_string(),
            "canvas 'mycheckbox' not found"
        );
        assert_eq!(
            SurfaceError::NotACanvas("title".into()).to_string(),
            "element 'title' is not a canvas"
        );
        assert_eq!(
            SurfaceError::Listener {
                event: "pointerdown".into(),
                reason: "detached".into(),
            }
            .to_string(),
            "failed to register 'pointerdown' listener: detached"
        );
        assert_eq!(SurfaceError::NoWindow.to_string(), "no global window");
    }
}
