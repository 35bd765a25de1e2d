//! WASM entry point: a checkbox bound to a `<canvas>` element.

use super::canvas2d::Canvas2DRenderer;
use super::events::{mouse_event_to_event, Listener, CHECKBOX_EVENTS};
use super::SurfaceError;
use pillswitch_core::{Event, RecordingCanvas, Widget};
use pillswitch_widgets::{CheckboxChanged, CheckboxStyle, IosCheckbox};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlCanvasElement, MouseEvent};

static LOGGING_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Route `log` output to the browser console.
///
/// `level` is one of `error`, `warn`, `info`, `debug`, `trace`; anything
/// else means `info`. Only the first call has an effect.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: &str) {
    if LOGGING_INITIALIZED
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_ok()
    {
        let level = level.parse().unwrap_or(log::Level::Info);
        wasm_logger::init(wasm_logger::Config::new(level));
    }
}

/// Widget and surface state shared between the handle and its listeners.
struct Bound {
    widget: IosCheckbox,
    renderer: Canvas2DRenderer,
    on_change: Option<js_sys::Function>,
}

impl Bound {
    fn render(&mut self) {
        self.widget.layout(self.renderer.bounds());
        self.renderer.clear();
        self.widget.render(&mut self.renderer);
    }

    /// Feed an input event to the widget; repaint if it changed.
    ///
    /// Returns the change callback and new state so the caller can invoke
    /// it after releasing the borrow.
    fn dispatch(&mut self, event: &Event) -> Option<(js_sys::Function, bool)> {
        let message = self.widget.event(event)?;
        let changed = message.downcast::<CheckboxChanged>().ok()?;
        self.render();
        self.on_change
            .clone()
            .map(|callback| (callback, changed.checked))
    }
}

/// An iOS-style checkbox drawn on a canvas.
///
/// Pointer presses toggle and repaint immediately. Property assignments
/// and style setters only record the change; call `render()` to show it.
#[wasm_bindgen]
pub struct Checkbox {
    bound: Rc<RefCell<Bound>>,
    listeners: Vec<Listener>,
}

impl Checkbox {
    /// Resolve `canvas_id`, bind its 2D context and attach pointer listeners.
    pub fn bind(canvas_id: &str) -> Result<Self, SurfaceError> {
        console_error_panic_hook::set_once();

        let document = window()
            .ok_or(SurfaceError::NoWindow)?
            .document()
            .ok_or(SurfaceError::NoDocument)?;

        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| SurfaceError::NotFound(canvas_id.to_string()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| SurfaceError::NotACanvas(canvas_id.to_string()))?;

        let renderer = Canvas2DRenderer::new(canvas.clone())?;
        let mut widget = IosCheckbox::new();
        widget.layout(renderer.bounds());

        let bound = Rc::new(RefCell::new(Bound {
            widget,
            renderer,
            on_change: None,
        }));

        let listeners = CHECKBOX_EVENTS
            .iter()
            .map(|&event_type| Self::listen(&canvas, event_type, &bound))
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!(
            "checkbox bound to '{canvas_id}' ({}x{}), listening to {:?}",
            canvas.width(),
            canvas.height(),
            listeners.iter().map(Listener::event_type).collect::<Vec<_>>()
        );

        Ok(Self { bound, listeners })
    }

    fn listen(
        canvas: &HtmlCanvasElement,
        event_type: &'static str,
        bound: &Rc<RefCell<Bound>>,
    ) -> Result<Listener, SurfaceError> {
        let bound = Rc::clone(bound);
        Listener::register(canvas, event_type, move |e: MouseEvent| {
            let Some(event) = mouse_event_to_event(&e, event_type) else {
                return;
            };
            log::trace!("{event_type} at {:?}", event.position());

            let notify = match bound.try_borrow_mut() {
                Ok(mut state) => state.dispatch(&event),
                Err(_) => {
                    log::warn!("{event_type} dropped: checkbox is busy");
                    None
                }
            };
            if let Some((callback, checked)) = notify {
                if let Err(err) = callback.call1(&JsValue::NULL, &JsValue::from_bool(checked)) {
                    log::error!("checkbox change callback threw: {err:?}");
                }
            }
        })
    }

    /// Number of DOM listeners attached to the canvas.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Paint into a [`RecordingCanvas`] without touching the page.
    pub fn record(&self) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::new();
        self.bound.borrow().widget.paint(&mut canvas);
        canvas
    }
}

#[wasm_bindgen]
impl Checkbox {
    /// Bind a checkbox to the canvas with the given element id.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<Checkbox, JsValue> {
        Ok(Self::bind(canvas_id)?)
    }

    /// Current state.
    #[wasm_bindgen(getter)]
    pub fn checked(&self) -> bool {
        self.bound.borrow().widget.is_checked()
    }

    /// Set the state. Does not repaint.
    #[wasm_bindgen(setter)]
    pub fn set_checked(&self, checked: bool) {
        self.bound.borrow_mut().widget.set_checked(checked);
    }

    /// Whether presses toggle the state.
    #[wasm_bindgen(getter)]
    pub fn enabled(&self) -> bool {
        self.bound.borrow().widget.is_enabled()
    }

    /// Enable or disable input. Does not repaint.
    #[wasm_bindgen(setter)]
    pub fn set_enabled(&self, enabled: bool) {
        self.bound.borrow_mut().widget.set_enabled(enabled);
    }

    /// Whether a press is currently held on the canvas.
    #[wasm_bindgen(getter, js_name = isMouseDown)]
    pub fn is_mouse_down(&self) -> bool {
        self.bound.borrow().widget.is_mouse_down()
    }

    /// Whether something changed since the last `render()`.
    #[wasm_bindgen(getter, js_name = needsRender)]
    pub fn needs_render(&self) -> bool {
        self.bound.borrow().widget.needs_render()
    }

    /// Repaint the canvas from the current state.
    pub fn render(&self) {
        self.bound.borrow_mut().render();
    }

    /// Set the label shown when on. Does not repaint.
    #[wasm_bindgen(js_name = setOnText)]
    pub fn set_on_text(&self, text: &str) {
        self.bound
            .borrow_mut()
            .widget
            .update_style(|style| style.on_text = text.to_string());
    }

    /// Set the label shown when off. Does not repaint.
    #[wasm_bindgen(js_name = setOffText)]
    pub fn set_off_text(&self, text: &str) {
        self.bound
            .borrow_mut()
            .widget
            .update_style(|style| style.off_text = text.to_string());
    }

    /// Set the label font family. Does not repaint.
    #[wasm_bindgen(js_name = setFont)]
    pub fn set_font(&self, family: &str) {
        self.bound
            .borrow_mut()
            .widget
            .update_style(|style| style.font = family.to_string());
    }

    /// Set one color, e.g. `setColor("onColor", "#34c759")`. Does not repaint.
    #[wasm_bindgen(js_name = setColor)]
    pub fn set_color(&self, role: &str, css: &str) -> Result<(), JsValue> {
        let mut style = self.bound.borrow().widget.get_style().clone();
        style
            .set_css_color(role, css)
            .map_err(|e| JsValue::from(js_sys::Error::new(&e.to_string())))?;
        self.bound.borrow_mut().widget.set_style(style);
        Ok(())
    }

    /// Replace the style with a TOML document. Missing keys take their
    /// defaults. Does not repaint.
    #[wasm_bindgen(js_name = applyToml)]
    pub fn apply_toml(&self, source: &str) -> Result<(), JsValue> {
        let style = CheckboxStyle::from_toml_str(source)
            .map_err(|e| JsValue::from(js_sys::Error::new(&e.to_string())))?;
        self.bound.borrow_mut().widget.set_style(style);
        Ok(())
    }

    /// The current style as TOML.
    #[wasm_bindgen(js_name = styleToml)]
    pub fn style_toml(&self) -> Result<String, JsValue> {
        self.bound
            .borrow()
            .widget
            .get_style()
            .to_toml_string()
            .map_err(|e| js_sys::Error::new(&e.to_string()).into())
    }

    /// Call `callback(checked)` after every press that changes the state.
    /// Pass `undefined` to remove it.
    #[wasm_bindgen(js_name = onChange)]
    pub fn on_change(&self, callback: Option<js_sys::Function>) {
        self.bound.borrow_mut().on_change = callback;
    }

    /// The draw commands for the current state, as JSON.
    #[wasm_bindgen(js_name = commandsJson)]
    pub fn commands_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.record().commands())
            .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {e}")))
    }
}
