//! WASM browser tests - run with `wasm-pack test --headless --chrome`

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use pillswitch::draw::DrawCommand;
use pillswitch::{Checkbox, SurfaceError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlCanvasElement, MouseEvent};

fn mount_canvas(id: &str, width: u32, height: u32) -> HtmlCanvasElement {
    let document = web_sys::window()
        .expect("window")
        .document()
        .expect("document");
    let canvas = document
        .create_element("canvas")
        .expect("create canvas")
        .dyn_into::<HtmlCanvasElement>()
        .expect("canvas element");
    canvas.set_id(id);
    canvas.set_width(width);
    canvas.set_height(height);
    document
        .body()
        .expect("body")
        .append_child(&canvas)
        .expect("append");
    canvas
}

fn fire(canvas: &HtmlCanvasElement, event_type: &str) {
    let event = MouseEvent::new(event_type).expect("mouse event");
    let event: &web_sys::Event = event.as_ref();
    canvas.dispatch_event(event).expect("dispatch");
}

/// A JS callback that counts its calls in `window[slot]` and stores the
/// last argument in `window[slot + "_last"]`.
fn counting_callback(slot: &str) -> js_sys::Function {
    js_sys::Function::new_with_args(
        "checked",
        &format!(
            "window['{slot}'] = (window['{slot}'] || 0) + 1; window['{slot}_last'] = checked;"
        ),
    )
}

fn read_global(key: &str) -> JsValue {
    let window = web_sys::window().expect("window");
    js_sys::Reflect::get(&window, &JsValue::from_str(key)).expect("reflect")
}

// ============================================================================
// Binding
// ============================================================================

#[wasm_bindgen_test]
fn test_bind_defaults() {
    mount_canvas("cb-defaults", 80, 28);
    let checkbox = Checkbox::new("cb-defaults").expect("bind");

    assert!(!checkbox.checked());
    assert!(checkbox.enabled());
    assert!(!checkbox.is_mouse_down());
    assert!(checkbox.needs_render());
    assert_eq!(checkbox.listener_count(), 3);

    checkbox.render();
    assert!(!checkbox.needs_render());
}

#[wasm_bindgen_test]
fn test_bind_missing_element() {
    let err = Checkbox::bind("cb-does-not-exist").err().expect("should fail");
    assert_eq!(err, SurfaceError::NotFound("cb-does-not-exist".to_string()));
}

#[wasm_bindgen_test]
fn test_bind_not_a_canvas() {
    let document = web_sys::window()
        .expect("window")
        .document()
        .expect("document");
    let div = document.create_element("div").expect("div");
    div.set_id("cb-div");
    document
        .body()
        .expect("body")
        .append_child(&div)
        .expect("append");

    let err = Checkbox::bind("cb-div").err().expect("should fail");
    assert_eq!(err, SurfaceError::NotACanvas("cb-div".to_string()));
}

#[wasm_bindgen_test]
fn test_constructor_error_is_js_error() {
    let err = Checkbox::new("cb-also-missing").err().expect("should fail");
    assert!(err.is_instance_of::<js_sys::Error>());
}

// ============================================================================
// Input
// ============================================================================

#[wasm_bindgen_test]
fn test_press_toggles_and_repaints() {
    let canvas = mount_canvas("cb-press", 80, 28);
    let checkbox = Checkbox::new("cb-press").expect("bind");

    fire(&canvas, "pointerdown");
    assert!(checkbox.checked());
    assert!(checkbox.is_mouse_down());
    assert!(!checkbox.needs_render());

    fire(&canvas, "pointerup");
    assert!(!checkbox.is_mouse_down());
    assert!(checkbox.checked());

    fire(&canvas, "pointerdown");
    assert!(!checkbox.checked());
}

#[wasm_bindgen_test]
fn test_leave_clears_mouse_down() {
    let canvas = mount_canvas("cb-leave", 80, 28);
    let checkbox = Checkbox::new("cb-leave").expect("bind");

    fire(&canvas, "pointerdown");
    assert!(checkbox.is_mouse_down());
    fire(&canvas, "pointerleave");
    assert!(!checkbox.is_mouse_down());
}

#[wasm_bindgen_test]
fn test_disabled_ignores_press() {
    let canvas = mount_canvas("cb-disabled", 80, 28);
    let checkbox = Checkbox::new("cb-disabled").expect("bind");
    checkbox.set_enabled(false);
    checkbox.render();

    fire(&canvas, "pointerdown");
    assert!(!checkbox.checked());
    assert!(!checkbox.needs_render());
}

#[wasm_bindgen_test]
fn test_on_change_receives_new_state() {
    let canvas = mount_canvas("cb-change", 80, 28);
    let checkbox = Checkbox::new("cb-change").expect("bind");
    checkbox.on_change(Some(counting_callback("__cb_change")));

    fire(&canvas, "pointerdown");
    assert_eq!(read_global("__cb_change").as_f64(), Some(1.0));
    assert_eq!(read_global("__cb_change_last").as_bool(), Some(true));

    // Owner assignments are not presses.
    checkbox.set_checked(false);
    assert_eq!(read_global("__cb_change").as_f64(), Some(1.0));

    checkbox.on_change(None);
    fire(&canvas, "pointerdown");
    assert_eq!(read_global("__cb_change").as_f64(), Some(1.0));
}

#[wasm_bindgen_test]
fn test_drop_removes_listeners() {
    let canvas = mount_canvas("cb-drop", 80, 28);
    let checkbox = Checkbox::new("cb-drop").expect("bind");
    checkbox.on_change(Some(counting_callback("__cb_drop")));
    drop(checkbox);

    fire(&canvas, "pointerdown");
    assert!(read_global("__cb_drop").is_undefined());
}

// ============================================================================
// Owner mutation and style
// ============================================================================

#[wasm_bindgen_test]
fn test_setters_wait_for_render() {
    mount_canvas("cb-setters", 80, 28);
    let checkbox = Checkbox::new("cb-setters").expect("bind");
    checkbox.render();

    checkbox.set_checked(true);
    assert!(checkbox.needs_render());
    checkbox.render();
    assert!(!checkbox.needs_render());

    checkbox.set_on_text("YES");
    assert!(checkbox.needs_render());
    checkbox.render();

    let json = checkbox.commands_json().expect("json");
    let commands: Vec<DrawCommand> = serde_json::from_str(&json).expect("parse");
    assert!(commands
        .iter()
        .any(|c| matches!(c, DrawCommand::Text { content, .. } if content == "YES")));
}

#[wasm_bindgen_test]
fn test_set_color_rejects_unknown_role() {
    mount_canvas("cb-color", 80, 28);
    let checkbox = Checkbox::new("cb-color").expect("bind");

    assert!(checkbox.set_color("onColor", "#34c759").is_ok());
    assert!(checkbox.set_color("glowColor", "#34c759").is_err());
    assert!(checkbox.set_color("onColor", "not-a-color").is_err());
}

#[wasm_bindgen_test]
fn test_toml_style_roundtrip() {
    mount_canvas("cb-toml", 80, 28);
    let checkbox = Checkbox::new("cb-toml").expect("bind");

    checkbox
        .apply_toml("on_text = \"I\"\noff_text = \"O\"\n")
        .expect("apply");
    let toml = checkbox.style_toml().expect("toml");
    assert!(toml.contains("on_text = \"I\""));
    assert!(checkbox.apply_toml("on_text = 3").is_err());
}

#[wasm_bindgen_test]
fn test_commands_json_has_four_layers() {
    mount_canvas("cb-json", 80, 28);
    let checkbox = Checkbox::new("cb-json").expect("bind");

    let json = checkbox.commands_json().expect("json");
    let commands: Vec<DrawCommand> = serde_json::from_str(&json).expect("parse");
    assert_eq!(commands.len(), 4);
    assert!(matches!(commands[0], DrawCommand::Capsule { .. }));
    assert!(matches!(commands[1], DrawCommand::Text { .. }));
}
