//! Browser-side checks; run with `wasm-pack test --headless --firefox`
#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, HtmlInputElement};

use pixel_paint::render::{ColorControl, Surface};
use pixel_paint::web::{fit_canvas, CanvasSurface, InputPicker};
use pixel_paint::Painter;

wasm_bindgen_test_configure!(run_in_browser);

fn context(width: u32, height: u32) -> CanvasRenderingContext2d {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .unwrap()
        .dyn_into()
        .unwrap();
    canvas.set_width(width);
    canvas.set_height(height);
    canvas
        .get_context("2d")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap()
}

#[wasm_bindgen_test]
fn canvas_surface_measures_labels() {
    let mut surface = CanvasSurface::new(context(100, 100), 100.0, 100.0);
    surface.set_font("bold 20px Courier New");
    let extent = surface.measure_text("221").unwrap();
    assert!(extent.width > 0.0);
}

#[wasm_bindgen_test]
fn painter_paints_through_a_real_context() {
    let ctx = context(200, 200);
    let mut painter = Painter::new(200, 200);

    painter.pointer_move(10.0, 10.0);
    painter.button_down(0);
    painter.render(ctx.clone(), None).unwrap();
    assert_eq!(painter.shape_count(), 1);

    painter.button_up();
    painter.button_down(2);
    painter.render(ctx, None).unwrap();
    assert_eq!(painter.shape_count(), 0);
    assert!(painter.last_frame_stats_json().contains("\"erased\":true"));
}

fn holder(class: &str) -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let holder: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
    holder.set_class_name(class);
    holder.style().set_property("display", "none").unwrap();
    document.body().unwrap().append_child(&holder).unwrap();
    holder
}

#[wasm_bindgen_test]
fn start_without_canvas_shows_fallback() {
    let holder = holder("canvas-not-supported-holder");

    pixel_paint::start(Some(r#"{"canvas_id":"missing"}"#.into())).unwrap();

    assert_eq!(holder.style().get_property_value("display").unwrap(), "block");
    holder.remove();
}

#[wasm_bindgen_test]
fn start_with_bad_config_fails_before_touching_the_page() {
    let holder = holder("canvas-not-supported-holder");

    assert!(pixel_paint::start(Some(r#"{"canvas_id":"missing","cell_size":0}"#.into())).is_err());

    assert_eq!(holder.style().get_property_value("display").unwrap(), "none");
    holder.remove();
}

#[wasm_bindgen_test]
fn fit_canvas_matches_the_window() {
    let window = web_sys::window().unwrap();
    let canvas: HtmlCanvasElement = window
        .document()
        .unwrap()
        .create_element("canvas")
        .unwrap()
        .dyn_into()
        .unwrap();

    let (width, height) = fit_canvas(&window, &canvas).unwrap();

    assert_eq!(width, window.inner_width().unwrap().as_f64().unwrap() as u32);
    assert_eq!(height, window.inner_height().unwrap().as_f64().unwrap() as u32);
    assert_eq!((canvas.width(), canvas.height()), (width, height));
    assert_eq!(
        canvas.style().get_property_value("width").unwrap(),
        format!("{}px", width)
    );
}

#[wasm_bindgen_test]
fn logging_macros_work_from_another_crate() {
    pixel_paint::console_log!("{} cells", 221);
    pixel_paint::console_warn!("no target cell at ({}, {})", -1.0, -1.0);
}

#[wasm_bindgen_test]
fn input_picker_moves_through_inline_style() {
    let document = web_sys::window().unwrap().document().unwrap();
    let input: HtmlInputElement = document.create_element("input").unwrap().dyn_into().unwrap();
    input.set_value("#ff0000");
    let mut picker = InputPicker::new(input.clone());
    assert_eq!(picker.position(), None);

    picker.set_position(120.0, 60.0);

    assert_eq!(picker.position(), Some((120.0, 60.0)));
    assert_eq!(input.style().get_property_value("left").unwrap(), "120px");
    assert_eq!(picker.value(), "#ff0000");
}
