//! Browser glue: DOM lookup, canvas sizing, fallback notice, listeners and
//! the animation-frame loop

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, Window};

mod app;
mod surface;

pub use app::start;
pub use surface::{CanvasSurface, InputPicker};

pub(crate) fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

pub(crate) fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

pub(crate) fn document(window: &Window) -> Result<Document, JsValue> {
    window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))
}

/// The canvas element and its 2D context, or `None` when either is missing
pub(crate) fn find_canvas(
    document: &Document,
    id: &str,
) -> Result<Option<(HtmlCanvasElement, CanvasRenderingContext2d)>, JsValue> {
    let Some(canvas) = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
    else {
        return Ok(None);
    };

    let ctx = canvas
        .get_context("2d")?
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok());

    Ok(ctx.map(|ctx| (canvas, ctx)))
}

/// Reveal the static "not supported" notice
pub fn show_fallback(document: &Document, selector: &str) -> Result<(), JsValue> {
    if let Some(holder) = document
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        holder.style().set_property("display", "block")?;
    }
    Ok(())
}

/// Size the canvas backing store and its CSS box to the window's inner size
pub fn fit_canvas(window: &Window, canvas: &HtmlCanvasElement) -> Result<(u32, u32), JsValue> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0).max(0.0) as u32;
    let height = window.inner_height()?.as_f64().unwrap_or(0.0).max(0.0) as u32;

    canvas.set_width(width);
    canvas.set_height(height);

    let style = canvas.style();
    style.set_property("width", &format!("{}px", width))?;
    style.set_property("height", &format!("{}px", height))?;

    Ok((width, height))
}
