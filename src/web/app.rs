use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, HtmlCanvasElement, HtmlInputElement, MouseEvent, Window};

use crate::app::PaintCore;
use crate::config::PaintConfig;
use crate::core::Button;
use crate::render::ColorControl;

use super::{document, find_canvas, fit_canvas, show_fallback, window, CanvasSurface, InputPicker};

/// Everything the event handlers and the frame callback share
struct WebApp {
    core: PaintCore,
    surface: CanvasSurface,
    picker: Option<InputPicker>,
}

impl WebApp {
    fn step(&mut self) {
        let picker = self.picker.as_mut().map(|p| p as &mut dyn ColorControl);
        if let Err(e) = self.core.render_frame(&mut self.surface, picker) {
            console_warn!("frame {} failed: {}", self.core.frame(), e);
        }
    }
}

/// Mount the painter on the page and run it until the page goes away.
///
/// `config_json` is an optional partial `PaintConfig` object. When the canvas
/// or its 2D context is unavailable the fallback notice is shown and nothing
/// else is set up.
#[wasm_bindgen]
pub fn start(config_json: Option<String>) -> Result<(), JsValue> {
    crate::init();

    let config = match config_json {
        Some(json) => PaintConfig::from_json(&json)?,
        None => PaintConfig::default(),
    };

    let window = window()?;
    let document = document(&window)?;

    let Some((canvas, ctx)) = find_canvas(&document, &config.canvas_id)? else {
        console_warn!("canvas #{} has no 2d context, showing fallback", config.canvas_id);
        return show_fallback(&document, &config.fallback_selector);
    };

    let (width, height) = fit_canvas(&window, &canvas)?;

    let picker_input = document
        .get_element_by_id(&config.picker_id)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
    if picker_input.is_none() {
        console_warn!("color input #{} not found, painting with {}", config.picker_id, config.default_color);
    }

    let core = PaintCore::with_config(width, height, config)?;
    let app = Rc::new(RefCell::new(WebApp {
        core,
        surface: CanvasSurface::new(ctx, width as f64, height as f64),
        picker: picker_input.clone().map(InputPicker::new),
    }));

    install_pointer_listeners(&canvas, &app)?;
    install_resize_listener(&window, &canvas, &app)?;
    if let Some(input) = picker_input {
        install_color_listener(&input, &app)?;
    }

    run_frame_loop(&window, app)
}

/// Attach `handler` for the page's lifetime
fn listen(
    target: &EventTarget,
    name: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn install_pointer_listeners(canvas: &HtmlCanvasElement, app: &Rc<RefCell<WebApp>>) -> Result<(), JsValue> {
    let state = app.clone();
    listen(canvas, "mousemove", move |e| {
        if let Some(e) = e.dyn_ref::<MouseEvent>() {
            state
                .borrow_mut()
                .core
                .pointer_move(e.client_x() as f64, e.client_y() as f64);
        }
    })?;

    let state = app.clone();
    listen(canvas, "mousedown", move |e| {
        if let Some(e) = e.dyn_ref::<MouseEvent>() {
            state.borrow_mut().core.button_down(Button::from_dom(e.button()));
        }
    })?;

    let state = app.clone();
    listen(canvas, "mouseup", move |_| {
        state.borrow_mut().core.button_up();
    })?;

    // Secondary button erases instead of opening the menu
    listen(canvas, "contextmenu", |e| e.prevent_default())
}

fn install_resize_listener(
    window: &Window,
    canvas: &HtmlCanvasElement,
    app: &Rc<RefCell<WebApp>>,
) -> Result<(), JsValue> {
    let state = app.clone();
    let win = window.clone();
    let canvas = canvas.clone();
    listen(window, "resize", move |_| match fit_canvas(&win, &canvas) {
        Ok((width, height)) => {
            let mut app = state.borrow_mut();
            app.surface.resize(width as f64, height as f64);
            app.core.resize(width, height);
        }
        Err(e) => console_warn!("resize failed: {:?}", e),
    })
}

fn install_color_listener(input: &HtmlInputElement, app: &Rc<RefCell<WebApp>>) -> Result<(), JsValue> {
    let state = app.clone();
    let source = input.clone();
    listen(input, "input", move |_| {
        state.borrow_mut().core.set_color(&source.value());
    })
}

/// requestAnimationFrame loop; the closure re-schedules itself forever
fn run_frame_loop(window: &Window, app: Rc<RefCell<WebApp>>) -> Result<(), JsValue> {
    let frame_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let next_cb = frame_cb.clone();
    let win = window.clone();

    *frame_cb.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        app.borrow_mut().step();

        if let Some(cb) = next_cb.borrow().as_ref() {
            if let Err(e) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
                console_warn!("could not schedule next frame: {:?}", e);
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(cb) = frame_cb.borrow().as_ref() {
        window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }
    Ok(())
}
