use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlInputElement};

use crate::config::PaintConfig;
use crate::core::Button;
use crate::render::ColorControl;
use crate::web::{CanvasSurface, InputPicker};

use super::PaintCore;

/// JS handle for hosts that run their own animation loop
#[wasm_bindgen]
pub struct Painter {
    core: PaintCore,
}

#[wasm_bindgen]
impl Painter {
    /// Create a painter for a viewport with default settings
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: PaintCore::new(width, height),
        }
    }

    #[wasm_bindgen(js_name = withConfigJson)]
    pub fn with_config_json(width: u32, height: u32, json: String) -> Result<Painter, JsValue> {
        let config = PaintConfig::from_json(&json)?;
        Ok(Self {
            core: PaintCore::with_config(width, height, config)?,
        })
    }

    #[wasm_bindgen(getter)]
    pub fn cell_count(&self) -> u32 { self.core.grid().len() as u32 }

    #[wasm_bindgen(getter)]
    pub fn columns(&self) -> u32 { self.core.grid().columns() }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 { self.core.grid().rows() }

    #[wasm_bindgen(getter)]
    pub fn shape_count(&self) -> u32 { self.core.shape_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.core.pointer_move(x, y);
    }

    /// `button` is the DOM `MouseEvent.button` code (2 = secondary)
    pub fn button_down(&mut self, button: i16) {
        self.core.button_down(Button::from_dom(button));
    }

    pub fn button_up(&mut self) {
        self.core.button_up();
    }

    pub fn set_color(&mut self, color: String) {
        self.core.set_color(&color);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.core.resize(width, height);
    }

    pub fn set_cell_size(&mut self, size: f64) -> Result<(), JsValue> {
        self.core.set_cell_size(size)?;
        Ok(())
    }

    /// Run one frame against a 2D context (and optionally the color input)
    pub fn render(
        &mut self,
        ctx: CanvasRenderingContext2d,
        picker: Option<HtmlInputElement>,
    ) -> Result<(), JsValue> {
        let grid = self.core.grid();
        let (width, height) = ctx
            .canvas()
            .map(|canvas| (canvas.width() as f64, canvas.height() as f64))
            .unwrap_or((grid.width() as f64, grid.height() as f64));
        let mut surface = CanvasSurface::new(ctx, width, height);
        let mut picker = picker.map(InputPicker::new);

        self.core.render_frame(
            &mut surface,
            picker.as_mut().map(|p| p as &mut dyn ColorControl),
        )?;
        Ok(())
    }

    pub fn last_frame_stats_json(&self) -> String {
        self.core.last_frame_stats().to_json()
    }
}
