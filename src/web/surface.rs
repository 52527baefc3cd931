use web_sys::{CanvasRenderingContext2d, HtmlInputElement};

use crate::error::PaintError;
use crate::render::{ColorControl, Surface, TextExtent};

use super::js_error;

/// `Surface` over a browser 2D canvas context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d, width: f64, height: f64) -> Self {
        Self { ctx, width, height }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> f64 { self.width }

    fn height(&self) -> f64 { self.height }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn set_fill_style(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.ctx.set_stroke_style_str(color);
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.clear_rect(x, y, w, h);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.fill_rect(x, y, w, h);
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.stroke_rect(x, y, w, h);
    }

    fn measure_text(&mut self, text: &str) -> Result<TextExtent, PaintError> {
        let metrics = self
            .ctx
            .measure_text(text)
            .map_err(|e| PaintError::Surface(js_error(&e)))?;

        Ok(TextExtent {
            width: metrics.width(),
            ascent: metrics.actual_bounding_box_ascent(),
            descent: metrics.actual_bounding_box_descent(),
        })
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), PaintError> {
        self.ctx
            .fill_text(text, x, y)
            .map_err(|e| PaintError::Surface(js_error(&e)))
    }
}

/// The floating `<input type="color">`, positioned through its inline style
pub struct InputPicker {
    input: HtmlInputElement,
}

impl InputPicker {
    pub fn new(input: HtmlInputElement) -> Self {
        Self { input }
    }

    fn style_px(&self, property: &str) -> Option<f64> {
        let value = self.input.style().get_property_value(property).ok()?;
        value.trim_end_matches("px").trim().parse().ok()
    }
}

impl ColorControl for InputPicker {
    fn position(&self) -> Option<(f64, f64)> {
        Some((self.style_px("left")?, self.style_px("top")?))
    }

    fn set_position(&mut self, x: f64, y: f64) {
        let style = self.input.style();
        for (property, value) in [("left", x), ("top", y)] {
            if let Err(e) = style.set_property(property, &format!("{}px", value)) {
                console_warn!("color picker {} not set: {}", property, js_error(&e));
            }
        }
    }

    fn value(&self) -> String {
        self.input.value()
    }
}
