//! Rendering seam
//!
//! The frame step only talks to a `Surface` (the 2D drawing context) and a
//! `ColorControl` (the floating color input). The browser implementations live
//! in `web/`; `recording` provides an in-memory pair for headless replay.

use crate::error::PaintError;

mod draw;
pub mod recording;

pub use draw::{draw_cell, draw_shape, GridStyle};
pub use recording::{DrawCommand, RecordingPicker, RecordingSurface};

/// Result of a text-metrics query
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextExtent {
    pub width: f64,
    pub ascent: f64,
    pub descent: f64,
}

impl TextExtent {
    #[inline]
    pub fn height(&self) -> f64 {
        self.ascent + self.descent
    }
}

/// Immediate-mode 2D drawing surface sized to the viewport
pub trait Surface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;

    fn save(&mut self);
    fn restore(&mut self);

    fn set_fill_style(&mut self, color: &str);
    fn set_stroke_style(&mut self, color: &str);
    fn set_font(&mut self, font: &str);

    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64);

    fn measure_text(&mut self, text: &str) -> Result<TextExtent, PaintError>;
    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), PaintError>;
}

/// Externally positioned color input
pub trait ColorControl {
    /// Current position, `None` when it has never been placed
    fn position(&self) -> Option<(f64, f64)>;
    fn set_position(&mut self, x: f64, y: f64);
    fn value(&self) -> String;
}
