//! In-memory `Surface` and `ColorControl` for headless replay and tests

use crate::error::PaintError;

use super::{ColorControl, Surface, TextExtent};

/// Monospace stand-in metrics
const CHAR_WIDTH: f64 = 12.0;
const ASCENT: f64 = 14.0;
const DESCENT: f64 = 4.0;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    ClearRect { x: f64, y: f64, w: f64, h: f64 },
    FillRect { x: f64, y: f64, w: f64, h: f64, color: String },
    StrokeRect { x: f64, y: f64, w: f64, h: f64, color: String },
    FillText { text: String, x: f64, y: f64, color: String, font: String },
}

#[derive(Clone, Debug)]
struct DrawState {
    fill: String,
    stroke: String,
    font: String,
}

impl Default for DrawState {
    fn default() -> Self {
        // Canvas2D defaults
        Self {
            fill: "#000000".to_string(),
            stroke: "#000000".to_string(),
            font: "10px sans-serif".to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    state: DrawState,
    stack: Vec<DrawState>,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            state: DrawState::default(),
            stack: Vec::new(),
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Forget everything drawn so far (the draw state is kept)
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Unbalanced `save` calls still on the stack
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Metrics this surface reports for `text`
    pub fn text_extent(&self, text: &str) -> TextExtent {
        TextExtent {
            width: text.chars().count() as f64 * CHAR_WIDTH,
            ascent: ASCENT,
            descent: DESCENT,
        }
    }

    pub fn fill_rects(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillRect { .. }))
    }

    pub fn stroke_rects(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokeRect { .. }))
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f64 { self.width }

    fn height(&self) -> f64 { self.height }

    fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn set_fill_style(&mut self, color: &str) {
        self.state.fill = color.to_string();
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.state.stroke = color.to_string();
    }

    fn set_font(&mut self, font: &str) {
        self.state.font = font.to_string();
    }

    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.commands.push(DrawCommand::ClearRect { x, y, w, h });
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let color = self.state.fill.clone();
        self.commands.push(DrawCommand::FillRect { x, y, w, h, color });
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let color = self.state.stroke.clone();
        self.commands.push(DrawCommand::StrokeRect { x, y, w, h, color });
    }

    fn measure_text(&mut self, text: &str) -> Result<TextExtent, PaintError> {
        Ok(self.text_extent(text))
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), PaintError> {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            x,
            y,
            color: self.state.fill.clone(),
            font: self.state.font.clone(),
        });
        Ok(())
    }
}

/// Color input stand-in that counts position writes
#[derive(Clone, Debug)]
pub struct RecordingPicker {
    position: Option<(f64, f64)>,
    value: String,
    moves: usize,
}

impl RecordingPicker {
    pub fn new(value: &str) -> Self {
        Self {
            position: None,
            value: value.to_string(),
            moves: 0,
        }
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    /// Number of `set_position` calls so far
    pub fn moves(&self) -> usize {
        self.moves
    }
}

impl ColorControl for RecordingPicker {
    fn position(&self) -> Option<(f64, f64)> {
        self.position
    }

    fn set_position(&mut self, x: f64, y: f64) {
        self.position = Some((x, y));
        self.moves += 1;
    }

    fn value(&self) -> String {
        self.value.clone()
    }
}
