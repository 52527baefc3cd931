//! PaintCore - the whole application state in one explicit struct
//!
//! Grid, shape registry, pointer and config live here and are passed by
//! `&mut` to the frame step and the input handlers. There are no globals.
//!
//! - events/   - input queue, drained once per frame in arrival order
//! - commands/ - paint / erase / resize
//! - frame/    - the per-frame redraw and its timing stats
//! - init/     - construction and runtime settings
//! - facade    - `#[wasm_bindgen]` wrapper for JS-driven hosts

use std::collections::VecDeque;

use crate::config::PaintConfig;
use crate::core::{Button, GridLayout, PointerState, ShapeId, ShapeRegistry};
use crate::error::PaintError;
use crate::render::{ColorControl, GridStyle, Surface};

#[path = "events/events.rs"]
mod events;
#[path = "commands/commands.rs"]
mod commands;
#[path = "frame/frame_timer.rs"]
mod frame_timer;
#[path = "frame/frame_stats.rs"]
mod frame_stats;
#[path = "frame/frame.rs"]
mod frame;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use events::InputEvent;
pub use facade::Painter;
pub use frame_stats::FrameStats;

use frame_timer::FrameTimer;

pub struct PaintCore {
    config: PaintConfig,
    style: GridStyle,
    grid: GridLayout,
    shapes: ShapeRegistry,
    pointer: PointerState,
    pending: VecDeque<InputEvent>,

    frame: u64,
    last_stats: FrameStats,
}

impl PaintCore {
    /// Create a painter for a `width` x `height` viewport with default settings
    /// (an empty grid when the viewport is too large to tile; the next resize retries)
    pub fn new(width: u32, height: u32) -> Self {
        let config = PaintConfig::default();
        let grid = GridLayout::build(width, height, config.cell_size).unwrap_or_else(|e| {
            console_warn!("{}", e);
            GridLayout::empty(config.cell_size)
        });
        init::create_paint_core(grid, config)
    }

    pub fn with_config(width: u32, height: u32, config: PaintConfig) -> Result<Self, PaintError> {
        config.validate()?;
        let grid = GridLayout::build(width, height, config.cell_size)?;
        Ok(init::create_paint_core(grid, config))
    }

    pub fn config(&self) -> &PaintConfig { &self.config }

    pub fn grid(&self) -> &GridLayout { &self.grid }

    pub fn shapes(&self) -> &ShapeRegistry { &self.shapes }

    pub fn pointer(&self) -> &PointerState { &self.pointer }

    pub fn shape_count(&self) -> usize { self.shapes.len() }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn last_frame_stats(&self) -> &FrameStats { &self.last_stats }

    /// Events queued but not yet applied
    pub fn pending_events(&self) -> usize { self.pending.len() }

    // === INPUT (queued until the next frame) ===

    pub fn push_event(&mut self, event: InputEvent) {
        events::push(self, event);
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.push_event(InputEvent::PointerMove { x, y });
    }

    pub fn button_down(&mut self, button: Button) {
        self.push_event(InputEvent::ButtonDown(button));
    }

    pub fn button_up(&mut self) {
        self.push_event(InputEvent::ButtonUp);
    }

    pub fn set_color(&mut self, color: &str) {
        self.push_event(InputEvent::ColorChanged(color.to_string()));
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.push_event(InputEvent::Resize { width, height });
    }

    /// Apply every queued event in arrival order. Returns how many were applied.
    pub fn apply_pending(&mut self) -> usize {
        events::apply_pending(self)
    }

    // === ACTIONS ===

    /// Paint the cell nearest the cursor with the current color.
    /// `Ok(None)` when the cell is already painted or no cursor is known yet.
    pub fn paint(&mut self) -> Result<Option<ShapeId>, PaintError> {
        commands::paint(self)
    }

    /// Erase the shape in the cell nearest the cursor, if any
    pub fn erase(&mut self) -> bool {
        commands::erase(self)
    }

    /// Rebuild the grid for a new viewport, dropping every shape.
    /// On error grid and shapes are left as they were.
    pub fn rebuild(&mut self, width: u32, height: u32) -> Result<(), PaintError> {
        commands::rebuild(self, width, height)
    }

    // === FRAME ===

    /// Run one frame: drain input, clear, move the picker, draw the grid,
    /// apply the pointer action, draw the shapes
    pub fn render_frame(
        &mut self,
        surface: &mut dyn Surface,
        picker: Option<&mut dyn ColorControl>,
    ) -> Result<FrameStats, PaintError> {
        frame::render_frame(self, surface, picker)
    }

    // === SETTINGS ===

    pub fn set_cell_size(&mut self, size: f64) -> Result<(), PaintError> {
        settings::set_cell_size(self, size)
    }

    pub fn set_grid_stroke_color(&mut self, color: &str) {
        settings::set_grid_stroke_color(self, color);
    }

    pub fn set_label_style(&mut self, font: &str, color: &str) {
        settings::set_label_style(self, font, color);
    }

    pub fn set_picker_offset(&mut self, offset: f64) {
        settings::set_picker_offset(self, offset);
    }

    /// Cell <-> shape links agree in both directions
    pub fn links_consistent(&self) -> bool {
        self.shapes.links_consistent(&self.grid)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
