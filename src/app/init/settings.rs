use crate::config::validate_cell_size;
use crate::error::PaintError;

use super::PaintCore;

/// Changing the cell size replaces the grid, so every shape is dropped
pub(super) fn set_cell_size(core: &mut PaintCore, size: f64) -> Result<(), PaintError> {
    validate_cell_size(size)?;
    core.grid.set_cell_size(size)?;
    core.config.cell_size = size;
    core.shapes.clear();
    Ok(())
}

pub(super) fn set_grid_stroke_color(core: &mut PaintCore, color: &str) {
    core.config.grid_stroke_color = color.to_string();
    core.style.stroke_color = color.to_string();
}

pub(super) fn set_label_style(core: &mut PaintCore, font: &str, color: &str) {
    core.config.label_font = font.to_string();
    core.config.label_color = color.to_string();
    core.style.label_font = font.to_string();
    core.style.label_color = color.to_string();
}

pub(super) fn set_picker_offset(core: &mut PaintCore, offset: f64) {
    core.config.picker_offset = offset;
}
