use crate::core::PointerMode;
use crate::error::PaintError;
use crate::render::{draw_cell, draw_shape, ColorControl, Surface};

use super::{FrameStats, FrameTimer, PaintCore};

pub(super) fn render_frame(
    core: &mut PaintCore,
    surface: &mut dyn Surface,
    picker: Option<&mut dyn ColorControl>,
) -> Result<FrameStats, PaintError> {
    let timer = FrameTimer::start();
    let mut stats = FrameStats {
        frame: core.frame,
        ..FrameStats::default()
    };

    stats.events_applied = core.apply_pending() as u32;

    surface.clear_rect(0.0, 0.0, surface.width(), surface.height());

    if let Some(picker) = picker {
        stats.picker_moved = track_picker(core, picker);
    }

    for cell in core.grid.cells() {
        draw_cell(&mut *surface, cell, &core.style)?;
        stats.cells_drawn += 1;
    }

    // mode() reports Erasing when both buttons are held
    match core.pointer.mode() {
        PointerMode::Painting => {
            stats.painted = match core.paint() {
                Ok(created) => created.is_some(),
                // Cursor off the grid: nothing to paint this frame
                Err(PaintError::NoTargetCell { .. }) => false,
                Err(e) => return Err(e),
            };
        }
        PointerMode::Erasing => stats.erased = core.erase(),
        PointerMode::Idle => {}
    }

    for shape in core.shapes.iter() {
        draw_shape(&mut *surface, shape);
        stats.shapes_drawn += 1;
    }

    stats.frame_ms = timer.elapsed_ms();
    core.frame += 1;
    core.last_stats = stats.clone();
    Ok(stats)
}

/// Keep the color picker a fixed offset below-right of the cursor.
/// Only writes when the target actually differs.
fn track_picker(core: &PaintCore, picker: &mut dyn ColorControl) -> bool {
    let Some((x, y)) = core.pointer.position() else {
        return false;
    };

    let offset = core.config.picker_offset;
    let target = (x + offset, y + offset);
    if picker.position() == Some(target) {
        return false;
    }

    picker.set_position(target.0, target.1);
    true
}
