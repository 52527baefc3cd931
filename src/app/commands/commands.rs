use crate::core::ShapeId;
use crate::error::PaintError;

use super::PaintCore;

pub(super) fn paint(core: &mut PaintCore) -> Result<Option<ShapeId>, PaintError> {
    let Some((x, y)) = core.pointer.position() else {
        return Ok(None);
    };

    let cell_id = core
        .grid
        .cell_near(x, y)
        .ok_or(PaintError::NoTargetCell { x, y })?;

    let Some(cell) = core.grid.cell(cell_id) else {
        return Ok(None);
    };
    let (center_x, center_y) = (cell.middle_x(), cell.middle_y());

    Ok(core
        .shapes
        .create(&mut core.grid, cell_id, center_x, center_y, core.pointer.color()))
}

pub(super) fn erase(core: &mut PaintCore) -> bool {
    let Some((x, y)) = core.pointer.position() else {
        return false;
    };

    let Some(shape_id) = core
        .grid
        .cell_near(x, y)
        .and_then(|id| core.grid.cell(id))
        .and_then(|cell| cell.shape())
    else {
        return false;
    };

    core.shapes.remove(&mut core.grid, shape_id)
}

pub(super) fn rebuild(core: &mut PaintCore, width: u32, height: u32) -> Result<(), PaintError> {
    core.grid.rebuild(width, height)?;
    core.shapes.clear();
    console_log!(
        "grid rebuilt for {}x{}: {} columns x {} rows",
        width,
        height,
        core.grid.columns(),
        core.grid.rows()
    );
    Ok(())
}
