use std::collections::VecDeque;

use crate::config::PaintConfig;
use crate::core::{GridLayout, PointerState, ShapeRegistry};
use crate::render::GridStyle;

use super::{FrameStats, PaintCore};

pub(super) fn create_paint_core(grid: GridLayout, config: PaintConfig) -> PaintCore {
    console_log!(
        "paint grid {}x{}: {} cells of {}px",
        grid.width(),
        grid.height(),
        grid.len(),
        config.cell_size
    );

    PaintCore {
        style: GridStyle::from(&config),
        pointer: PointerState::new(&config.default_color),
        grid,
        shapes: ShapeRegistry::new(),
        pending: VecDeque::with_capacity(64),
        frame: 0,
        last_stats: FrameStats::default(),
        config,
    }
}
