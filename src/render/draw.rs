use crate::config::PaintConfig;
use crate::core::{Cell, Shape};
use crate::error::PaintError;

use super::Surface;

/// Colors and font used for grid outlines and labels
#[derive(Clone, Debug, PartialEq)]
pub struct GridStyle {
    pub stroke_color: String,
    pub label_font: String,
    pub label_color: String,
}

impl From<&PaintConfig> for GridStyle {
    fn from(config: &PaintConfig) -> Self {
        Self {
            stroke_color: config.grid_stroke_color.clone(),
            label_font: config.label_font.clone(),
            label_color: config.label_color.clone(),
        }
    }
}

/// Stroke the cell outline and draw its sequence number near the middle
pub fn draw_cell<S: Surface + ?Sized>(
    surface: &mut S,
    cell: &Cell,
    style: &GridStyle,
) -> Result<(), PaintError> {
    surface.save();
    surface.set_stroke_style(&style.stroke_color);
    surface.stroke_rect(cell.x(), cell.y(), cell.size(), cell.size());
    surface.restore();

    let label = cell.label().to_string();

    surface.save();
    surface.set_font(&style.label_font);
    surface.set_fill_style(&style.label_color);
    let result = surface.measure_text(&label).and_then(|extent| {
        // Text is pulled left by its full width and dropped by its full height
        surface.fill_text(
            &label,
            cell.middle_x() - extent.width,
            cell.middle_y() + extent.height(),
        )
    });
    surface.restore();
    result
}

/// Fill the shape's square; the anchor is its center
pub fn draw_shape<S: Surface + ?Sized>(surface: &mut S, shape: &Shape) {
    surface.save();
    surface.set_fill_style(shape.color());
    surface.fill_rect(shape.x(), shape.y(), shape.size(), shape.size());
    surface.restore();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GridLayout, ShapeRegistry};
    use crate::render::{DrawCommand, RecordingSurface};

    #[test]
    fn cell_label_is_offset_by_text_metrics() {
        let grid = GridLayout::build(100, 100, 50.0).unwrap();
        let cell = grid.cells().nth(4).unwrap(); // (50, 50), label 5
        let mut surface = RecordingSurface::new(100.0, 100.0);

        draw_cell(&mut surface, cell, &GridStyle::from(&PaintConfig::default())).unwrap();

        let extent = surface.text_extent("5");
        assert_eq!(
            surface.commands(),
            &[
                DrawCommand::StrokeRect { x: 50.0, y: 50.0, w: 50.0, h: 50.0, color: "#707070".into() },
                DrawCommand::FillText {
                    text: "5".into(),
                    x: 75.0 - extent.width,
                    y: 75.0 + extent.height(),
                    color: "#707070".into(),
                    font: "bold 20px Courier New".into(),
                },
            ]
        );
        assert_eq!(surface.depth(), 0);
    }

    #[test]
    fn shape_is_filled_around_its_center() {
        let mut grid = GridLayout::build(100, 100, 50.0).unwrap();
        let mut shapes = ShapeRegistry::new();
        let cell_id = grid.cell_near(60.0, 60.0).unwrap();
        let (cx, cy) = {
            let cell = grid.cell(cell_id).unwrap();
            (cell.middle_x(), cell.middle_y())
        };
        let id = shapes.create(&mut grid, cell_id, cx, cy, "#abcdef").unwrap();

        let mut surface = RecordingSurface::new(100.0, 100.0);
        draw_shape(&mut surface, shapes.get(id).unwrap());

        assert_eq!(
            surface.commands(),
            &[DrawCommand::FillRect { x: 50.0, y: 50.0, w: 50.0, h: 50.0, color: "#abcdef".into() }]
        );
    }
}
