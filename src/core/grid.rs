//! Grid Layout - fixed-size tiling of the viewport into square cells
//!
//! Cells are stored in one flat Vec in creation order (column-major), so a
//! `CellId` is simply the position in that Vec. The occupancy link to a shape
//! is an index (`ShapeId`), never a reference, so the grid can be replaced
//! wholesale on resize without any dangling pointers.

use crate::error::PaintError;

use super::shapes::ShapeId;

/// Index of a cell inside the current layout
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub(crate) usize);

impl CellId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// One tile of the grid
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    x: f64,
    y: f64,
    size: f64,
    label: u32,
    pub(crate) shape: Option<ShapeId>,
}

impl Cell {
    /// Top-left corner, x
    #[inline]
    pub fn x(&self) -> f64 { self.x }

    /// Top-left corner, y
    #[inline]
    pub fn y(&self) -> f64 { self.y }

    #[inline]
    pub fn size(&self) -> f64 { self.size }

    /// 1-based sequence number in creation order
    #[inline]
    pub fn label(&self) -> u32 { self.label }

    #[inline]
    pub fn middle_x(&self) -> f64 { self.x + self.size / 2.0 }

    #[inline]
    pub fn middle_y(&self) -> f64 { self.y + self.size / 2.0 }

    /// Shape currently painted in this cell
    #[inline]
    pub fn shape(&self) -> Option<ShapeId> { self.shape }

    #[inline]
    pub fn is_occupied(&self) -> bool { self.shape.is_some() }
}

/// Upper bound on cells in one layout
pub const MAX_CELLS: usize = 4_000_000;

/// Number of cells along one axis: round(extent / size) + 1
#[inline]
pub fn cells_along(extent: u32, cell_size: f64) -> usize {
    ((extent as f64 / cell_size).round() as usize).saturating_add(1)
}

/// Columns and rows for a viewport, or `InvalidConfig` past `MAX_CELLS`
pub fn layout_dimensions(width: u32, height: u32, cell_size: f64) -> Result<(u32, u32), PaintError> {
    let columns = cells_along(width, cell_size);
    let rows = cells_along(height, cell_size);

    match columns.checked_mul(rows) {
        Some(total) if total <= MAX_CELLS => Ok((columns as u32, rows as u32)),
        _ => Err(PaintError::InvalidConfig(format!(
            "{}x{} viewport with {}px cells exceeds {} cells",
            width, height, cell_size, MAX_CELLS
        ))),
    }
}

/// The full tiling for one viewport size
#[derive(Clone, Debug)]
pub struct GridLayout {
    cells: Vec<Cell>,
    columns: u32,
    rows: u32,
    cell_size: f64,
    width: u32,
    height: u32,
}

impl GridLayout {
    /// Build the tiling for a viewport of `width` x `height` pixels
    pub fn build(width: u32, height: u32, cell_size: f64) -> Result<Self, PaintError> {
        let mut grid = Self::empty(cell_size);
        grid.rebuild(width, height)?;
        Ok(grid)
    }

    /// A layout with no cells, for when no viewport can be tiled
    pub fn empty(cell_size: f64) -> Self {
        Self {
            cells: Vec::new(),
            columns: 0,
            rows: 0,
            cell_size,
            width: 0,
            height: 0,
        }
    }

    /// Replace every cell with a fresh tiling. Occupancy is not carried over.
    /// On error the current cells are left untouched.
    pub fn rebuild(&mut self, width: u32, height: u32) -> Result<(), PaintError> {
        let (columns, rows) = layout_dimensions(width, height, self.cell_size)?;

        self.cells.clear();
        self.cells.reserve(columns as usize * rows as usize);

        for col in 0..columns {
            for row in 0..rows {
                let label = self.cells.len() as u32 + 1;
                self.cells.push(Cell {
                    x: col as f64 * self.cell_size,
                    y: row as f64 * self.cell_size,
                    size: self.cell_size,
                    label,
                    shape: None,
                });
            }
        }

        self.columns = columns;
        self.rows = rows;
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Change the cell size and rebuild for the current viewport.
    /// The old size is kept if the new one cannot tile it.
    pub fn set_cell_size(&mut self, cell_size: f64) -> Result<(), PaintError> {
        layout_dimensions(self.width, self.height, cell_size)?;
        self.cell_size = cell_size;
        self.rebuild(self.width, self.height)
    }

    /// First cell (creation order) whose top-left corner lies strictly within
    /// one cell size of `(x, y)` on both axes
    pub fn cell_near(&self, x: f64, y: f64) -> Option<CellId> {
        let size = self.cell_size;
        self.cells
            .iter()
            .position(|cell| (cell.x - x).abs() < size && (cell.y - y).abs() < size)
            .map(CellId)
    }

    #[inline]
    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(id.0)
    }

    #[inline]
    pub(crate) fn cell_mut(&mut self, id: CellId) -> Option<&mut Cell> {
        self.cells.get_mut(id.0)
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_occupied()).count()
    }

    pub fn len(&self) -> usize { self.cells.len() }

    pub fn is_empty(&self) -> bool { self.cells.is_empty() }

    pub fn columns(&self) -> u32 { self.columns }

    pub fn rows(&self) -> u32 { self.rows }

    pub fn cell_size(&self) -> f64 { self.cell_size }

    pub fn width(&self) -> u32 { self.width }

    pub fn height(&self) -> u32 { self.height }
}
