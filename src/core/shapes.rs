//! Shape Registry - painted squares keyed by a monotonic identifier
//!
//! Shape -> Cell and Cell -> Shape are both plain indices. `create` and
//! `remove` are the only places that touch either side, and they always
//! update both together.

use std::collections::HashMap;

use super::grid::{CellId, GridLayout};

/// Identifier of a painted shape (never reused within a registry)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub(crate) u64);

impl ShapeId {
    #[inline]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// A filled square anchored at its center
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    id: ShapeId,
    center_x: f64,
    center_y: f64,
    size: f64,
    color: String,
    cell: CellId,
}

impl Shape {
    pub fn id(&self) -> ShapeId { self.id }

    pub fn center_x(&self) -> f64 { self.center_x }

    pub fn center_y(&self) -> f64 { self.center_y }

    /// Left edge (center minus half a side)
    pub fn x(&self) -> f64 { self.center_x - self.size / 2.0 }

    /// Top edge (center minus half a side)
    pub fn y(&self) -> f64 { self.center_y - self.size / 2.0 }

    pub fn size(&self) -> f64 { self.size }

    pub fn color(&self) -> &str { &self.color }

    /// Cell this shape occupies
    pub fn cell(&self) -> CellId { self.cell }
}

#[derive(Clone, Debug, Default)]
pub struct ShapeRegistry {
    shapes: HashMap<ShapeId, Shape>,
    next_id: u64,
}

impl ShapeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paint `cell` with `color`, centered at `(center_x, center_y)`.
    /// Returns `None` if the cell is already occupied or does not exist.
    pub fn create(
        &mut self,
        grid: &mut GridLayout,
        cell_id: CellId,
        center_x: f64,
        center_y: f64,
        color: &str,
    ) -> Option<ShapeId> {
        let size = grid.cell_size();
        let cell = grid.cell_mut(cell_id)?;
        if cell.shape.is_some() {
            return None;
        }

        let id = ShapeId(self.next_id);
        self.next_id += 1;

        cell.shape = Some(id);
        self.shapes.insert(
            id,
            Shape {
                id,
                center_x,
                center_y,
                size,
                color: color.to_string(),
                cell: cell_id,
            },
        );
        Some(id)
    }

    /// Remove a shape and clear its cell's occupancy. Unknown ids are ignored.
    pub fn remove(&mut self, grid: &mut GridLayout, id: ShapeId) -> bool {
        let Some(shape) = self.shapes.remove(&id) else {
            return false;
        };

        if let Some(cell) = grid.cell_mut(shape.cell) {
            if cell.shape == Some(id) {
                cell.shape = None;
            }
        }
        true
    }

    /// Drop every shape. Used when the grid they point into is replaced.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(&id)
    }

    /// Shapes in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.values()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// True when every shape's cell points back at it and every occupied cell
    /// points at a live shape that names that cell
    pub fn links_consistent(&self, grid: &GridLayout) -> bool {
        let forward = self.shapes.values().all(|shape| {
            grid.cell(shape.cell)
                .map_or(false, |cell| cell.shape == Some(shape.id))
        });

        let backward = grid.cells().enumerate().all(|(idx, cell)| match cell.shape {
            None => true,
            Some(id) => self.shapes.get(&id).map_or(false, |s| s.cell == CellId(idx)),
        });

        forward && backward
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> GridLayout {
        GridLayout::build(800, 600, 50.0).unwrap()
    }

    #[test]
    fn create_links_both_sides() {
        let mut grid = grid();
        let mut shapes = ShapeRegistry::new();

        let id = shapes.create(&mut grid, CellId(3), 25.0, 175.0, "#ff0000").unwrap();
        let shape = shapes.get(id).unwrap();

        assert_eq!(shape.cell(), CellId(3));
        assert_eq!(shape.color(), "#ff0000");
        assert_eq!(grid.cell(CellId(3)).unwrap().shape(), Some(id));
        assert!(shapes.links_consistent(&grid));
    }

    #[test]
    fn create_on_occupied_cell_is_noop() {
        let mut grid = grid();
        let mut shapes = ShapeRegistry::new();

        let first = shapes.create(&mut grid, CellId(0), 25.0, 25.0, "#000000");
        let second = shapes.create(&mut grid, CellId(0), 25.0, 25.0, "#ffffff");

        assert!(first.is_some());
        assert!(second.is_none());
        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes.iter().next().unwrap().color(), "#000000");
    }

    #[test]
    fn create_then_remove_restores_count() {
        let mut grid = grid();
        let mut shapes = ShapeRegistry::new();

        let id = shapes.create(&mut grid, CellId(10), 0.0, 0.0, "#2d2d2d").unwrap();
        assert_eq!(shapes.len(), 1);

        assert!(shapes.remove(&mut grid, id));
        assert!(shapes.is_empty());
        assert!(!grid.cell(CellId(10)).unwrap().is_occupied());
        assert!(shapes.links_consistent(&grid));
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut grid = grid();
        let mut shapes = ShapeRegistry::new();
        shapes.create(&mut grid, CellId(1), 0.0, 0.0, "#2d2d2d");

        assert!(!shapes.remove(&mut grid, ShapeId(99)));
        assert_eq!(shapes.len(), 1);
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut grid = grid();
        let mut shapes = ShapeRegistry::new();

        let a = shapes.create(&mut grid, CellId(0), 0.0, 0.0, "#111111").unwrap();
        shapes.remove(&mut grid, a);
        let b = shapes.create(&mut grid, CellId(0), 0.0, 0.0, "#111111").unwrap();

        assert!(b > a);
    }

    #[test]
    fn shape_edges_are_offset_by_half_a_cell() {
        let mut grid = grid();
        let mut shapes = ShapeRegistry::new();
        let id = shapes.create(&mut grid, CellId(0), 25.0, 25.0, "#2d2d2d").unwrap();
        let shape = shapes.get(id).unwrap();

        assert_eq!((shape.x(), shape.y()), (0.0, 0.0));
        assert_eq!(shape.size(), 50.0);
    }

    #[test]
    fn out_of_range_cell_is_rejected() {
        let mut grid = grid();
        let mut shapes = ShapeRegistry::new();
        assert!(shapes.create(&mut grid, CellId(10_000), 0.0, 0.0, "#2d2d2d").is_none());
        assert!(shapes.is_empty());
    }
}
