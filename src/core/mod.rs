//! Host-independent painting state: grid, shapes and pointer

#[macro_use]
pub mod utils;
pub mod grid;
pub mod shapes;
pub mod pointer;

pub use grid::{Cell, CellId, GridLayout};
pub use pointer::{Button, PointerMode, PointerState};
pub use shapes::{Shape, ShapeId, ShapeRegistry};
