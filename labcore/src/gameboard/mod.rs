pub mod cell;
pub use cell::{Cell, CellState, CellWall};

pub mod grid;
pub use grid::Grid;
