use thiserror::Error;

use crate::{dims::Dims, gameboard::CellWall};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeError {
    /// Rows or columns were not positive when building a grid.
    #[error("invalid maze size {rows}x{columns}, both dimensions must be positive")]
    InvalidDimension { rows: i32, columns: i32 },
    /// A fixed start or goal lies outside the grid.
    #[error("position {pos:?} is outside of the maze")]
    OutOfBounds { pos: Dims },
    /// The move is blocked by a wall or leaves the grid.
    #[error("can't move {direction:?} from {from:?}")]
    IllegalMove { from: Dims, direction: CellWall },
    /// Walls were to be removed between cells that don't share an edge.
    ///
    /// Generation algorithms never request this, so seeing it means a bug in them.
    #[error("cells {from:?} and {to:?} are not adjacent")]
    InvalidAdjacency { from: Dims, to: Dims },
}
