use rand::Rng;
use smallvec::SmallVec;

use super::cell::{Cell, CellState, CellWall};
use crate::{array::Array2D, dims::Dims, error::MazeError};

use self::CellWall::*;

/// Rectangular board of cells with a start and a goal.
///
/// The shape never changes after [`Grid::new`]. Walls are only ever cleared in pairs by
/// [`Grid::remove_walls_between`].
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Array2D<Cell>,
    start: Dims,
    goal: Dims,
}

impl Grid {
    /// Allocates `rows` x `columns` closed cells and links their neighbours.
    ///
    /// Start and goal are drawn independently and uniformly (row first, then column),
    /// so they may land on the same cell.
    pub fn new<R: Rng + ?Sized>(rows: i32, columns: i32, rng: &mut R) -> Result<Grid, MazeError> {
        let cells = Self::build_cells(rows, columns)?;

        let start = Self::random_pos(cells.size(), rng);
        let goal = Self::random_pos(cells.size(), rng);

        Ok(Self::with_cells(cells, start, goal))
    }

    /// Same as [`Grid::new`], but with a fixed start and goal.
    pub fn with_endpoints(
        rows: i32,
        columns: i32,
        start: Dims,
        goal: Dims,
    ) -> Result<Grid, MazeError> {
        let cells = Self::build_cells(rows, columns)?;

        for pos in [start, goal] {
            if !Self::in_bounds(cells.size(), pos) {
                return Err(MazeError::OutOfBounds { pos });
            }
        }

        Ok(Self::with_cells(cells, start, goal))
    }

    fn build_cells(rows: i32, columns: i32) -> Result<Array2D<Cell>, MazeError> {
        if rows <= 0 || columns <= 0 {
            return Err(MazeError::InvalidDimension { rows, columns });
        }

        let size = Dims(columns, rows);
        let mut cells = Array2D::from_fn(size, Cell::new)
            .ok_or(MazeError::InvalidDimension { rows, columns })?;

        for cell in cells.iter_mut() {
            let pos = cell.get_coord();
            let adjacent = CellWall::get_in_order()
                .into_iter()
                .map(|wall| pos + wall.to_coord())
                .filter(|&other| Self::in_bounds(size, other))
                .collect::<SmallVec<_>>();
            cell.set_adjacent(adjacent);
        }

        Ok(cells)
    }

    fn with_cells(mut cells: Array2D<Cell>, start: Dims, goal: Dims) -> Grid {
        cells[goal].set_goal(true);

        log::debug!(
            "Built {}x{} grid, start {:?}, goal {:?}",
            cells.size().1,
            cells.size().0,
            start,
            goal
        );

        Grid { cells, start, goal }
    }

    fn random_pos<R: Rng + ?Sized>(size: Dims, rng: &mut R) -> Dims {
        let row = rng.gen_range(0..size.1);
        let column = rng.gen_range(0..size.0);
        Dims::new(row, column)
    }

    fn in_bounds(size: Dims, pos: Dims) -> bool {
        0 <= pos.0 && pos.0 < size.0 && 0 <= pos.1 && pos.1 < size.1
    }

    pub fn rows(&self) -> i32 {
        self.cells.size().1
    }

    pub fn columns(&self) -> i32 {
        self.cells.size().0
    }

    /// Size as `Dims(columns, rows)`.
    pub fn size(&self) -> Dims {
        self.cells.size()
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn start(&self) -> Dims {
        self.start
    }

    pub fn goal(&self) -> Dims {
        self.goal
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        Self::in_bounds(self.size(), pos)
    }

    pub fn get_cell(&self, pos: Dims) -> Option<&Cell> {
        self.cells.get(pos)
    }

    /// All cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        self.cells.row(row)
    }

    /// Precomputed grid neighbours in top, right, bottom, left order.
    ///
    /// Empty for positions outside the grid.
    pub fn neighbors_of(&self, pos: Dims) -> &[Dims] {
        self.cells.get(pos).map(Cell::adjacent).unwrap_or_default()
    }

    pub fn state_of(&self, pos: Dims) -> Option<CellState> {
        self.cells.get(pos).map(Cell::state)
    }

    pub(crate) fn set_state(&mut self, pos: Dims, state: CellState) {
        if let Some(cell) = self.cells.get_mut(pos) {
            cell.set_state(state);
        }
    }

    pub(crate) fn reset_states(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.set_state(CellState::Unvisited);
        }
    }

    pub fn visited_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.state() == CellState::Visited)
            .count()
    }

    /// Wall of `cell` facing `cell2`, `None` unless they share an edge.
    ///
    /// Column difference is checked before row difference.
    pub fn which_wall_between(cell: Dims, cell2: Dims) -> Option<CellWall> {
        match (cell2.0 - cell.0, cell2.1 - cell.1) {
            (1, 0) => Some(Right),
            (-1, 0) => Some(Left),
            (0, 1) => Some(Bottom),
            (0, -1) => Some(Top),
            _ => None,
        }
    }

    /// Clears the shared wall on both cells at once.
    pub fn remove_walls_between(&mut self, from: Dims, to: Dims) -> Result<(), MazeError> {
        let invalid = MazeError::InvalidAdjacency { from, to };

        let wall = Self::which_wall_between(from, to).ok_or(invalid)?;
        if !self.is_in_bounds(from) || !self.is_in_bounds(to) {
            return Err(invalid);
        }

        self.cells[from].remove_wall(wall);
        self.cells[to].remove_wall(wall.reverse_wall());

        Ok(())
    }

    /// Every open passage once, as `(cell, neighbour)` with the neighbour to the right or below.
    pub fn passages(&self) -> Vec<(Dims, Dims)> {
        self.cells
            .iter()
            .flat_map(|cell| {
                let pos = cell.get_coord();
                [Right, Bottom]
                    .into_iter()
                    .filter(move |&wall| !cell.get_wall(wall))
                    .map(move |wall| (pos, pos + wall.to_coord()))
            })
            .filter(|&(_, to)| self.is_in_bounds(to))
            .collect()
    }

    /// `true` when every cell is reachable from the start through open walls.
    pub fn is_connected(&self) -> bool {
        self.reachable_from(self.start) == self.cell_count()
    }

    /// Count of cells reachable from `pos` through open walls.
    pub fn reachable_from(&self, pos: Dims) -> usize {
        if !self.is_in_bounds(pos) {
            return 0;
        }

        let mut seen = Array2D::new(false, self.columns() as usize, self.rows() as usize);
        let mut stack = vec![pos];
        seen[pos] = true;
        let mut count = 0;

        while let Some(current) = stack.pop() {
            count += 1;
            for wall in self.cells[current].open_walls() {
                let next = current + wall.to_coord();
                if seen.get(next) == Some(&false) {
                    seen[next] = true;
                    stack.push(next);
                }
            }
        }

        count
    }

    /// `true` when the passages form a spanning tree: connected with `cells - 1` passages.
    pub fn is_perfect(&self) -> bool {
        self.passages().len() + 1 == self.cell_count() && self.is_connected()
    }
}
