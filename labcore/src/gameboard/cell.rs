use smallvec::SmallVec;

use crate::dims::Dims;

use self::CellWall::*;

/// Generation tag of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Unvisited,
    Frontier,
    Visited,
}

#[derive(Debug, Clone)]
pub struct Cell {
    top: bool,
    right: bool,
    bottom: bool,
    left: bool,
    state: CellState,
    goal: bool,
    coord: Dims,
    adjacent: SmallVec<[Dims; 4]>,
}

impl Cell {
    /// New cell with all four walls standing.
    pub fn new(pos: Dims) -> Cell {
        Cell {
            top: true,
            right: true,
            bottom: true,
            left: true,
            state: CellState::Unvisited,
            goal: false,
            coord: pos,
            adjacent: SmallVec::new(),
        }
    }

    pub(crate) fn remove_wall(&mut self, wall: CellWall) {
        match wall {
            Top => self.top = false,
            Right => self.right = false,
            Bottom => self.bottom = false,
            Left => self.left = false,
        }
    }

    /// `true` if the wall is standing.
    pub fn get_wall(&self, wall: CellWall) -> bool {
        match wall {
            Top => self.top,
            Right => self.right,
            Bottom => self.bottom,
            Left => self.left,
        }
    }

    /// Wall flags in [`CellWall::get_in_order`] order: top, right, bottom, left.
    pub fn get_walls(&self) -> [bool; 4] {
        CellWall::get_in_order().map(|wall| self.get_wall(wall))
    }

    pub fn open_walls(&self) -> impl Iterator<Item = CellWall> + '_ {
        CellWall::get_in_order()
            .into_iter()
            .filter(|&wall| !self.get_wall(wall))
    }

    pub fn get_coord(&self) -> Dims {
        self.coord
    }

    pub fn row(&self) -> i32 {
        self.coord.row()
    }

    pub fn column(&self) -> i32 {
        self.coord.column()
    }

    pub fn state(&self) -> CellState {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: CellState) {
        self.state = state;
    }

    pub fn is_goal(&self) -> bool {
        self.goal
    }

    pub(crate) fn set_goal(&mut self, goal: bool) {
        self.goal = goal;
    }

    /// Grid neighbours, independent of walls and generation state.
    pub fn adjacent(&self) -> &[Dims] {
        &self.adjacent
    }

    pub(crate) fn set_adjacent(&mut self, adjacent: SmallVec<[Dims; 4]>) {
        self.adjacent = adjacent;
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Eq for Cell {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellWall {
    Top,
    Right,
    Bottom,
    Left,
}

impl CellWall {
    pub fn to_coord(self) -> Dims {
        match self {
            Top => Dims(0, -1),
            Right => Dims(1, 0),
            Bottom => Dims(0, 1),
            Left => Dims(-1, 0),
        }
    }

    pub fn reverse_wall(self) -> CellWall {
        match self {
            Top => Bottom,
            Right => Left,
            Bottom => Top,
            Left => Right,
        }
    }

    pub fn perpendicular_walls(self) -> (CellWall, CellWall) {
        match self {
            Top | Bottom => (Left, Right),
            Left | Right => (Top, Bottom),
        }
    }

    pub const fn get_in_order() -> [CellWall; 4] {
        [Top, Right, Bottom, Left]
    }
}
