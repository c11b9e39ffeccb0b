use crossterm::style::ContentStyle;
use labcore::{
    dims::Dims,
    gameboard::{CellWall, Grid},
};

use crate::{renderer::Frame, settings::ColorScheme};

pub const PLAYER_CHAR: char = 'O';
pub const GOAL_CHAR: char = '$';
pub const CURSOR_CHAR: char = '@';

fn double_line_corner(left: bool, top: bool, right: bool, bottom: bool) -> char {
    match (left, top, right, bottom) {
        (false, false, false, false) => ' ',
        (false, _, false, _) => '║',
        (_, false, _, false) => '═',
        (false, false, true, true) => '╔',
        (false, true, true, false) => '╚',
        (false, true, true, true) => '╠',
        (true, false, false, true) => '╗',
        (true, false, true, true) => '╦',
        (true, true, false, false) => '╝',
        (true, true, false, true) => '╣',
        (true, true, true, false) => '╩',
        (true, true, true, true) => '╬',
    }
}

/// Size of the text picture of a grid: one character per cell, wall and corner.
pub fn maze_render_size(grid: &Grid) -> Dims {
    Dims(grid.columns() * 2 + 1, grid.rows() * 2 + 1)
}

pub fn from_maze_to_real(pos: Dims) -> Dims {
    Dims(pos.0 * 2 + 1, pos.1 * 2 + 1)
}

// Wall on the horizontal line `line` (0..=rows) above column `column`.
fn horizontal_wall(grid: &Grid, line: i32, column: i32) -> bool {
    if column < 0 || column >= grid.columns() {
        return false;
    }
    if line < grid.rows() {
        wall_of(grid, Dims(column, line), CellWall::Top)
    } else {
        wall_of(grid, Dims(column, grid.rows() - 1), CellWall::Bottom)
    }
}

// Wall on the vertical line `line` (0..=columns) left of row `row`.
fn vertical_wall(grid: &Grid, row: i32, line: i32) -> bool {
    if row < 0 || row >= grid.rows() {
        return false;
    }
    if line < grid.columns() {
        wall_of(grid, Dims(line, row), CellWall::Left)
    } else {
        wall_of(grid, Dims(grid.columns() - 1, row), CellWall::Right)
    }
}

fn wall_of(grid: &Grid, pos: Dims, wall: CellWall) -> bool {
    grid.get_cell(pos).map_or(true, |cell| cell.get_wall(wall))
}

/// Text picture of the grid drawn with double line box characters.
///
/// The goal is marked with `$`, `player` (if any) with `O`.
pub fn maze_lines(grid: &Grid, player: Option<Dims>) -> Vec<String> {
    let size = maze_render_size(grid);
    let mut lines = Vec::with_capacity(size.1 as usize);

    for y in 0..size.1 {
        let mut line = String::with_capacity(size.0 as usize * 3);
        for x in 0..size.0 {
            let (column, row) = (x / 2, y / 2);
            let character = match (x % 2 == 0, y % 2 == 0) {
                (true, true) => double_line_corner(
                    horizontal_wall(grid, row, column - 1),
                    vertical_wall(grid, row - 1, column),
                    horizontal_wall(grid, row, column),
                    vertical_wall(grid, row, column),
                ),
                (false, true) if horizontal_wall(grid, row, column) => '═',
                (true, false) if vertical_wall(grid, row, column) => '║',
                (false, false) => {
                    let pos = Dims(column, row);
                    if player == Some(pos) {
                        PLAYER_CHAR
                    } else if grid.goal() == pos {
                        GOAL_CHAR
                    } else {
                        ' '
                    }
                }
                _ => ' ',
            };
            line.push(character);
        }
        lines.push(line);
    }

    lines
}

/// Extra markers drawn over the maze.
#[derive(Debug, Clone, Copy, Default)]
pub struct Marks<'a> {
    pub player: Option<Dims>,
    /// Cell the generation is working on.
    pub cursor: Option<Dims>,
    /// Cells the player already walked through.
    pub trail: &'a [Dims],
}

pub fn draw_maze(frame: &mut Frame, pos: Dims, grid: &Grid, marks: Marks, scheme: &ColorScheme) {
    for (y, line) in maze_lines(grid, marks.player).iter().enumerate() {
        frame.draw_str(pos + Dims(0, y as i32), line, scheme.normals());
    }

    for &cell in marks.trail {
        frame.draw_char(pos + from_maze_to_real(cell), '.', scheme.normals());
    }

    let mut mark = |cell: Dims, character: char, style: ContentStyle| {
        frame.draw_char(pos + from_maze_to_real(cell), character, style);
    };

    mark(grid.goal(), GOAL_CHAR, scheme.goals());
    if let Some(cursor) = marks.cursor {
        mark(cursor, CURSOR_CHAR, scheme.players());
    }
    if let Some(player) = marks.player {
        mark(player, PLAYER_CHAR, scheme.players());
    }
}
