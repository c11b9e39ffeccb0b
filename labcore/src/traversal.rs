use std::time::Duration;

use pausable_clock::{PausableClock, PausableInstant};

use crate::{
    dims::Dims,
    error::MazeError,
    gameboard::{Cell, CellWall, Grid},
};

/// Destination of a single step from `from`, or [`MazeError::IllegalMove`] if a wall or the
/// grid edge is in the way.
pub fn can_move(grid: &Grid, from: Dims, direction: CellWall) -> Result<Dims, MazeError> {
    let illegal = MazeError::IllegalMove { from, direction };

    let cell = grid.get_cell(from).ok_or(illegal)?;
    let to = from + direction.to_coord();

    if cell.get_wall(direction) || !grid.is_in_bounds(to) {
        return Err(illegal);
    }

    Ok(to)
}

pub fn is_goal(cell: &Cell) -> bool {
    cell.is_goal()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveMode {
    /// One cell per move.
    #[default]
    Single,
    /// Keep going until a junction or a dead end.
    Corridor,
    /// Keep going until a wall.
    Straight,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SessionState {
    NotStarted,
    Running,
    Finished,
}

/// Player token walking a finished maze.
///
/// Its position is independent of any generation state and moving never changes walls.
pub struct TraversalSession {
    start: Dims,
    goal: Dims,
    position: Dims,
    moves: Vec<(Dims, CellWall)>,
    state: SessionState,
    clock: Option<PausableClock>,
    started: Option<PausableInstant>,
}

impl TraversalSession {
    pub fn new(grid: &Grid) -> Self {
        let mut session = Self {
            start: grid.start(),
            goal: grid.goal(),
            position: grid.start(),
            moves: vec![],
            state: SessionState::NotStarted,
            clock: None,
            started: None,
        };
        session.reset();
        session
    }

    pub fn position(&self) -> Dims {
        self.position
    }

    pub fn start(&self) -> Dims {
        self.start
    }

    pub fn goal(&self) -> Dims {
        self.goal
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state == SessionState::Finished
    }

    pub fn moves(&self) -> &[(Dims, CellWall)] {
        &self.moves
    }

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// Moves the token, returning the new position and the number of cells walked.
    ///
    /// The first step must be legal, otherwise [`MazeError::IllegalMove`] is returned and
    /// nothing changes. Moves after reaching the goal are refused the same way.
    pub fn move_player(
        &mut self,
        grid: &Grid,
        direction: CellWall,
        mode: MoveMode,
    ) -> Result<(Dims, usize), MazeError> {
        if self.is_finished() {
            return Err(MazeError::IllegalMove {
                from: self.position,
                direction,
            });
        }

        let mut next = can_move(grid, self.position, direction)?;
        self.start_clock();

        let mut count = 0;
        loop {
            self.moves.push((self.position, direction));
            self.position = next;
            count += 1;

            if self.position == self.goal {
                self.finish();
                break;
            }

            let keep_going = match mode {
                MoveMode::Single => false,
                MoveMode::Straight => true,
                MoveMode::Corridor => !Self::is_junction(grid, self.position, direction),
            };
            if !keep_going {
                break;
            }

            match can_move(grid, self.position, direction) {
                Ok(pos) => next = pos,
                Err(_) => break,
            }
        }

        log::debug!(
            "Moved {:?} by {} to {:?} ({} moves)",
            direction,
            count,
            self.position,
            self.move_count()
        );

        Ok((self.position, count))
    }

    // A side passage opens next to the way we came in.
    fn is_junction(grid: &Grid, pos: Dims, direction: CellWall) -> bool {
        let (a, b) = direction.perpendicular_walls();
        can_move(grid, pos, a).is_ok() || can_move(grid, pos, b).is_ok()
    }

    /// Back to the start cell with no moves made.
    pub fn reset(&mut self) {
        self.position = self.start;
        self.moves.clear();
        self.clock = None;
        self.started = None;
        self.state = if self.start == self.goal {
            SessionState::Finished
        } else {
            SessionState::NotStarted
        };
    }

    /// Time since the first move, paused once the goal is reached.
    pub fn elapsed(&self) -> Option<Duration> {
        let clock = self.clock.as_ref()?;
        self.started.map(|start| start.elapsed(clock))
    }

    fn start_clock(&mut self) {
        if self.state == SessionState::NotStarted {
            let clock = PausableClock::default();
            self.started = Some(clock.now());
            self.clock = Some(clock);
            self.state = SessionState::Running;
        }
    }

    fn finish(&mut self) {
        self.state = SessionState::Finished;
        if let Some(clock) = &self.clock {
            clock.pause();
        }
    }
}
