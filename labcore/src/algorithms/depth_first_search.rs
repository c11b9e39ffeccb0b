use rand::{seq::SliceRandom, Rng};
use smallvec::SmallVec;

use super::{MazeAlgorithm, StepOutcome};
use crate::{
    dims::Dims,
    error::MazeError,
    gameboard::{CellState, Grid},
};

/// Randomized depth-first backtracker.
///
/// Carves into a random unvisited neighbour while there is one, otherwise walks back along the
/// stack. Done once the current cell is a dead end and the stack is empty.
#[derive(Debug, Clone)]
pub struct DepthFirstSearch {
    current: Dims,
    stack: Vec<Dims>,
}

impl DepthFirstSearch {
    pub fn stack(&self) -> &[Dims] {
        &self.stack
    }
}

impl MazeAlgorithm for DepthFirstSearch {
    fn start(start: Dims) -> Self {
        Self {
            current: start,
            stack: Vec::new(),
        }
    }

    fn step<R: Rng + ?Sized>(
        &mut self,
        grid: &mut Grid,
        rng: &mut R,
    ) -> Result<StepOutcome, MazeError> {
        let current = self.current;
        grid.set_state(current, CellState::Visited);

        let unvisited_neighbors = grid
            .neighbors_of(current)
            .iter()
            .copied()
            .filter(|&pos| grid.state_of(pos) == Some(CellState::Unvisited))
            .collect::<SmallVec<[_; 4]>>();

        if let Some(&chosen) = unvisited_neighbors.choose(rng) {
            grid.set_state(chosen, CellState::Visited);
            self.stack.push(current);
            grid.remove_walls_between(current, chosen)?;
            self.current = chosen;
        } else if let Some(previous) = self.stack.pop() {
            self.current = previous;
        } else {
            return Ok(StepOutcome::Complete);
        }

        Ok(StepOutcome::Continuing)
    }

    fn current(&self) -> Dims {
        self.current
    }
}
