use hashbrown::{HashMap, HashSet};
use rand::{seq::SliceRandom, Rng};
use smallvec::SmallVec;

use super::{MazeAlgorithm, StepOutcome};
use crate::{
    dims::Dims,
    error::MazeError,
    gameboard::{CellState, Grid},
};

/// Randomized Prim-like generator.
///
/// Every step settles the current cell, pushes its unvisited neighbours to the frontier and then
/// connects a random frontier cell to a random one of its already visited candidates. The newly
/// connected cell stays tagged as frontier until the next step settles it.
#[derive(Debug, Clone)]
pub struct FrontierGrowth {
    current: Dims,
    frontier: Vec<Dims>,
    visited: HashSet<Dims>,
    candidates: HashMap<Dims, SmallVec<[Dims; 4]>>,
}

impl FrontierGrowth {
    /// Frontier cells in the order they were discovered.
    pub fn frontier(&self) -> &[Dims] {
        &self.frontier
    }

    pub fn visited(&self) -> &HashSet<Dims> {
        &self.visited
    }

    /// Visited cells `pos` may be connected to, empty unless `pos` is on the frontier.
    pub fn candidates(&self, pos: Dims) -> &[Dims] {
        self.candidates
            .get(&pos)
            .map(|list| list.as_slice())
            .unwrap_or_default()
    }
}

impl MazeAlgorithm for FrontierGrowth {
    fn start(start: Dims) -> Self {
        Self {
            current: start,
            frontier: Vec::new(),
            visited: HashSet::new(),
            candidates: HashMap::new(),
        }
    }

    fn step<R: Rng + ?Sized>(
        &mut self,
        grid: &mut Grid,
        rng: &mut R,
    ) -> Result<StepOutcome, MazeError> {
        let current = self.current;

        if let Some(i) = self.frontier.iter().position(|&pos| pos == current) {
            self.frontier.remove(i);
        }
        self.candidates.remove(&current);
        self.visited.insert(current);
        grid.set_state(current, CellState::Visited);

        let neighbors = grid
            .neighbors_of(current)
            .iter()
            .copied()
            .collect::<SmallVec<[_; 4]>>();
        for neighbor in neighbors {
            match grid.state_of(neighbor) {
                Some(CellState::Unvisited) => {
                    self.frontier.push(neighbor);
                    grid.set_state(neighbor, CellState::Frontier);
                    self.candidates.entry(neighbor).or_default().push(current);
                }
                Some(CellState::Frontier) => {
                    self.candidates.entry(neighbor).or_default().push(current);
                }
                Some(CellState::Visited) | None => {}
            }
        }

        let Some(&next) = self.frontier.choose(rng) else {
            return Ok(StepOutcome::Complete);
        };

        let connection = self
            .candidates(next)
            .choose(rng)
            .copied()
            .ok_or(MazeError::InvalidAdjacency {
                from: next,
                to: current,
            })?;
        grid.remove_walls_between(next, connection)?;
        self.current = next;

        Ok(StepOutcome::Continuing)
    }

    fn current(&self) -> Dims {
        self.current
    }
}
