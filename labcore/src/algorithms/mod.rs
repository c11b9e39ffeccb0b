mod depth_first_search;
mod frontier_growth;

use std::fmt;

use rand::{thread_rng, Rng, SeedableRng as _};

use crate::{dims::Dims, error::MazeError, gameboard::Grid, progress::Progress};
pub use depth_first_search::DepthFirstSearch;
pub use frontier_growth::FrontierGrowth;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Seeded generator, or a thread-random seed when `seed` is `None`.
pub fn random_from_seed(seed: Option<u64>) -> Random {
    Random::seed_from_u64(seed.unwrap_or_else(|| thread_rng().gen()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Randomized Prim-like growth from a frontier set.
    #[default]
    FrontierGrowth,
    /// Randomized depth-first backtracker.
    DepthFirstSearch,
}

impl Algorithm {
    pub const fn all() -> [Algorithm; 2] {
        [Algorithm::FrontierGrowth, Algorithm::DepthFirstSearch]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::FrontierGrowth => "Frontier growth",
            Algorithm::DepthFirstSearch => "Depth-first search",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continuing,
    Complete,
}

impl StepOutcome {
    pub fn is_complete(self) -> bool {
        self == StepOutcome::Complete
    }
}

/// One incremental maze generation algorithm.
///
/// Implementors keep only transient positions; the grid is passed in on every step and all
/// randomness comes from `rng`.
pub trait MazeAlgorithm: fmt::Debug {
    /// Prepares a run starting at `start`.
    fn start(start: Dims) -> Self
    where
        Self: Sized;

    /// Advances the run by a single step.
    fn step<R: Rng + ?Sized>(
        &mut self,
        grid: &mut Grid,
        rng: &mut R,
    ) -> Result<StepOutcome, MazeError>;

    /// Cell the algorithm is working on.
    fn current(&self) -> Dims;
}

#[derive(Debug)]
enum GenerationState {
    FrontierGrowth(FrontierGrowth),
    DepthFirstSearch(DepthFirstSearch),
}

impl GenerationState {
    fn new(algorithm: Algorithm, start: Dims) -> Self {
        match algorithm {
            Algorithm::FrontierGrowth => Self::FrontierGrowth(FrontierGrowth::start(start)),
            Algorithm::DepthFirstSearch => Self::DepthFirstSearch(DepthFirstSearch::start(start)),
        }
    }

    fn step<R: Rng + ?Sized>(
        &mut self,
        grid: &mut Grid,
        rng: &mut R,
    ) -> Result<StepOutcome, MazeError> {
        match self {
            Self::FrontierGrowth(alg) => alg.step(grid, rng),
            Self::DepthFirstSearch(alg) => alg.step(grid, rng),
        }
    }

    fn current(&self) -> Dims {
        match self {
            Self::FrontierGrowth(alg) => alg.current(),
            Self::DepthFirstSearch(alg) => alg.current(),
        }
    }
}

/// Owns a grid while carving it, one step at a time.
///
/// The builder never decides when to step. Callers either loop over [`MazeBuilder::step`]
/// themselves (e.g. one step per frame) or call [`MazeBuilder::run`]; the result is the same
/// for the same random sequence. Stopping between steps leaves a valid, partially carved grid.
#[derive(Debug)]
pub struct MazeBuilder<R = Random> {
    grid: Grid,
    algorithm: Algorithm,
    state: GenerationState,
    rng: R,
    steps: usize,
    complete: bool,
}

impl<R: Rng> MazeBuilder<R> {
    /// Starts a generation run from the grid's start cell.
    ///
    /// Generation tags of the grid are reset, walls are left as they are.
    pub fn new(mut grid: Grid, algorithm: Algorithm, rng: R) -> Self {
        grid.reset_states();
        let state = GenerationState::new(algorithm, grid.start());

        log::debug!(
            "Starting {} on {}x{} grid",
            algorithm,
            grid.rows(),
            grid.columns()
        );

        Self {
            grid,
            algorithm,
            state,
            rng,
            steps: 0,
            complete: false,
        }
    }

    /// Carves a whole maze and hands the grid back.
    pub fn run_to_completion(grid: Grid, algorithm: Algorithm, rng: R) -> Result<Grid, MazeError> {
        let mut builder = Self::new(grid, algorithm, rng);
        builder.run()?;
        Ok(builder.into_grid())
    }

    /// Advances generation by one step.
    ///
    /// Once complete, further calls return [`StepOutcome::Complete`] without touching the grid.
    pub fn step(&mut self) -> Result<StepOutcome, MazeError> {
        if self.complete {
            return Ok(StepOutcome::Complete);
        }

        let outcome = self.state.step(&mut self.grid, &mut self.rng)?;
        self.steps += 1;
        log::trace!("Step {} at {:?}", self.steps, self.state.current());

        if outcome.is_complete() {
            self.complete = true;
            log::debug!("{} complete after {} steps", self.algorithm, self.steps);
        }

        Ok(outcome)
    }

    /// Steps until complete.
    pub fn run(&mut self) -> Result<(), MazeError> {
        while !self.step()?.is_complete() {}
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Steps taken so far, the completing step included.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Cell the generation is currently working on.
    pub fn current(&self) -> Dims {
        self.state.current()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    pub fn progress(&self) -> Progress {
        let mut progress = Progress::new(self.grid.visited_count(), self.grid.cell_count());
        if self.complete {
            progress.finish();
        }
        progress
    }
}
