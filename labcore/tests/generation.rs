use labcore::{
    algorithms::{Algorithm, MazeBuilder, Random, StepOutcome},
    dims::Dims,
    gameboard::{CellWall, Grid},
};
use rand::{rngs::mock::StepRng, SeedableRng as _};

fn walls_consistent(grid: &Grid) -> bool {
    grid.cells().all(|cell| {
        CellWall::get_in_order().into_iter().all(|wall| {
            match grid.get_cell(cell.get_coord() + wall.to_coord()) {
                Some(other) => cell.get_wall(wall) == other.get_wall(wall.reverse_wall()),
                None => cell.get_wall(wall),
            }
        })
    })
}

fn layout(grid: &Grid) -> Vec<[bool; 4]> {
    grid.cells().map(|cell| cell.get_walls()).collect()
}

fn seeded_grid(rows: i32, columns: i32, seed: u64) -> Grid {
    Grid::new(rows, columns, &mut Random::seed_from_u64(seed)).unwrap()
}

#[test]
fn spanning_tree_for_many_sizes() {
    for algorithm in Algorithm::all() {
        for rows in 1..=6 {
            for columns in 1..=6 {
                let seed = (rows * 31 + columns) as u64;
                let grid = MazeBuilder::run_to_completion(
                    seeded_grid(rows, columns, seed),
                    algorithm,
                    Random::seed_from_u64(seed),
                )
                .unwrap();

                let cells = (rows * columns) as usize;
                assert_eq!(grid.passages().len(), cells - 1, "{algorithm} {rows}x{columns}");
                for cell in grid.cells() {
                    assert_eq!(grid.reachable_from(cell.get_coord()), cells);
                }
            }
        }
    }
}

#[test]
fn walls_stay_consistent_while_stepping() {
    for algorithm in Algorithm::all() {
        let mut builder =
            MazeBuilder::new(seeded_grid(7, 9, 21), algorithm, Random::seed_from_u64(21));

        let mut passages = 0;
        while builder.step().unwrap() == StepOutcome::Continuing {
            assert!(walls_consistent(builder.grid()));

            // never more than one new passage per step, never one taken away
            let now = builder.grid().passages().len();
            assert!(now == passages || now == passages + 1);
            passages = now;
        }

        assert!(walls_consistent(builder.grid()));
        assert!(builder.grid().is_perfect());
    }
}

#[test]
fn partial_maze_is_inspectable() {
    let mut builder = MazeBuilder::new(
        seeded_grid(10, 10, 3),
        Algorithm::FrontierGrowth,
        Random::seed_from_u64(3),
    );
    for _ in 0..20 {
        builder.step().unwrap();
    }

    let grid = builder.grid();
    assert!(!builder.is_complete());
    assert!(walls_consistent(grid));
    assert_eq!(grid.passages().len(), 20);
    assert!(!grid.is_connected());
    assert_eq!(grid.reachable_from(grid.start()), 21);
}

#[test]
fn same_seed_same_maze() {
    for algorithm in Algorithm::all() {
        let first = MazeBuilder::run_to_completion(
            seeded_grid(12, 8, 42),
            algorithm,
            Random::seed_from_u64(42),
        )
        .unwrap();
        let second = MazeBuilder::run_to_completion(
            seeded_grid(12, 8, 42),
            algorithm,
            Random::seed_from_u64(42),
        )
        .unwrap();

        assert_eq!(layout(&first), layout(&second));
        assert_eq!(first.start(), second.start());
        assert_eq!(first.goal(), second.goal());
    }
}

#[test]
fn stepping_and_running_agree() {
    for algorithm in Algorithm::all() {
        let ran = MazeBuilder::run_to_completion(
            seeded_grid(6, 6, 9),
            algorithm,
            Random::seed_from_u64(10),
        )
        .unwrap();

        let mut builder = MazeBuilder::new(seeded_grid(6, 6, 9), algorithm, Random::seed_from_u64(10));
        let mut steps = 0;
        while !builder.step().unwrap().is_complete() {
            steps += 1;
        }

        assert!(steps > 0);
        assert_eq!(layout(builder.grid()), layout(&ran));
    }
}

#[test]
fn completion_is_idempotent() {
    for algorithm in Algorithm::all() {
        let mut builder = MazeBuilder::new(seeded_grid(4, 4, 1), algorithm, Random::seed_from_u64(1));
        builder.run().unwrap();

        let before = layout(builder.grid());
        assert_eq!(builder.step().unwrap(), StepOutcome::Complete);
        assert_eq!(builder.step().unwrap(), StepOutcome::Complete);
        assert_eq!(layout(builder.grid()), before);
    }
}

#[test]
fn single_cell() {
    for algorithm in Algorithm::all() {
        let mut builder = MazeBuilder::new(seeded_grid(1, 1, 0), algorithm, Random::seed_from_u64(0));
        assert_eq!(builder.step().unwrap(), StepOutcome::Complete);

        let grid = builder.into_grid();
        assert!(grid.passages().is_empty());
        assert_eq!(grid.start(), Dims::ZERO);
        assert_eq!(grid.goal(), Dims::ZERO);
        assert_eq!(grid.get_cell(Dims::ZERO).unwrap().get_walls(), [true; 4]);
    }
}

#[test]
fn two_cells_stacked() {
    for algorithm in Algorithm::all() {
        let grid = MazeBuilder::run_to_completion(
            seeded_grid(2, 1, 5),
            algorithm,
            Random::seed_from_u64(5),
        )
        .unwrap();

        let top = grid.get_cell(Dims::new(0, 0)).unwrap();
        let bottom = grid.get_cell(Dims::new(1, 0)).unwrap();
        assert_eq!(top.get_walls(), [true, true, false, true]);
        assert_eq!(bottom.get_walls(), [false, true, true, true]);
        assert_eq!(grid.passages(), vec![(Dims::new(0, 0), Dims::new(1, 0))]);
    }
}

#[test]
fn depth_first_golden_layout() {
    // Always picks the first option: start and goal at the top left corner, neighbours tried
    // in top, right, bottom, left order.
    let mut rng = StepRng::new(0, 0);
    let grid = Grid::new(3, 3, &mut rng).unwrap();
    assert_eq!(grid.start(), Dims::ZERO);
    assert_eq!(grid.goal(), Dims::ZERO);

    let grid = MazeBuilder::run_to_completion(grid, Algorithm::DepthFirstSearch, rng).unwrap();

    const T: bool = true;
    const F: bool = false;
    #[rustfmt::skip]
    let expected = vec![
        [T, F, T, T], [T, F, T, F], [T, T, F, F],
        [T, F, F, T], [T, T, F, F], [F, T, F, T],
        [F, T, T, T], [F, F, T, T], [F, T, T, F],
    ];
    assert_eq!(layout(&grid), expected);
    assert!(grid.is_perfect());
}

#[test]
fn golden_layout_is_stable_across_runs() {
    let build = || {
        let mut rng = StepRng::new(0, 0);
        let grid = Grid::new(3, 3, &mut rng).unwrap();
        MazeBuilder::run_to_completion(grid, Algorithm::DepthFirstSearch, rng).unwrap()
    };
    assert_eq!(layout(&build()), layout(&build()));
}
