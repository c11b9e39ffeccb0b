use labcore::{
    algorithms::{Algorithm, MazeBuilder},
    dims::Dims,
    gameboard::{CellWall, Grid},
    traversal::{can_move, is_goal, MoveMode, SessionState, TraversalSession},
    MazeError,
};
use rand::rngs::mock::StepRng;

use CellWall::*;

// 3x3 maze with a single corridor:
// (0,0) > (0,1) > (0,2) v (1,2) v (2,2) < (2,1) ^ (1,1) < (1,0) v (2,0)
fn corridor_maze(start: Dims, goal: Dims) -> Grid {
    let grid = Grid::with_endpoints(3, 3, start, goal).unwrap();
    let grid =
        MazeBuilder::run_to_completion(grid, Algorithm::DepthFirstSearch, StepRng::new(0, 0))
            .unwrap();
    assert!(grid.is_perfect());
    grid
}

fn goal_maze() -> Grid {
    corridor_maze(Dims::new(0, 0), Dims::new(2, 2))
}

#[test]
fn can_move_respects_walls() {
    let grid = goal_maze();
    let origin = Dims::new(0, 0);

    assert_eq!(can_move(&grid, origin, Right), Ok(Dims::new(0, 1)));
    assert_eq!(
        can_move(&grid, origin, Bottom),
        Err(MazeError::IllegalMove {
            from: origin,
            direction: Bottom
        })
    );
    assert_eq!(can_move(&grid, Dims::new(1, 1), Bottom), Ok(Dims::new(2, 1)));
    assert!(can_move(&grid, Dims::new(1, 1), Top).is_err());
}

#[test]
fn can_move_never_leaves_the_grid() {
    let grid = goal_maze();

    for column in 0..3 {
        assert!(can_move(&grid, Dims::new(0, column), Top).is_err());
        assert!(can_move(&grid, Dims::new(2, column), Bottom).is_err());
    }
    for row in 0..3 {
        assert!(can_move(&grid, Dims::new(row, 0), Left).is_err());
        assert!(can_move(&grid, Dims::new(row, 2), Right).is_err());
    }
    assert!(can_move(&grid, Dims::new(5, 5), Left).is_err());
}

#[test]
fn goal_flag() {
    let grid = goal_maze();
    assert!(is_goal(grid.get_cell(Dims::new(2, 2)).unwrap()));
    assert!(!is_goal(grid.get_cell(Dims::new(0, 0)).unwrap()));
}

#[test]
fn single_moves_reach_goal() {
    let grid = goal_maze();
    let passages = grid.passages();
    let mut session = TraversalSession::new(&grid);
    assert_eq!(session.state(), SessionState::NotStarted);
    assert!(session.elapsed().is_none());

    for (dir, expected) in [
        (Right, Dims::new(0, 1)),
        (Right, Dims::new(0, 2)),
        (Bottom, Dims::new(1, 2)),
    ] {
        assert_eq!(
            session.move_player(&grid, dir, MoveMode::Single),
            Ok((expected, 1))
        );
        assert_eq!(session.state(), SessionState::Running);
    }

    // blocked move changes nothing
    assert!(session.move_player(&grid, Left, MoveMode::Single).is_err());
    assert_eq!(session.position(), Dims::new(1, 2));
    assert_eq!(session.move_count(), 3);

    session
        .move_player(&grid, Bottom, MoveMode::Single)
        .unwrap();
    assert!(session.is_finished());
    assert_eq!(session.move_count(), 4);
    assert!(session.elapsed().is_some());

    // finished sessions refuse moves
    assert!(session.move_player(&grid, Left, MoveMode::Single).is_err());
    assert_eq!(session.position(), grid.goal());

    assert_eq!(grid.passages(), passages);
}

#[test]
fn straight_runs_until_wall() {
    let grid = goal_maze();
    let mut session = TraversalSession::new(&grid);

    assert_eq!(
        session.move_player(&grid, Right, MoveMode::Straight),
        Ok((Dims::new(0, 2), 2))
    );
    assert_eq!(
        session.move_player(&grid, Bottom, MoveMode::Straight),
        Ok((Dims::new(2, 2), 2))
    );
    assert!(session.is_finished());
    assert_eq!(
        session.moves(),
        &[
            (Dims::new(0, 0), Right),
            (Dims::new(0, 1), Right),
            (Dims::new(0, 2), Bottom),
            (Dims::new(1, 2), Bottom),
        ]
    );
}

#[test]
fn corridor_stops_at_junction_and_goal() {
    let grid = corridor_maze(Dims::new(0, 0), Dims::new(2, 0));
    let mut session = TraversalSession::new(&grid);

    // (0,2) opens downwards, so the run stops there
    assert_eq!(
        session.move_player(&grid, Right, MoveMode::Corridor),
        Ok((Dims::new(0, 2), 2))
    );
    // straight down to the bend at (2,2)
    assert_eq!(
        session.move_player(&grid, Bottom, MoveMode::Corridor),
        Ok((Dims::new(2, 2), 2))
    );
    assert_eq!(
        session.move_player(&grid, Left, MoveMode::Corridor),
        Ok((Dims::new(2, 1), 1))
    );
    assert_eq!(
        session.move_player(&grid, Top, MoveMode::Corridor),
        Ok((Dims::new(1, 1), 1))
    );
    assert_eq!(
        session.move_player(&grid, Left, MoveMode::Corridor),
        Ok((Dims::new(1, 0), 1))
    );
    assert_eq!(
        session.move_player(&grid, Bottom, MoveMode::Corridor),
        Ok((Dims::new(2, 0), 1))
    );
    assert!(session.is_finished());
    assert_eq!(session.position(), Dims::new(2, 0));
    assert_eq!(
        session.moves(),
        &[
            (Dims::new(0, 0), Right),
            (Dims::new(0, 1), Right),
            (Dims::new(0, 2), Bottom),
            (Dims::new(1, 2), Bottom),
            (Dims::new(2, 2), Left),
            (Dims::new(2, 1), Top),
            (Dims::new(1, 1), Left),
            (Dims::new(1, 0), Bottom),
        ]
    );
}

#[test]
fn reset_returns_to_start() {
    let grid = goal_maze();
    let mut session = TraversalSession::new(&grid);
    session.move_player(&grid, Right, MoveMode::Straight).unwrap();
    session.move_player(&grid, Bottom, MoveMode::Straight).unwrap();
    assert!(session.is_finished());

    session.reset();
    assert_eq!(session.position(), session.start());
    assert_eq!(session.move_count(), 0);
    assert_eq!(session.state(), SessionState::NotStarted);
    assert!(session.elapsed().is_none());

    session.move_player(&grid, Right, MoveMode::Single).unwrap();
    assert_eq!(session.move_count(), 1);
}

#[test]
fn start_on_goal_is_finished() {
    let grid = corridor_maze(Dims::new(1, 1), Dims::new(1, 1));
    let mut session = TraversalSession::new(&grid);

    assert!(session.is_finished());
    assert!(session.move_player(&grid, Bottom, MoveMode::Single).is_err());
    assert_eq!(session.position(), Dims::new(1, 1));
}
