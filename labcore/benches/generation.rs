use criterion::{black_box, criterion_group, criterion_main, Criterion};
use labcore::{
    algorithms::{Algorithm, MazeBuilder, Random},
    gameboard::Grid,
};
use rand::SeedableRng as _;

const ROWS: i32 = 50;
const COLUMNS: i32 = 50;

fn generate(algorithm: Algorithm) -> Grid {
    let mut rng = Random::seed_from_u64(7);
    let grid = Grid::new(black_box(ROWS), black_box(COLUMNS), &mut rng).unwrap();
    MazeBuilder::run_to_completion(grid, algorithm, rng).unwrap()
}

pub fn frontier_growth(c: &mut Criterion) {
    c.bench_function("frontier_growth", |b| {
        b.iter(|| generate(black_box(Algorithm::FrontierGrowth)))
    });
}

pub fn depth_first_search(c: &mut Criterion) {
    c.bench_function("depth_first_search", |b| {
        b.iter(|| generate(black_box(Algorithm::DepthFirstSearch)))
    });
}

criterion_group! {name = benches; config = Criterion::default().sample_size(10); targets = frontier_growth, depth_first_search}
criterion_main!(benches);
