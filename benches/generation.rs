use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng as _;

use mazepath::{
    core::Dims,
    grid::PassabilityMatrix,
    maze::{
        algorithms::{DepthFirstSearch, MazeAlgorithm as _, Random},
        Maze,
    },
    pathfinder::{find_path, NodeGrid},
};

const SIZE: usize = 64;

fn generated() -> Maze {
    let mut maze = Maze::new(SIZE, SIZE).unwrap();
    let mut rng = Random::seed_from_u64(42);
    DepthFirstSearch::generate(&mut maze, Dims::ZERO, &mut rng).unwrap();
    maze
}

pub fn dfs_generation(c: &mut Criterion) {
    c.bench_function("dfs_generation", |b| {
        b.iter(|| {
            let mut maze = Maze::new(black_box(SIZE), black_box(SIZE)).unwrap();
            let mut rng = Random::seed_from_u64(42);
            DepthFirstSearch::generate(&mut maze, Dims::ZERO, &mut rng).unwrap();
            maze
        })
    });
}

pub fn astar_corner_to_corner(c: &mut Criterion) {
    let matrix = PassabilityMatrix::from_maze(&generated());
    let end = Dims(2 * SIZE as i32 - 1, 2 * SIZE as i32 - 1);
    let mut grid = NodeGrid::new(matrix);

    c.bench_function("astar_corner_to_corner", |b| {
        b.iter(|| find_path(&mut grid, black_box(Dims(1, 1)), black_box(end)).unwrap())
    });
}

criterion_group! {name = benches; config = Criterion::default().sample_size(10); targets = dfs_generation, astar_corner_to_corner}
criterion_main!(benches);
