use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pmaze::{algorithms::Random, Dims, Maze};
use rand::SeedableRng as _;

const NX: i32 = 100;
const NY: i32 = 80;

pub fn dfs_build(c: &mut Criterion) {
    c.bench_function("dfs_build", |b| {
        let mut rng = Random::seed_from_u64(0);
        b.iter(|| Maze::build(black_box(NX), black_box(NY), Dims::ZERO, &mut rng).unwrap())
    });
}

pub fn cellular_automaton_solve(c: &mut Criterion) {
    let mut rng = Random::seed_from_u64(0);
    let mut maze = Maze::build(NX, NY, Dims::ZERO, &mut rng).unwrap();

    c.bench_function("cellular_automaton_solve", |b| {
        b.iter(|| {
            maze.solve(black_box(Dims(0, NY - 1)), black_box(Dims(NX - 1, 0)))
                .unwrap()
        })
    });
}

criterion_group! {name = benches; config = Criterion::default().sample_size(10); targets = dfs_build, cellular_automaton_solve}
criterion_main!(benches);
