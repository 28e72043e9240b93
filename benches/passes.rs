use criterion::{black_box, criterion_group, criterion_main, Criterion};
use domset::{greedy_cover, optimize, NeighborMap, Solver, SolverConfig};

const NUM_POINTS: usize = 200;
const THRESHOLD: f64 = 5.0;

fn benchmark_neighbor_map(c: &mut Criterion) {
    let mut solver = Solver::new(SolverConfig::new(THRESHOLD)).unwrap();
    solver.random_points(NUM_POINTS, 70, 70).unwrap();
    let points = solver.points().to_vec();

    c.bench_function(&format!("neighbor_map_{}_points", NUM_POINTS), |b| {
        b.iter(|| NeighborMap::build(black_box(&points), THRESHOLD))
    });
}

fn benchmark_greedy(c: &mut Criterion) {
    let mut solver = Solver::new(SolverConfig::new(THRESHOLD)).unwrap();
    solver.random_points(NUM_POINTS, 70, 70).unwrap();
    let points = solver.points().to_vec();
    let map = NeighborMap::build(&points, THRESHOLD);

    c.bench_function(&format!("greedy_{}_points", NUM_POINTS), |b| {
        b.iter(|| greedy_cover(black_box(&points), THRESHOLD, &map))
    });
}

fn benchmark_local_search(c: &mut Criterion) {
    let mut solver = Solver::new(SolverConfig::new(THRESHOLD)).unwrap();
    solver.random_points(NUM_POINTS, 70, 70).unwrap();
    let points = solver.points().to_vec();
    let map = NeighborMap::build(&points, THRESHOLD);
    let greedy = greedy_cover(&points, THRESHOLD, &map);
    let config = SolverConfig::new(THRESHOLD);

    c.bench_function(&format!("local_search_{}_points", NUM_POINTS), |b| {
        b.iter(|| {
            let mut set = greedy.clone();
            optimize(&mut set, &points, &map, &config);
            set
        })
    });
}

criterion_group!(
    benches,
    benchmark_neighbor_map,
    benchmark_greedy,
    benchmark_local_search
);
criterion_main!(benches);
