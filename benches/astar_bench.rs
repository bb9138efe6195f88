use criterion::{criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use route_optimizer::{
    grid::Grid,
    solver::{astar::AstarSolver, dijkstra::DijkstraSolver, GridSolver},
    Point,
};
use std::hint::black_box;

const SIZES: [usize; 3] = [20, 64, 128];
const N_SCENARIOS: usize = 32;

fn random_problem(size: usize, rng: &mut StdRng) -> (Grid, Vec<(Point, Point)>) {
    let mut grid = Grid::new(size).unwrap();
    for x in 0..size as i32 {
        for y in 0..size as i32 {
            grid.set_wall(&Point::new(x, y), rng.gen_bool(0.25)).unwrap();
        }
    }
    grid.generate_components();
    let mut scenarios = Vec::new();
    while scenarios.len() < N_SCENARIOS {
        let start = Point::new(
            rng.gen_range(0..size as i32),
            rng.gen_range(0..size as i32),
        );
        let end = Point::new(
            rng.gen_range(0..size as i32),
            rng.gen_range(0..size as i32),
        );
        if grid.reachable(&start, &end) {
            scenarios.push((start, end));
        }
    }
    (grid, scenarios)
}

fn random_bench_solver<S: GridSolver>(c: &mut Criterion, solver_name: &str, solver: S) {
    let mut rng = StdRng::seed_from_u64(0);
    for size in SIZES {
        let (grid, scenarios) = random_problem(size, &mut rng);
        c.bench_function(format!("{solver_name}, {size}x{size}").as_str(), |b| {
            b.iter(|| {
                for (start, end) in &scenarios {
                    black_box(solver.find_path(&grid, *start, *end).unwrap());
                }
            })
        });
    }
}

fn random_bench_astar(c: &mut Criterion) {
    random_bench_solver(c, "Astar", AstarSolver::new());
}

fn random_bench_dijkstra(c: &mut Criterion) {
    random_bench_solver(c, "Dijkstra", DijkstraSolver::default());
}

criterion_group!(benches, random_bench_astar, random_bench_dijkstra);
criterion_main!(benches);
