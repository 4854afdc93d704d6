//! Benchmarks for the Pig solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pig_solver::sim::{run_match_seeded, Strategy};
use pig_solver::solver::{HoldTable, PigSolver, SolveConfig};

fn solve_goal_25_benchmark(c: &mut Criterion) {
    c.bench_function("solve_goal_25", |b| {
        b.iter(|| {
            let config = SolveConfig::new(black_box(25), 1e-6);
            PigSolver::solve(config).unwrap()
        })
    });
}

fn solve_goal_100_benchmark(c: &mut Criterion) {
    c.bench_function("solve_goal_100", |b| {
        b.iter(|| {
            let config = SolveConfig::new(black_box(100), 1e-9);
            PigSolver::solve(config).unwrap()
        })
    });
}

fn lookup_benchmark(c: &mut Criterion) {
    let solver = PigSolver::solve(SolveConfig::new(100, 1e-9)).unwrap();

    c.bench_function("p_win_lookup", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for i in (0..100).step_by(3) {
                for j in (0..100).step_by(3) {
                    sum += solver.p_win(black_box(i), black_box(j), 0);
                }
            }
            black_box(sum)
        })
    });
}

fn hold_table_benchmark(c: &mut Criterion) {
    let solver = PigSolver::solve(SolveConfig::new(100, 1e-9)).unwrap();

    c.bench_function("hold_table_build", |b| {
        b.iter(|| HoldTable::from_solver(black_box(&solver)))
    });
}

fn playout_benchmark(c: &mut Criterion) {
    let solver = PigSolver::solve(SolveConfig::new(100, 1e-9)).unwrap();
    let optimal = Strategy::Optimal(&solver);

    c.bench_function("playout_1000_games", |b| {
        b.iter(|| {
            run_match_seeded(
                &optimal,
                &Strategy::HoldAt(20),
                solver.goal(),
                black_box(1000),
                Some(42),
            )
        })
    });
}

criterion_group!(
    benches,
    solve_goal_25_benchmark,
    solve_goal_100_benchmark,
    lookup_benchmark,
    hold_table_benchmark,
    playout_benchmark
);
criterion_main!(benches);
