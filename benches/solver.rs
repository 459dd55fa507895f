//! Benchmarks for the tile match solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tilematch::grid::{all_match, distinct_solutions, format_solution};
use tilematch::puzzle::Puzzle;
use tilematch::tile::Tile;
use tilematch::Connection;

const CLASSIC: &str = include_str!("../puzzles/classic-3x3.txt");
const RING: &str = include_str!("../puzzles/ring-3x3.txt");

fn classic() -> Puzzle {
    Puzzle::parse(CLASSIC, 3, 3).unwrap()
}

/// Benchmark finding every solution of the classic 3x3 puzzle.
fn bench_solve(c: &mut Criterion) {
    let puzzle = classic();
    c.bench_function("solve_classic", |b| b.iter(|| black_box(&puzzle).solve(None)));

    let ring = Puzzle::parse(RING, 3, 3).unwrap();
    c.bench_function("solve_ring", |b| b.iter(|| black_box(&ring).solve(None)));
}

/// Benchmark stopping at the first solution.
fn bench_solve_first(c: &mut Criterion) {
    let puzzle = classic();
    c.bench_function("solve_classic_first", |b| {
        b.iter(|| black_box(&puzzle).solve(Some(1)))
    });
}

/// Benchmark the edge match predicate across all directions.
fn bench_is_matched(c: &mut Criterion) {
    let first: Tile = "A a B b 3".parse().unwrap();
    let second: Tile = "C c B a 2".parse().unwrap();

    c.bench_function("is_matched", |b| {
        b.iter(|| {
            Connection::ALL
                .iter()
                .filter(|&&direction| black_box(&first).is_matched(black_box(&second), direction))
                .count()
        })
    });
}

/// Benchmark validating and deduplicating solved grids.
fn bench_grid_checks(c: &mut Criterion) {
    let solutions = classic().solve(None).unwrap();
    let solution = &solutions[0];

    c.bench_function("all_match", |b| b.iter(|| all_match(black_box(solution))));
    c.bench_function("distinct_solutions", |b| {
        b.iter(|| distinct_solutions(black_box(&solutions)))
    });
    c.bench_function("format_solution", |b| {
        b.iter(|| format_solution(black_box(solution)))
    });
}

criterion_group!(
    benches,
    bench_solve,
    bench_solve_first,
    bench_is_matched,
    bench_grid_checks
);
criterion_main!(benches);
