#[macro_use]
extern crate criterion;

use criterion::{Benchmark, Criterion};

use fifteen_solver::config::{Heuristic, Method};
use fifteen_solver::{LoadPuzzle, Solve};

// allowing unused so i can bench just one or few
// and still notice other warnings if there are any
#[allow(unused)]
fn bench_eight_a_star(c: &mut Criterion) {
    bench_puzzle(
        c,
        Method::AStar(Heuristic::Manhattan),
        "puzzles/eight-moves.txt",
        100,
    );
}

#[allow(unused)]
fn bench_eight_a_star_misplaced(c: &mut Criterion) {
    bench_puzzle(
        c,
        Method::AStar(Heuristic::Misplaced),
        "puzzles/eight-moves.txt",
        100,
    );
}

#[allow(unused)]
fn bench_eight_bfs(c: &mut Criterion) {
    bench_puzzle(c, Method::Bfs, "puzzles/eight-moves.txt", 50);
}

#[allow(unused)]
fn bench_eight_idfs(c: &mut Criterion) {
    // no visited set, every bound starts over
    bench_puzzle(c, Method::Idfs, "puzzles/eight-moves.txt", 25);
}

fn bench_puzzle(c: &mut Criterion, method: Method, puzzle_path: &str, samples: usize) {
    let puzzle = puzzle_path.load_puzzle().unwrap();

    c.bench(
        &format!("{}", method),
        Benchmark::new(puzzle_path, move |b| {
            b.iter(|| criterion::black_box(puzzle.solve(criterion::black_box(method))))
        })
        .sample_size(samples),
    );
}

criterion_group!(
    benches,
    bench_eight_a_star,
    bench_eight_a_star_misplaced,
    bench_eight_bfs,
    bench_eight_idfs,
);
criterion_main!(benches);
