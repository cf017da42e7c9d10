use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use queens_solver::queens::bfs::Bfs;
use queens_solver::queens::board::BoardSize;
use queens_solver::queens::dfs::Dfs;
use queens_solver::queens::placement::is_safe;
use queens_solver::queens::solver::Solver;
use std::hint::black_box;
use std::time::Duration;

fn size(n: usize) -> BoardSize {
    BoardSize::try_from(n).expect("benchmark sizes are at least 4")
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("n-queens - strategy");
    group.sample_size(20);
    group.measurement_time(Duration::from_secs(10));

    for n in [6, 8, 10] {
        group.bench_with_input(BenchmarkId::new("bfs", n), &n, |b, &n| {
            b.iter(|| {
                let mut solver = Bfs::new(size(n));
                black_box(solver.solve());
            })
        });

        group.bench_with_input(BenchmarkId::new("dfs", n), &n, |b, &n| {
            b.iter(|| {
                let mut solver = Dfs::new(size(n));
                black_box(solver.solve());
            })
        });
    }

    group.finish();
}

fn bench_safety_check(c: &mut Criterion) {
    let solution: [usize; 8] = [0, 4, 7, 5, 2, 6, 1, 3];
    let clash: [usize; 8] = [0, 4, 7, 5, 2, 6, 1, 1];

    c.bench_function("is_safe - eight queen solution", |b| {
        b.iter(|| black_box(is_safe(black_box(&solution))))
    });

    c.bench_function("is_safe - column clash", |b| {
        b.iter(|| black_box(is_safe(black_box(&clash))))
    });
}

criterion_group!(benches, bench_strategies, bench_safety_check);
criterion_main!(benches);
