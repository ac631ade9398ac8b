use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use packer_optimizer::{PackSizes, optimize, solver::optimize_sizes};

fn optimize_benchmark(c: &mut Criterion) {
    c.bench_function("optimize 500000 [23, 31, 53]", |b| {
        b.iter(|| optimize(black_box(&[23, 31, 53]), black_box(500_000)))
    });

    let pack_sizes = PackSizes::new(&[250, 500, 1000, 2000, 5000]).unwrap();
    c.bench_function("optimize 1000000 [250..5000]", |b| {
        b.iter(|| optimize_sizes(black_box(&pack_sizes), black_box(1_000_000)))
    });

    c.bench_function("optimize infeasible 99999 [10, 20]", |b| {
        b.iter(|| optimize(black_box(&[10, 20]), black_box(99_999)))
    });
}

criterion_group!(benches, optimize_benchmark);
criterion_main!(benches);
