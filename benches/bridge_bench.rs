// Criterion micro-benchmarks for the bridged operations.
//
// `multiply` is the round-trip payload the application layer times from
// the managed side; benching it natively gives the floor any bridge
// overhead gets measured against.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bench::Bench;

fn bench_multiply(c: &mut Criterion) {
    let module = Bench::new();
    c.bench_function("multiply", |b| {
        b.iter(|| module.multiply(black_box(2.0), black_box(3.0)))
    });
}

fn bench_name(c: &mut Criterion) {
    let module = Bench::new();
    c.bench_function("module_name", |b| b.iter(|| black_box(module.name())));
}

criterion_group!(benches, bench_multiply, bench_name);
criterion_main!(benches);
