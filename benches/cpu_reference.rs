//! Benchmarks for the CPU-side reference path: input generation and the
//! host add/verify the GPU result is checked against.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wgpu_vecadd::harness::{fill_random, verify_results};

fn bench_fill_random(c: &mut Criterion) {
    c.bench_function("fill_random_1m", |bench| {
        bench.iter(|| black_box(fill_random(1 << 20)));
    });
}

fn bench_cpu_add_verify(c: &mut Criterion) {
    let a = fill_random(1 << 20);
    let b = fill_random(1 << 20);
    let sums: Vec<f32> = a.iter().zip(&b).map(|(&x, &y)| x + y).collect();

    c.bench_function("cpu_add_1m", |bench| {
        bench.iter(|| {
            let result: Vec<f32> = black_box(&a)
                .iter()
                .zip(black_box(&b))
                .map(|(&x, &y)| x + y)
                .collect();
            black_box(result)
        });
    });

    c.bench_function("verify_1m", |bench| {
        bench.iter(|| verify_results(black_box(&a), black_box(&b), black_box(&sums)));
    });
}

criterion_group!(benches, bench_fill_random, bench_cpu_add_verify);
criterion_main!(benches);
