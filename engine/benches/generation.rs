use core::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use numfixtures_common::{write_text, TimestampMicros};
use numfixtures_engine::{
    recipes::{diablo::diablo, timestamps::near_linear},
    FastxxHashRng,
};
use rand::{RngCore, SeedableRng};

const N: usize = 100_000;

fn rng(c: &mut Criterion) {
    let mut rng = FastxxHashRng::seed_from_u64(0);

    let mut g = c.benchmark_group("FastxxHashRng");
    g.throughput(criterion::Throughput::Bytes(8));
    g.bench_function("next_u64", |b| {
        b.iter(|| black_box(rng.next_u64()));
    });
    g.finish();
}

fn recipes(c: &mut Criterion) {
    let mut g = c.benchmark_group("Recipes");
    g.throughput(criterion::Throughput::Elements(N as u64));
    g.sample_size(20);

    g.bench_function("diablo", |b| {
        b.iter(|| {
            let mut rng = FastxxHashRng::seed_from_u64(0);
            black_box(diablo(&mut rng, N))
        });
    });

    g.finish();
}

fn rendering(c: &mut Criterion) {
    // Timestamps are by far the slowest kind to render
    let mut rng = FastxxHashRng::seed_from_u64(0);
    let ts: Vec<TimestampMicros> = near_linear(&mut rng, N)
        .into_iter()
        .map(|t| TimestampMicros(t as i64))
        .collect();
    let floats: Vec<f64> = diablo(&mut rng, N);

    let mut g = c.benchmark_group("Render");
    g.throughput(criterion::Throughput::Elements(N as u64));
    g.sample_size(20);

    let mut out = Vec::with_capacity(64 * N);
    g.bench_function("timestamp", |b| {
        b.iter(|| {
            out.clear();
            write_text(&ts, &mut out).unwrap();
            black_box(out.len())
        });
    });
    g.bench_function("f64", |b| {
        b.iter(|| {
            out.clear();
            write_text(&floats, &mut out).unwrap();
            black_box(out.len())
        });
    });

    g.finish();
}

criterion_group!(generation, rng, recipes, rendering);
criterion_main!(generation);
