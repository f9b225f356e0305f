//! Benchmarks for signal generation and impulse sampling.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use sampling_scope::{
    pipeline::{continuous_signal_block, impulse_train, sample, time_axis},
    HORIZON,
};

use crate::PERIODS;

pub fn bench_signal(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages/signal");

    for &ts in PERIODS {
        group.bench_with_input(BenchmarkId::new("time_axis", ts), &ts, |b, &ts| {
            b.iter(|| time_axis(black_box(ts), black_box(HORIZON)))
        });

        let time = time_axis(ts, HORIZON);
        group.bench_with_input(BenchmarkId::new("continuous", ts), &time, |b, time| {
            b.iter(|| continuous_signal_block(black_box(time)))
        });
    }

    group.finish();
}

pub fn bench_sampler(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages/sampler");

    for &ts in PERIODS {
        let time = time_axis(ts, HORIZON);
        let continuous = continuous_signal_block(&time);

        // rem_euclid per point
        group.bench_with_input(BenchmarkId::new("impulse_train", ts), &time, |b, time| {
            b.iter(|| impulse_train(black_box(time), black_box(ts)))
        });

        let impulses = impulse_train(&time, ts);
        group.bench_with_input(BenchmarkId::new("sample", ts), &ts, |b, _| {
            b.iter(|| sample(black_box(&continuous), black_box(&impulses)))
        });
    }

    group.finish();
}
