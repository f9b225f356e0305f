//! Benchmarks for the DFT of the sampled signal.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use sampling_scope::{
    pipeline::{continuous_signal_block, time_axis, Spectrum},
    HORIZON,
};

use crate::PERIODS;

pub fn bench_spectrum(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages/spectrum");

    for &ts in PERIODS {
        let time = time_axis(ts, HORIZON);
        let signal = continuous_signal_block(&time);

        // Includes FFT planning, which happens on every recompute
        group.bench_with_input(BenchmarkId::new("analyze", ts), &ts, |b, _| {
            b.iter(|| Spectrum::analyze(black_box(&signal), black_box(&time)))
        });

        let spectrum = Spectrum::analyze(&signal, &time);
        group.bench_with_input(BenchmarkId::new("shifted", ts), &ts, |b, _| {
            b.iter(|| black_box(&spectrum).shifted())
        });
    }

    group.finish();
}
