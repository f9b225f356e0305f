//! Benchmark for a full slider-triggered recompute.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use sampling_scope::{DemoConfig, SamplingFrame};

use crate::PERIODS;

pub fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");
    let config = DemoConfig::default();

    for &ts in PERIODS {
        let period = config.period(ts);
        group.bench_with_input(BenchmarkId::new("compute", ts), &period, |b, &period| {
            b.iter(|| SamplingFrame::compute(black_box(period), black_box(config.horizon)))
        });
    }

    group.finish();
}
