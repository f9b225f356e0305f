//! Benchmarks for the pipeline stages.

mod frame;
mod signal;
mod spectrum;

pub use frame::bench_frame;
pub use signal::{bench_sampler, bench_signal};
pub use spectrum::bench_spectrum;
