pub mod config; // Demo parameters and the clamped sampling period
pub mod pipeline; // Signal generation, sampling, and spectral analysis

pub use config::{DemoConfig, SamplingPeriod};
pub use pipeline::frame::SamplingFrame;

/// Length of the time axis in seconds.
pub const HORIZON: f64 = 10.0;
