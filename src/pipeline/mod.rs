//! The sampling pipeline: generator → sampler → analyzer.
//!
//! Every stage is a pure function of its inputs. A `SamplingFrame` bundles one
//! run of the whole chain for a given sampling period so the display layer
//! never has to touch the math directly.

/// One full recompute of every derived sequence.
pub mod frame;
/// Periodic impulse train and ideal sampling.
pub mod sampler;
/// Continuous-time test signal and the time axis it is evaluated on.
pub mod signal;
/// Discrete Fourier transform and FFT frequency bins.
pub mod spectrum;

pub use sampler::{impulse_train, sample, IMPULSE_TOLERANCE};
pub use signal::{continuous_signal, continuous_signal_block, time_axis};
pub use spectrum::{fftfreq, Spectrum};
