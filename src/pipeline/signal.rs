use std::f64::consts::PI;

/// Frequency of the fundamental component (Hz).
pub const FUNDAMENTAL_HZ: f64 = 0.1;
/// Frequency of the third-harmonic component (Hz).
pub const HARMONIC_HZ: f64 = 0.3;
/// Amplitude of the third-harmonic component relative to the fundamental.
pub const HARMONIC_AMPLITUDE: f64 = 0.5;

/// Evaluate the test signal at time `t`:
///
/// `f(t) = sin(2π·0.1·t) + 0.5·sin(6π·0.1·t)`
#[inline]
pub fn continuous_signal(t: f64) -> f64 {
    (2.0 * PI * FUNDAMENTAL_HZ * t).sin()
        + HARMONIC_AMPLITUDE * (6.0 * PI * FUNDAMENTAL_HZ * t).sin()
}

/// Evaluate the test signal at every point of a time axis.
pub fn continuous_signal_block(time: &[f64]) -> Vec<f64> {
    time.iter().map(|&t| continuous_signal(t)).collect()
}

/// Build the time axis `0, Ts, 2Ts, ...` strictly below `horizon`.
///
/// Points are `i * period` rather than a running sum, and the count is
/// `ceil(horizon / period)`. A point that rounds onto or past the horizon is
/// dropped. Non-positive or non-finite inputs give an empty axis.
pub fn time_axis(period: f64, horizon: f64) -> Vec<f64> {
    if !(period > 0.0) || !period.is_finite() || !(horizon > 0.0) || !horizon.is_finite() {
        return Vec::new();
    }

    let len = (horizon / period).ceil() as usize;
    (0..len)
        .map(|i| i as f64 * period)
        .take_while(|&t| t < horizon)
        .collect()
}
