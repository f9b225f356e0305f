//! Ideal impulse sampling.

/*
Ideal Sampling
==============

An ideal sampler multiplies a continuous signal by a train of unit impulses
spaced one sampling period apart:

    p(t)  = Σ δ(t - n·Ts)
    fs(t) = f(t) · p(t)

Between impulses the product is zero. At each impulse it equals the
continuous signal exactly. Nothing is scaled or normalised.

Vocabulary
----------

  Ts            Sampling period: time between two consecutive impulses.

  fs            Sampling rate, 1 / Ts.

  Nyquist       fs / 2. Components of f(t) above this frequency fold back
                (alias) onto lower frequencies in the spectrum of fs(t).

Detecting an impulse instant
----------------------------

On a floating-point time axis, t / Ts is rarely an exact integer. A point is
marked as an impulse when t / Ts lies within IMPULSE_TOLERANCE of an integer
on either side:

      t / Ts = 2.9999999999999996  →  impulse  (just below 3)
      t / Ts = 3.0000000000000004  →  impulse  (just above 3)
      t / Ts = 3.25                →  no impulse

The tolerance is fixed. Widening it changes which instants count as sampled.
*/

/// Maximum distance of `t / Ts` from an integer for `t` to count as an
/// impulse instant.
pub const IMPULSE_TOLERANCE: f64 = 1e-10;

/// Whether `t` falls on an integer multiple of `period`.
#[inline]
pub fn is_impulse(t: f64, period: f64) -> bool {
    let phase = (t / period).rem_euclid(1.0);
    phase < IMPULSE_TOLERANCE || 1.0 - phase < IMPULSE_TOLERANCE
}

/// Periodic impulse indicator aligned with `time`: `1.0` at multiples of
/// `period`, `0.0` elsewhere.
pub fn impulse_train(time: &[f64], period: f64) -> Vec<f64> {
    time.iter()
        .map(|&t| if is_impulse(t, period) { 1.0 } else { 0.0 })
        .collect()
}

/// Multiply the continuous signal by the impulse train, point by point.
///
/// The result is as long as the shorter input.
pub fn sample(continuous: &[f64], impulses: &[f64]) -> Vec<f64> {
    continuous
        .iter()
        .zip(impulses)
        .map(|(&value, &impulse)| value * impulse)
        .collect()
}
