//! Demo parameters and the sampling-period control value.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::HORIZON;

/// Static parameters of the demonstration.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoConfig {
    /// Time axis covers `[0, horizon)` seconds
    pub horizon: f64,
    /// Sampling period shown at startup and after a reset
    pub default_period: f64,
    /// Lower bound of the slider
    pub min_period: f64,
    /// Upper bound of the slider
    pub max_period: f64,
    /// Slider increment for fine adjustment
    pub fine_step: f64,
    /// Slider increment for coarse adjustment
    pub coarse_step: f64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            horizon: HORIZON,
            default_period: 0.1,
            min_period: 0.01,
            max_period: 1.0,
            fine_step: 0.01,
            coarse_step: 0.1,
        }
    }
}

impl DemoConfig {
    /// Build a period clamped to this config's slider range.
    pub fn period(&self, value: f64) -> SamplingPeriod {
        SamplingPeriod::clamped(value, self.min_period, self.max_period)
    }

    /// The startup period, clamped like any other slider value.
    pub fn initial_period(&self) -> SamplingPeriod {
        self.period(self.default_period)
    }
}

/// Sampling period `Ts` in seconds, always inside its slider range.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingPeriod {
    value: f64,
    min: f64,
    max: f64,
}

impl SamplingPeriod {
    /// Clamp `value` into `[min, max]`. The bounds may be given in either order.
    /// NaN maps to the lower bound.
    pub fn clamped(value: f64, min: f64, max: f64) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let value = if value.is_nan() {
            min
        } else {
            value.clamp(min, max)
        };
        Self { value, min, max }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Sampling rate `1 / Ts` in Hz.
    pub fn rate(&self) -> f64 {
        1.0 / self.value
    }

    /// Highest frequency representable without aliasing, `fs / 2`.
    pub fn nyquist(&self) -> f64 {
        self.rate() / 2.0
    }

    /// Position of the value inside its range, `0.0..=1.0`.
    pub fn ratio(&self) -> f64 {
        let span = self.max - self.min;
        if span > 0.0 {
            (self.value - self.min) / span
        } else {
            0.0
        }
    }

    /// Move by `delta` and snap onto the `resolution` grid so repeated
    /// stepping doesn't accumulate rounding noise.
    pub fn step(&self, delta: f64, resolution: f64) -> Self {
        let mut next = self.value + delta;
        if resolution > 0.0 {
            next = (next / resolution).round() * resolution;
        }
        Self::clamped(next, self.min, self.max)
    }

    /// Same range, new value.
    pub fn with_value(&self, value: f64) -> Self {
        Self::clamped(value, self.min, self.max)
    }
}
