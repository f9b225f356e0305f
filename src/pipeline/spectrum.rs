//! Frequency spectrum of the sampled signal.
//!
//! A plain forward DFT over the whole signal: no window, no zero padding.
//! Bins and frequencies are kept in the usual FFT order (DC first, positive
//! frequencies, then the negative frequencies wrapped into the upper half).
//! [`Spectrum::shifted`] reorders for display.

use rustfft::{num_complex::Complex64, FftPlanner};

/// DFT of a real signal, paired with the frequency of each bin.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Spectrum {
    /// Bin frequencies in Hz, FFT order
    pub frequencies: Vec<f64>,
    /// Complex bin values, FFT order
    pub bins: Vec<Complex64>,
}

impl Spectrum {
    /// Transform `signal` sampled on `time`.
    ///
    /// The time step is taken from the first two points of `time`, which is
    /// assumed to be uniformly spaced. An empty signal gives an empty spectrum;
    /// with fewer than two time points there is no step, so every bin gets a
    /// frequency of zero.
    pub fn analyze(signal: &[f64], time: &[f64]) -> Self {
        let n = signal.len();
        if n == 0 {
            return Self::default();
        }

        let mut bins: Vec<Complex64> = signal.iter().map(|&x| Complex64::new(x, 0.0)).collect();
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(n);
        fft.process(&mut bins);

        let frequencies = match time {
            [t0, t1, ..] => fftfreq(n, t1 - t0),
            _ => vec![0.0; n],
        };

        Self { frequencies, bins }
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Bin magnitudes `|X[k]|`, FFT order.
    pub fn magnitudes(&self) -> Vec<f64> {
        self.bins.iter().map(|c| c.norm()).collect()
    }

    /// Frequency spacing between adjacent bins, `1 / (N·dt)`.
    pub fn resolution(&self) -> f64 {
        match self.frequencies.get(1) {
            Some(&f1) => f1 - self.frequencies[0],
            None => 0.0,
        }
    }

    /// `(frequency, magnitude)` pairs in ascending frequency order.
    pub fn shifted(&self) -> Vec<(f64, f64)> {
        let n = self.len();
        let split = n / 2 + n % 2;
        self.frequencies[split..]
            .iter()
            .zip(&self.bins[split..])
            .chain(self.frequencies[..split].iter().zip(&self.bins[..split]))
            .map(|(&f, c)| (f, c.norm()))
            .collect()
    }
}

/// Sample frequencies for an `n`-point DFT with sample spacing `dt`.
///
/// `[0, 1, ..., ceil(n/2) - 1, -floor(n/2), ..., -1] / (n·dt)`
pub fn fftfreq(n: usize, dt: f64) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    let scale = 1.0 / (n as f64 * dt);
    let positive = n.div_ceil(2);
    (0..n)
        .map(|i| {
            let k = if i < positive {
                i as f64
            } else {
                i as f64 - n as f64
            };
            k * scale
        })
        .collect()
}
