use tracing::debug;

use super::{
    sampler::{impulse_train, sample},
    signal::{continuous_signal_block, time_axis},
    spectrum::Spectrum,
};
use crate::config::SamplingPeriod;

/// Every sequence derived from one sampling period.
///
/// Built from scratch on each period change and dropped on the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplingFrame {
    pub period: SamplingPeriod,
    /// `0, Ts, 2Ts, ...` below the horizon
    pub time: Vec<f64>,
    /// f(t) on the time axis
    pub continuous: Vec<f64>,
    /// p(t): 1 at impulse instants, 0 elsewhere
    pub impulses: Vec<f64>,
    /// fs(t) = f(t) · p(t)
    pub sampled: Vec<f64>,
    /// DFT of fs(t)
    pub spectrum: Spectrum,
}

impl SamplingFrame {
    /// Run the full chain: time axis → signal → impulse train → product → DFT.
    pub fn compute(period: SamplingPeriod, horizon: f64) -> Self {
        let ts = period.value();
        let time = time_axis(ts, horizon);
        let continuous = continuous_signal_block(&time);
        let impulses = impulse_train(&time, ts);
        let sampled = sample(&continuous, &impulses);
        let spectrum = Spectrum::analyze(&sampled, &time);

        let frame = Self {
            period,
            time,
            continuous,
            impulses,
            sampled,
            spectrum,
        };
        debug!(
            period = ts,
            samples = frame.len(),
            impulses = frame.impulse_count(),
            "recomputed sampling frame"
        );
        frame
    }

    /// Number of points on the time axis.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// How many time points were marked as impulse instants.
    pub fn impulse_count(&self) -> usize {
        self.impulses.iter().filter(|&&p| p != 0.0).count()
    }

    /// Chart points `(t, f(t))`.
    pub fn continuous_points(&self) -> Vec<(f64, f64)> {
        zip_points(&self.time, &self.continuous)
    }

    /// Chart points `(t, p(t))`.
    pub fn impulse_points(&self) -> Vec<(f64, f64)> {
        zip_points(&self.time, &self.impulses)
    }

    /// Chart points `(t, fs(t))`.
    pub fn sampled_points(&self) -> Vec<(f64, f64)> {
        zip_points(&self.time, &self.sampled)
    }

    /// Chart points `(f, |X(f)|)` in ascending frequency order.
    pub fn spectrum_points(&self) -> Vec<(f64, f64)> {
        self.spectrum.shifted()
    }
}

fn zip_points(xs: &[f64], ys: &[f64]) -> Vec<(f64, f64)> {
    xs.iter().copied().zip(ys.iter().copied()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DemoConfig;

    #[test]
    fn all_sequences_share_the_time_axis() {
        let config = DemoConfig::default();
        for ts in [0.01, 0.07, 0.1, 0.33, 0.5, 1.0] {
            let frame = SamplingFrame::compute(config.period(ts), config.horizon);
            let n = frame.len();
            assert!(n > 0);
            assert_eq!(frame.continuous.len(), n);
            assert_eq!(frame.impulses.len(), n);
            assert_eq!(frame.sampled.len(), n);
            assert_eq!(frame.spectrum.len(), n);
            assert_eq!(frame.spectrum.frequencies.len(), n);
        }
    }

    #[test]
    fn recompute_is_pure() {
        let config = DemoConfig::default();
        let a = SamplingFrame::compute(config.period(0.23), config.horizon);
        let b = SamplingFrame::compute(config.period(0.23), config.horizon);
        assert_eq!(a, b);
    }

    #[test]
    fn chart_points_pair_time_with_values() {
        let config = DemoConfig::default();
        let frame = SamplingFrame::compute(config.period(0.5), config.horizon);
        let points = frame.sampled_points();
        assert_eq!(points.len(), 20);
        assert_eq!(points[4], (frame.time[4], frame.sampled[4]));
        assert_eq!(frame.spectrum_points().len(), 20);
    }
}
