//! SamplingDemo - application builder and runner

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use tracing::info;

use sampling_scope::{DemoConfig, SamplingPeriod};

use super::ui::UiApp;

/// Main application builder
pub struct SamplingDemo {
    config: DemoConfig,
    period: SamplingPeriod,
}

impl SamplingDemo {
    /// Create a demo with the default slider range and startup period
    pub fn new() -> Self {
        let config = DemoConfig::default();
        Self {
            period: config.initial_period(),
            config,
        }
    }

    /// Set the startup sampling period in seconds (clamped to the slider range)
    pub fn period(mut self, seconds: f64) -> Self {
        self.config.default_period = seconds;
        self.period = self.config.initial_period();
        self
    }

    /// Run the application (takes over the terminal until quit)
    pub fn run(self) -> EyreResult<()> {
        info!(
            period = self.period.value(),
            horizon = self.config.horizon,
            "starting sampling demo"
        );

        let mut terminal = ratatui::init();
        let mut ui = UiApp::new(self.config, self.period);
        let result = ui.run(&mut terminal).wrap_err("terminal session failed");
        ratatui::restore();

        info!(period = ui.period().value(), "sampling demo closed");
        result
    }
}

impl Default for SamplingDemo {
    fn default() -> Self {
        Self::new()
    }
}
