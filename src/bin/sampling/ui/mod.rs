//! TUI module for the sampling demo
//!
//! Owns the slider state, recomputes the sampling frame on every slider
//! change, and draws the 2×2 plot grid.

mod charts;
mod slider;
pub mod state;

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};
use tracing::trace;

use sampling_scope::{DemoConfig, SamplingFrame, SamplingPeriod};

use charts::{render_continuous, render_pulses, render_sampled, render_spectrum};
use slider::{render_slider, render_status};
use state::{slider_action, SliderAction};

/// UI application state
pub struct UiApp {
    /// Slider range, steps, and time horizon
    config: DemoConfig,
    /// Derived sequences for the current slider value
    current: SamplingFrame,
    /// Whether the app should quit
    should_quit: bool,
}

impl UiApp {
    /// Create the UI and run the initial recompute for `period`
    pub fn new(config: DemoConfig, period: SamplingPeriod) -> Self {
        Self {
            current: SamplingFrame::compute(period, config.horizon),
            config,
            should_quit: false,
        }
    }

    /// Current slider value
    pub fn period(&self) -> SamplingPeriod {
        self.current.period
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            terminal
                .draw(|frame| self.render(frame))
                .wrap_err("failed to draw frame")?;

            // Blocks until the next input; resize and other events just redraw
            if let Event::Key(key) = event::read().wrap_err("failed to read terminal event")? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key.code);
                }
            }
        }

        Ok(())
    }

    /// Handle keyboard input
    fn handle_key(&mut self, key: KeyCode) {
        trace!(?key, "key press");
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            other => {
                if let Some(action) = slider_action(other) {
                    self.apply(action);
                }
            }
        }
    }

    /// Move the slider and recompute everything from the new period
    fn apply(&mut self, action: SliderAction) {
        let period = self.current.period;
        let config = &self.config;
        let next = match action {
            SliderAction::Fine(dir) => period.step(dir * config.fine_step, config.fine_step),
            SliderAction::Coarse(dir) => period.step(dir * config.coarse_step, config.fine_step),
            SliderAction::Min => period.with_value(period.min()),
            SliderAction::Max => period.with_value(period.max()),
            SliderAction::Reset => config.initial_period(),
        };
        self.current = SamplingFrame::compute(next, config.horizon);
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        // Main layout: plot grid, slider, status, help
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(12),   // Plots
                Constraint::Length(3), // Slider
                Constraint::Length(1), // Status line
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[0]);
        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0]);
        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);

        let horizon = self.config.horizon;
        let continuous = self.current.continuous_points();
        let impulses = self.current.impulse_points();
        let sampled = self.current.sampled_points();
        let spectrum = self.current.spectrum_points();

        render_continuous(frame, top[0], &continuous, horizon);
        render_pulses(frame, top[1], &impulses, horizon);
        render_sampled(frame, bottom[0], &sampled, horizon);
        render_spectrum(frame, bottom[1], &spectrum);

        render_slider(frame, chunks[1], &self.current.period);
        render_status(frame, chunks[2], &self.current);

        let help = Paragraph::new(
            " [←/→] ±0.01  [↓/↑] ±0.1  [Home/End] Min/Max  [R] Reset  [Q] Quit",
        )
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[3]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn app() -> UiApp {
        let config = DemoConfig::default();
        UiApp::new(config, config.initial_period())
    }

    fn screen_text(app: &UiApp) -> String {
        let mut terminal = Terminal::new(TestBackend::new(160, 48)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn starts_at_default_period() {
        let app = app();
        assert_eq!(app.period().value(), 0.1);
        assert_eq!(app.current.len(), 100);
    }

    #[test]
    fn arrow_keys_move_the_slider_and_recompute() {
        let mut app = app();

        app.handle_key(KeyCode::Right);
        assert!((app.period().value() - 0.11).abs() < 1e-12);
        assert_eq!(app.current.len(), 91);

        app.handle_key(KeyCode::Up);
        assert!((app.period().value() - 0.21).abs() < 1e-12);

        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Left);
        assert!((app.period().value() - 0.1).abs() < 1e-12);
        assert_eq!(app.current.len(), 100);
    }

    #[test]
    fn slider_is_clamped() {
        let mut app = app();
        app.handle_key(KeyCode::End);
        app.handle_key(KeyCode::Right);
        assert_eq!(app.period().value(), 1.0);
        assert_eq!(app.current.len(), 10);

        app.handle_key(KeyCode::Home);
        app.handle_key(KeyCode::Left);
        assert_eq!(app.period().value(), 0.01);

        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.period().value(), 0.1);
    }

    #[test]
    fn quit_keys() {
        for key in [KeyCode::Char('q'), KeyCode::Esc] {
            let mut app = app();
            app.handle_key(key);
            assert!(app.should_quit);
        }

        let mut app = app();
        app.handle_key(KeyCode::Char('x'));
        assert!(!app.should_quit);
    }

    #[test]
    fn renders_all_panels() {
        let text = screen_text(&app());
        for title in [
            "Continuous Signal",
            "Pulse Signal",
            "Sampled Signal",
            "Frequency Spectrum",
            "Sampling Period (Ts)",
            "Ts: 0.100 s",
        ] {
            assert!(text.contains(title), "missing {title:?}");
        }
    }
}
