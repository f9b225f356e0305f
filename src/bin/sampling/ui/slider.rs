//! Slider and status bar - shows Ts, the derived rates, and sample counts

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use sampling_scope::{
    pipeline::signal::{FUNDAMENTAL_HZ, HARMONIC_HZ},
    SamplingFrame, SamplingPeriod,
};

/// Render the sampling period slider
pub fn render_slider(frame: &mut Frame, area: Rect, period: &SamplingPeriod) {
    let block = Block::default()
        .title(" Sampling Period (Ts) ")
        .borders(Borders::ALL);

    let label = format!(
        "{:.3} s   [{:.2} .. {:.2}]",
        period.value(),
        period.min(),
        period.max()
    );

    let gauge = Gauge::default()
        .block(block)
        .gauge_style(Style::default().fg(Color::Yellow).bg(Color::Black))
        .use_unicode(true)
        .ratio(period.ratio().clamp(0.0, 1.0))
        .label(label);

    frame.render_widget(gauge, area);
}

/// Render the status line for the current frame
pub fn render_status(frame: &mut Frame, area: Rect, current: &SamplingFrame) {
    let period = current.period;
    // Both components must sit below Nyquist to come back unaliased
    let aliasing = HARMONIC_HZ >= period.nyquist();

    let line = Line::from(vec![
        Span::styled(
            format!(" Ts: {:.3} s  ", period.value()),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("fs: {:.2} Hz  ", period.rate()),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("Nyquist: {:.2} Hz  ", period.nyquist()),
            Style::default().fg(if aliasing { Color::Red } else { Color::Green }),
        ),
        Span::styled(
            format!("N: {}  Impulses: {}  ", current.len(), current.impulse_count()),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("Δf: {:.3} Hz  ", current.spectrum.resolution()),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("Signal: {FUNDAMENTAL_HZ} Hz + {HARMONIC_HZ} Hz"),
            Style::default().fg(Color::Magenta),
        ),
    ]);

    let paragraph = Paragraph::new(line);
    frame.render_widget(paragraph, area);
}
