//! The four plot panels: continuous signal, pulse train, sampled signal, spectrum

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

/// Render f(t) as a line
pub fn render_continuous(frame: &mut Frame, area: Rect, points: &[(f64, f64)], horizon: f64) {
    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(points);

    let chart = Chart::new(vec![dataset])
        .block(panel(" Continuous Signal "))
        .x_axis(time_axis(horizon))
        .y_axis(value_axis("f(t)", symmetric_bounds(points)));

    frame.render_widget(chart, area);
}

/// Render p(t) as stems
pub fn render_pulses(frame: &mut Frame, area: Rect, points: &[(f64, f64)], horizon: f64) {
    let chart = Chart::new(stem_datasets(points, Color::Yellow))
        .block(panel(" Pulse Signal "))
        .x_axis(time_axis(horizon))
        .y_axis(value_axis("p(t)", [0.0, 1.2]));

    frame.render_widget(chart, area);
}

/// Render fs(t) as stems
pub fn render_sampled(frame: &mut Frame, area: Rect, points: &[(f64, f64)], horizon: f64) {
    let chart = Chart::new(stem_datasets(points, Color::Magenta))
        .block(panel(" Sampled Signal "))
        .x_axis(time_axis(horizon))
        .y_axis(value_axis("fs(t)", symmetric_bounds(points)));

    frame.render_widget(chart, area);
}

/// Render |X(f)| as a line over the full two-sided frequency axis
pub fn render_spectrum(frame: &mut Frame, area: Rect, spectrum: &[(f64, f64)]) {
    let dataset = Dataset::default()
        .name("Sampled Signal")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Green))
        .data(spectrum);

    let (min_freq, max_freq) = spectrum
        .iter()
        .fold((0.0f64, 0.0f64), |(lo, hi), &(f, _)| (lo.min(f), hi.max(f)));
    let (min_freq, max_freq) = if max_freq > min_freq {
        (min_freq, max_freq)
    } else {
        (-1.0, 1.0)
    };
    let max_mag = spectrum
        .iter()
        .map(|(_, m)| *m)
        .fold(0.0, f64::max)
        .max(1.0)
        * 1.1;

    let chart = Chart::new(vec![dataset])
        .block(panel(" Frequency Spectrum "))
        .x_axis(
            Axis::default()
                .title("Frequency")
                .bounds([min_freq, max_freq])
                .labels(labels([min_freq, max_freq]))
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(value_axis("Magnitude", [0.0, max_mag]));

    frame.render_widget(chart, area);
}

fn panel(title: &str) -> Block<'_> {
    Block::default().title(title).borders(Borders::ALL)
}

fn time_axis<'a>(horizon: f64) -> Axis<'a> {
    Axis::default()
        .title("Time")
        .bounds([0.0, horizon])
        .labels(labels([0.0, horizon]))
        .style(Style::default().fg(Color::DarkGray))
}

fn value_axis(title: &str, bounds: [f64; 2]) -> Axis<'_> {
    Axis::default()
        .title(title)
        .bounds(bounds)
        .labels(labels(bounds))
        .style(Style::default().fg(Color::DarkGray))
}

/// Stems: a bar from zero to each value, capped with a dot
fn stem_datasets(points: &[(f64, f64)], color: Color) -> Vec<Dataset<'_>> {
    vec![
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Bar)
            .style(Style::default().fg(color))
            .data(points),
        Dataset::default()
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(color))
            .data(points),
    ]
}

/// `[-m, m]` around the largest magnitude, never tighter than `[-1, 1]`
fn symmetric_bounds(points: &[(f64, f64)]) -> [f64; 2] {
    let peak = points
        .iter()
        .map(|(_, y)| y.abs())
        .fold(1.0, f64::max)
        * 1.1;
    [-peak, peak]
}

fn labels([lo, hi]: [f64; 2]) -> Vec<String> {
    let mid = (lo + hi) / 2.0;
    vec![
        format!("{lo:.1}"),
        format!("{mid:.1}"),
        format!("{hi:.1}"),
    ]
}
