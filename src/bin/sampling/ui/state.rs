//! Slider input mapping

use crossterm::event::KeyCode;

/// What a key press does to the sampling period slider
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SliderAction {
    /// Move by one fine step (sign gives direction)
    Fine(f64),
    /// Move by one coarse step (sign gives direction)
    Coarse(f64),
    /// Jump to the lower bound
    Min,
    /// Jump to the upper bound
    Max,
    /// Back to the startup period
    Reset,
}

/// Key → action, or `None` for keys that don't touch the slider
pub fn slider_action(key: KeyCode) -> Option<SliderAction> {
    match key {
        KeyCode::Left | KeyCode::Char('h') => Some(SliderAction::Fine(-1.0)),
        KeyCode::Right | KeyCode::Char('l') => Some(SliderAction::Fine(1.0)),
        KeyCode::Down | KeyCode::Char('j') => Some(SliderAction::Coarse(-1.0)),
        KeyCode::Up | KeyCode::Char('k') => Some(SliderAction::Coarse(1.0)),
        KeyCode::Home => Some(SliderAction::Min),
        KeyCode::End => Some(SliderAction::Max),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(SliderAction::Reset),
        _ => None,
    }
}
