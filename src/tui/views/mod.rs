//! Dashboard views
//!
//! Two panels side by side: the entry form and the overview.

pub mod form;
pub mod overview;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use super::app::App;

/// Render the entire dashboard
pub fn render(frame: &mut Frame, app: &mut App) {
    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(frame.area());

    form::render(frame, app, panels[0]);
    overview::render(frame, app, panels[1]);
}
