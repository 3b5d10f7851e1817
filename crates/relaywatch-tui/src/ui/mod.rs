//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and
//! returning widget trees.

mod channels;
mod chat;
mod input;
mod lookup;
mod notices;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};
use relaywatch_app::App;

use crate::InputState;

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App, input_state: &InputState) {
    const MAIN_AREA_MIN_HEIGHT: u16 = 3;
    const INPUT_HEIGHT: u16 = 3;
    const STATUS_HEIGHT: u16 = 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(MAIN_AREA_MIN_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(frame.area());

    let [main_area, input_area, status_area] = chunks.as_ref() else {
        return;
    };

    render_main_area(frame, app, *main_area);
    input::render(frame, input_state, *input_area);
    status::render(frame, app, *status_area);
}

/// Render the main area (channel sidebar + chat + notices/lookup pane).
fn render_main_area(frame: &mut Frame, app: &App, area: Rect) {
    const CHANNEL_SIDEBAR_WIDTH: u16 = 18;
    const CHAT_AREA_MIN_WIDTH: u16 = 24;
    const SIDE_PANE_WIDTH: u16 = 42;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CHANNEL_SIDEBAR_WIDTH),
            Constraint::Min(CHAT_AREA_MIN_WIDTH),
            Constraint::Length(SIDE_PANE_WIDTH),
        ])
        .split(area);

    let [channels_area, chat_area, side_area] = chunks.as_ref() else {
        return;
    };

    channels::render(frame, app, *channels_area);
    chat::render(frame, app, *chat_area);

    // The results panel takes over the notice pane while open.
    if app.lookup().is_some() {
        lookup::render(frame, app, *side_area);
    } else {
        notices::render(frame, app, *side_area);
    }
}
