//! Results panel
//!
//! Displays the most recent lookup result over the notice pane. Esc closes
//! it.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};
use relaywatch_app::App;

/// Render the results panel.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(panel) = app.lookup() else {
        return;
    };

    let style = if panel.is_error {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", panel.title))
        .title_bottom(" Esc to close ");

    let lines: Vec<Line> = panel.lines.iter().map(|l| Line::raw(l.as_str())).collect();
    let paragraph = Paragraph::new(lines).style(style).block(block).wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
