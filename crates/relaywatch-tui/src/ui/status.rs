//! Status bar
//!
//! Displays session state, monitored channels, and the transient status
//! message.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use relaywatch_app::App;
use relaywatch_core::SessionState;

/// Render the status bar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let session = match app.session_state() {
        SessionState::Disconnected => {
            Span::styled("Disconnected", Style::default().fg(Color::Red))
        },
        SessionState::Connecting => {
            Span::styled("Connecting...", Style::default().fg(Color::Yellow))
        },
        SessionState::Open => Span::styled(
            "Connected",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
    };

    let monitored = if app.subscriptions().is_empty() {
        String::new()
    } else {
        let names: Vec<String> =
            app.subscriptions().iter().map(|c| format!("#{c}")).collect();
        format!(" | Monitoring: {}", names.join(" "))
    };

    let message = app.status_message().map_or_else(String::new, |m| format!(" | {m}"));

    let status_line = Line::from(vec![
        Span::raw(" "),
        session,
        Span::styled(monitored, Style::default().fg(Color::DarkGray)),
        Span::raw(message),
    ]);

    let paragraph =
        Paragraph::new(status_line).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(paragraph, area);
}
