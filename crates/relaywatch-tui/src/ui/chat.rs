//! Chat pane
//!
//! Displays the chat transcript, newest at the bottom.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use relaywatch_app::App;

const BORDER_SIZE: u16 = 2;

/// Render the chat pane.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Chat ");

    let items: Vec<ListItem> = if app.subscriptions().is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "Join a channel to see chat",
            Style::default().fg(Color::DarkGray),
        )))]
    } else {
        app.chat()
            .iter()
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("[{}]", entry.channel),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::raw(" "),
                    Span::styled(
                        format!("<{}>", entry.user),
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" "),
                    Span::raw(entry.message.clone()),
                ]))
            })
            .collect()
    };

    let visible_height = area.height.saturating_sub(BORDER_SIZE) as usize;
    let skip = items.len().saturating_sub(visible_height);
    let visible_items: Vec<_> = items.into_iter().skip(skip).collect();

    let list = List::new(visible_items).block(block);

    frame.render_widget(list, area);
}
