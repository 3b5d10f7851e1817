//! Channel sidebar
//!
//! Displays the monitored channels with the outbound-send selection.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use relaywatch_app::App;

const SELECTED_PREFIX: &str = ">";
const NORMAL_PREFIX: &str = " ";

/// Render the channel sidebar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let selected = app.selected_channel();

    let items: Vec<ListItem> = app
        .subscriptions()
        .iter()
        .map(|channel| {
            let is_selected = selected == Some(channel);
            let (prefix, style) = if is_selected {
                (SELECTED_PREFIX, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            } else {
                (NORMAL_PREFIX, Style::default())
            };

            ListItem::new(Line::from(vec![
                Span::raw(prefix),
                Span::styled(format!("#{channel}"), style),
            ]))
        })
        .collect();

    let items = if items.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "/join <name>",
            Style::default().fg(Color::DarkGray),
        )))]
    } else {
        items
    };

    let block = Block::default().borders(Borders::ALL).title(" Channels ");
    let list = List::new(items).block(block);

    frame.render_widget(list, area);
}
