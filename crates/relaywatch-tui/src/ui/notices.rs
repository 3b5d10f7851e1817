//! Notice pane
//!
//! Displays the notice log, newest at the top, with category badges.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use relaywatch_app::{App, NoticeBadge};

fn badge_color(badge: NoticeBadge) -> Color {
    match badge {
        NoticeBadge::Notice => Color::Blue,
        NoticeBadge::UserNotice => Color::Magenta,
        NoticeBadge::ClearChat => Color::Red,
        NoticeBadge::RoomState => Color::Cyan,
        NoticeBadge::Joined => Color::Green,
        NoticeBadge::Prefs => Color::Yellow,
        NoticeBadge::Link => Color::DarkGray,
    }
}

/// Render the notice pane.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let title = format!(" Notices ({}) ", app.notices().len());
    let block = Block::default().borders(Borders::ALL).title(title);

    let items: Vec<ListItem> = app
        .notices()
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(entry.timestamp.clone(), Style::default().fg(Color::DarkGray)),
                Span::raw(" "),
                Span::styled(
                    format!("[{}]", entry.badge.label()),
                    Style::default().fg(badge_color(entry.badge)),
                ),
                Span::raw(" "),
                Span::styled(format!("#{}", entry.channel), Style::default().fg(Color::Cyan)),
                Span::raw(" "),
                Span::raw(entry.text.clone()),
            ]))
        })
        .collect();

    let list = List::new(items).block(block);

    frame.render_widget(list, area);
}
