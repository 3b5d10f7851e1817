//! Input line
//!
//! Displays the prompt and the current buffer, and places the terminal
//! cursor at the editing position.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::InputState;

const PROMPT: &str = "> ";
const BORDER_WIDTH: u16 = 1;

/// Render the input line.
pub fn render(frame: &mut Frame, input: &InputState, area: Rect) {
    let paragraph = Paragraph::new(format!("{PROMPT}{}", input.buffer()))
        .style(Style::default().fg(Color::White))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
    frame.set_cursor_position(cursor_cell(input.cursor(), area));
}

/// Terminal cell for the given buffer offset, clamped to the writable span
/// between the prompt and the right border.
fn cursor_cell(cursor: usize, area: Rect) -> (u16, u16) {
    let prompt_width = u16::try_from(PROMPT.len()).unwrap_or(u16::MAX);
    let left_edge = BORDER_WIDTH.saturating_add(prompt_width);
    let writable = area.width.saturating_sub(left_edge).saturating_sub(BORDER_WIDTH);

    let offset = u16::try_from(cursor).unwrap_or(u16::MAX).min(writable);

    let x = area.x.saturating_add(left_edge).saturating_add(offset);
    let y = area.y.saturating_add(BORDER_WIDTH);
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_tracks_buffer_offset() {
        let area = Rect::new(0, 0, 40, 3);

        assert_eq!(cursor_cell(0, area), (3, 1));
        assert_eq!(cursor_cell(5, area), (8, 1));
    }

    #[test]
    fn cursor_is_clamped_inside_the_right_border() {
        let area = Rect::new(0, 0, 10, 3);

        // Writable span is 10 - border - prompt - border = 6 cells.
        assert_eq!(cursor_cell(100, area), (9, 1));
    }

    #[test]
    fn cursor_survives_degenerate_area() {
        let area = Rect::new(0, 0, 0, 0);

        assert_eq!(cursor_cell(4, area), (3, 1));
    }
}
