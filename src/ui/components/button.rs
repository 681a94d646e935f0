//! Button component for TUI

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a bordered submit button, filled green when selected
pub fn render_button(frame: &mut Frame, area: Rect, content: &str, is_selected: bool) {
    let border_style = if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if is_selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green)
    };

    let paragraph = Paragraph::new(format!(" {content} "))
        .style(text_style)
        .centered();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(is_selected: bool) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(30, BUTTON_HEIGHT)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_button(frame, area, "Add", is_selected);
            })
            .unwrap();
        terminal
    }

    #[test]
    fn test_selected_button_is_filled_green() {
        let terminal = draw(true);
        let buffer = terminal.backend().buffer();
        let cell = buffer
            .content()
            .iter()
            .find(|cell| cell.symbol() == "A")
            .unwrap();
        assert_eq!(cell.bg, Color::Green);
        assert_eq!(cell.fg, Color::Black);
    }

    #[test]
    fn test_unselected_button_has_green_text() {
        let terminal = draw(false);
        let buffer = terminal.backend().buffer();
        let cell = buffer
            .content()
            .iter()
            .find(|cell| cell.symbol() == "A")
            .unwrap();
        assert_eq!(cell.fg, Color::Green);
        assert_ne!(cell.bg, Color::Green);
    }
}
