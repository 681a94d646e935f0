//! Blocking prompt overlay and centering helper

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const PROMPT_TITLE: &str = "Measurements needed";
const PROMPT_MAX_WIDTH: u16 = 60;
/// Border plus one column of padding on each side
const PROMPT_CHROME: u16 = 4;
/// Width of "Press Enter or Esc to continue"
const HINT_WIDTH: usize = 30;

/// Center a box of the given size inside `area`, clamped to fit
pub fn centered_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Greedy word wrap; words longer than `width` get a line of their own
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for word in text.split_whitespace() {
        match lines.last_mut() {
            Some(line) if line.len() + 1 + word.len() <= width => {
                line.push(' ');
                line.push_str(word);
            }
            _ => lines.push(word.to_string()),
        }
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Render the prompt centered on the whole screen
pub fn render_prompt_dialog(frame: &mut Frame, message: &str) {
    let text_width = (PROMPT_MAX_WIDTH - PROMPT_CHROME) as usize;
    let wrapped = wrap_words(message, text_width);

    let widest = wrapped
        .iter()
        .map(String::len)
        .chain([PROMPT_TITLE.len(), HINT_WIDTH])
        .max()
        .unwrap_or(0) as u16;
    // title, blank, message, blank, hint
    let height = wrapped.len() as u16 + 4 + 2;
    let area = centered_area(frame.area(), widest + PROMPT_CHROME, height);

    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(Span::styled(
            PROMPT_TITLE,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(wrapped.into_iter().map(Line::from));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to continue"),
    ]));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_words_breaks_between_words() {
        assert_eq!(
            wrap_words("Please select a standard size", 16),
            vec!["Please select a", "standard size"]
        );
    }

    #[test]
    fn test_wrap_words_keeps_long_word_whole() {
        assert_eq!(wrap_words("a measurements b", 5), vec!["a", "measurements", "b"]);
    }

    #[test]
    fn test_wrap_words_empty() {
        assert_eq!(wrap_words("", 10), vec![String::new()]);
    }

    #[test]
    fn test_centered_area() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_area(area, 60, 10), Rect::new(20, 15, 60, 10));
    }

    #[test]
    fn test_centered_area_clamps_to_parent() {
        let area = Rect::new(5, 5, 30, 10);
        assert_eq!(centered_area(area, 60, 20), area);
    }
}
