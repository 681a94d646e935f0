//! Summary of the last stored measurements

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the stored record, or a hint when nothing was submitted yet
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Measurements ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines: Vec<Line> = match app.store.record() {
        Some(stored) => {
            let label_width = stored
                .measurements
                .keys()
                .map(|k| k.len())
                .max()
                .unwrap_or(0);
            let mut lines = vec![
                Line::from(Span::styled(
                    format!("Captured {}", stored.captured_at.format("%Y-%m-%d %H:%M:%S")),
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(""),
            ];
            lines.extend(stored.measurements.iter().map(|(label, value)| {
                Line::from(vec![
                    Span::styled(
                        format!("{label:<label_width$}  "),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(value.as_str()),
                ])
            }));
            lines
        }
        None => vec![Line::from(Span::styled(
            "No measurements yet. Press m to enter them.",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
