//! Field rendering utilities for forms

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by a measurement field: bordered input plus one error line
pub const FIELD_HEIGHT: u16 = 4;

/// Rows taken by a selector row
pub const SELECTOR_HEIGHT: u16 = 3;

/// Display data for one measurement input
pub struct FieldView<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub error: Option<&'a str>,
    pub required: bool,
    pub is_active: bool,
    pub placeholder: &'a str,
}

/// Draw a measurement input with its inline error underneath
pub fn draw_field(frame: &mut Frame, area: Rect, field: FieldView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let border_style = if field.error.is_some() {
        Style::default().fg(Color::Red)
    } else if field.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = if field.is_active { "▌" } else { "" };
    let content = if field.value.is_empty() && !field.is_active {
        Line::from(Span::styled(
            field.placeholder,
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(vec![
            Span::raw(field.value),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])
    };

    let title = if field.required {
        format!(" {} ", field.label)
    } else {
        format!(" {} (optional) ", field.label)
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(Paragraph::new(content).block(block), chunks[0]);

    if let Some(error) = field.error {
        let error_line = Paragraph::new(Span::styled(
            format!(" {error}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(error_line, chunks[1]);
    }
}

/// Draw a labelled row of mutually exclusive options, highlighting the chosen one
pub fn draw_selector(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    options: &[String],
    selected: Option<usize>,
    is_active: bool,
) {
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = Vec::new();
    for (i, option) in options.iter().enumerate() {
        let style = if Some(i) == selected {
            Style::default()
                .fg(Color::Black)
                .bg(if is_active { Color::Cyan } else { Color::Gray })
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {option} "), style));
        spans.push(Span::raw(" "));
    }
    if is_active {
        spans.push(Span::styled("◂ ▸", Style::default().fg(Color::DarkGray)));
    }

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Split `area` into rows of `columns` equal cells, each `row_height` tall
pub fn grid_cells(area: Rect, count: usize, columns: usize, row_height: u16) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let columns = columns.max(1);
    let rows = count.div_ceil(columns);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(row_height); rows])
        .split(area);

    row_areas
        .iter()
        .flat_map(|row| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
                .split(*row)
                .to_vec()
        })
        .take(count)
        .collect()
}

/// Draw the key hints line at the bottom of a form
pub fn draw_help_text(frame: &mut Frame, area: Rect) {
    let key_style = Style::default().fg(Color::Cyan);
    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", key_style),
        Span::raw(": next  "),
        Span::styled("◂ ▸", key_style),
        Span::raw(": choose  "),
        Span::styled(crate::platform::SUBMIT_SHORTCUT, key_style),
        Span::raw(": add  "),
        Span::styled(crate::platform::SWITCH_FORM_SHORTCUT, key_style),
        Span::raw(": switch form  "),
        Span::styled("Esc", key_style),
        Span::raw(": cancel"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
