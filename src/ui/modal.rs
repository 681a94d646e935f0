//! Measurement modal overlay

use super::components::centered_area;
use super::forms::{detailed_form_height, draw_detailed_form, draw_size_form, size_form_height};
use crate::app::App;
use crate::state::FormVariant;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const MODAL_WIDTH: u16 = 96;

/// Draw the modal with the active form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form_height = match app.state.variant {
        FormVariant::Detailed => detailed_form_height(&app.state.detailed),
        FormVariant::Size => size_form_height(&app.state.size),
    };
    // Borders + variant tabs
    let modal_area = centered_area(area, MODAL_WIDTH, form_height + 4);

    frame.render_widget(Clear, modal_area);
    let block = Block::default()
        .title(" Enter Measurements ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Variant tabs
            Constraint::Length(1),
            Constraint::Min(0), // Form
        ])
        .split(inner);

    draw_variant_tabs(frame, chunks[0], app.state.variant);

    let unit_label = app.config.unit_label();
    match app.state.variant {
        FormVariant::Detailed => {
            draw_detailed_form(frame, chunks[2], &app.state.detailed, unit_label)
        }
        FormVariant::Size => draw_size_form(frame, chunks[2], &app.state.size, unit_label),
    }
}

fn draw_variant_tabs(frame: &mut Frame, area: Rect, active: FormVariant) {
    let mut spans = Vec::new();
    for variant in [FormVariant::Detailed, FormVariant::Size] {
        let style = if variant == active {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", variant.label()), style));
    }
    spans.push(Span::styled(
        format!("  ({} to switch)", crate::platform::SWITCH_FORM_SHORTCUT),
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
