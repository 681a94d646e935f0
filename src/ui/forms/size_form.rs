//! Standard size / custom measurement form rendering

use super::field_renderer::{
    draw_field, draw_help_text, draw_selector, grid_cells, FieldView, FIELD_HEIGHT,
    SELECTOR_HEIGHT,
};
use crate::state::{SizeControl, SizeForm, CUSTOM_FIELDS, STANDARD_SIZES};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

const GRID_COLUMNS: usize = 3;

fn body_height(form: &SizeForm) -> u16 {
    if form.show_custom() {
        CUSTOM_FIELDS.len().div_ceil(GRID_COLUMNS) as u16 * FIELD_HEIGHT
    } else {
        SELECTOR_HEIGHT
    }
}

/// Rows needed to draw the form in its current mode
pub fn size_form_height(form: &SizeForm) -> u16 {
    SELECTOR_HEIGHT + body_height(form) + BUTTON_HEIGHT + 1
}

/// Draw the size / custom measurement form
pub fn draw_size_form(frame: &mut Frame, area: Rect, form: &SizeForm, unit_label: &str) {
    let active = form.active();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SELECTOR_HEIGHT),  // Mode
            Constraint::Length(body_height(form)), // Size picker or custom grid
            Constraint::Length(BUTTON_HEIGHT),    // Submit
            Constraint::Length(1),                // Help text
            Constraint::Min(0),
        ])
        .split(area);

    draw_selector(
        frame,
        chunks[0],
        "Measurement",
        &["Standard Size".to_string(), "Custom".to_string()],
        Some(usize::from(form.show_custom())),
        active == SizeControl::Mode,
    );

    if form.show_custom() {
        let placeholder = format!("0.00 {unit_label}");
        let cells = grid_cells(chunks[1], CUSTOM_FIELDS.len(), GRID_COLUMNS, FIELD_HEIGHT);
        for (cell, def) in cells.into_iter().zip(CUSTOM_FIELDS.iter()) {
            draw_field(
                frame,
                cell,
                FieldView {
                    label: def.name,
                    value: form.value(def.name),
                    error: form.error(def.name),
                    required: def.required,
                    is_active: active == SizeControl::Field(def.name),
                    placeholder: &placeholder,
                },
            );
        }
    } else {
        draw_selector(
            frame,
            chunks[1],
            "Standard Size",
            &STANDARD_SIZES.iter().map(u16::to_string).collect::<Vec<_>>(),
            form.selected_size()
                .and_then(|size| STANDARD_SIZES.iter().position(|s| *s == size)),
            active == SizeControl::Size,
        );
    }

    render_button(
        frame,
        chunks[2],
        "Add Measurements",
        active == SizeControl::Submit,
    );
    draw_help_text(frame, chunks[3]);
}
