//! Kandora / Body form rendering

use super::field_renderer::{
    draw_field, draw_help_text, draw_selector, grid_cells, FieldView, FIELD_HEIGHT,
    SELECTOR_HEIGHT,
};
use crate::state::{
    DetailedControl, DetailedForm, Fitting, GarmentType, RegionalStyle, ShoulderLine,
};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

const GRID_COLUMNS: usize = 3;

/// Fields laid out in the grid (Neck and Length sit with their style toggles)
fn grid_fields(form: &DetailedForm) -> Vec<&'static str> {
    form.garment()
        .fields()
        .iter()
        .map(|f| f.name)
        .filter(|name| *name != "Neck" && *name != "Length")
        .collect()
}

/// Rows needed to draw the form for its current garment
pub fn detailed_form_height(form: &DetailedForm) -> u16 {
    let grid_rows = grid_fields(form).len().div_ceil(GRID_COLUMNS) as u16;
    SELECTOR_HEIGHT * 3 + FIELD_HEIGHT + grid_rows * FIELD_HEIGHT + BUTTON_HEIGHT + 1
}

fn regional_options() -> Vec<String> {
    [RegionalStyle::Arabic, RegionalStyle::Kuwaiti]
        .iter()
        .map(|s| format!("{} ({})", s.code(), s.label()))
        .collect()
}

fn regional_index(style: RegionalStyle) -> usize {
    match style {
        RegionalStyle::Arabic => 0,
        RegionalStyle::Kuwaiti => 1,
    }
}

/// Draw the detailed measurement form
pub fn draw_detailed_form(frame: &mut Frame, area: Rect, form: &DetailedForm, unit_label: &str) {
    let grid = grid_fields(form);
    let grid_rows = grid.len().div_ceil(GRID_COLUMNS) as u16;
    let active = form.active();
    let placeholder = format!("0.00 {unit_label}");

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SELECTOR_HEIGHT),                   // Garment
            Constraint::Length(SELECTOR_HEIGHT),                   // Fitting / shoulder
            Constraint::Length(SELECTOR_HEIGHT + FIELD_HEIGHT),    // Neck / length
            Constraint::Length(grid_rows * FIELD_HEIGHT),          // Measurement grid
            Constraint::Length(BUTTON_HEIGHT),                     // Submit
            Constraint::Length(1),                                 // Help text
            Constraint::Min(0),
        ])
        .split(area);

    let garments = [GarmentType::Kandora, GarmentType::Body];
    draw_selector(
        frame,
        chunks[0],
        &format!("{} Measurements", form.garment().label()),
        &garments.iter().map(|g| g.label().to_string()).collect::<Vec<_>>(),
        garments.iter().position(|g| *g == form.garment()),
        active == DetailedControl::Garment,
    );

    let option_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(chunks[1]);
    draw_selector(
        frame,
        option_row[0],
        "Fitting Option",
        &Fitting::ALL.iter().map(Fitting::label).collect::<Vec<_>>(),
        Fitting::ALL.iter().position(|f| *f == form.fitting()),
        active == DetailedControl::Fitting,
    );
    draw_selector(
        frame,
        option_row[1],
        "Shoulder Down",
        &ShoulderLine::ALL.iter().map(ShoulderLine::label).collect::<Vec<_>>(),
        ShoulderLine::ALL.iter().position(|s| *s == form.shoulder_line()),
        active == DetailedControl::ShoulderLine,
    );

    let special_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(chunks[2]);
    for (column, name, style, control) in [
        (special_row[0], "Neck", form.neck_style(), DetailedControl::NeckStyle),
        (special_row[1], "Length", form.length_style(), DetailedControl::LengthStyle),
    ] {
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(SELECTOR_HEIGHT),
                Constraint::Length(FIELD_HEIGHT),
            ])
            .split(column);
        draw_selector(
            frame,
            parts[0],
            &format!("{name} Type"),
            &regional_options(),
            Some(regional_index(style)),
            active == control,
        );
        draw_field(
            frame,
            parts[1],
            FieldView {
                label: name,
                value: form.value(name),
                error: form.error(name),
                required: true,
                is_active: active == DetailedControl::Field(name),
                placeholder: &placeholder,
            },
        );
    }

    for (cell, name) in grid_cells(chunks[3], grid.len(), GRID_COLUMNS, FIELD_HEIGHT)
        .into_iter()
        .zip(grid)
    {
        draw_field(
            frame,
            cell,
            FieldView {
                label: name,
                value: form.value(name),
                error: form.error(name),
                required: true,
                is_active: active == DetailedControl::Field(name),
                placeholder: &placeholder,
            },
        );
    }

    render_button(
        frame,
        chunks[4],
        "Add Measurements",
        active == DetailedControl::Submit,
    );
    draw_help_text(frame, chunks[5]);
}
