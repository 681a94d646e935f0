//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod modal;
mod summary;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    // The summary stays visible behind the modal
    summary::draw(frame, main_area, app);
    layout::draw_status_bar(frame, status_area, app);

    if app.modal_open() {
        modal::draw(frame, main_area, app);
    }

    // Blocking prompt goes on top of everything
    if let Some(message) = app.state.current_prompt() {
        components::render_prompt_dialog(frame, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MeasurementConfig;
    use crate::state::FormVariant;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        let backend = TestBackend::new(120, 60);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_detailed_modal() {
        let mut app = App::new(MeasurementConfig::default());
        app.state.variant = FormVariant::Detailed;
        let screen = render(&app);
        assert!(screen.contains("Enter Measurements"));
        assert!(screen.contains("Kandora Measurements"));
        assert!(screen.contains("Front Cross"));
        assert!(screen.contains("Add Measurements"));
    }

    #[test]
    fn test_renders_inline_errors() {
        let mut app = App::new(MeasurementConfig::default());
        app.state.variant = FormVariant::Detailed;
        app.submit();
        let screen = render(&app);
        assert!(screen.contains("Required"));
    }

    #[test]
    fn test_renders_size_modal() {
        let mut app = App::new(MeasurementConfig::default());
        app.state.variant = FormVariant::Size;
        let screen = render(&app);
        assert!(screen.contains("Standard Size"));
        assert!(screen.contains("38"));
    }

    #[test]
    fn test_renders_prompt() {
        let mut app = App::new(MeasurementConfig::default());
        app.state.variant = FormVariant::Size;
        app.submit();
        let screen = render(&app);
        assert!(screen.contains("Measurements needed"));
    }

    #[test]
    fn test_renders_summary_after_submit() {
        let mut app = App::new(MeasurementConfig::default());
        app.state.variant = FormVariant::Size;
        app.state.size.select_size(38, &mut app.store);
        app.submit();
        assert!(!app.modal_open());
        let screen = render(&app);
        assert!(screen.contains("StandardSize"));
        assert!(screen.contains("Measurements saved"));
    }

    #[test]
    fn test_renders_in_tiny_terminal() {
        let app = App::new(MeasurementConfig::default());
        let backend = TestBackend::new(20, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();
    }
}
