//! Application state and core logic

use crate::config::MeasurementConfig;
use crate::state::{
    AppState, DetailedControl, DetailedForm, Form, FormVariant, SizeControl, SizeForm,
    SubmitError,
};
use crate::store::{
    AppStore, DialogManager, DialogStack, MeasurementStore, StoredRecord, MEASUREMENT_MODAL_ID,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Receives submitted measurements
    pub store: AppStore,
    /// Open modal dialogs
    pub dialogs: DialogStack,
    /// User configuration
    pub config: MeasurementConfig,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance with the measurement modal open
    pub fn new(config: MeasurementConfig) -> Self {
        let mut app = Self {
            state: AppState::new(config.variant(), config.garment()),
            store: AppStore::new(),
            dialogs: DialogStack::new(),
            config,
            quit: false,
        };
        app.open_modal();
        app
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    pub fn modal_open(&self) -> bool {
        self.dialogs.is_open(MEASUREMENT_MODAL_ID)
    }

    /// Open the measurement modal.
    /// The detailed form starts fresh, the size form is restored from the store.
    pub fn open_modal(&mut self) {
        self.state.detailed = DetailedForm::with_garment(self.config.garment());
        self.state.size = SizeForm::restore(self.store.measurement_form_state());
        self.store.set_measurement_form_state(self.state.size.snapshot());
        self.dialogs.open_dialog(MEASUREMENT_MODAL_ID);
    }

    /// Close the modal without submitting
    pub fn cancel_modal(&mut self) {
        self.dialogs.close_dialog(MEASUREMENT_MODAL_ID);
        self.state.status_message = Some("Measurement entry cancelled".to_string());
    }

    /// Consume the app, yielding the last submitted record
    pub fn into_record(self) -> Option<StoredRecord> {
        self.store.into_record()
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle prompt dismissal first (modal)
        if self.state.has_prompt() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_prompt();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        if self.modal_open() {
            self.handle_modal_key(key)
        } else {
            self.handle_summary_key(key)
        }
    }

    /// Handle keys while the modal is closed
    fn handle_summary_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('m') | KeyCode::Enter => self.open_modal(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            _ => {}
        }
        Ok(())
    }

    /// Handle keys shared by both forms, then dispatch to the active one
    fn handle_modal_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::F(2) => self.state.toggle_variant(),
            KeyCode::Esc => self.cancel_modal(),
            KeyCode::Char('s')
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    || key.modifiers.contains(crate::platform::SUBMIT_MODIFIER) =>
            {
                self.submit();
            }
            _ => match self.state.variant {
                FormVariant::Detailed => self.handle_detailed_key(key),
                FormVariant::Size => self.handle_size_key(key),
            },
        }
        Ok(())
    }

    fn handle_detailed_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.detailed;
        let active = form.active();

        match key.code {
            KeyCode::Tab | KeyCode::Down => form.next_control(),
            KeyCode::BackTab | KeyCode::Up => form.prev_control(),
            KeyCode::Left if active.is_selector() => form.cycle_active(false),
            KeyCode::Right if active.is_selector() => form.cycle_active(true),
            KeyCode::Char(' ') if active.is_selector() => form.cycle_active(true),
            KeyCode::Enter => match active {
                DetailedControl::Submit => self.submit(),
                control if control.is_selector() => form.cycle_active(true),
                _ => form.next_control(),
            },
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.input_char(c)
            }
            KeyCode::Backspace => form.backspace(),
            _ => {}
        }
    }

    fn handle_size_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.size;
        let store = &mut self.store;
        let active = form.active();
        let is_selector = matches!(active, SizeControl::Mode | SizeControl::Size);

        match key.code {
            KeyCode::Tab | KeyCode::Down => form.next_control(),
            KeyCode::BackTab | KeyCode::Up => form.prev_control(),
            KeyCode::Left if is_selector => form.cycle_active(false, store),
            KeyCode::Right if is_selector => form.cycle_active(true, store),
            KeyCode::Char(' ') if is_selector => form.cycle_active(true, store),
            KeyCode::Enter => match active {
                SizeControl::Submit => self.submit(),
                SizeControl::Mode | SizeControl::Size => form.cycle_active(true, store),
                SizeControl::Field(_) => form.next_control(),
            },
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.input_char(c, store)
            }
            KeyCode::Backspace => form.backspace(store),
            _ => {}
        }
    }

    /// Submit the active form
    pub fn submit(&mut self) {
        let result = match self.state.variant {
            FormVariant::Detailed => self
                .state
                .detailed
                .submit(&mut self.store, &mut self.dialogs),
            FormVariant::Size => self.state.size.submit(&mut self.store, &mut self.dialogs),
        };

        match result {
            Ok(()) => {
                self.state.status_message = Some("Measurements saved".to_string());
            }
            Err(err @ SubmitError::NoMeasurement) => self.state.push_prompt(err.to_string()),
            Err(err @ SubmitError::Invalid { .. }) => {
                self.state.status_message = Some(err.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{GarmentType, SizeFormSnapshot};
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl_s() -> KeyEvent {
        KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)
    }

    fn app_with(variant: FormVariant) -> App {
        let mut app = App::new(MeasurementConfig::default());
        app.state.variant = variant;
        app
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
    }

    #[test]
    fn test_starts_with_modal_open() {
        let app = App::new(MeasurementConfig::default());
        assert!(app.modal_open());
        assert!(!app.should_quit());
        assert!(app.store.record().is_none());
    }

    #[test]
    fn test_esc_closes_modal_without_storing() {
        let mut app = app_with(FormVariant::Detailed);
        app.handle_key(key(KeyCode::Esc)).unwrap();
        assert!(!app.modal_open());
        assert!(app.store.record().is_none());
    }

    #[test]
    fn test_f2_switches_form() {
        let mut app = app_with(FormVariant::Detailed);
        app.handle_key(key(KeyCode::F(2))).unwrap();
        assert_eq!(app.state.variant, FormVariant::Size);
    }

    #[test]
    fn test_detailed_body_flow_through_keys() {
        let mut app = app_with(FormVariant::Detailed);
        // Garment selector has focus
        app.handle_key(key(KeyCode::Right)).unwrap();
        assert_eq!(app.state.detailed.garment(), GarmentType::Body);

        let fields: Vec<_> = app
            .state
            .detailed
            .controls()
            .into_iter()
            .enumerate()
            .filter(|(_, c)| matches!(c, DetailedControl::Field(_)))
            .map(|(i, _)| i)
            .collect();
        for index in fields {
            app.state.detailed.set_active_control(index);
            type_str(&mut app, "10");
        }
        app.handle_key(ctrl_s()).unwrap();

        assert!(!app.modal_open());
        let record = &app.store.record().unwrap().measurements;
        assert_eq!(record["MeasurementType"], "Body Measurement");
        assert_eq!(record["Wrist"], "10");
        assert_eq!(app.state.status_message.as_deref(), Some("Measurements saved"));
    }

    #[test]
    fn test_invalid_submit_keeps_modal_open() {
        let mut app = app_with(FormVariant::Detailed);
        app.handle_key(ctrl_s()).unwrap();
        assert!(app.modal_open());
        assert_eq!(
            app.state.status_message.as_deref(),
            Some("13 field(s) need attention")
        );
        assert_eq!(app.state.detailed.error("Neck"), Some("Required"));
    }

    #[test]
    fn test_size_without_choice_shows_prompt() {
        let mut app = app_with(FormVariant::Size);
        app.handle_key(ctrl_s()).unwrap();
        assert!(app.modal_open());
        assert_eq!(
            app.state.current_prompt(),
            Some("Please select a standard size or enter custom measurements")
        );
        assert!(app.store.record().is_none());

        // Prompt swallows other keys until dismissed
        app.handle_key(key(KeyCode::F(2))).unwrap();
        assert_eq!(app.state.variant, FormVariant::Size);
        app.handle_key(key(KeyCode::Enter)).unwrap();
        assert!(!app.state.has_prompt());
    }

    #[test]
    fn test_size_standard_flow_through_keys() {
        let mut app = app_with(FormVariant::Size);
        app.handle_key(key(KeyCode::Tab)).unwrap();
        assert_eq!(app.state.size.active(), SizeControl::Size);
        for _ in 0..4 {
            app.handle_key(key(KeyCode::Right)).unwrap();
        }
        assert_eq!(app.state.size.selected_size(), Some(38));
        app.handle_key(key(KeyCode::Tab)).unwrap();
        app.handle_key(key(KeyCode::Enter)).unwrap();

        assert!(!app.modal_open());
        let record = &app.store.record().unwrap().measurements;
        assert_eq!(record.len(), 1);
        assert_eq!(record["StandardSize"], "38");
    }

    #[test]
    fn test_reopen_restores_size_form_but_not_detailed() {
        let mut app = app_with(FormVariant::Size);
        app.handle_key(key(KeyCode::Enter)).unwrap();
        assert!(app.state.size.show_custom());
        app.handle_key(key(KeyCode::Tab)).unwrap();
        app.handle_key(key(KeyCode::Tab)).unwrap();
        type_str(&mut app, "90");
        app.state.detailed.set_value("Neck", "40");

        app.handle_key(key(KeyCode::Esc)).unwrap();
        app.handle_key(key(KeyCode::Char('m'))).unwrap();

        assert!(app.modal_open());
        assert!(app.state.size.show_custom());
        assert_eq!(app.state.size.value("Bust"), "90");
        assert_eq!(app.state.detailed.value("Neck"), "");
    }

    #[test]
    fn test_reopen_normalizes_conflicting_mirror() {
        let mut app = app_with(FormVariant::Size);
        app.cancel_modal();
        app.store.set_measurement_form_state(SizeFormSnapshot {
            selected_size: Some(38),
            show_custom: false,
            values: [("Bust".to_string(), "90".to_string())].into_iter().collect(),
        });

        app.handle_key(key(KeyCode::Char('m'))).unwrap();

        assert_eq!(app.state.size.selected_size(), Some(38));
        assert_eq!(app.state.size.value("Bust"), "");
        let mirror = app.store.measurement_form_state();
        assert_eq!(mirror.selected_size, Some(38));
        assert!(mirror.values.is_empty());
    }

    #[test]
    fn test_summary_keys() {
        let mut app = app_with(FormVariant::Detailed);
        app.cancel_modal();
        app.handle_key(key(KeyCode::Char('x'))).unwrap();
        assert!(!app.should_quit());
        app.handle_key(key(KeyCode::Char('q'))).unwrap();
        assert!(app.should_quit());
    }

    #[test]
    fn test_status_cleared_on_next_key() {
        let mut app = app_with(FormVariant::Detailed);
        app.cancel_modal();
        assert!(app.state.status_message.is_some());
        app.handle_key(key(KeyCode::Char('x'))).unwrap();
        assert!(app.state.status_message.is_none());
    }

    #[test]
    fn test_ctrl_chars_are_not_typed() {
        let mut app = app_with(FormVariant::Detailed);
        app.state.detailed.set_active_control(4);
        app.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL))
            .unwrap();
        assert_eq!(app.state.detailed.value("Neck"), "");
    }

    #[test]
    fn test_into_record() {
        let mut app = app_with(FormVariant::Size);
        app.state.size.select_size(40, &mut app.store);
        app.submit();
        let record = app.into_record().unwrap();
        assert_eq!(record.measurements["StandardSize"], "40");
    }
}
