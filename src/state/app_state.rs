//! Application state definitions

use super::forms::{DetailedForm, FormVariant, SizeForm};
use super::selectors::GarmentType;
use std::collections::VecDeque;

/// State shared between key handling and rendering
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Form shown in the measurement modal
    pub variant: FormVariant,
    /// Kandora / Body form; rebuilt every time the modal opens
    pub detailed: DetailedForm,
    /// Size / custom form; restored from the store mirror when the modal opens
    pub size: SizeForm,
    /// Blocking prompts, shown one at a time
    prompts: VecDeque<String>,
    /// One-line feedback shown in the status bar
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(variant: FormVariant, garment: GarmentType) -> Self {
        Self {
            variant,
            detailed: DetailedForm::with_garment(garment),
            ..Default::default()
        }
    }

    /// Queue a blocking prompt
    pub fn push_prompt(&mut self, message: String) {
        self.prompts.push_back(message);
    }

    pub fn has_prompt(&self) -> bool {
        !self.prompts.is_empty()
    }

    /// Prompt currently shown, if any
    pub fn current_prompt(&self) -> Option<&str> {
        self.prompts.front().map(String::as_str)
    }

    pub fn dismiss_prompt(&mut self) {
        self.prompts.pop_front();
    }

    /// Switch the modal between the two forms
    pub fn toggle_variant(&mut self) {
        self.variant = self.variant.toggle();
        tracing::debug!(variant = self.variant.label(), "Switching measurement form");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_configured_defaults() {
        let state = AppState::new(FormVariant::Size, GarmentType::Body);
        assert_eq!(state.variant, FormVariant::Size);
        assert_eq!(state.detailed.garment(), GarmentType::Body);
        assert!(!state.has_prompt());
        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_prompts_are_fifo() {
        let mut state = AppState::default();
        state.push_prompt("first".to_string());
        state.push_prompt("second".to_string());
        assert_eq!(state.current_prompt(), Some("first"));
        state.dismiss_prompt();
        assert_eq!(state.current_prompt(), Some("second"));
        state.dismiss_prompt();
        assert!(!state.has_prompt());
    }

    #[test]
    fn test_dismiss_without_prompt_is_noop() {
        let mut state = AppState::default();
        state.dismiss_prompt();
        assert!(state.current_prompt().is_none());
    }

    #[test]
    fn test_toggle_variant() {
        let mut state = AppState::default();
        state.toggle_variant();
        assert_eq!(state.variant, FormVariant::Size);
        state.toggle_variant();
        assert_eq!(state.variant, FormVariant::Detailed);
    }
}
